//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection with the half-b form of the quadratic,
//! which drops a factor of two from every coefficient.

use glam::DVec3;
use thiserror::Error;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::{Point3, Ray};

/// Construction errors for [`Sphere`].
#[derive(Debug, Error)]
pub enum SphereError {
    /// Radius was zero, negative or non-finite.
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    /// Center contained a NaN or infinite component.
    #[error("sphere center must be finite, got {0}")]
    InvalidCenter(DVec3),
}

/// Sphere primitive defined by center and radius. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere, rejecting geometry that would trace as NaNs.
    pub fn new(center: Point3, radius: f64) -> Result<Self, SphereError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SphereError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(SphereError::InvalidCenter(center));
        }
        Ok(Self { center, radius })
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let oc = r.origin - self.center;

        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return false;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root first; fall back to the far root when the near one is
        // out of range, so an origin inside the sphere still finds the exit
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = r.at(rec.t);
        let outward_normal = (rec.p - self.center) / self.radius;
        rec.set_face_normal(r, outward_normal);

        true
    }
}
