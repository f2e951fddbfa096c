//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data.

use glam::DVec3;

use crate::interval::Interval;
use crate::ray::{Point3, Ray};

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal and distance along the ray.
/// Only meaningful when the `hit` call that filled it returned true.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Surface normal at the intersection point, oriented against the ray
    pub normal: DVec3,
    /// Distance along the ray to the intersection point
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
}

impl HitRecord {
    /// Set surface normal and determine front/back face.
    ///
    /// Ensures the stored normal always points against the incident ray.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: DVec3) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Core abstraction for geometric primitives. Must be thread-safe
/// (Sync + Send) so the pixel loop can run on worker threads.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    ///
    /// Returns true if hit, updating the hit record with intersection details.
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through Box<dyn Hittable>.
pub struct HittableList {
    /// Vector of boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut temp_rec = HitRecord::default();
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Narrow the upper bound to each accepted hit so the record that
        // survives is the globally nearest intersection
        for object in &self.objects {
            if object.hit(r, Interval::new(ray_t.min, closest_so_far), &mut temp_rec) {
                hit_anything = true;
                closest_so_far = temp_rec.t;
                *rec = temp_rec;
            }
        }

        hit_anything
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;

    fn overlap_scene(reversed: bool) -> HittableList {
        let near = Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.25).unwrap());
        let far = Box::new(Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.25).unwrap());

        let mut world = HittableList::new();
        if reversed {
            world.add(far);
            world.add(near);
        } else {
            world.add(near);
            world.add(far);
        }
        world
    }

    #[test]
    fn nearest_hit_wins() {
        let world = overlap_scene(false);
        let r = Ray::new(Point3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(world.hit(&r, Interval::new(0.0, f64::INFINITY), &mut rec));
        assert!((rec.t - 0.75).abs() < 1e-12);
    }

    #[test]
    fn nearest_hit_is_order_independent() {
        let r = Ray::new(Point3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let mut forward = HitRecord::default();
        let mut backward = HitRecord::default();
        assert!(overlap_scene(false).hit(&r, Interval::new(0.0, f64::INFINITY), &mut forward));
        assert!(overlap_scene(true).hit(&r, Interval::new(0.0, f64::INFINITY), &mut backward));
        assert_eq!(forward.t, backward.t);
        assert_eq!(forward.p, backward.p);
    }

    #[test]
    fn empty_scene_never_hits() {
        let world = HittableList::new();
        let r = Ray::new(Point3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(!world.hit(&r, Interval::new(0.0, f64::INFINITY), &mut rec));
    }

    #[test]
    fn normal_opposes_ray_from_inside() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Point3::ZERO, 1.0).unwrap()));
        let r = Ray::new(Point3::ZERO, DVec3::new(1.0, 0.0, 0.0));

        let mut rec = HitRecord::default();
        assert!(world.hit(&r, Interval::new(0.001, f64::INFINITY), &mut rec));
        assert!(!rec.front_face);
        assert!(rec.normal.dot(r.direction) < 0.0);
    }
}
