//! Camera for viewport derivation and ray generation.

use glam::DVec3;
use thiserror::Error;

use crate::ray::{Point3, Ray};

/// Distance from the camera origin to the image plane.
const FOCAL_LENGTH: f64 = 1.0;

/// Construction errors for [`Camera`].
#[derive(Debug, Error)]
pub enum CameraError {
    /// Image dimensions were zero in at least one axis.
    #[error("camera image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Requested image width in pixels.
        width: u32,
        /// Requested image height in pixels.
        height: u32,
    },

    /// The look-from and look-at points coincide.
    #[error("camera view direction is degenerate: lookfrom equals lookat at {0}")]
    DegenerateView(DVec3),

    /// The up vector is parallel to the view direction.
    #[error("camera up vector is parallel to the view direction")]
    DegenerateUp,
}

/// Pinhole camera mapping normalized screen coordinates to world-space rays.
///
/// All viewport vectors are derived once at construction; the camera is
/// immutable for the duration of a trace.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    horizontal: DVec3,
    vertical: DVec3,
    lower_left_corner: Point3,
}

impl Camera {
    /// Create a camera at the world origin looking down -z.
    ///
    /// Uses a 90 degree vertical field of view, which yields the classic
    /// viewport height of 2 world units at focal distance 1.
    pub fn new(width: u32, height: u32) -> Result<Self, CameraError> {
        Self::with_view(
            width,
            height,
            90.0,
            Point3::ZERO,
            Point3::new(0.0, 0.0, -1.0),
            DVec3::Y,
        )
    }

    /// Create a camera from an explicit view description.
    ///
    /// `vfov` is the vertical field of view in degrees. The viewport is
    /// anchored at its lower-left corner so `get_ray(0, 0)` points at the
    /// bottom-left of the image and `get_ray(1, 1)` at the top-right.
    pub fn with_view(
        width: u32,
        height: u32,
        vfov: f64,
        lookfrom: Point3,
        lookat: Point3,
        vup: DVec3,
    ) -> Result<Self, CameraError> {
        if width == 0 || height == 0 {
            return Err(CameraError::EmptyImage { width, height });
        }
        let view = lookfrom - lookat;
        if view.length_squared() == 0.0 {
            return Err(CameraError::DegenerateView(lookfrom));
        }

        let aspect_ratio = f64::from(width) / f64::from(height);
        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Right-handed camera basis: w opposes the view direction
        let w = view.normalize();
        let cross = vup.cross(w);
        if cross.length_squared() == 0.0 {
            return Err(CameraError::DegenerateUp);
        }
        let u = cross.normalize();
        let v = w.cross(u);

        let origin = lookfrom;
        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - FOCAL_LENGTH * w;

        Ok(Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        })
    }

    /// Generate the ray through normalized screen coordinates u,v in [0, 1].
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn center_ray_points_down_negative_z() {
        let camera = Camera::new(640, 480).unwrap();
        let r = camera.get_ray(0.5, 0.5);

        assert_eq!(r.origin, Point3::ZERO);
        assert!((r.direction.normalize() - DVec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn corner_rays_span_the_viewport() {
        let camera = Camera::new(200, 100).unwrap();

        // aspect 2 with vfov 90: viewport is 4 wide, 2 tall, plane at z = -1
        let bottom_left = camera.get_ray(0.0, 0.0).direction;
        assert!((bottom_left - DVec3::new(-2.0, -1.0, -1.0)).length() < 1e-6);

        let top_right = camera.get_ray(1.0, 1.0).direction;
        assert!((top_right - DVec3::new(2.0, 1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn oriented_view_keeps_the_target_centered() {
        let lookfrom = Point3::new(3.0, 1.0, 2.0);
        let lookat = Point3::new(0.0, 0.0, -1.0);
        let camera =
            Camera::with_view(100, 100, 90.0, lookfrom, lookat, DVec3::Y).unwrap();

        let center = camera.get_ray(0.5, 0.5).direction.normalize();
        let toward_target = (lookat - lookfrom).normalize();
        assert!((center - toward_target).length() < EPS);
    }

    #[test]
    fn degenerate_configurations_are_rejected() {
        assert!(matches!(
            Camera::with_view(0, 480, 90.0, Point3::ZERO, Point3::new(0.0, 0.0, -1.0), DVec3::Y),
            Err(CameraError::EmptyImage { .. })
        ));
        assert!(matches!(
            Camera::with_view(640, 480, 90.0, Point3::ZERO, Point3::ZERO, DVec3::Y),
            Err(CameraError::DegenerateView(_))
        ));
        assert!(matches!(
            Camera::with_view(640, 480, 90.0, Point3::ZERO, Point3::new(0.0, 1.0, 0.0), DVec3::Y),
            Err(CameraError::DegenerateUp)
        ));
    }
}
