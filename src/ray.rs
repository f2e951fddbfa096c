//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::DVec3;

/// Location in world space. Same storage as a plain [`DVec3`], different role.
pub type Point3 = DVec3;

/// RGB color with linear channels, nominally in [0, 1].
pub type Color = DVec3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// Typically the camera position for primary rays or a surface point for
    /// secondary rays.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized; the camera is responsible for never
    /// producing a zero-length direction.
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_the_direction() {
        let r = Ray::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 0.0, -2.0));

        assert_eq!(r.at(0.0), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(r.at(1.0), DVec3::new(1.0, 2.0, 1.0));
        assert_eq!(r.at(-0.5), DVec3::new(1.0, 2.0, 4.0));
    }
}
