//! Perspective projection for the renderer.
//!
//! The cube is modeled on a lattice from 0 to 6; world space scales that up by
//! [`Camera::scale`] so that the projection parameters are in screen units.

use cgmath::{Point2, Point3};

use crate::{Float, Rotation};

/// Center of the cube in lattice coordinates.
pub const LATTICE_CENTER: Float = 3.0;

/// Pinhole camera looking down the +Z axis.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Camera {
    /// X coordinate of the vanishing point.
    pub x: Float,
    /// Y coordinate of the vanishing point.
    pub y: Float,
    /// Distance from the eye to the projection plane at `z = 0`.
    pub focal_length: Float,
    /// Number of world units per lattice unit.
    pub scale: Float,
}
impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 150.0,
            y: 200.0,
            focal_length: 500.0,
            scale: 50.0,
        }
    }
}
impl Camera {
    /// Converts a point in lattice coordinates to world coordinates, rotating
    /// it about the center of the cube.
    pub fn world_point(&self, lattice_point: Point3<Float>, rotation: &Rotation) -> Point3<Float> {
        let c = LATTICE_CENTER * self.scale;
        let center = Point3::new(c, c, c);
        rotation.apply(lattice_point * self.scale, center)
    }

    /// Projects a world-space point onto the plane `z = 0`.
    pub fn project(&self, p: Point3<Float>) -> Point2<Float> {
        let f = self.focal_length;
        Point2::new(
            f * (p.x - self.x) / (f + p.z) + self.x,
            f * (p.y - self.y) / (f + p.z) + self.y,
        )
    }

    /// Maps a projected point to window coordinates, with Y pointing down and
    /// the cube roughly centered horizontally.
    pub fn to_screen(&self, p: Point2<Float>, screen_width: Float) -> Point2<Float> {
        let margin = screen_width / 4.0;
        Point2::new(p.x + margin, screen_width - p.y - margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EulerAngles, assert_approx_eq};

    #[test]
    fn test_project_vanishing_point_is_fixed() {
        let camera = Camera::default();
        for z in [0.0, 100.0, 300.0] {
            let p = Point3::new(camera.x, camera.y, z);
            assert_approx_eq!(camera.project(p), Point2::new(camera.x, camera.y));
        }
    }

    #[test]
    fn test_project_shrinks_with_depth() {
        let camera = Camera::default();
        let near = camera.project(Point3::new(300.0, 200.0, 0.0));
        let far = camera.project(Point3::new(300.0, 200.0, 500.0));
        assert_approx_eq!(near, Point2::new(300.0, 200.0));
        assert_approx_eq!(far, Point2::new(225.0, 200.0));
    }

    #[test]
    fn test_world_point() {
        let camera = Camera::default();
        let identity = Rotation::new(EulerAngles::ZERO);
        let p = camera.world_point(Point3::new(6.0, 0.0, 3.0), &identity);
        assert_approx_eq!(p, Point3::new(300.0, 0.0, 150.0));
    }

    #[test]
    fn test_to_screen() {
        let camera = Camera::default();
        let p = camera.to_screen(Point2::new(0.0, 0.0), 600.0);
        assert_approx_eq!(p, Point2::new(150.0, 450.0));
    }
}
