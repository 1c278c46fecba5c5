//! Queries for which face of the cube currently faces the viewer, points up,
//! or points left.
//!
//! Each query rotates the six solved face centers by the current view angles
//! and ranks them along one axis. Face centers never move when the cube is
//! turned, so the answer depends only on the view angles.

use cubemath::cgmath::Point3;
use cubemath::{Axis, EulerAngles, Float, Rotation};
use float_ord::FloatOrd;

use crate::{Color, Facelet, LATTICE_MID};

lazy_static! {
    /// Center facelet of each face in the solved state, in [`Color::iter()`]
    /// order.
    static ref FACE_CENTERS: Vec<(Color, [Point3<Float>; 4])> = Color::iter()
        .map(|color| {
            let facelet = Facelet::on_face(color.axis(), color.solved_coordinate(), 1, 1);
            (color, facelet.to_float())
        })
        .collect();
}

/// Returns the average position of each face center after rotating the cube
/// by `angles` about its center.
pub fn face_centers(angles: EulerAngles) -> Vec<(Color, Point3<Float>)> {
    let rotation = Rotation::new(angles);
    let mid = LATTICE_MID as Float;
    let cube_center = Point3::new(mid, mid, mid);
    FACE_CENTERS
        .iter()
        .map(|(color, corners)| {
            let rotated = corners.map(|p| rotation.apply(p, cube_center));
            (*color, cubemath::centroid(&rotated))
        })
        .collect()
}

/// Returns the color of the face nearest to the viewer, which has the lowest
/// Z coordinate.
pub fn closest_face(angles: EulerAngles) -> Color {
    face_centers(angles)
        .into_iter()
        .min_by_key(|(_, p)| FloatOrd(p[Axis::Z.idx()]))
        .map_or(Color::Red, |(color, _)| color)
}

/// Returns the color of the face pointing up, which has the highest Y
/// coordinate.
///
/// Ties go to the last face in [`Color::iter()`] order, unlike the other
/// queries.
pub fn top_face(angles: EulerAngles) -> Color {
    face_centers(angles)
        .into_iter()
        .max_by_key(|(_, p)| FloatOrd(p[Axis::Y.idx()]))
        .map_or(Color::White, |(color, _)| color)
}

/// Returns the color of the face pointing left, which has the lowest X
/// coordinate.
pub fn left_face(angles: EulerAngles) -> Color {
    face_centers(angles)
        .into_iter()
        .min_by_key(|(_, p)| FloatOrd(p[Axis::X.idx()]))
        .map_or(Color::Green, |(color, _)| color)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn queries(x: Float, y: Float, z: Float) -> [Color; 3] {
        let angles = EulerAngles::new(x, y, z);
        [closest_face(angles), top_face(angles), left_face(angles)]
    }

    #[test]
    fn test_identity_orientation() {
        assert_eq!(queries(0.0, 0.0, 0.0), [Color::Red, Color::White, Color::Green]);
    }

    #[test]
    fn test_tilt_top_toward_viewer() {
        assert_eq!(queries(90.0, 0.0, 0.0), [Color::White, Color::Orange, Color::Green]);
    }

    #[test]
    fn test_spin_around_vertical() {
        assert_eq!(queries(0.0, 90.0, 0.0), [Color::Green, Color::White, Color::Orange]);
        assert_eq!(queries(0.0, 180.0, 0.0), [Color::Orange, Color::White, Color::Blue]);
    }

    #[test]
    fn test_face_centers_stay_on_sphere() {
        let angles = EulerAngles::new(20.0, 325.0, 0.0);
        for (_, p) in face_centers(angles) {
            let d = p - Point3::new(3.0, 3.0, 3.0);
            assert!(((d.x * d.x + d.y * d.y + d.z * d.z).sqrt() - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_upside_down() {
        assert_eq!(queries(180.0, 0.0, 0.0), [Color::Orange, Color::Yellow, Color::Green]);
    }
}
