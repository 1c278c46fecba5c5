use std::fmt;

use cubemath::cgmath::{EuclideanSpace, Point3};
use cubemath::{Axis, Float};
use itertools::Itertools;

use crate::{CUBIE_SIZE, LATTICE_MAX};

/// Point on the integer lattice.
pub type LatticePoint = Point3<i32>;

/// Stable index of a facelet in a [`crate::CubeState`].
///
/// Facelets keep their ID for their whole lifetime; turns only change their
/// geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceletId(pub u8);
impl fmt::Display for FaceletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl FaceletId {
    /// Returns the ID as an index into a list of facelets.
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Square sticker on the surface of the cube, given by its four corners on the
/// lattice in a consistent winding order.
///
/// When viewed from outside the cube, corners wind counterclockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    /// Corners of the square.
    pub corners: [LatticePoint; 4],
}
impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let corners = self
            .corners
            .iter()
            .map(|p| format!("({}, {}, {})", p.x, p.y, p.z))
            .join(", ");
        write!(f, "[{corners}]")
    }
}
impl Facelet {
    /// Constructs a facelet from its corners.
    pub const fn new(corners: [LatticePoint; 4]) -> Self {
        Self { corners }
    }

    /// Constructs the facelet in row `row` and column `col` of the face
    /// perpendicular to `axis` at lattice coordinate `plane`.
    ///
    /// Rows and columns run along the other two axes in increasing order.
    pub fn on_face(axis: Axis, plane: i32, row: i32, col: i32) -> Self {
        let [u, v] = axis.others();
        let point = |du: i32, dv: i32| {
            let mut p = [0; 3];
            p[axis.idx()] = plane;
            p[u.idx()] = (row + du) * CUBIE_SIZE;
            p[v.idx()] = (col + dv) * CUBIE_SIZE;
            LatticePoint::from(p)
        };
        let mut corners = [point(0, 0), point(1, 0), point(1, 1), point(0, 1)];

        // `u × v` points along +axis for X and Z but along -axis for Y. Flip
        // the winding whenever that disagrees with the outward normal.
        let normal_is_positive = plane != 0;
        if normal_is_positive == (axis == Axis::Y) {
            corners.swap(1, 3);
        }
        Self { corners }
    }

    /// Returns the only axis along which all four corners share a coordinate,
    /// or `None` if there is not exactly one such axis.
    pub fn plane_axis(&self) -> Option<Axis> {
        Axis::iter()
            .filter(|&axis| self.corners.iter().map(|p| p[axis.idx()]).all_equal())
            .exactly_one()
            .ok()
    }

    /// Returns the coordinate shared by all four corners along `axis`, if
    /// there is one.
    pub fn shared_coordinate(&self, axis: Axis) -> Option<i32> {
        self.corners
            .iter()
            .map(|p| p[axis.idx()])
            .all_equal_value()
            .ok()
    }

    /// Returns whether any corner has coordinate `value` along `axis`.
    pub fn touches_layer(&self, axis: Axis, value: i32) -> bool {
        self.corners.iter().any(|p| p[axis.idx()] == value)
    }

    /// Returns whether every corner lies inside the lattice cube.
    pub fn is_within_lattice(&self) -> bool {
        self.corners
            .iter()
            .all(|p| [p.x, p.y, p.z].iter().all(|c| (0..=LATTICE_MAX).contains(c)))
    }

    /// Returns the corners as floating-point points.
    pub fn to_float(&self) -> [Point3<Float>; 4] {
        self.corners.map(|p| p.map(|c| c as Float))
    }

    /// Constructs a facelet by rounding each coordinate to the nearest lattice
    /// point.
    pub fn snap(corners: &[Point3<Float>; 4]) -> Self {
        Self {
            corners: corners.map(|p| p.map(|c| c.round() as i32)),
        }
    }

    /// Returns the center of the facelet.
    pub fn center(&self) -> Point3<Float> {
        cubemath::centroid(&self.to_float())
    }

    /// Returns the facelet with its corners sorted, for comparisons that
    /// should not depend on winding order or starting corner.
    pub fn canonical(&self) -> Self {
        let mut corners = self.corners;
        corners.sort_by_key(|p| (p.x, p.y, p.z));
        Self { corners }
    }
}

/// Returns the sum of all corners, which is four times the center. This is
/// exact, unlike [`Facelet::center()`].
pub(crate) fn corner_sum(facelet: &Facelet) -> LatticePoint {
    facelet
        .corners
        .iter()
        .fold(LatticePoint::origin(), |acc, p| acc + p.to_vec())
}

#[cfg(test)]
mod tests {
    use cubemath::cgmath::InnerSpace;

    use super::*;

    #[test]
    fn test_on_face_geometry() {
        for axis in Axis::iter() {
            for plane in [0, LATTICE_MAX] {
                for row in 0..3 {
                    for col in 0..3 {
                        let f = Facelet::on_face(axis, plane, row, col);
                        assert_eq!(f.plane_axis(), Some(axis));
                        assert_eq!(f.shared_coordinate(axis), Some(plane));
                        assert!(f.is_within_lattice());
                    }
                }
            }
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        let cube_center = Point3::new(3.0, 3.0, 3.0);
        for axis in Axis::iter() {
            for plane in [0, LATTICE_MAX] {
                let f = Facelet::on_face(axis, plane, 1, 1);
                let [a, b, _, d] = f.to_float();
                let normal = (b - a).cross(d - a);
                let outward = f.center() - cube_center;
                assert!(normal.dot(outward) > 0.0, "{axis} {plane}");
            }
        }
    }

    #[test]
    fn test_snap() {
        let f = Facelet::on_face(Axis::Z, 0, 2, 0);
        let drifted = f.to_float().map(|p| p.map(|c| c + 0.0004));
        assert_eq!(Facelet::snap(&drifted), f);
    }

    #[test]
    fn test_corner_sum() {
        let f = Facelet::on_face(Axis::X, LATTICE_MAX, 1, 1);
        assert_eq!(corner_sum(&f), LatticePoint::new(24, 12, 12));
    }
}
