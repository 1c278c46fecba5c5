//! Rotation of points about an arbitrary center using composed axis
//! rotations.
//!
//! Angles are in degrees. The composed matrix is `Ry * Rx * Rz`, and points
//! are treated as **row vectors** multiplied on the left of that matrix. This
//! is equivalent to applying the transpose of the composed matrix to a column
//! vector. Changing either the composition order or the vector convention
//! changes which way the cube appears to rotate.

use std::ops::{Add, Mul, Neg};

use cgmath::{Deg, Matrix, Matrix3, Point3};

use crate::{Axis, Float};

/// Rotation angles around the X, Y, and Z axes, in degrees.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EulerAngles {
    /// Rotation around the X axis, in degrees.
    pub x: Float,
    /// Rotation around the Y axis, in degrees.
    pub y: Float,
    /// Rotation around the Z axis, in degrees.
    pub z: Float,
}
impl Add for EulerAngles {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Neg for EulerAngles {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
impl Mul<Float> for EulerAngles {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl EulerAngles {
    /// No rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Constructs a set of rotation angles.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
    /// Returns a rotation of `degrees` around a single axis.
    pub fn around(axis: Axis, degrees: Float) -> Self {
        let mut ret = Self::ZERO;
        *ret.get_mut(axis) = degrees;
        ret
    }

    /// Returns the angle around `axis`.
    pub fn get(self, axis: Axis) -> Float {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
    /// Returns a mutable reference to the angle around `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut Float {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Returns the angles with each component wrapped into the range
    /// `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(
            normalize_degrees(self.x),
            normalize_degrees(self.y),
            normalize_degrees(self.z),
        )
    }
}

/// Wraps an angle in degrees into the range `[0, 360)`.
pub fn normalize_degrees(degrees: Float) -> Float {
    let ret = degrees.rem_euclid(360.0);
    // `rem_euclid()` can round up to exactly 360 for tiny negative inputs.
    if ret >= 360.0 { 0.0 } else { ret }
}

/// Precomputed rotation that can be applied to many points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    /// Composed matrix `Ry * Rx * Rz`.
    matrix: Matrix3<Float>,
}
impl From<EulerAngles> for Rotation {
    fn from(angles: EulerAngles) -> Self {
        Self::new(angles)
    }
}
impl Rotation {
    /// Constructs the rotation for a set of angles.
    pub fn new(angles: EulerAngles) -> Self {
        let rx = Matrix3::from_angle_x(Deg(angles.x));
        let ry = Matrix3::from_angle_y(Deg(angles.y));
        let rz = Matrix3::from_angle_z(Deg(angles.z));
        Self {
            matrix: ry * rx * rz,
        }
    }

    /// Rotates `point` about `center`.
    pub fn apply(&self, point: Point3<Float>, center: Point3<Float>) -> Point3<Float> {
        // Row vector on the left == transposed matrix on the right.
        center + self.matrix.transpose() * (point - center)
    }
}

/// Rotates `point` about `center` by `angles`.
pub fn rotate_point(
    point: Point3<Float>,
    center: Point3<Float>,
    angles: EulerAngles,
) -> Point3<Float> {
    Rotation::new(angles).apply(point, center)
}
