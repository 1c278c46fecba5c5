//! Axis enum.

use std::fmt;

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (away from the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl Axis {
    /// Returns the index of this axis into a coordinate array; X = 0, Y = 1,
    /// Z = 2.
    pub const fn idx(self) -> usize {
        self as usize
    }
    /// Returns the uppercase name of the axis.
    pub fn name(self) -> char {
        crate::AXIS_NAMES.as_bytes()[self.idx()] as char
    }
    /// Returns the other two axes, in increasing order.
    pub const fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_others() {
        for axis in Axis::iter() {
            let [a, b] = axis.others();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert!(a < b);
        }
        assert_eq!(Axis::Z.name(), 'Z');
    }
}
