//! Point rotation and perspective projection primitives.

pub use cgmath;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Names for the three axes.
pub const AXIS_NAMES: &str = "XYZ";

/// Asserts that both arguments are within [`EPSILON`] of each other.
///
/// Accepts anything that can be compared using [`approx_eq()`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        match (&$a, &$b) {
            (a, b) => assert!(
                $crate::approx_eq(a, b),
                "assertion failed: `left ≈ right`\n  left: `{a:?}`\n right: `{b:?}`",
            ),
        }
    };
}

mod axis;
pub mod projection;
pub mod rotation;
mod sign;

pub use axis::Axis;
pub use sign::Sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use cgmath::{EuclideanSpace, InnerSpace, Point2, Point3, Vector3};

    pub use crate::projection::Camera;
    pub use crate::rotation::{EulerAngles, Rotation, rotate_point};
    pub use crate::{ApproxEq, Axis, EPSILON, Float, Sign};
}
pub use prelude::*;

/// Approximate equality using an absolute tolerance of [`EPSILON`].
pub trait ApproxEq {
    /// Returns whether `self` and `other` differ by at most [`EPSILON`] in
    /// every component.
    fn approx_eq(&self, other: &Self) -> bool;
}
impl ApproxEq for Float {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= EPSILON
    }
}
impl ApproxEq for Point3<Float> {
    fn approx_eq(&self, other: &Self) -> bool {
        self.x.approx_eq(&other.x) && self.y.approx_eq(&other.y) && self.z.approx_eq(&other.z)
    }
}
impl ApproxEq for Point2<Float> {
    fn approx_eq(&self, other: &Self) -> bool {
        self.x.approx_eq(&other.x) && self.y.approx_eq(&other.y)
    }
}
impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq(&self, other: &Self) -> bool {
        std::iter::zip(self, other).all(|(a, b)| a.approx_eq(b))
    }
}

/// Returns whether `a` and `b` are approximately equal.
pub fn approx_eq<T: ApproxEq>(a: &T, b: &T) -> bool {
    a.approx_eq(b)
}

/// Returns the mean of a nonempty list of points.
pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point3<Float>>) -> Point3<Float> {
    let mut count = 0;
    let mut sum = Vector3::new(0.0, 0.0, 0.0);
    for p in points {
        sum += p.to_vec();
        count += 1;
    }
    Point3::from_vec(sum / count.max(1) as Float)
}
