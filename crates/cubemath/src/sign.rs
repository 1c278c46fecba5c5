//! Sign enum.

use std::ops::{Mul, Neg};

use crate::Float;

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Positive.
    #[default]
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Pos => rhs,
        }
    }
}
impl Mul<Float> for Sign {
    type Output = Float;
    fn mul(self, rhs: Float) -> Float {
        self.float() * rhs
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1 or 1).
    pub const fn int(self) -> i32 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0 or
    /// 1.0).
    pub const fn float(self) -> Float {
        self.int() as Float
    }
    /// Returns `Sign::Neg` if `reverse` is true or `Sign::Pos` otherwise.
    pub const fn from_reversed(reverse: bool) -> Self {
        match reverse {
            true => Sign::Neg,
            false => Sign::Pos,
        }
    }
}
