use std::fmt;

use cubemath::Axis;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{LATTICE_MAX, Rgb};

/// Sticker color.
///
/// Variant order is the order in which face centers are probed by the
/// orientation queries, so it also decides ties between them.
#[derive(
    strum::EnumIter,
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Front face in the solved state (Z = 0).
    Red,
    /// Top face in the solved state (Y = 6).
    White,
    /// Right face in the solved state (X = 6).
    Blue,
    /// Left face in the solved state (X = 0).
    Green,
    /// Bottom face in the solved state (Y = 0).
    Yellow,
    /// Back face in the solved state (Z = 6).
    Orange,
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl Color {
    /// Returns an iterator over all six colors.
    pub fn iter() -> impl Iterator<Item = Color> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the lowercase name of the color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::White => "white",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
        }
    }

    /// Returns the axis perpendicular to this color's face when solved.
    pub fn axis(self) -> Axis {
        match self {
            Color::Red | Color::Orange => Axis::Z,
            Color::White | Color::Yellow => Axis::Y,
            Color::Green | Color::Blue => Axis::X,
        }
    }

    /// Returns the lattice coordinate along [`Color::axis()`] of this color's
    /// face when solved.
    pub fn solved_coordinate(self) -> i32 {
        match self {
            Color::Red | Color::Yellow | Color::Green => 0,
            Color::Orange | Color::White | Color::Blue => LATTICE_MAX,
        }
    }

    /// Returns the color on the opposite face.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Orange,
            Color::White => Color::Yellow,
            Color::Blue => Color::Green,
            Color::Green => Color::Blue,
            Color::Yellow => Color::White,
            Color::Orange => Color::Red,
        }
    }
}

/// Display color for each sticker color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Palette {
    pub red: Rgb,
    pub white: Rgb,
    pub blue: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub orange: Rgb,
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            red: Rgb::new(255, 57, 38),
            white: Rgb::new(241, 244, 237),
            blue: Rgb::new(12, 82, 241),
            green: Rgb::new(37, 219, 53),
            yellow: Rgb::new(246, 241, 41),
            orange: Rgb::new(250, 138, 45),
        }
    }
}
impl Palette {
    /// Returns the display color for a sticker color.
    pub fn get(&self, color: Color) -> Rgb {
        match color {
            Color::Red => self.red,
            Color::White => self.white,
            Color::Blue => self.blue,
            Color::Green => self.green,
            Color::Yellow => self.yellow,
            Color::Orange => self.orange,
        }
    }
}
