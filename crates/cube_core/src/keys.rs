//! Key bindings that turn faces relative to the viewer rather than relative to
//! the cube.
//!
//! Pressing F always turns whichever face is currently nearest to the viewer,
//! no matter how the cube has been rotated. Each key picks a face with one of
//! the orientation queries and then turns either that face or the one
//! opposite it.

use std::fmt;
use std::str::FromStr;

use cubemath::EulerAngles;
use thiserror::Error;

use crate::orientation::{closest_face, left_face, top_face};
use crate::{Color, Face, Move};

/// Orientation query used to pick a face.
#[derive(strum::EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceQuery {
    /// Face nearest to the viewer.
    Closest,
    /// Face pointing up.
    Top,
    /// Face pointing left.
    Left,
}
impl FaceQuery {
    /// Returns the color of the face picked by the query.
    pub fn resolve(self, angles: EulerAngles) -> Color {
        match self {
            FaceQuery::Closest => closest_face(angles),
            FaceQuery::Top => top_face(angles),
            FaceQuery::Left => left_face(angles),
        }
    }
}

/// Key that turns a face relative to the viewer.
#[derive(strum::EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceKey {
    /// Front: the face nearest to the viewer.
    F,
    /// Back: the face opposite the front.
    B,
    /// Up: the face pointing up.
    U,
    /// Down: the face opposite the top.
    D,
    /// Left: the face pointing left.
    L,
    /// Right: the face opposite the left.
    R,
}
impl fmt::Display for FaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            FaceKey::F => 'F',
            FaceKey::B => 'B',
            FaceKey::U => 'U',
            FaceKey::D => 'D',
            FaceKey::L => 'L',
            FaceKey::R => 'R',
        };
        write!(f, "{c}")
    }
}
impl FromStr for FaceKey {
    type Err = ParseFaceKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "F" => Ok(FaceKey::F),
            "B" => Ok(FaceKey::B),
            "U" => Ok(FaceKey::U),
            "D" => Ok(FaceKey::D),
            "L" => Ok(FaceKey::L),
            "R" => Ok(FaceKey::R),
            _ => Err(ParseFaceKeyError(s.to_owned())),
        }
    }
}
impl FaceKey {
    /// Returns the query used to pick a face for this key.
    pub fn query(self) -> FaceQuery {
        match self {
            FaceKey::F | FaceKey::B => FaceQuery::Closest,
            FaceKey::U | FaceKey::D => FaceQuery::Top,
            FaceKey::L | FaceKey::R => FaceQuery::Left,
        }
    }
    /// Returns whether this key turns the face opposite the one picked by its
    /// query.
    pub fn is_opposite(self) -> bool {
        matches!(self, FaceKey::B | FaceKey::D | FaceKey::R)
    }

    /// Returns the face turned by this key when the query picks `color`.
    pub fn face_for(self, color: Color) -> Face {
        let face = Face::with_solved_color(color);
        if self.is_opposite() { face.opposite() } else { face }
    }

    /// Returns the move for this key at the given view angles. `reverse`
    /// toggles prime.
    pub fn resolve(self, angles: EulerAngles, reverse: bool) -> Move {
        let color = self.query().resolve(angles);
        Move::new(self.face_for(color), reverse)
    }
}

/// Error produced when parsing an invalid [`FaceKey`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid key {0:?}; expected one of F B U D L R")]
pub struct ParseFaceKeyError(pub String);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    /// Key bindings written out in full.
    const TABLE: &[(FaceKey, &[(Color, Face)])] = &[
        (FaceKey::F, &[
            (Color::Red, Face::F),
            (Color::White, Face::U),
            (Color::Blue, Face::R),
            (Color::Green, Face::L),
            (Color::Yellow, Face::D),
            (Color::Orange, Face::B),
        ]),
        (FaceKey::B, &[
            (Color::Red, Face::B),
            (Color::White, Face::D),
            (Color::Blue, Face::L),
            (Color::Green, Face::R),
            (Color::Yellow, Face::U),
            (Color::Orange, Face::F),
        ]),
        (FaceKey::U, &[
            (Color::White, Face::U),
            (Color::Blue, Face::R),
            (Color::Green, Face::L),
            (Color::Yellow, Face::D),
            (Color::Orange, Face::B),
            (Color::Red, Face::F),
        ]),
        (FaceKey::D, &[
            (Color::White, Face::D),
            (Color::Blue, Face::L),
            (Color::Green, Face::R),
            (Color::Yellow, Face::U),
            (Color::Orange, Face::F),
            (Color::Red, Face::B),
        ]),
        (FaceKey::L, &[
            (Color::Green, Face::L),
            (Color::White, Face::U),
            (Color::Yellow, Face::D),
            (Color::Blue, Face::R),
            (Color::Orange, Face::B),
            (Color::Red, Face::F),
        ]),
        (FaceKey::R, &[
            (Color::Green, Face::R),
            (Color::White, Face::D),
            (Color::Yellow, Face::U),
            (Color::Blue, Face::L),
            (Color::Orange, Face::F),
            (Color::Red, Face::B),
        ]),
    ];

    #[test]
    fn test_binding_table() {
        for &(key, entries) in TABLE {
            for &(color, face) in entries {
                assert_eq!(key.face_for(color), face, "{key} with {color}");
            }
        }
    }

    #[test]
    fn test_resolve_at_rest() {
        let angles = EulerAngles::ZERO;
        let moves = FaceKey::iter()
            .map(|key| key.resolve(angles, false).to_string())
            .collect::<Vec<_>>();
        assert_eq!(moves, ["F", "B", "U", "D", "L", "R"]);
        assert_eq!(FaceKey::R.resolve(angles, true).to_string(), "R'");
    }

    #[test]
    fn test_resolve_when_rotated() {
        // Spun 180 degrees around Y, the back face is in front.
        let angles = EulerAngles::new(0.0, 180.0, 0.0);
        assert_eq!(FaceKey::F.resolve(angles, false).to_string(), "B");
        assert_eq!(FaceKey::L.resolve(angles, false).to_string(), "R");
        assert_eq!(FaceKey::U.resolve(angles, true).to_string(), "U'");
    }

    #[test]
    fn test_parse_face_key() {
        assert_eq!("f".parse(), Ok(FaceKey::F));
        assert_eq!("R".parse(), Ok(FaceKey::R));
        assert!("x".parse::<FaceKey>().is_err());
    }
}
