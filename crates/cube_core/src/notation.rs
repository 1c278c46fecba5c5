//! Move notation.

use std::fmt;
use std::str::FromStr;

use cubemath::{Axis, Sign};
use serde::de::Error;
use thiserror::Error;

use crate::{Color, LATTICE_MAX};

/// Outer face of the cube that can be turned.
#[derive(strum::EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Top (Y = 6).
    U,
    /// Bottom (Y = 0).
    D,
    /// Front, closest to the viewer (Z = 0).
    F,
    /// Back (Z = 6).
    B,
    /// Left (X = 0).
    L,
    /// Right (X = 6).
    R,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Face {
    /// Returns the symbol for the face.
    pub fn symbol(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }
    /// Returns the face with the given symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::L | Face::R => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    /// Returns the lattice coordinate of the face's layer along
    /// [`Face::axis()`].
    pub fn layer(self) -> i32 {
        match self {
            Face::D | Face::F | Face::L => 0,
            Face::U | Face::B | Face::R => LATTICE_MAX,
        }
    }
    /// Returns the direction of rotation around [`Face::axis()`] for an
    /// unprimed move of this face.
    ///
    /// U, B, and R rotate backwards relative to the others so that every
    /// unprimed move is clockwise when looking at the face.
    pub fn base_sign(self) -> Sign {
        match self {
            Face::U | Face::B | Face::R => Sign::Neg,
            Face::D | Face::F | Face::L => Sign::Pos,
        }
    }

    /// Returns the color of the face in the solved state.
    pub fn solved_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Red,
            Face::B => Color::Orange,
            Face::L => Color::Green,
            Face::R => Color::Blue,
        }
    }
    /// Returns the face that has the given color in the solved state.
    pub fn with_solved_color(color: Color) -> Self {
        match color {
            Color::White => Face::U,
            Color::Yellow => Face::D,
            Color::Red => Face::F,
            Color::Orange => Face::B,
            Color::Green => Face::L,
            Color::Blue => Face::R,
        }
    }

    /// Returns the opposite face.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::L => Face::R,
            Face::R => Face::L,
        }
    }
}

/// Quarter turn of one outer face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Whether to turn in reverse.
    pub prime: bool,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.prime {
            write!(f, "'")?;
        }
        Ok(())
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face_char = chars.next().ok_or(ParseMoveError::Empty)?;
        let face = Face::from_symbol(face_char)
            .ok_or_else(|| ParseMoveError::InvalidMove(s.to_owned()))?;
        match chars.as_str() {
            "" => Ok(Move::new(face, false)),
            "'" => Ok(Move::new(face, true)),
            _ => Err(ParseMoveError::InvalidMove(s.to_owned())),
        }
    }
}
impl serde::Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Move {
    /// All 12 moves. Slice moves and whole-cube rotations are not supported.
    pub const ALL: [Move; 12] = [
        Move::new(Face::U, false),
        Move::new(Face::U, true),
        Move::new(Face::D, false),
        Move::new(Face::D, true),
        Move::new(Face::F, false),
        Move::new(Face::F, true),
        Move::new(Face::B, false),
        Move::new(Face::B, true),
        Move::new(Face::L, false),
        Move::new(Face::L, true),
        Move::new(Face::R, false),
        Move::new(Face::R, true),
    ];

    /// Constructs a move.
    pub const fn new(face: Face, prime: bool) -> Self {
        Self { face, prime }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            face: self.face,
            prime: !self.prime,
        }
    }

    /// Returns the direction of rotation around the face's axis.
    pub fn sign(self) -> Sign {
        self.face.base_sign() * Sign::from_reversed(self.prime)
    }
}

/// Error produced when parsing a single move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Empty string
    #[error("empty move")]
    Empty,
    /// Not one of the 12 supported moves
    #[error("invalid move {0:?}; expected one of U D F B L R, optionally followed by '")]
    InvalidMove(String),
}

/// Error produced when parsing a whitespace-separated sequence of moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error in move {} of sequence: {source}", .index + 1)]
pub struct ParseSequenceError {
    /// Index of the first invalid move.
    pub index: usize,
    /// Error for that move.
    pub source: ParseMoveError,
}

/// Parses a whitespace-separated sequence of moves such as `R U R' U'`.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseSequenceError> {
    s.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse()
                .map_err(|source| ParseSequenceError { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_move_symbols() {
        let symbols = Move::ALL.map(|mv| mv.to_string());
        assert_eq!(
            symbols,
            ["U", "U'", "D", "D'", "F", "F'", "B", "B'", "L", "L'", "R", "R'"],
        );
        for mv in Move::ALL {
            assert_eq!(mv.to_string().parse(), Ok(mv));
        }
    }

    #[test]
    fn test_invalid_moves() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        for s in ["M", "u", "R2", "R''", "R’", "RU", " R"] {
            assert_eq!(
                s.parse::<Move>(),
                Err(ParseMoveError::InvalidMove(s.to_owned())),
            );
        }
    }

    #[test]
    fn test_parse_sequence() {
        let expected = vec![
            Move::new(Face::R, false),
            Move::new(Face::U, false),
            Move::new(Face::R, true),
            Move::new(Face::U, true),
        ];
        assert_eq!(parse_sequence("R U R' U'"), Ok(expected));
        assert_eq!(parse_sequence("  "), Ok(vec![]));

        let err = parse_sequence("R U x").unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.to_string(), format!("error in move 3 of sequence: {}", err.source));
    }

    #[test]
    fn test_direction_table() {
        use Face::*;

        for face in [U, B, R] {
            assert_eq!(Move::new(face, false).sign(), Sign::Neg);
            assert_eq!(Move::new(face, true).sign(), Sign::Pos);
        }
        for face in [D, F, L] {
            assert_eq!(Move::new(face, false).sign(), Sign::Pos);
            assert_eq!(Move::new(face, true).sign(), Sign::Neg);
        }
    }

    #[test]
    fn test_faces_and_colors() {
        for mv in Move::ALL {
            let face = mv.face;
            assert_eq!(Face::with_solved_color(face.solved_color()), face);
            assert_eq!(face.axis(), face.solved_color().axis());
            assert_eq!(face.layer(), face.solved_color().solved_coordinate());
            assert_eq!(face.opposite().solved_color(), face.solved_color().opposite());
        }
    }
}
