//! 3x3x3 twisty puzzle simulator backend.
//!
//! The puzzle is modeled as geometry: 54 colored facelets whose corners sit
//! on an integer lattice from 0 to 6 along each axis. A move rotates every
//! facelet touching one outer layer by 90 degrees around that layer's center
//! and then snaps the result back onto the lattice.
//!
//! This crate performs no I/O and owns no threads. The caller owns a
//! [`Simulation`] and drives it from its own frame loop.

#[macro_use]
extern crate lazy_static;

/// Panics in debug builds; logs an error in release builds.
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

mod color;
mod facelet;
pub mod keys;
mod notation;
pub mod orientation;
mod rgb;
mod scramble;
mod sim;
mod solved;
mod state;
mod turn;
pub mod view;


pub use cubemath;
pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use cubemath::{EulerAngles, Float};

    pub use crate::color::{Color, Palette};
    pub use crate::facelet::{Facelet, FaceletId, LatticePoint};
    pub use crate::keys::{FaceKey, FaceQuery, ParseFaceKeyError};
    pub use crate::notation::{Face, Move, ParseMoveError, ParseSequenceError, parse_sequence};
    pub use crate::orientation::{closest_face, left_face, top_face};
    pub use crate::rgb::Rgb;
    pub use crate::scramble::{
        Scramble, ScrambleProgress, ScrambleRange, ScrambleRangeError, random_move,
    };
    pub use crate::sim::{SimEvent, Simulation};
    pub use crate::solved::{is_solved, misplaced_colors};
    pub use crate::state::CubeState;
    pub use crate::turn::{Turn, TurnFrame, TurnFrames, TurnSpeed, TurnSpeedError, TurnSpeeds};
    pub use crate::view::{
        Glide, GlideTarget, ResetStyle, ViewAngles, ViewController, ViewSettings,
    };
}

/// Number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;
/// Number of facelets of each color.
pub const FACELETS_PER_COLOR: usize = 9;

/// Largest lattice coordinate. The smallest is 0.
pub const LATTICE_MAX: i32 = 6;
/// Lattice coordinate of the middle layer, which is never turned.
pub const LATTICE_MID: i32 = 3;
/// Side length of a single cubie on the lattice.
pub const CUBIE_SIZE: i32 = 2;

/// Total rotation of a single move, in degrees.
pub const QUARTER_TURN: Float = 90.0;
