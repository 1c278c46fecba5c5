use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CubeState, Float, Move, TurnSpeed};

/// Inclusive range of scramble lengths.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(try_from = "RawScrambleRange", into = "RawScrambleRange")]
pub struct ScrambleRange {
    min: u32,
    max: u32,
}
impl Default for ScrambleRange {
    fn default() -> Self {
        Self { min: 20, max: 30 }
    }
}
impl ScrambleRange {
    /// Constructs a range of scramble lengths, including both `min` and
    /// `max`.
    pub fn new(min: u32, max: u32) -> Result<Self, ScrambleRangeError> {
        if min > max {
            return Err(ScrambleRangeError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum scramble length.
    pub fn min(self) -> u32 {
        self.min
    }
    /// Returns the maximum scramble length.
    pub fn max(self) -> u32 {
        self.max
    }

    /// Returns whether `len` is in the range.
    pub fn contains(self, len: u32) -> bool {
        (self.min..=self.max).contains(&len)
    }

    /// Draws a length uniformly from the range.
    pub fn sample(self, rng: &mut impl Rng) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

#[derive(Serialize, Deserialize)]
struct RawScrambleRange {
    min: u32,
    max: u32,
}
impl TryFrom<RawScrambleRange> for ScrambleRange {
    type Error = ScrambleRangeError;

    fn try_from(raw: RawScrambleRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}
impl From<ScrambleRange> for RawScrambleRange {
    fn from(range: ScrambleRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

/// Error produced when a scramble range contains no lengths.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("empty scramble range: minimum {min} is greater than maximum {max}")]
pub struct ScrambleRangeError {
    /// Requested minimum.
    pub min: u32,
    /// Requested maximum.
    pub max: u32,
}

/// Returns one of the 12 moves, chosen uniformly at random.
pub fn random_move(rng: &mut impl Rng) -> Move {
    Move::ALL[rng.random_range(0..Move::ALL.len())]
}

/// Progress while scrambling.
///
/// This may be shared with another thread that displays progress or requests
/// cancellation.
#[derive(Debug)]
pub struct ScrambleProgress {
    done: AtomicU32,
    total: AtomicU32,
    cancel_requested: AtomicBool,
}
impl Default for ScrambleProgress {
    fn default() -> Self {
        Self {
            done: AtomicU32::new(0),
            total: AtomicU32::new(1),
            cancel_requested: AtomicBool::new(false),
        }
    }
}
impl ScrambleProgress {
    /// Constructs a new `ScrambleProgress`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the progress as a fraction: completed moves / total moves.
    pub fn fraction(&self) -> (u32, u32) {
        (
            self.done.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }
    /// Returns the percentage of moves completed, rounded to one decimal
    /// place. This is exactly 100 once every move has been applied.
    pub fn percent(&self) -> Float {
        let (done, total) = self.fraction();
        if done >= total {
            return 100.0;
        }
        (done as Float / total as Float * 1000.0).round() / 10.0
    }
    /// Returns whether every move has been applied.
    pub fn is_done(&self) -> bool {
        let (done, total) = self.fraction();
        done >= total
    }

    pub(crate) fn set_total(&self, total: u32) {
        self.total.store(total, Ordering::Relaxed);
    }
    pub(crate) fn set_progress(&self, moves_done: u32) {
        self.done.store(moves_done, Ordering::Relaxed);
    }

    /// Requests to cancel the scrambling. The scramble stops before its next
    /// move.
    pub fn request_cancel(&self) {
        self.cancel_requested.store(true, Ordering::Relaxed);
    }
    /// Returns whether cancellation has been requested.
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested.load(Ordering::Relaxed)
    }
}

/// Random move sequence applied to a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// Number of moves drawn for the scramble.
    pub len: u32,
    /// Moves actually applied, in order. This is shorter than `len` if the
    /// scramble was cancelled.
    pub moves: Vec<Move>,
}
impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}
impl Scramble {
    /// Scrambles `state` with a random number of random moves.
    ///
    /// `on_progress` is called with the percentage completed after each move.
    /// Cancellation is checked before each move, so `state` is always left
    /// between moves.
    pub fn run(
        state: &mut CubeState,
        rng: &mut impl Rng,
        range: ScrambleRange,
        speed: TurnSpeed,
        progress: &ScrambleProgress,
        mut on_progress: impl FnMut(Float),
    ) -> Self {
        let len = range.sample(rng);
        log::debug!("scrambling with {len} moves");
        progress.set_progress(0);
        progress.set_total(len);

        let mut moves = Vec::with_capacity(len as usize);
        for i in 0..len {
            if progress.is_cancel_requested() {
                log::debug!("scramble cancelled after {i} of {len} moves");
                break;
            }
            let mv = random_move(rng);
            state.turn(mv, speed);
            moves.push(mv);
            progress.set_progress(i + 1);
            on_progress(progress.percent());
        }
        if len == 0 {
            on_progress(progress.percent());
        }

        Self { len, moves }
    }

    /// Returns whether the scramble was cancelled before all of its moves
    /// were applied.
    pub fn is_cancelled(&self) -> bool {
        (self.moves.len() as u32) < self.len
    }
}
