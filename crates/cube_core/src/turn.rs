//! Turn engine.
//!
//! A move rotates every facelet touching one outer layer by 90 degrees about
//! the center of that layer. The rotation is split into equal increments so
//! that a renderer can show intermediate geometry; the state itself only ever
//! sees the final, snapped result.

use cubemath::cgmath::Point3;
use cubemath::{Axis, EulerAngles, Float, Rotation, Sign};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CubeState, Facelet, FaceletId, LATTICE_MID, Move, QUARTER_TURN};

/// Angle, in degrees, by which each increment of a turn rotates.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, PartialOrd)]
#[serde(try_from = "Float", into = "Float")]
pub struct TurnSpeed(Float);
impl Default for TurnSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}
impl TryFrom<Float> for TurnSpeed {
    type Error = TurnSpeedError;

    fn try_from(degrees: Float) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}
impl From<TurnSpeed> for Float {
    fn from(speed: TurnSpeed) -> Self {
        speed.0
    }
}
impl TurnSpeed {
    /// Default speed for turns requested by the user.
    pub const NORMAL: Self = Self(7.5);
    /// Default speed for turns while scrambling.
    pub const SCRAMBLE: Self = Self(15.0);
    /// Completes each turn in a single increment.
    pub const INSTANT: Self = Self(QUARTER_TURN);

    /// Constructs a turn speed from the angle of each increment, in degrees.
    pub fn new(degrees: Float) -> Result<Self, TurnSpeedError> {
        if !degrees.is_finite() {
            Err(TurnSpeedError::NotFinite)
        } else if degrees <= 0.0 || degrees > QUARTER_TURN {
            Err(TurnSpeedError::OutOfRange(degrees))
        } else {
            Ok(Self(degrees))
        }
    }

    /// Returns the requested angle of each increment, in degrees.
    pub fn degrees(self) -> Float {
        self.0
    }
    /// Returns the number of increments in a turn.
    pub fn steps(self) -> usize {
        (QUARTER_TURN / self.0).round().max(1.0) as usize
    }
    /// Returns the angle actually rotated by each increment, in degrees.
    ///
    /// This differs from [`TurnSpeed::degrees()`] when the requested angle
    /// does not evenly divide 90 degrees, so that the increments always add up
    /// to exactly a quarter turn.
    pub fn increment(self) -> Float {
        QUARTER_TURN / self.steps() as Float
    }
}

/// Error produced when constructing an invalid [`TurnSpeed`].
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum TurnSpeedError {
    /// Angle is NaN or infinite
    #[error("turn speed must be a finite number of degrees")]
    NotFinite,
    /// Angle is not in the range (0, 90]
    #[error("turn speed must be greater than 0 and at most 90 degrees; got {0}")]
    OutOfRange(Float),
}

/// Turn speeds for normal turns and for scrambling.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct TurnSpeeds {
    /// Speed for turns requested by the user.
    pub normal: TurnSpeed,
    /// Speed while scrambling. This is usually faster than `normal`.
    pub scramble: TurnSpeed,
}
impl Default for TurnSpeeds {
    fn default() -> Self {
        Self {
            normal: TurnSpeed::NORMAL,
            scramble: TurnSpeed::SCRAMBLE,
        }
    }
}

/// Turn planned on a specific state: which facelets move, and how.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    mv: Move,
    axis: Axis,
    layer: i32,
    sign: Sign,
    center: Point3<Float>,
    affected: Vec<FaceletId>,
}
impl Turn {
    /// Plans a move on `state`.
    pub fn new(state: &CubeState, mv: Move) -> Self {
        let axis = mv.face.axis();
        let layer = mv.face.layer();

        let mut center = [LATTICE_MID as Float; 3];
        center[axis.idx()] = layer as Float;

        let affected = state
            .iter()
            .filter(|(_, facelet, _)| facelet.touches_layer(axis, layer))
            .map(|(id, _, _)| id)
            .collect();

        Self {
            mv,
            axis,
            layer,
            sign: mv.sign(),
            center: Point3::from(center),
            affected,
        }
    }

    /// Returns the move.
    pub fn mv(&self) -> Move {
        self.mv
    }
    /// Returns the axis of rotation.
    pub fn axis(&self) -> Axis {
        self.axis
    }
    /// Returns the lattice coordinate of the turned layer along
    /// [`Turn::axis()`].
    pub fn layer(&self) -> i32 {
        self.layer
    }
    /// Returns the direction of rotation around [`Turn::axis()`].
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// Returns the point that the layer rotates about.
    pub fn center(&self) -> Point3<Float> {
        self.center
    }
    /// Returns the facelets moved by the turn.
    pub fn affected(&self) -> &[FaceletId] {
        &self.affected
    }

    /// Returns the rotation angles of a single increment.
    pub fn step_angles(&self, speed: TurnSpeed) -> EulerAngles {
        EulerAngles::around(self.axis, self.sign * speed.increment())
    }

    /// Returns an iterator over the intermediate geometry of the affected
    /// facelets, one frame per increment.
    ///
    /// Each frame rotates the previous frame's geometry, so floating-point
    /// error accumulates exactly as it does in [`Turn::apply()`].
    pub fn frames(&self, state: &CubeState, speed: TurnSpeed) -> TurnFrames {
        let initial = self
            .affected
            .iter()
            .map(|&id| (id, state.facelet(id).to_float()))
            .collect::<Vec<_>>();
        TurnFrames {
            rotation: Rotation::new(self.step_angles(speed)),
            center: self.center,
            steps: speed.steps(),
            step: 0,
            current: initial.clone(),
            initial,
        }
    }

    /// Applies the turn to `state`, which must be the state that the turn was
    /// planned on.
    pub fn apply(&self, state: &mut CubeState, speed: TurnSpeed) {
        log::debug!(
            "turning {} ({} facelets around {} = {})",
            self.mv,
            self.affected.len(),
            self.axis,
            self.layer,
        );

        let Some(last_frame) = self.frames(state, speed).last() else {
            return;
        };

        // Snap back onto the lattice. Facelets outside the layer never left
        // it. Facelets are written by ID because one facelet may land on
        // corners that another one in the same layer has not vacated yet.
        for (id, corners) in last_frame.corners {
            let new = Facelet::snap(&corners);
            if new.plane_axis().is_none() {
                debug_panic!("facelet {id} snapped to {new}, which is not axis-aligned");
            }
            state.set_facelet(id, new);
        }
    }
}

/// Intermediate geometry of the facelets affected by a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnFrame {
    /// Number of increments applied so far, starting at 1.
    pub step: usize,
    /// Total number of increments in the turn.
    pub steps: usize,
    /// Corners of each affected facelet.
    pub corners: Vec<(FaceletId, [Point3<Float>; 4])>,
}
impl TurnFrame {
    /// Returns the fraction of the turn completed, from 0 (exclusive) to 1
    /// (inclusive).
    pub fn progress(&self) -> Float {
        self.step as Float / self.steps as Float
    }
    /// Returns whether this is the last frame of the turn.
    pub fn is_last(&self) -> bool {
        self.step == self.steps
    }
}

/// Finite, restartable iterator over the frames of a turn.
#[derive(Debug, Clone)]
pub struct TurnFrames {
    rotation: Rotation,
    center: Point3<Float>,
    steps: usize,
    step: usize,
    initial: Vec<(FaceletId, [Point3<Float>; 4])>,
    current: Vec<(FaceletId, [Point3<Float>; 4])>,
}
impl Iterator for TurnFrames {
    type Item = TurnFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }
        for (_, corners) in &mut self.current {
            *corners = corners.map(|p| self.rotation.apply(p, self.center));
        }
        self.step += 1;
        log::trace!("turn frame {}/{}", self.step, self.steps);
        Some(TurnFrame {
            step: self.step,
            steps: self.steps,
            corners: self.current.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.step;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for TurnFrames {}
impl TurnFrames {
    /// Rewinds to before the first frame.
    pub fn restart(&mut self) {
        self.step = 0;
        self.current.clone_from(&self.initial);
    }
}
