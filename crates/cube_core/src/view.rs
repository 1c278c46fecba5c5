//! View angles and the camera controls that change them: drag momentum, the
//! idle spin before the user starts, and gliding toward a target.

use cubemath::{EulerAngles, Float};
use serde::{Deserialize, Serialize};

/// Velocity below which momentum stops entirely.
const MIN_VELOCITY: Float = 0.005;

/// Angular distance, in degrees, at which a glide lands on its target.
const GLIDE_TOLERANCE: Float = 1.0;

/// Rotation of the whole cube relative to the camera, in degrees.
///
/// Each angle is always in the range `[0, 360)`.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(from = "EulerAngles", into = "EulerAngles")]
pub struct ViewAngles {
    angles: EulerAngles,
}
impl From<EulerAngles> for ViewAngles {
    fn from(angles: EulerAngles) -> Self {
        Self {
            angles: angles.normalized(),
        }
    }
}
impl From<ViewAngles> for EulerAngles {
    fn from(view: ViewAngles) -> Self {
        view.angles
    }
}
impl ViewAngles {
    /// Constructs view angles, wrapping each one into `[0, 360)`.
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        EulerAngles::new(x, y, z).into()
    }

    /// Returns the rotation around the X axis.
    pub fn x(self) -> Float {
        self.angles.x
    }
    /// Returns the rotation around the Y axis.
    pub fn y(self) -> Float {
        self.angles.y
    }
    /// Returns the rotation around the Z axis.
    pub fn z(self) -> Float {
        self.angles.z
    }
    /// Returns the angles as [`EulerAngles`].
    pub fn euler(self) -> EulerAngles {
        self.angles
    }

    /// Adds `delta` to the angles.
    #[must_use]
    pub fn rotated_by(self, delta: EulerAngles) -> Self {
        (self.angles + delta).into()
    }

    /// Returns whether the cube has been tilted past vertical, so that its
    /// original top faces down.
    pub fn is_upside_down(self) -> bool {
        90.0 < self.x() && self.x() < 270.0
    }
    /// Returns whether the cube has been spun so that its original back faces
    /// the viewer.
    pub fn is_backward(self) -> bool {
        135.0 < self.y() && self.y() < 225.0
    }
}

/// How the view returns to rest when the cube is reset.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResetStyle {
    /// Jump straight to the rest angles. The renderer fades the cube out and
    /// back in.
    #[default]
    Fade,
    /// Glide smoothly to the rest angles.
    Glide,
}

/// Target X and Y angles for a glide.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct GlideTarget {
    /// Target rotation around the X axis, in degrees.
    pub x: Float,
    /// Target rotation around the Y axis, in degrees.
    pub y: Float,
}

/// Tunable parameters of the camera controls.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct ViewSettings {
    /// Factor by which momentum decays each frame after the user lets go.
    pub spin_factor: Float,
    /// Degrees of rotation per pixel of mouse movement.
    pub drag_sensitivity: Float,
    /// Rotation around the Y axis per frame before the user starts.
    pub idle_spin: Float,
    /// Fraction of the remaining distance covered by each frame of a glide.
    pub glide_factor: Float,
    /// Angles to glide to once the cube is solved.
    pub solved_glide_target: GlideTarget,
    /// How the view returns to rest on reset.
    pub reset: ResetStyle,
}
impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            spin_factor: 0.9,
            drag_sensitivity: 0.4,
            // 9 degrees per second at 60 FPS
            idle_spin: -0.15,
            glide_factor: 0.05,
            solved_glide_target: GlideTarget { x: 20.0, y: 325.0 },
            reset: ResetStyle::Fade,
        }
    }
}

/// Eases the X and Y view angles toward a target, one frame at a time.
///
/// Interpolation is linear in degrees and does not take the shorter way
/// around the circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glide {
    target: GlideTarget,
    factor: Float,
}
impl Glide {
    /// Constructs a glide toward `target`, covering `factor` of the remaining
    /// distance each frame. `factor` is clamped to `(0, 1]`.
    pub fn new(target: GlideTarget, factor: Float) -> Self {
        Self {
            target,
            factor: factor.clamp(0.001, 1.0),
        }
    }

    /// Returns the target angles.
    pub fn target(&self) -> GlideTarget {
        self.target
    }

    /// Returns whether `angles` are close enough to land on the target.
    pub fn has_arrived(&self, angles: ViewAngles) -> bool {
        (angles.x() - self.target.x).abs() <= GLIDE_TOLERANCE
            && (angles.y() - self.target.y).abs() <= GLIDE_TOLERANCE
    }

    /// Advances the glide by one frame. Returns `true` once the angles have
    /// landed exactly on the target.
    pub fn step(&self, angles: &mut ViewAngles) -> bool {
        if self.has_arrived(*angles) {
            *angles = ViewAngles::new(self.target.x, self.target.y, angles.z());
            return true;
        }
        let f = self.factor;
        *angles = ViewAngles::new(
            (1.0 - f) * angles.x() + f * self.target.x,
            (1.0 - f) * angles.y() + f * self.target.y,
            angles.z(),
        );
        false
    }

    /// Runs the glide to completion and returns the number of frames it took.
    pub fn run(&self, angles: &mut ViewAngles) -> usize {
        let mut frames = 0;
        while !self.step(angles) {
            frames += 1;
        }
        frames
    }
}

/// Camera controller that turns mouse drags into rotation with momentum.
///
/// Call [`ViewController::tick()`] once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    settings: ViewSettings,
    angles: ViewAngles,
    started: bool,
    dragging: bool,
    /// Mouse movement since the last frame.
    pending_drag: (Float, Float),
    /// Horizontal and vertical velocity, in degrees per frame.
    velocity: (Float, Float),
}
impl ViewController {
    /// Constructs a controller at rest, spinning idly until started.
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            settings,
            angles: ViewAngles::default(),
            started: false,
            dragging: false,
            pending_drag: (0.0, 0.0),
            velocity: (0.0, 0.0),
        }
    }

    /// Returns the settings.
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }
    /// Returns the current view angles.
    pub fn angles(&self) -> ViewAngles {
        self.angles
    }
    /// Returns a mutable reference to the current view angles.
    pub fn angles_mut(&mut self) -> &mut ViewAngles {
        &mut self.angles
    }
    /// Sets the view angles.
    pub fn set_angles(&mut self, angles: ViewAngles) {
        self.angles = angles;
    }
    /// Returns the current horizontal and vertical velocity.
    pub fn velocity(&self) -> (Float, Float) {
        self.velocity
    }
    /// Returns whether the user has started interacting.
    pub fn is_started(&self) -> bool {
        self.started
    }
    /// Returns whether the user is dragging.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Stops the idle spin. Returns `false` if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.velocity = (0.0, 0.0);
        true
    }
    /// Stops all motion immediately.
    pub fn stop(&mut self) {
        self.velocity = (0.0, 0.0);
        self.pending_drag = (0.0, 0.0);
    }

    /// Records mouse movement, in pixels, while the button is held.
    pub fn drag(&mut self, dx: Float, dy: Float) {
        self.dragging = true;
        self.pending_drag.0 += dx;
        self.pending_drag.1 += dy;
    }
    /// Lets go of the cube. It keeps spinning with decaying momentum.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Advances one frame.
    pub fn tick(&mut self) {
        let s = &self.settings;
        if !self.started {
            self.velocity = (s.idle_spin, 0.0);
        } else if self.dragging {
            let (dx, dy) = std::mem::take(&mut self.pending_drag);
            self.velocity = (dx * s.drag_sensitivity, dy * s.drag_sensitivity);
        } else if self.velocity.0.abs() > MIN_VELOCITY || self.velocity.1.abs() > MIN_VELOCITY {
            self.velocity.0 *= s.spin_factor;
            self.velocity.1 *= s.spin_factor;
        } else {
            self.velocity = (0.0, 0.0);
        }

        let (vx, vy) = self.velocity;
        // Horizontal drags would spin the wrong way once the cube is flipped.
        let dy = if self.angles.is_upside_down() { -vx } else { vx };
        self.angles = self.angles.rotated_by(EulerAngles::new(vy, dy, 0.0));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_view_angles_normalized() {
        let angles = ViewAngles::new(-90.0, 450.0, 360.0);
        assert_eq!((angles.x(), angles.y(), angles.z()), (270.0, 90.0, 0.0));
        assert!(!angles.is_upside_down());
        assert!(!angles.is_backward());
        assert!(ViewAngles::new(-180.0, 0.0, 0.0).is_upside_down());
        assert!(ViewAngles::new(0.0, 180.0, 0.0).is_backward());
        assert!(!ViewAngles::new(90.0, 135.0, 0.0).is_upside_down());
        assert!(!ViewAngles::new(90.0, 135.0, 0.0).is_backward());
    }

    #[test]
    fn test_idle_spin() {
        let mut view = ViewController::new(ViewSettings::default());
        view.tick();
        assert!((view.angles().y() - (360.0 - 0.15)).abs() < 1e-9);
        assert!(view.start());
        assert!(!view.start());
        view.tick();
        assert!((view.angles().y() - (360.0 - 0.15)).abs() < 1e-9);
    }

    #[test]
    fn test_drag_momentum_decays() {
        let mut view = ViewController::new(ViewSettings::default());
        view.start();
        view.drag(10.0, 5.0);
        view.tick();
        assert!((view.velocity().0 - 4.0).abs() < 1e-9);
        assert!((view.velocity().1 - 2.0).abs() < 1e-9);
        assert!((view.angles().x() - 2.0).abs() < 1e-9);
        assert!((view.angles().y() - 4.0).abs() < 1e-9);

        // Holding the mouse still stops the cube.
        view.tick();
        assert_eq!(view.velocity(), (0.0, 0.0));

        view.drag(10.0, 0.0);
        view.tick();
        view.release();
        view.tick();
        assert!((view.velocity().0 - 3.6).abs() < 1e-9);
        for _ in 0..200 {
            view.tick();
        }
        assert_eq!(view.velocity(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_inverted_when_upside_down() {
        let mut view = ViewController::new(ViewSettings::default());
        view.start();
        view.set_angles(ViewAngles::new(180.0, 0.0, 0.0));
        view.drag(10.0, 0.0);
        view.tick();
        assert!((view.angles().y() - 356.0).abs() < 1e-9);
    }

    #[test]
    fn test_glide_lands_exactly() {
        let settings = ViewSettings::default();
        let glide = Glide::new(settings.solved_glide_target, settings.glide_factor);
        let mut angles = ViewAngles::new(100.0, 10.0, 0.0);
        let frames = glide.run(&mut angles);
        assert!(frames > 0);
        assert_eq!((angles.x(), angles.y()), (20.0, 325.0));
        assert!(glide.step(&mut angles));
    }
}
