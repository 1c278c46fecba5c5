use cubemath::Float;
use rand::Rng;

use crate::view::{GlideTarget, ResetStyle};
use crate::{
    CubeState, FaceKey, Glide, Move, Scramble, ScrambleProgress, ScrambleRange, TurnSpeeds,
    ViewAngles, ViewController, ViewSettings, is_solved,
};

/// State transition reported to the timer and HUD.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SimEvent {
    /// The user interacted for the first time, ending the idle spin.
    Started,
    /// A scramble began. The timer should reset.
    ScrambleStarted,
    /// A scramble move was applied, with the percentage completed so far.
    ScrambleProgressed(Float),
    /// A scramble ended. The timer should start.
    ScrambleFinished,
    /// The cube was solved after being scrambled. The timer should stop.
    Solved,
    /// The cube was reset to the solved state. The timer should clear.
    Reset,
}

/// Complete simulation: the cube, the view, and the status flags that the
/// timer and HUD depend on.
///
/// The caller owns the simulation and drives it from its frame loop.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: CubeState,
    view: ViewController,
    speeds: TurnSpeeds,
    glide: Option<Glide>,

    scrambling: bool,
    scrambled: bool,
    solved: bool,
}
impl Default for Simulation {
    fn default() -> Self {
        Self::new(TurnSpeeds::default(), ViewSettings::default())
    }
}
impl Simulation {
    /// Constructs a simulation with a solved cube.
    pub fn new(speeds: TurnSpeeds, view_settings: ViewSettings) -> Self {
        Self {
            state: CubeState::solved(),
            view: ViewController::new(view_settings),
            speeds,
            glide: None,

            scrambling: false,
            scrambled: false,
            solved: false,
        }
    }

    /// Returns the state of the cube.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the camera controller.
    pub fn view(&self) -> &ViewController {
        &self.view
    }
    /// Returns the current view angles.
    pub fn angles(&self) -> ViewAngles {
        self.view.angles()
    }
    /// Sets the view angles, cancelling any glide in progress.
    pub fn set_angles(&mut self, angles: ViewAngles) {
        self.glide = None;
        self.view.set_angles(angles);
    }
    /// Returns the turn speeds.
    pub fn speeds(&self) -> TurnSpeeds {
        self.speeds
    }
    /// Returns the glide in progress, if any.
    pub fn glide(&self) -> Option<Glide> {
        self.glide
    }

    /// Returns whether the user has started interacting.
    pub fn is_started(&self) -> bool {
        self.view.is_started()
    }
    /// Returns whether a scramble is in progress.
    pub fn is_scrambling(&self) -> bool {
        self.scrambling
    }
    /// Returns whether the cube has been scrambled since the last reset.
    pub fn is_scrambled(&self) -> bool {
        self.scrambled
    }
    /// Returns whether the cube has been solved since the last scramble.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Ends the idle spin.
    pub fn start(&mut self) -> Vec<SimEvent> {
        if self.view.start() {
            vec![SimEvent::Started]
        } else {
            vec![]
        }
    }

    /// Applies a move at normal speed and stops the view.
    pub fn turn(&mut self, mv: Move) -> Vec<SimEvent> {
        let mut events = self.start();
        self.state.turn(mv, self.speeds.normal);
        self.view.stop();
        events.extend(self.check_solved());
        events
    }

    /// Turns the face that `key` picks at the current view angles.
    pub fn press_key(&mut self, key: FaceKey, reverse: bool) -> (Move, Vec<SimEvent>) {
        let mv = key.resolve(self.angles().euler(), reverse);
        log::debug!("key {key} (reverse: {reverse}) resolved to {mv}");
        (mv, self.turn(mv))
    }

    /// Scrambles the cube at scramble speed.
    ///
    /// The cube counts as scrambled even if `progress` is used to cancel
    /// partway through.
    pub fn scramble(
        &mut self,
        rng: &mut impl Rng,
        range: ScrambleRange,
        progress: &ScrambleProgress,
    ) -> (Scramble, Vec<SimEvent>) {
        let mut events = self.start();
        events.push(SimEvent::ScrambleStarted);

        self.view.stop();
        self.glide = None;
        self.scrambled = false;
        self.scrambling = true;

        let scramble = Scramble::run(
            &mut self.state,
            rng,
            range,
            self.speeds.scramble,
            progress,
            |percent| events.push(SimEvent::ScrambleProgressed(percent)),
        );

        self.scrambling = false;
        self.scrambled = true;
        self.solved = false;
        events.push(SimEvent::ScrambleFinished);
        log::info!("scrambled with {} moves: {scramble}", scramble.moves.len());

        (scramble, events)
    }

    /// Resets the cube to the solved state and returns the view to rest.
    pub fn reset(&mut self) -> Vec<SimEvent> {
        self.state = CubeState::solved();
        self.scrambled = false;
        self.solved = false;
        self.view.stop();
        match self.view.settings().reset {
            ResetStyle::Fade => {
                self.glide = None;
                self.view.set_angles(ViewAngles::default());
            }
            ResetStyle::Glide => {
                let factor = self.view.settings().glide_factor;
                self.glide = Some(Glide::new(GlideTarget::default(), factor));
            }
        }
        log::info!("reset");
        vec![SimEvent::Reset]
    }

    /// Checks whether a scrambled cube has just been solved. This reports
    /// [`SimEvent::Solved`] at most once per scramble and starts a glide to
    /// show off the solved cube.
    pub fn check_solved(&mut self) -> Vec<SimEvent> {
        if !self.scrambled || self.solved || !is_solved(&self.state) {
            return vec![];
        }
        self.solved = true;
        let settings = self.view.settings();
        self.glide = Some(Glide::new(
            settings.solved_glide_target,
            settings.glide_factor,
        ));
        log::info!("solved");
        vec![SimEvent::Solved]
    }

    /// Records mouse movement while the button is held.
    pub fn drag(&mut self, dx: Float, dy: Float) -> Vec<SimEvent> {
        let events = self.start();
        self.view.drag(dx, dy);
        events
    }
    /// Lets go of the cube.
    pub fn release(&mut self) {
        self.view.release();
    }

    /// Advances the view by one frame. A glide in progress takes priority over
    /// momentum.
    pub fn tick(&mut self) {
        match self.glide {
            Some(glide) => {
                if glide.step(self.view.angles_mut()) {
                    self.glide = None;
                }
            }
            None => self.view.tick(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;

    #[test]
    fn test_first_interaction_starts() {
        let mut sim = Simulation::default();
        assert!(!sim.is_started());
        assert_eq!(sim.drag(1.0, 0.0), vec![SimEvent::Started]);
        assert_eq!(sim.drag(1.0, 0.0), vec![]);
        assert_eq!(sim.press_key(FaceKey::F, false).1, vec![]);
    }

    #[test]
    fn test_scramble_then_solve() {
        let mut sim = Simulation::default();
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let progress = ScrambleProgress::new();
        let (scramble, events) = sim.scramble(&mut rng, ScrambleRange::default(), &progress);

        assert_eq!(events[0], SimEvent::Started);
        assert_eq!(events[1], SimEvent::ScrambleStarted);
        assert_eq!(events.last(), Some(&SimEvent::ScrambleFinished));
        assert_eq!(events.len(), scramble.moves.len() + 3);
        assert_eq!(
            events[events.len() - 2],
            SimEvent::ScrambleProgressed(100.0),
        );
        assert!(sim.is_scrambled());
        assert!(!sim.is_scrambling());
        assert!(!sim.is_solved());

        // Undo the scramble.
        let undo = scramble.moves.iter().rev().map(|mv| mv.rev()).collect::<Vec<_>>();
        let solved_events = undo
            .into_iter()
            .flat_map(|mv| sim.turn(mv))
            .filter(|event| *event == SimEvent::Solved)
            .count();
        assert_eq!(solved_events, 1);
        assert!(sim.is_solved());
        assert!(sim.glide().is_some());
        assert_eq!(sim.check_solved(), vec![]);

        for _ in 0..1000 {
            sim.tick();
        }
        assert_eq!(sim.glide(), None);
        assert_eq!((sim.angles().x(), sim.angles().y()), (20.0, 325.0));
    }

    #[test]
    fn test_solved_without_scramble_is_not_reported() {
        let mut sim = Simulation::default();
        sim.turn(Move::ALL[0]);
        assert_eq!(sim.turn(Move::ALL[0].rev()), vec![]);
        assert!(!sim.is_solved());
    }

    #[test]
    fn test_reset() {
        let mut sim = Simulation::default();
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        sim.scramble(&mut rng, ScrambleRange::default(), &ScrambleProgress::new());
        sim.set_angles(ViewAngles::new(45.0, 45.0, 0.0));

        assert_eq!(sim.reset(), vec![SimEvent::Reset]);
        assert_eq!(sim.state(), &CubeState::solved());
        assert!(!sim.is_scrambled());
        assert_eq!(sim.angles(), ViewAngles::default());

        let settings = ViewSettings {
            reset: ResetStyle::Glide,
            ..Default::default()
        };
        let mut sim = Simulation::new(TurnSpeeds::default(), settings);
        sim.start();
        sim.set_angles(ViewAngles::new(45.0, 45.0, 0.0));
        sim.reset();
        assert!(sim.glide().is_some());
        for _ in 0..1000 {
            sim.tick();
        }
        assert_eq!(sim.angles(), ViewAngles::default());
    }
}
