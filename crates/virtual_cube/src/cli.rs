use std::path::PathBuf;

use cube_core::cubemath::{Float, Rotation};
use cube_core::prelude::*;
use eyre::{Context, Result};
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::prefs::Preferences;

/// Virtual Cube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to load instead of the one in the configuration
    /// directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
    /// Log debug messages. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

/// View angles, in degrees.
#[derive(clap::Args, Debug, Copy, Clone)]
pub(crate) struct ViewArgs {
    /// Rotation around the X axis.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: Float,
    /// Rotation around the Y axis.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: Float,
    /// Rotation around the Z axis.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    z: Float,
}
impl ViewArgs {
    fn angles(self) -> ViewAngles {
        ViewAngles::new(self.x, self.y, self.z)
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print every facelet of the cube as JSON.
    Show {
        /// Moves to apply first, such as "R U R' U'".
        #[arg(short, long, default_value = "")]
        moves: String,
        /// Include screen coordinates, in back-to-front paint order.
        #[arg(short, long)]
        projected: bool,
        /// Window width used for screen coordinates.
        #[arg(long, default_value_t = 600.0)]
        screen_width: Float,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Apply a sequence of moves to a solved cube and report whether it is
    /// solved afterward.
    Apply {
        /// Moves to apply, such as "R U R' U'".
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Scramble a cube and print the moves used.
    Scramble {
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Minimum number of moves.
        #[arg(long)]
        min: Option<u32>,
        /// Maximum number of moves.
        #[arg(long)]
        max: Option<u32>,
    },
    /// Print which faces point toward the viewer, up, and left, and the move
    /// for each key.
    Faces {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print the move for a key press.
    Key {
        /// Key: F, B, U, D, L, or R.
        key: FaceKey,
        /// Turn the other way, as if holding shift.
        #[arg(short, long)]
        reverse: bool,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print the effective preferences as YAML.
    Prefs,
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Show {
            moves,
            projected,
            screen_width,
            view,
        } => {
            let moves = parse_sequence(&moves).context("error parsing moves")?;
            let mut state = CubeState::solved();
            state.turn_all(moves, TurnSpeed::INSTANT);

            let mut facelets = state
                .iter()
                .map(|(id, facelet, color)| FaceletInfo {
                    id: id.0,
                    color,
                    rgb: prefs.colors.get(color),
                    corners: facelet.corners.map(|p| [p.x, p.y, p.z]),
                    projection: None,
                })
                .collect_vec();

            if projected {
                let rotation = Rotation::new(view.angles().euler());
                for info in &mut facelets {
                    let facelet = state.facelet(FaceletId(info.id));
                    info.projection = Some(project(prefs, &rotation, facelet, screen_width));
                }
                // Paint the farthest facelets first.
                facelets.sort_by(|a, b| {
                    let depth = |info: &FaceletInfo| info.projection.map_or(0.0, |p| p.depth);
                    depth(b).total_cmp(&depth(a))
                });
            }

            write_json_output(&facelets)
        }

        Subcommand::Apply { moves } => {
            let moves = parse_sequence(&moves.join(" ")).context("error parsing moves")?;
            let speed = prefs.turn_speed.normal;
            let mut state = CubeState::solved();
            for mv in moves {
                let turn = Turn::new(&state, mv);
                for frame in turn.frames(&state, speed) {
                    log::trace!("{mv}: {:.0}%", frame.progress() * 100.0);
                }
                turn.apply(&mut state, speed);
            }

            if is_solved(&state) {
                println!("solved");
            } else {
                let misplaced = misplaced_colors(&state);
                println!("not solved (misplaced: {})", misplaced.iter().join(", "));
            }
            Ok(())
        }

        Subcommand::Scramble { seed, min, max } => {
            let range = ScrambleRange::new(
                min.unwrap_or(prefs.scramble.min()),
                max.unwrap_or(prefs.scramble.max()),
            )
            .context("invalid scramble length")?;

            let mut sim = Simulation::new(prefs.turn_speed, prefs.view);
            let progress = ScrambleProgress::new();
            let (scramble, events) = match seed {
                Some(seed) => sim.scramble(&mut ChaCha12Rng::seed_from_u64(seed), range, &progress),
                None => sim.scramble(&mut rand::rng(), range, &progress),
            };
            for event in events {
                match event {
                    SimEvent::ScrambleProgressed(percent) => log::debug!("Scrambling... {percent}%"),
                    other => log::debug!("{other:?}"),
                }
            }

            println!("{scramble}");
            Ok(())
        }

        Subcommand::Faces { view } => {
            let angles = view.angles().euler();
            println!("closest: {}", closest_face(angles));
            println!("top: {}", top_face(angles));
            println!("left: {}", left_face(angles));
            for key in FaceKey::iter() {
                println!("{key} -> {}", key.resolve(angles, false));
            }
            Ok(())
        }

        Subcommand::Key { key, reverse, view } => {
            let mut sim = Simulation::new(prefs.turn_speed, prefs.view);
            sim.set_angles(view.angles());
            let (mv, _events) = sim.press_key(key, reverse);
            println!("{mv}");
            Ok(())
        }

        Subcommand::Prefs => {
            let yaml = prefs.to_yaml().context("error serializing preferences")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

#[derive(Serialize, Debug)]
struct FaceletInfo {
    id: u8,
    color: Color,
    rgb: Rgb,
    corners: [[i32; 3]; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    projection: Option<Projection>,
}

#[derive(Serialize, Debug, Copy, Clone)]
struct Projection {
    /// Average Z coordinate in world space. Larger is farther away.
    depth: Float,
    /// Window coordinates of each corner.
    screen: [[Float; 2]; 4],
}

fn project(
    prefs: &Preferences,
    rotation: &Rotation,
    facelet: &Facelet,
    screen_width: Float,
) -> Projection {
    let camera = &prefs.camera;
    let world = facelet
        .to_float()
        .map(|p| camera.world_point(p, rotation));
    let screen = world.map(|p| {
        let p = camera.to_screen(camera.project(p), screen_width);
        [p.x, p.y]
    });
    Projection {
        depth: world.iter().map(|p| p.z).sum::<Float>() / 4.0,
        screen,
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
