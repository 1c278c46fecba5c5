//! User preferences.
//!
//! Preferences are layered: the built-in defaults, then the user preferences
//! file, then environment variables such as `VIRTUAL_CUBE_TURN_SPEED__NORMAL`.

use std::path::{Path, PathBuf};

use cube_core::{Palette, ScrambleRange, TurnSpeeds, ViewSettings};
use cubemath::projection::Camera;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "VIRTUAL_CUBE";

lazy_static! {
    pub(crate) static ref DEFAULT_PREFS: Preferences = serde_norway::from_str(DEFAULT_PREFS_STR)
        .unwrap_or_else(|e| {
            log::error!("Error loading default preferences: {e}");
            Preferences::default()
        });
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct Preferences {
    pub turn_speed: TurnSpeeds,
    pub scramble: ScrambleRange,
    pub view: ViewSettings,
    pub camera: Camera,
    pub colors: Palette,
}

/// Error produced when preferences cannot be loaded.
#[derive(Error, Debug)]
pub(crate) enum PrefsError {
    #[error("preferences file {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("invalid preferences: {0}")]
    Config(#[from] config::ConfigError),
}

impl Preferences {
    /// Loads preferences from `user_file`, or from the user preferences file
    /// in the configuration directory if `user_file` is `None`.
    ///
    /// A missing preferences file in the configuration directory is not an
    /// error, but an invalid one is.
    pub fn load(user_file: Option<&Path>) -> Result<Self, PrefsError> {
        Self::load_with_env(user_file, None)
    }

    /// Same as [`Preferences::load()`], but reads environment variables from
    /// `env` instead of the process environment if it is `Some`.
    pub fn load_with_env(
        user_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, PrefsError> {
        lazy_static::initialize(&DEFAULT_PREFS);

        // Load default preferences.
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        // Load user preferences.
        match user_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(PrefsError::Missing(path.to_owned()));
                }
                log::debug!("Loading preferences from {}", path.display());
                config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
            }
            None => match crate::paths::prefs_file() {
                Ok(path) => {
                    log::debug!("Loading preferences from {}", path.display());
                    config = config.add_source(
                        config::File::from(path)
                            .format(PREFS_FILE_FORMAT)
                            .required(false),
                    );
                }
                Err(e) => log::warn!("Error locating user preferences: {e}"),
            },
        }

        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        Ok(config.build()?.try_deserialize()?)
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_norway::Error> {
        serde_norway::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cube_core::{Color, Rgb, TurnSpeed, view::ResetStyle};
    use pretty_assertions::assert_eq;

    use super::*;

    fn prefs_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_prefs_match_code_defaults() {
        assert_eq!(*DEFAULT_PREFS, Preferences::default());
    }

    #[test]
    fn test_user_prefs_override_defaults() {
        let file = prefs_file(
            "turn_speed:\n  normal: 10\nview:\n  reset: glide\ncolors:\n  red: '#f00'\n",
        );
        let prefs = Preferences::load_with_env(Some(file.path()), Some(Default::default())).unwrap();

        assert_eq!(prefs.turn_speed.normal, TurnSpeed::new(10.0).unwrap());
        assert_eq!(prefs.turn_speed.normal.steps(), 9);
        assert_eq!(prefs.turn_speed.scramble, TurnSpeed::SCRAMBLE);
        assert_eq!(prefs.view.reset, ResetStyle::Glide);
        assert_eq!(prefs.colors.get(Color::Red), Rgb::new(255, 0, 0));
        assert_eq!(prefs.colors.get(Color::Blue), Palette::default().blue);
        assert_eq!(prefs.scramble, ScrambleRange::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = prefs_file("scramble:\n  min: 5\n  max: 10\n");
        let env = [("VIRTUAL_CUBE_SCRAMBLE__MAX".to_owned(), "8".to_owned())]
            .into_iter()
            .collect();
        let prefs = Preferences::load_with_env(Some(file.path()), Some(env)).unwrap();
        assert_eq!(prefs.scramble, ScrambleRange::new(5, 8).unwrap());
    }

    #[test]
    fn test_invalid_prefs() {
        for contents in [
            "turn_speed:\n  normal: 0\n",
            "turn_speed:\n  scramble: 120\n",
            "scramble:\n  min: 31\n",
            "colors:\n  red: not a color\n",
        ] {
            let file = prefs_file(contents);
            let result = Preferences::load_with_env(Some(file.path()), Some(Default::default()));
            assert!(matches!(result, Err(PrefsError::Config(_))), "{contents:?}");
        }
    }

    #[test]
    fn test_missing_prefs_file() {
        let path = Path::new("/nonexistent/virtual-cube-prefs.yaml");
        assert!(matches!(
            Preferences::load_with_env(Some(path), Some(Default::default())),
            Err(PrefsError::Missing(_)),
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = DEFAULT_PREFS.to_yaml().unwrap();
        let prefs: Preferences = serde_norway::from_str(&yaml).unwrap();
        assert_eq!(prefs, *DEFAULT_PREFS);
    }
}
