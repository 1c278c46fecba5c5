//! Locations of files read by Virtual Cube.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "virtual-cube-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PATHS: Option<AppPaths> = app_paths();
}

/// Paths to external files read by Virtual Cube.
struct AppPaths {
    /// Path to the user preferences file.
    prefs_file: PathBuf,
}

/// Returns the user preferences file in the platform configuration directory.
pub(crate) fn prefs_file() -> Result<&'static Path> {
    let paths = PATHS.as_ref().ok_or_eyre("no configuration directory")?;
    Ok(&paths.prefs_file)
}

fn app_paths() -> Option<AppPaths> {
    match ProjectDirs::from("", "", "Virtual Cube") {
        Some(dirs) => Some(AppPaths {
            prefs_file: dirs
                .config_dir()
                .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
        }),
        None => {
            log::error!("Error getting configuration directory");
            None
        }
    }
}
