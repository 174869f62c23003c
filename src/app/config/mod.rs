//! Installer settings loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, InstallerSettings};

/// Settings file looked up next to the executable.
pub const SETTINGS_FILE: &str = "rezgo.toml";

/// Settings plus the directory relative paths are resolved against.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: InstallerSettings,
    pub base_dir: PathBuf,
}

impl LoadedSettings {
    /// Bundled payload folder.
    pub fn payload_dir(&self) -> PathBuf {
        self.base_dir.join(&self.settings.payload_dir)
    }
}

/// Load settings from `explicit`, else `rezgo.toml` beside the executable, else defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<LoadedSettings, AppError> {
    let exe_dir = executable_dir()?;
    match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            load_from(path, exe_dir)
        }
        None => {
            let candidate = exe_dir.join(SETTINGS_FILE);
            if candidate.is_file() {
                load_from(&candidate, exe_dir)
            } else {
                debug!("no {} next to executable, using defaults", SETTINGS_FILE);
                Ok(LoadedSettings { settings: InstallerSettings::default(), base_dir: exe_dir })
            }
        }
    }
}

fn load_from(path: &Path, base_dir: PathBuf) -> Result<LoadedSettings, AppError> {
    let content = fs::read_to_string(path)?;
    let settings = InstallerSettings::parse(&content).map_err(|e| match e {
        AppError::TomlParseError(inner) => AppError::config_error(format!(
            "Invalid settings file {}: {}",
            path.display(),
            inner
        )),
        other => other,
    })?;
    debug!(path = %path.display(), "loaded settings");
    Ok(LoadedSettings { settings, base_dir })
}

fn executable_dir() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AppError::config_error(format!("Executable has no parent directory: {}", exe.display()))
    })
}
