use std::path::PathBuf;

use super::steps::{InstallState, run_plan};
use crate::app::AppContext;
use crate::domain::{
    AppError, DriveLetter, InstallReport, InstallStep, InstallerSettings, ToolsetLayout,
};
use crate::ports::{DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};

/// Choices for a fresh installation.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Folder receiving the toolset folder.
    pub install_root: PathBuf,
    /// Release packages path; the settings fallback applies when `None`.
    pub release_path: Option<String>,
    pub remap_unit: Option<DriveLetter>,
    pub add_to_path: bool,
    /// Download the latest rez release (and the interpreter when no bundle exists).
    pub fetch_latest: bool,
    pub python_archive: Option<PathBuf>,
    pub rez_archive: Option<PathBuf>,
}

/// Execute the install command.
///
/// Not transactional: a failed run leaves whatever earlier steps produced,
/// and running again against the same root is the recovery path.
pub fn execute<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    options: InstallOptions,
) -> Result<InstallReport, AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let install_root = std::path::absolute(&options.install_root)?;
    let settings = ctx.settings();
    println!("Creating a new {} toolset in {}", settings.toolset_name, install_root.display());

    let mut state = InstallState::new(ToolsetLayout::for_install_root(&install_root, settings));
    state.release_path = resolve_release_path(options.release_path.as_deref(), settings);
    state.remap_unit = options.remap_unit;
    state.fetch_latest = options.fetch_latest;
    state.python_archive = options.python_archive;
    state.rez_archive = options.rez_archive;

    if let Some(unit) = state.remap_unit {
        println!("Local folder will be remapped to {} unit", unit);
    }
    if let Some(release) = &state.release_path {
        println!("Remote rez packages folder: {}", release);
    }

    run_plan(ctx, &mut state, &InstallStep::install_plan(options.add_to_path))
}

/// Explicit release path, else the settings fallback.
///
/// An explicit empty value disables the release path.
pub(crate) fn resolve_release_path(
    explicit: Option<&str>,
    settings: &InstallerSettings,
) -> Option<String> {
    match explicit {
        Some(path) if path.trim().is_empty() => None,
        Some(path) => Some(normalize_release_path(path)),
        None => settings.fallback_release_path().map(normalize_release_path),
    }
}

/// Trailing separators are dropped. A bare drive or filesystem root keeps a single `/`,
/// since a value ending in `\` cannot close a raw string in the rendered rezconfig.
fn normalize_release_path(path: &str) -> String {
    let stripped = path.trim().trim_end_matches(['/', '\\']);
    if stripped.is_empty() || stripped.ends_with(':') {
        format!("{}/", stripped)
    } else {
        stripped.to_string()
    }
}
