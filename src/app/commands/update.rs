use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::install::resolve_release_path;
use super::steps::{InstallState, run_plan};
use crate::app::AppContext;
use crate::domain::{AppError, InstallReport, InstallStep, RezConfigValues, ToolsetLayout};
use crate::ports::{DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Toolset root; the persisted toolset variable is used when `None`.
    pub toolset_root: Option<PathBuf>,
    /// Release packages path; kept from the current configuration when `None`.
    pub release_path: Option<String>,
    pub fetch_latest: bool,
    pub rez_archive: Option<PathBuf>,
}

/// Replace the installed rez of an existing toolset, keeping its interpreter.
pub fn execute<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    options: UpdateOptions,
) -> Result<InstallReport, AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let root = locate_toolset(ctx, options.toolset_root)?;
    let layout = ToolsetLayout::at(root, ctx.settings());
    if !layout.python_dir().is_dir() {
        return Err(AppError::ToolsetNotFound(layout.root().display().to_string()));
    }
    println!("Toolset installation detected in {}", layout.root().display());

    let release_path = match options.release_path {
        Some(explicit) => resolve_release_path(Some(&explicit), ctx.settings()),
        None => match configured_release_path(&layout) {
            Some(existing) => Some(existing),
            None => resolve_release_path(None, ctx.settings()),
        },
    };

    let mut state = InstallState::new(layout);
    state.release_path = release_path;
    state.fetch_latest = options.fetch_latest;
    state.rez_archive = options.rez_archive;

    run_plan(ctx, &mut state, &InstallStep::update_plan())
}

fn locate_toolset<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    explicit: Option<PathBuf>,
) -> Result<PathBuf, AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    if let Some(root) = explicit {
        return Ok(std::path::absolute(root)?);
    }

    let name = ctx.settings().toolset_env_var();
    if let Some(value) = ctx.environment().process_var(&name).filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(value));
    }
    match ctx.environment().user_var(&name) {
        Ok(Some(value)) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        Ok(_) => Err(AppError::ToolsetNotFound(format!("%{}%", name))),
        Err(e) => {
            debug!(error = %e, "could not read persisted toolset variable");
            Err(AppError::ToolsetNotFound(format!("%{}%", name)))
        }
    }
}

/// Release path recorded in the current `rezconfig.py`, read before rez is removed.
fn configured_release_path(layout: &ToolsetLayout) -> Option<String> {
    let content = fs::read_to_string(layout.rezconfig_file()).ok()?;
    RezConfigValues::parse(&content)?.release_packages_path
}
