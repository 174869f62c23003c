use std::path::PathBuf;

use super::steps::{InstallState, run_plan};
use crate::app::AppContext;
use crate::domain::{AppError, DriveLetter, InstallReport, InstallStep, ToolsetLayout};
use crate::ports::{DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};

#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Archive produced by `pack`.
    pub archive: PathBuf,
    pub install_root: PathBuf,
    pub remap_unit: Option<DriveLetter>,
}

/// Unpack a redistributable toolset below `install_root` and register it.
pub fn execute<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    options: DeployOptions,
) -> Result<InstallReport, AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let archive = std::path::absolute(&options.archive)?;
    if !archive.is_file() {
        return Err(AppError::PayloadMissing(archive.display().to_string()));
    }
    let install_root = std::path::absolute(&options.install_root)?;
    println!("Unpack {} to {}", archive.display(), install_root.display());

    let mut state =
        InstallState::new(ToolsetLayout::for_install_root(&install_root, ctx.settings()));
    state.remap_unit = options.remap_unit;
    state.redist_archive = Some(archive);

    run_plan(ctx, &mut state, &InstallStep::deploy_plan())
}
