//! Installer steps and the driver applying their failure policy.

mod acquire;
mod configure;
mod system;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, DriveLetter, InstallReport, InstallStep, StepPolicy, StepWarning, ToolsetLayout,
};
use crate::ports::{DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};

/// Values threaded through the steps of one run.
#[derive(Debug, Clone)]
pub struct InstallState {
    /// Current layout; re-rooted when a drive remap takes effect.
    pub layout: ToolsetLayout,
    /// Release packages path, already resolved against the settings fallback.
    pub release_path: Option<String>,
    pub remap_unit: Option<DriveLetter>,
    pub fetch_latest: bool,
    /// Interpreter archive overriding the bundled one.
    pub python_archive: Option<PathBuf>,
    /// Rez source archive overriding the bundled one.
    pub rez_archive: Option<PathBuf>,
    /// Redistributable archive unpacked by `deploy`.
    pub redist_archive: Option<PathBuf>,
    /// Folder holding `install.py` once the tool is extracted.
    pub tool_source: Option<PathBuf>,
    /// Archive downloaded during this run, removed on cleanup.
    pub downloaded_archive: Option<PathBuf>,
    pub rez_release: Option<String>,
    pub warnings: Vec<StepWarning>,
}

impl InstallState {
    pub fn new(layout: ToolsetLayout) -> Self {
        Self {
            layout,
            release_path: None,
            remap_unit: None,
            fetch_latest: false,
            python_archive: None,
            rez_archive: None,
            redist_archive: None,
            tool_source: None,
            downloaded_archive: None,
            rez_release: None,
            warnings: Vec::new(),
        }
    }
}

/// Run `plan` in order.
///
/// A fatal step failure aborts the run as [`AppError::StepFailed`]; a
/// best-effort failure is logged and recorded in the report.
pub fn run_plan<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &mut InstallState,
    plan: &[InstallStep],
) -> Result<InstallReport, AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let mut completed = Vec::with_capacity(plan.len());

    for &step in plan {
        info!(step = step.name(), "running step");
        match run_step(ctx, state, step) {
            Ok(()) => completed.push(step.name()),
            Err(e) => match step.policy() {
                StepPolicy::Fatal => {
                    return Err(AppError::StepFailed { step: step.name(), source: Box::new(e) });
                }
                StepPolicy::BestEffort => {
                    warn!(step = step.name(), error = %e, "step failed, continuing");
                    state.warnings.push(StepWarning { step: step.name(), message: e.to_string() });
                }
            },
        }
    }

    Ok(InstallReport {
        toolset_root: state.layout.root().to_path_buf(),
        core_dir: state.layout.core(),
        rez_release: state.rez_release.clone(),
        completed,
        warnings: std::mem::take(&mut state.warnings),
    })
}

fn run_step<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &mut InstallState,
    step: InstallStep,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    match step {
        InstallStep::PrepareRoot => system::prepare_root(state),
        InstallStep::RemapDrive => system::remap_drive(ctx, state),
        InstallStep::EnsureReleasePath => system::ensure_release_path(state),
        InstallStep::AcquireInterpreter => acquire::acquire_interpreter(ctx, state),
        InstallStep::RemoveInstalledTool => acquire::remove_installed_tool(state),
        InstallStep::AcquireTool => acquire::acquire_tool(ctx, state),
        InstallStep::RunToolInstaller => acquire::run_tool_installer(ctx, state),
        InstallStep::AddToPath => system::add_to_path(ctx, state),
        InstallStep::WriteConfig => configure::write_config(ctx, state),
        InstallStep::BuildPackages => configure::build_packages(ctx, state),
        InstallStep::CleanupTemp => acquire::cleanup_temp(state),
        InstallStep::WriteLauncher => configure::write_launcher(ctx, state),
        InstallStep::ExtractRedistributable => acquire::extract_redistributable(state),
        InstallStep::PersistConfigVar => system::persist_config_var(ctx, state),
        InstallStep::PersistToolsetVar => system::persist_toolset_var(ctx, state),
    }
}
