//! Configuration, package and launcher generation steps.

use std::fs;

use minijinja::context;
use tracing::{info, warn};

use super::InstallState;
use super::system::REZ_CONFIG_FILE_VAR;
use crate::app::AppContext;
use crate::domain::{
    AppError, GeneratedFile, InstallStep, LauncherValues, PythonPackageValues, RezConfigValues,
    StepWarning,
};
use crate::ports::{CommandSpec, DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};

pub const LOCAL_PACKAGES_VAR: &str = "REZ_LOCAL_PACKAGES_PATH";
pub const RELEASE_PACKAGES_VAR: &str = "REZ_RELEASE_PACKAGES_PATH";

/// Packages bound from the host machine after the interpreter package is built.
const BOUND_PACKAGES: [&str; 3] = ["platform", "arch", "os"];

/// Write `rezconfig.py` and persist the variables pointing at it.
///
/// The local packages folder is created here so that the configured path
/// always names an existing directory.
pub fn write_config<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let local = state.layout.local_packages_dir();
    fs::create_dir_all(&local)?;

    let values = RezConfigValues {
        local_packages_path: local.display().to_string(),
        release_packages_path: state.release_path.clone(),
    };
    let config = state.layout.rezconfig_file();
    fs::write(&config, ctx.renderer().render(GeneratedFile::RezConfig, &values)?)?;
    info!(config = %config.display(), "wrote rez configuration");

    let env = ctx.environment();
    env.persist_user_var(REZ_CONFIG_FILE_VAR, &config.display().to_string())?;
    env.persist_user_var(LOCAL_PACKAGES_VAR, &values.local_packages_path)?;
    if let Some(release) = &values.release_packages_path {
        env.persist_user_var(RELEASE_PACKAGES_VAR, release)?;
    }
    Ok(())
}

/// Build the `python` package from the toolset interpreter and bind host packages.
///
/// Non-zero exits of rez commands are recorded as warnings; failing to write
/// the package files or to start a command aborts the step.
pub fn build_packages<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &mut InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let python_dir = state.layout.python_dir();
    let package = PythonPackageValues { version: ctx.settings().python.version.clone() };
    fs::write(
        python_dir.join(GeneratedFile::PythonPackage.file_name()),
        ctx.renderer().render(GeneratedFile::PythonPackage, &package)?,
    )?;
    fs::write(
        python_dir.join(GeneratedFile::PythonBuildScript.file_name()),
        ctx.renderer().render(GeneratedFile::PythonBuildScript, &context! {})?,
    )?;

    let build = CommandSpec::new(state.layout.rez_tool("rez-build")).arg("-i");
    let mut commands = vec![build.current_dir(&python_dir)];
    for package in BOUND_PACKAGES {
        commands.push(CommandSpec::new(state.layout.rez_tool("rez-bind")).arg(package));
    }

    for command in commands {
        let status = ctx.runner().run(&command)?;
        if !status.success() {
            let message = format!("'{}' exited with {:?}", command.display(), status.code);
            warn!("{}", message);
            state.warnings.push(StepWarning { step: InstallStep::BuildPackages.name(), message });
        }
    }
    Ok(())
}

pub fn write_launcher<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    fs::create_dir_all(state.layout.launchers_dir())?;
    let content = ctx.renderer().render(GeneratedFile::Launcher, &LauncherValues::default())?;
    fs::write(state.layout.launcher_file(), content)?;
    Ok(())
}
