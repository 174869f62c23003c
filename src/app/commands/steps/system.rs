use std::fs;

use tracing::{debug, info};

use super::InstallState;
use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::path_entries::append_entry;
use crate::ports::{DriveMapper, EnvironmentStore, ProcessRunner, ReleaseSource};

pub const REZ_CONFIG_FILE_VAR: &str = "REZ_CONFIG_FILE";

pub fn prepare_root(state: &InstallState) -> Result<(), AppError> {
    let root = state.layout.root();
    if !root.exists() {
        fs::create_dir_all(root)?;
        info!(root = %root.display(), "created toolset root");
    }
    Ok(())
}

/// Bind the remap unit to the toolset root and persist the binding.
///
/// The layout is re-rooted only once both the session mapping and the
/// startup entry are in place.
pub fn remap_drive<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &mut InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let Some(letter) = state.remap_unit else {
        return Ok(());
    };
    if !ctx.drives().is_free(letter) {
        return Err(AppError::config_error(format!("Drive {} is already in use", letter.device())));
    }

    let target = state.layout.root().to_path_buf();
    let mapped_root = ctx.drives().map(letter, &target)?;
    let command = ctx.drives().startup_command(letter, &target);
    ctx.environment().set_startup_command(&ctx.settings().remap_value_name(), &command)?;

    println!("{} is remapped to {} unit", target.display(), letter);
    state.layout = state.layout.rebased(mapped_root);
    Ok(())
}

pub fn ensure_release_path(state: &InstallState) -> Result<(), AppError> {
    let Some(path) = state.release_path.as_deref() else {
        debug!("no release packages path configured");
        return Ok(());
    };
    fs::create_dir_all(path).map_err(|e| AppError::ReleasePathUnavailable {
        path: path.to_string(),
        details: e.to_string(),
    })
}

pub fn add_to_path<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let entry = state.layout.rez_bin_dir().display().to_string();
    let current = ctx.environment().user_path()?;
    match append_entry(&current, &entry) {
        Some(updated) => {
            ctx.environment().set_user_path(&updated)?;
            info!(entry, "added rez to user Path");
        }
        None => debug!(entry, "user Path already contains rez"),
    }
    Ok(())
}

/// Persist `REZ_CONFIG_FILE` for an unpacked toolset that ships a configuration.
pub fn persist_config_var<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let config = state.layout.rezconfig_file();
    if !config.is_file() {
        debug!(config = %config.display(), "toolset ships no rez configuration");
        return Ok(());
    }
    ctx.environment().persist_user_var(REZ_CONFIG_FILE_VAR, &config.display().to_string())
}

pub fn persist_toolset_var<E, D, P, R>(
    ctx: &AppContext<E, D, P, R>,
    state: &InstallState,
) -> Result<(), AppError>
where
    E: EnvironmentStore,
    D: DriveMapper,
    P: ProcessRunner,
    R: ReleaseSource,
{
    let name = ctx.settings().toolset_env_var();
    ctx.environment().persist_user_var(&name, &state.layout.root().display().to_string())
}
