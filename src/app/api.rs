//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::{deploy, install, pack, update};
use crate::app::config::load_settings;
use crate::services::{
    CommandProcessRunner, HttpReleaseClient, RegistryEnvironment, SubstDriveMapper,
};

pub use crate::app::commands::deploy::DeployOptions;
pub use crate::app::commands::install::InstallOptions;
pub use crate::app::commands::pack::PackOutcome;
pub use crate::app::commands::update::UpdateOptions;
pub use crate::domain::{AppError, DriveLetter, InstallReport, InstallerSettings, StepWarning};

type SystemContext = AppContext<
    RegistryEnvironment,
    SubstDriveMapper<CommandProcessRunner>,
    CommandProcessRunner,
    HttpReleaseClient,
>;

/// Create an `AppContext` backed by the host system.
fn create_context(config: Option<&Path>) -> Result<SystemContext, AppError> {
    let loaded = load_settings(config)?;
    let payload_dir = loaded.payload_dir();
    AppContext::new(
        RegistryEnvironment::new(),
        SubstDriveMapper::new(CommandProcessRunner::new()),
        CommandProcessRunner::new(),
        HttpReleaseClient::from_env()?,
        loaded.settings,
        payload_dir,
    )
}

/// Effective installer settings for `config`.
pub fn settings(config: Option<&Path>) -> Result<InstallerSettings, AppError> {
    Ok(load_settings(config)?.settings)
}

/// Install a new toolset.
pub fn install(config: Option<&Path>, options: InstallOptions) -> Result<InstallReport, AppError> {
    let ctx = create_context(config)?;
    install::execute(&ctx, options)
}

/// Replace rez inside an existing toolset.
pub fn update(config: Option<&Path>, options: UpdateOptions) -> Result<InstallReport, AppError> {
    let ctx = create_context(config)?;
    update::execute(&ctx, options)
}

/// Pack a toolset's core folder into its redistributable archive.
pub fn pack(config: Option<&Path>, toolset_root: &Path) -> Result<PackOutcome, AppError> {
    let loaded = load_settings(config)?;
    pack::execute(&loaded.settings, toolset_root)
}

/// Unpack a redistributable archive as a new toolset.
pub fn deploy(config: Option<&Path>, options: DeployOptions) -> Result<InstallReport, AppError> {
    let ctx = create_context(config)?;
    deploy::execute(&ctx, options)
}
