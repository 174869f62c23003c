//! rezgo: bootstrap a portable rez toolset on a Windows workstation.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeployOptions, InstallOptions, PackOutcome, UpdateOptions, deploy, install, pack, update,
};
pub use domain::{AppError, DriveLetter, InstallReport, InstallerSettings, StepWarning};
