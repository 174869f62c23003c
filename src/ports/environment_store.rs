//! Environment variable and startup-command port.
//!
//! Every write to process or user environment state goes through this trait so
//! that installer steps can run against an in-memory store in tests.

use crate::domain::AppError;

pub trait EnvironmentStore {
    /// Read a variable from the current process environment.
    fn process_var(&self, name: &str) -> Option<String>;

    /// Set a variable for the current process only.
    fn set_process_var(&self, name: &str, value: &str);

    /// Persist a variable at user scope and set it for the current process.
    fn persist_user_var(&self, name: &str, value: &str) -> Result<(), AppError>;

    /// Read a persisted user-scope variable.
    fn user_var(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Current persisted user `Path` value (empty when unset).
    fn user_path(&self) -> Result<String, AppError>;

    /// Replace the persisted user `Path` value.
    fn set_user_path(&self, value: &str) -> Result<(), AppError>;

    /// Register a command to run at user logon under `name`, replacing any previous value.
    fn set_startup_command(&self, name: &str, command: &str) -> Result<(), AppError>;
}
