//! User environment backed by `HKEY_CURRENT_USER`.

use std::env;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::EnvironmentStore;

const ENVIRONMENT_KEY: &str = "Environment";
const RUN_KEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Run";
const PATH_VALUE: &str = "Path";

/// Environment store writing persisted values to the user registry hive.
///
/// Process-scope values go to the current process environment. On platforms
/// without a registry, persisted operations fail with [`AppError::Registry`].
#[derive(Debug, Clone, Default)]
pub struct RegistryEnvironment;

impl RegistryEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentStore for RegistryEnvironment {
    fn process_var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn set_process_var(&self, name: &str, value: &str) {
        // SAFETY: the installer is single-threaded; no other thread reads the environment.
        unsafe {
            env::set_var(name, value);
        }
    }

    fn persist_user_var(&self, name: &str, value: &str) -> Result<(), AppError> {
        hive::set_string(ENVIRONMENT_KEY, name, value)?;
        self.set_process_var(name, value);
        debug!(name, value, "persisted user variable");
        Ok(())
    }

    fn user_var(&self, name: &str) -> Result<Option<String>, AppError> {
        hive::get_string(ENVIRONMENT_KEY, name)
    }

    fn user_path(&self) -> Result<String, AppError> {
        Ok(hive::get_string(ENVIRONMENT_KEY, PATH_VALUE)?.unwrap_or_default())
    }

    fn set_user_path(&self, value: &str) -> Result<(), AppError> {
        hive::set_expand_string(ENVIRONMENT_KEY, PATH_VALUE, value)
    }

    fn set_startup_command(&self, name: &str, command: &str) -> Result<(), AppError> {
        hive::delete_value(RUN_KEY, name)?;
        hive::set_string(RUN_KEY, name, command)
    }
}

#[cfg(windows)]
mod hive {
    use std::io;

    use winreg::enums::{HKEY_CURRENT_USER, RegType};
    use winreg::{RegKey, RegValue};

    use crate::domain::AppError;

    fn open(path: &str) -> Result<RegKey, AppError> {
        RegKey::predef(HKEY_CURRENT_USER)
            .create_subkey(path)
            .map(|(key, _)| key)
            .map_err(|e| AppError::Registry(format!("Failed to open HKCU\\{}: {}", path, e)))
    }

    pub fn get_string(path: &str, name: &str) -> Result<Option<String>, AppError> {
        match open(path)?.get_value::<String, _>(name) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Registry(format!("Failed to read {}: {}", name, e))),
        }
    }

    pub fn set_string(path: &str, name: &str, value: &str) -> Result<(), AppError> {
        open(path)?
            .set_value(name, &value.to_string())
            .map_err(|e| AppError::Registry(format!("Failed to write {}: {}", name, e)))
    }

    pub fn set_expand_string(path: &str, name: &str, value: &str) -> Result<(), AppError> {
        let bytes = value
            .encode_utf16()
            .chain(std::iter::once(0))
            .flat_map(|unit| unit.to_le_bytes())
            .collect();
        let raw = RegValue { bytes, vtype: RegType::REG_EXPAND_SZ };
        open(path)?
            .set_raw_value(name, &raw)
            .map_err(|e| AppError::Registry(format!("Failed to write {}: {}", name, e)))
    }

    pub fn delete_value(path: &str, name: &str) -> Result<(), AppError> {
        match open(path)?.delete_value(name) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Registry(format!("Failed to delete {}: {}", name, e))),
        }
    }
}

#[cfg(not(windows))]
mod hive {
    use crate::domain::AppError;

    fn unsupported() -> AppError {
        AppError::Registry("persistent user environment is only available on Windows".into())
    }

    pub fn get_string(_path: &str, _name: &str) -> Result<Option<String>, AppError> {
        Err(unsupported())
    }

    pub fn set_string(_path: &str, _name: &str, _value: &str) -> Result<(), AppError> {
        Err(unsupported())
    }

    pub fn set_expand_string(_path: &str, _name: &str, _value: &str) -> Result<(), AppError> {
        Err(unsupported())
    }

    pub fn delete_value(_path: &str, _name: &str) -> Result<(), AppError> {
        Err(unsupported())
    }
}
