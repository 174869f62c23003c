use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::EnvironmentStore;

/// In-memory environment store for testing.
#[derive(Default)]
pub struct MemoryEnvironment {
    pub process: RefCell<BTreeMap<String, String>>,
    pub user: RefCell<BTreeMap<String, String>>,
    pub path: RefCell<String>,
    pub startup: RefCell<BTreeMap<String, String>>,
    pub fail_path_update: RefCell<bool>,
    pub fail_startup: RefCell<bool>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(self, value: &str) -> Self {
        *self.path.borrow_mut() = value.to_string();
        self
    }

    pub fn with_user_var(self, name: &str, value: &str) -> Self {
        self.user.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_process_var(self, name: &str, value: &str) -> Self {
        self.process.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }

    pub fn persisted(&self, name: &str) -> Option<String> {
        self.user.borrow().get(name).cloned()
    }

    pub fn process_value(&self, name: &str) -> Option<String> {
        self.process.borrow().get(name).cloned()
    }
}

impl EnvironmentStore for MemoryEnvironment {
    fn process_var(&self, name: &str) -> Option<String> {
        self.process_value(name)
    }

    fn set_process_var(&self, name: &str, value: &str) {
        self.process.borrow_mut().insert(name.to_string(), value.to_string());
    }

    fn persist_user_var(&self, name: &str, value: &str) -> Result<(), AppError> {
        self.user.borrow_mut().insert(name.to_string(), value.to_string());
        self.set_process_var(name, value);
        Ok(())
    }

    fn user_var(&self, name: &str) -> Result<Option<String>, AppError> {
        Ok(self.persisted(name))
    }

    fn user_path(&self) -> Result<String, AppError> {
        Ok(self.path.borrow().clone())
    }

    fn set_user_path(&self, value: &str) -> Result<(), AppError> {
        if *self.fail_path_update.borrow() {
            return Err(AppError::Registry("access denied".into()));
        }
        *self.path.borrow_mut() = value.to_string();
        Ok(())
    }

    fn set_startup_command(&self, name: &str, command: &str) -> Result<(), AppError> {
        if *self.fail_startup.borrow() {
            return Err(AppError::Registry("access denied".into()));
        }
        self.startup.borrow_mut().insert(name.to_string(), command.to_string());
        Ok(())
    }
}
