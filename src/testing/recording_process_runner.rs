use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::domain::AppError;
use crate::ports::{CommandSpec, ProcessRunner, ProcessStatus};

/// Process runner that records invocations instead of spawning anything.
///
/// Programs are matched by file stem, so `rez-build` matches `.../rez-build.exe`.
#[derive(Default)]
pub struct RecordingProcessRunner {
    pub commands: RefCell<Vec<CommandSpec>>,
    exit_codes: RefCell<HashMap<String, i32>>,
    unstartable: RefCell<HashSet<String>>,
}

impl RecordingProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with `code`.
    pub fn fail_program(&self, program: &str, code: i32) {
        self.exit_codes.borrow_mut().insert(program.to_string(), code);
    }

    /// Make `program` fail to start.
    pub fn unstartable(&self, program: &str) {
        self.unstartable.borrow_mut().insert(program.to_string());
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(CommandSpec::display).collect()
    }

    /// Invocations whose program stem is `program`.
    pub fn invocations_of(&self, program: &str) -> Vec<CommandSpec> {
        self.commands.borrow().iter().filter(|c| stem(c) == program).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }
}

fn stem(command: &CommandSpec) -> String {
    command
        .program
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<ProcessStatus, AppError> {
        let program = stem(command);
        if self.unstartable.borrow().contains(&program) {
            return Err(AppError::ExternalToolError {
                tool: command.display(),
                error: "program not found".into(),
            });
        }
        self.commands.borrow_mut().push(command.clone());
        let code = self.exit_codes.borrow().get(&program).copied().unwrap_or(0);
        Ok(ProcessStatus { code: Some(code) })
    }
}
