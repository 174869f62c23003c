use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CommandSpec, ProcessRunner, ProcessStatus};

/// Runs subprocesses with `std::process::Command`, inheriting stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(&self, spec: &CommandSpec) -> Result<ProcessStatus, AppError> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }

        debug!(command = %spec.display(), "spawning");
        let status = command.status().map_err(|e| AppError::ExternalToolError {
            tool: spec.display(),
            error: e.to_string(),
        })?;
        debug!(command = %spec.display(), code = ?status.code(), "finished");

        Ok(ProcessStatus { code: status.code() })
    }
}
