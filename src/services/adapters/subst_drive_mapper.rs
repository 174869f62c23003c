use std::path::{Path, PathBuf};

use crate::domain::{AppError, DriveLetter};
use crate::ports::{CommandSpec, DriveMapper, ProcessRunner};

/// Drive mapper shelling out to `subst`.
#[derive(Debug, Clone)]
pub struct SubstDriveMapper<P: ProcessRunner> {
    runner: P,
}

impl<P: ProcessRunner> SubstDriveMapper<P> {
    pub fn new(runner: P) -> Self {
        Self { runner }
    }
}

impl<P: ProcessRunner> DriveMapper for SubstDriveMapper<P> {
    fn is_free(&self, letter: DriveLetter) -> bool {
        !Path::new(&letter.root()).exists()
    }

    fn map(&self, letter: DriveLetter, target: &Path) -> Result<PathBuf, AppError> {
        let command = CommandSpec::new("subst").arg(letter.device()).path_arg(target);
        let status = self.runner.run(&command)?;
        if !status.success() {
            return Err(AppError::ExternalToolError {
                tool: "subst".to_string(),
                error: format!("'{}' exited with {:?}", command.display(), status.code),
            });
        }
        Ok(PathBuf::from(letter.root()))
    }
}
