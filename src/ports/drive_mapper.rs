//! Virtual drive remapping port.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, DriveLetter};

pub trait DriveMapper {
    /// Whether `letter` is not bound to any volume or mapping.
    fn is_free(&self, letter: DriveLetter) -> bool;

    /// Bind `letter` to `target` for the current session.
    ///
    /// Returns the root path under which `target` is now reachable.
    fn map(&self, letter: DriveLetter, target: &Path) -> Result<PathBuf, AppError>;

    /// Command that re-establishes the binding, suitable for a startup entry.
    fn startup_command(&self, letter: DriveLetter, target: &Path) -> String {
        format!("subst {} {}", letter.device(), target.display())
    }
}
