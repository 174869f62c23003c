use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DriveLetter};
use crate::ports::DriveMapper;

/// Drive mapper that "maps" a letter onto a configured directory.
pub struct FakeDriveMapper {
    /// Root returned by a successful mapping.
    pub mapped_root: PathBuf,
    pub taken: RefCell<Vec<char>>,
    pub fail: RefCell<bool>,
    pub mappings: RefCell<Vec<(char, PathBuf)>>,
}

impl FakeDriveMapper {
    pub fn new(mapped_root: impl Into<PathBuf>) -> Self {
        Self {
            mapped_root: mapped_root.into(),
            taken: RefCell::new(Vec::new()),
            fail: RefCell::new(false),
            mappings: RefCell::new(Vec::new()),
        }
    }

    pub fn with_taken(self, letter: char) -> Self {
        self.taken.borrow_mut().push(letter);
        self
    }

    pub fn failing(self) -> Self {
        *self.fail.borrow_mut() = true;
        self
    }
}

impl DriveMapper for FakeDriveMapper {
    fn is_free(&self, letter: DriveLetter) -> bool {
        !self.taken.borrow().contains(&letter.as_char())
    }

    fn map(&self, letter: DriveLetter, target: &Path) -> Result<PathBuf, AppError> {
        if *self.fail.borrow() {
            return Err(AppError::ExternalToolError {
                tool: "subst".into(),
                error: "Invalid parameter".into(),
            });
        }
        self.mappings.borrow_mut().push((letter.as_char(), target.to_path_buf()));
        Ok(self.mapped_root.clone())
    }
}
