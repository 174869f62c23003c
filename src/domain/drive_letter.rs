use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Validated drive letter used for `subst` remapping.
///
/// Always stored upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriveLetter(char);

impl DriveLetter {
    pub fn new(value: &str) -> Result<Self, AppError> {
        let trimmed = value.trim().trim_end_matches(':');
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c.to_ascii_uppercase())),
            _ => Err(AppError::InvalidDriveLetter(value.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// `T:`
    pub fn device(self) -> String {
        format!("{}:", self.0)
    }

    /// `T:\`
    pub fn root(self) -> String {
        format!("{}:\\", self.0)
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DriveLetter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
