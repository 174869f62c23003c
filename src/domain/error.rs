use std::io;

use thiserror::Error;

/// Library-wide error type for rezgo operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Drive letter given for remapping is not a single ASCII letter.
    #[error("Invalid drive letter '{0}': must be a single letter from A to Z")]
    InvalidDriveLetter(String),

    /// No toolset installation found at the expected location.
    #[error("No toolset found at {0}")]
    ToolsetNotFound(String),

    /// A bundled payload archive is missing.
    #[error("Payload not found: {0}")]
    PayloadMissing(String),

    /// The release packages path does not exist and could not be created.
    #[error("Release packages path '{path}' is unavailable: {details}")]
    ReleasePathUnavailable { path: String, details: String },

    /// An external program could not be started or reported failure.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// HTTP request or response failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Archive could not be read or written.
    #[error("Archive error for '{path}': {details}")]
    Archive { path: String, details: String },

    /// Embedded template could not be loaded or rendered.
    #[error("Template error in '{name}': {details}")]
    Template { name: String, details: String },

    /// Persistent user environment (registry) failure.
    #[error("Registry error: {0}")]
    Registry(String),

    /// Interactive prompt failed or was aborted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A fatal installation step failed.
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn archive<P: AsRef<std::path::Path>>(path: P, details: impl ToString) -> Self {
        AppError::Archive { path: path.as_ref().display().to_string(), details: details.to_string() }
    }

    /// Process exit code for this error class.
    ///
    /// Step failures report the code of the error that aborted the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::StepFailed { source, .. } => source.exit_code(),
            AppError::Configuration(_)
            | AppError::InvalidDriveLetter(_)
            | AppError::TomlParseError(_)
            | AppError::Prompt(_) => 2,
            AppError::ToolsetNotFound(_) | AppError::PayloadMissing(_) => 3,
            AppError::Io(_) | AppError::Archive { .. } | AppError::ReleasePathUnavailable { .. } => 4,
            AppError::ExternalToolError { .. } => 5,
            AppError::Http(_) => 6,
            AppError::Template { .. } | AppError::Registry(_) => 1,
        }
    }
}
