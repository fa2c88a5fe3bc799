//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("Course number {0} not found.")]
    CourseNotFound(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::CourseNotFound(_) => exitcode::DATAERR,
            CliError::Application(e) => match e {
                ApplicationError::SourceNotFound(_) => exitcode::NOINPUT,
                ApplicationError::Io(_) => exitcode::IOERR,
                ApplicationError::Config { .. } => exitcode::CONFIG,
            },
        }
    }
}
