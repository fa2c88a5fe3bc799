//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading a catalog or resolving settings.
///
/// The index itself never fails; everything here belongs to the
/// plumbing around it.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("catalog source not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
