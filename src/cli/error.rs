//! Errors that end a menu session.

use thiserror::Error;

use crate::cli::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// A tree operation failed.
    #[error("{0}")]
    Tree(#[from] crate::Error),

    /// Reading input or writing output failed.
    #[error("cannot talk to the console: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Tree(_) => exitcode::SOFTWARE,
            Self::Io(_) => exitcode::IOERR,
        }
    }
}
