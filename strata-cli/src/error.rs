//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors and providing appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use strata::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Semantic failure (resource not found, check failed) - exit code 1.
    SemanticFailure(String),

    /// Configuration file not found.
    NoConfig(PathBuf),

    /// I/O error.
    Io(std::io::Error),

    /// Library error (wrapped).
    Library(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (resource not found, check failed)
    /// - 2: Configuration file not found
    /// - 3: I/O error
    /// - 4: Other library error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::NoConfig(_) => 2,
            CliError::Io(_) => 3,
            CliError::Library(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
            CliError::NoConfig(path) => {
                write!(
                    f,
                    "Configuration file not found: {} (use --config or STRATA_CONFIG)",
                    path.display()
                )
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(e) => CliError::Io(e),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
