//! Error types for the strata library.
//!
//! This module provides the error hierarchy for all operations in the
//! strata library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a strata error.
///
/// # Examples
///
/// ```
/// use strata::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("files://test.json".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the strata library.
///
/// This enum encompasses all possible error conditions that can occur
/// while registering and resolving resources.
#[derive(Debug, Error)]
pub enum Error {
    /// A URI or path failed normalization.
    ///
    /// Raised for malformed input, most importantly `..` sequences that
    /// would escape above the search root.
    #[error("invalid uri '{uri}': {reason}")]
    InvalidUri {
        /// The offending URI or path.
        uri: String,
        /// The reason normalization rejected it.
        reason: String,
    },

    /// A query was made against a scheme with no registered stream.
    ///
    /// This is a configuration error, distinct from a resource that
    /// legitimately does not exist, and is never swallowed.
    #[error("scheme '{scheme}://' is not registered")]
    SchemeNotFound {
        /// The unregistered scheme.
        scheme: String,
    },

    /// A named location was looked up but never registered.
    #[error("location '{name}' is not registered")]
    LocationNotFound {
        /// The unregistered location name.
        name: String,
    },

    /// An attempt was made to register a reserved scheme.
    #[error("scheme '{scheme}' is reserved and cannot be registered")]
    RestrictedScheme {
        /// The reserved scheme.
        scheme: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a URI normalization failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::Error;
    ///
    /// let err = Error::InvalidUri {
    ///     uri: "files://../secret".to_string(),
    ///     reason: "escapes the root".to_string(),
    /// };
    /// assert!(err.is_invalid_uri());
    /// ```
    #[must_use]
    pub fn is_invalid_uri(&self) -> bool {
        matches!(self, Self::InvalidUri { .. })
    }

    /// Check if the error indicates an unregistered scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::Error;
    ///
    /// let err = Error::SchemeNotFound { scheme: "bogus".to_string() };
    /// assert!(err.is_scheme_not_found());
    /// ```
    #[must_use]
    pub fn is_scheme_not_found(&self) -> bool {
        matches!(self, Self::SchemeNotFound { .. })
    }
}
