//! Stream definitions.
//!
//! A stream maps a URI scheme (plus an optional path prefix) to a base
//! directory searched when resolving that scheme.

use crate::error::Result;
use crate::uri::normalize_path;

/// A registered mapping from a scheme to a base directory.
///
/// The path is relative to each location's path unless the stream is
/// shared, in which case it is an independent search root that bypasses the
/// location tiers entirely.
///
/// Streams are immutable once constructed; the path is normalized with a
/// trailing `/` at construction time.
///
/// # Examples
///
/// ```
/// use strata::Stream;
///
/// // Path defaults to the scheme name
/// let stream = Stream::new("files", "", None, false).unwrap();
/// assert_eq!(stream.path(), "files/");
///
/// // Shared streams ignore locations
/// let stream = Stream::new("upload", "", Some("upload/data"), true).unwrap();
/// assert!(stream.is_shared());
/// assert_eq!(stream.path(), "upload/data/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    scheme: String,
    prefix: String,
    path: String,
    shared: bool,
}

impl Stream {
    /// Creates a new stream definition.
    ///
    /// When `path` is `None`, the scheme name is used as the path. Only
    /// URIs whose path begins with `prefix` match this stream; an empty
    /// prefix matches every URI of the scheme.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUri`] if the path cannot be
    /// normalized.
    pub fn new(scheme: &str, prefix: &str, path: Option<&str>, shared: bool) -> Result<Self> {
        let path = normalize_path(path.unwrap_or(scheme))?;

        Ok(Self {
            scheme: scheme.to_string(),
            prefix: prefix.to_string(),
            path,
            shared,
        })
    }

    /// The scheme this stream serves, the part before `://`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The path prefix narrowing which URIs this stream handles.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The base directory, normalized with a trailing `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this stream is an independent search root.
    ///
    /// Shared streams are never combined with location paths.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_path_defaults_to_scheme() {
        let stream = Stream::new("cars", "", None, false).unwrap();
        assert_eq!(stream.scheme(), "cars");
        assert_eq!(stream.prefix(), "");
        assert_eq!(stream.path(), "cars/");
        assert!(!stream.is_shared());
    }

    #[test]
    fn test_stream_path_is_normalized() {
        let stream = Stream::new("files", "", Some("Garage\\cars"), true).unwrap();
        assert_eq!(stream.path(), "Garage/cars/");

        let stream = Stream::new("files", "", Some("a/b/../c///"), false).unwrap();
        assert_eq!(stream.path(), "a/c/");
    }

    #[test]
    fn test_stream_with_prefix() {
        let stream = Stream::new("files", "data", Some("upload/data/files"), true).unwrap();
        assert_eq!(stream.prefix(), "data");
        assert_eq!(stream.path(), "upload/data/files/");
    }

    #[test]
    fn test_stream_invalid_path_rejected() {
        assert!(Stream::new("files", "", Some("../escape"), false).is_err());
    }

    #[test]
    fn test_stream_equality() {
        let a = Stream::new("files", "", Some("p1"), false).unwrap();
        let b = Stream::new("files", "", Some("p1"), false).unwrap();
        let c = Stream::new("files", "", Some("p2"), false).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
