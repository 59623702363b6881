//! Location definitions.
//!
//! A location is a named directory tier (a plugin, theme, or module root)
//! that non-shared streams are searched within. Locations registered later
//! take priority over earlier ones.

use crate::error::Result;
use crate::uri::normalize;

/// A named, priority-ordered directory tier.
///
/// The path is stored normalized and without a trailing separator;
/// separators are inserted at join sites only.
///
/// # Examples
///
/// ```
/// use strata::Location;
///
/// // Path defaults to the name
/// let location = Location::new("floor1", None).unwrap();
/// assert_eq!(location.path(), "floor1");
///
/// // Trailing separators are stripped
/// let location = Location::new("floor2", Some("floors/floor2/")).unwrap();
/// assert_eq!(location.path(), "floors/floor2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
    path: String,
}

impl Location {
    /// Creates a new location.
    ///
    /// When `path` is `None`, the name is used as the path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUri`] if the path cannot be
    /// normalized.
    pub fn new(name: &str, path: Option<&str>) -> Result<Self> {
        let path = normalize(path.unwrap_or(name))?;

        Ok(Self {
            name: name.to_string(),
            path: path.trim_end_matches('/').to_string(),
        })
    }

    /// The unique name keying this location in the registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base directory of this tier, without a trailing separator.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
