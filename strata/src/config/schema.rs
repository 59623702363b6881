//! Configuration schema definitions.
//!
//! This module defines the YAML-facing structure describing a locator:
//! base path, location tiers in priority-ascending registration order, and
//! stream registrations.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filesystem::Filesystem;
use crate::locator::Locator;

/// Complete locator configuration.
///
/// Entries are applied in document order, so later locations end up with
/// higher search priority, exactly as with direct registration calls.
///
/// # Examples
///
/// ```
/// use strata::config::{LocatorConfig, StreamEntry};
///
/// let config = LocatorConfig {
///     base_path: Some("/var/app".to_string()),
///     streams: vec![StreamEntry {
///         scheme: "config".to_string(),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
/// assert_eq!(config.base_path.as_deref(), Some("/var/app"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocatorConfig {
    /// Base path every relative search root is anchored to. Supports a
    /// leading tilde.
    pub base_path: Option<String>,

    /// Location tiers, lowest priority first.
    #[serde(default)]
    pub locations: Vec<LocationEntry>,

    /// Stream registrations.
    #[serde(default)]
    pub streams: Vec<StreamEntry>,
}

/// One location tier.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocationEntry {
    /// Unique location name.
    pub name: String,

    /// Directory for this tier; defaults to the name.
    pub path: Option<String>,
}

/// One stream registration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StreamEntry {
    /// The scheme served by this stream.
    pub scheme: String,

    /// Path prefix narrowing which URIs match.
    #[serde(default)]
    pub prefix: String,

    /// Base directories; empty means one stream named after the scheme.
    /// The last path has the highest priority within the prefix.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Whether the stream bypasses the location tiers.
    #[serde(default)]
    pub shared: bool,
}

impl LocatorConfig {
    /// Builds a locator querying the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path cannot be resolved, a path fails
    /// normalization, or a stream names a reserved scheme.
    pub fn build(&self) -> Result<Locator> {
        let base_path = self.resolved_base_path()?;
        let mut locator = Locator::new(&base_path)?;
        self.apply(&mut locator)?;
        Ok(locator)
    }

    /// Builds a locator with a custom [`Filesystem`] collaborator.
    ///
    /// # Errors
    ///
    /// Same as [`LocatorConfig::build`].
    pub fn build_with_filesystem(&self, filesystem: Box<dyn Filesystem>) -> Result<Locator> {
        let base_path = self.resolved_base_path()?;
        let mut locator = Locator::with_filesystem(&base_path, filesystem)?;
        self.apply(&mut locator)?;
        Ok(locator)
    }

    fn resolved_base_path(&self) -> Result<String> {
        match &self.base_path {
            Some(path) => super::loader::expand_tilde(path),
            None => Ok(String::new()),
        }
    }

    fn apply(&self, locator: &mut Locator) -> Result<()> {
        for location in &self.locations {
            locator.register_location(&location.name, location.path.as_deref())?;
        }

        for stream in &self.streams {
            let paths: Vec<&str> = stream.paths.iter().map(String::as_str).collect();
            locator.register_stream(&stream.scheme, &stream.prefix, &paths, stream.shared)?;
        }

        Ok(())
    }
}
