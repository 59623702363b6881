//! Configuration file loading.
//!
//! This module reads and parses locator configuration files and handles
//! tilde expansion for the base path.

use std::fs;
use std::path::Path;

use crate::config::schema::LocatorConfig;
use crate::error::{Error, Result};

/// Loads locator configuration from files.
///
/// # Examples
///
/// ```no_run
/// use strata::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(Path::new("strata.yaml")).unwrap();
/// let locator = config.build().unwrap();
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Configuration`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<LocatorConfig> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

/// Expand a leading tilde to the home directory.
///
/// Handles `~` and `~/path`; `~user` syntax is not supported.
pub(crate) fn expand_tilde(path: &str) -> Result<String> {
    if !path.starts_with('~') {
        return Ok(path.to_string());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidUri {
        uri: path.to_string(),
        reason: "cannot determine home directory".to_string(),
    })?;
    let home = home.to_string_lossy().into_owned();

    if path == "~" {
        Ok(home)
    } else if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Ok(format!("{home}/{rest}"))
    } else {
        Err(Error::InvalidUri {
            uri: path.to_string(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}
