//! Declarative locator configuration.
//!
//! A locator can be described in a YAML document naming the base path, the
//! location tiers, and the streams, then built in one call. This is the
//! usual way applications populate a registry at startup.
//!
//! # Examples
//!
//! ```
//! use strata::config::LocatorConfig;
//!
//! let yaml = r"
//! base_path: /var/app
//! locations:
//!   - name: core
//!   - name: theme
//!     path: themes/default
//! streams:
//!   - scheme: config
//!   - scheme: upload
//!     paths: [storage/uploads]
//!     shared: true
//! ";
//!
//! let config: LocatorConfig = serde_yaml::from_str(yaml).unwrap();
//! let locator = config.build().unwrap();
//! assert!(locator.is_stream("config://settings.yaml"));
//! assert_eq!(locator.list_locations(), ["theme", "core"]);
//! ```

mod loader;
mod schema;

pub use loader::ConfigLoader;
pub use schema::{LocationEntry, LocatorConfig, StreamEntry};
