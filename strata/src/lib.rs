#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # strata
//!
//! A library for resolving `scheme://path` URIs across layered directory
//! trees.
//!
//! Higher-level code references files abstractly (`config://settings.yaml`)
//! and the locator decides which physical directory currently provides the
//! file, letting overlapping directory trees override one another by
//! priority.
//!
//! ## Core Types
//!
//! - [`Locator`]: the registry and search engine
//! - [`Stream`] and [`Location`]: registered mappings and priority tiers
//! - [`Resource`]: a located file with its derived URI and paths
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use strata::{Locator, MemoryFilesystem};
//!
//! let fs = MemoryFilesystem::new(["/app/plugins/blog/assets/logo.png"]);
//! let mut locator = Locator::with_filesystem("/app", Box::new(fs)).unwrap();
//!
//! locator.register_location("core", Some("core")).unwrap();
//! locator.register_location("blog", Some("plugins/blog")).unwrap();
//! locator.register_stream("assets", "", &[], false).unwrap();
//!
//! let found = locator.find_resource("assets://logo.png", true, false).unwrap();
//! assert_eq!(found.as_deref(), Some("/app/plugins/blog/assets/logo.png"));
//! ```

pub mod config;
pub mod error;
pub mod filesystem;
pub mod location;
pub mod locator;
pub mod logging;
pub mod resource;
pub mod stream;
pub mod uri;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, LocatorConfig};
pub use error::{Error, Result};
pub use filesystem::{Filesystem, MemoryFilesystem, OsFilesystem};
pub use location::Location;
pub use locator::Locator;
pub use logging::{init_logger, LogLevel, Logger};
pub use resource::Resource;
pub use stream::Stream;
