//! URI and path canonicalization.
//!
//! This module provides the normalization routines that every URI and path
//! entering the locator passes through.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts URIs and paths to a canonical form by:
//! - Converting backslashes to forward slashes
//! - Collapsing `.`, `..`, and empty segments
//! - Preserving a trailing slash when the input carried one
//!
//! ## Scheme splitting
//!
//! A URI of the form `scheme://path` can be split into its scheme and path
//! parts with [`normalize_split`]. Input without a `://` separator yields an
//! empty scheme.
//!
//! ## Traversal rejection
//!
//! Any `..` sequence that would climb above the root of the path is rejected
//! with an error rather than clamped. Callers treat the failure as "not
//! found", which is what keeps a crafted URI such as
//! `files://../../etc/passwd` from ever resolving outside the configured
//! search roots.
//!
//! # Examples
//!
//! ```
//! use strata::uri::{normalize, normalize_split};
//!
//! assert_eq!(normalize("files://a/./b/../c.txt").unwrap(), "files://a/c.txt");
//!
//! let (scheme, path) = normalize_split("conf://settings.yaml").unwrap();
//! assert_eq!(scheme, "conf");
//! assert_eq!(path, "settings.yaml");
//!
//! assert!(normalize("files://../escape").is_err());
//! ```

mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use normalize::{normalize, normalize_path, normalize_split};
