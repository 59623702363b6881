//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a URI to one or more filesystem paths
//! - `list`: List the files provided by every directory a URI resolves to
//! - `streams`: Show the registered streams
//! - `locations`: Show the registered locations in priority order
//! - `check`: Check whether a URI is resolvable
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod list;
pub mod locations;
pub mod resolve;
pub mod streams;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use locations::LocationsCommand;
pub use resolve::ResolveCommand;
pub use streams::StreamsCommand;
