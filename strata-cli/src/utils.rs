//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands: locating
//! and loading the configuration file, building the locator, and output
//! format selection.

use crate::error::CliError;
use clap::ValueEnum;
use std::path::PathBuf;
use strata::{ConfigLoader, Locator};

/// Default configuration file name, looked up in the working directory.
const DEFAULT_CONFIG: &str = "strata.yaml";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path to the locator configuration file.
    pub config: Option<PathBuf>,
}

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line.
    Plain,
    /// A JSON document.
    Json,
}

/// Load the configuration file and build the locator from it.
///
/// Uses `--config` (or `STRATA_CONFIG`) when given, otherwise looks for
/// `strata.yaml` in the working directory.
pub fn load_locator(global: &GlobalOptions) -> Result<Locator, CliError> {
    let path = global
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    if !path.exists() {
        return Err(CliError::NoConfig(path));
    }

    let config = ConfigLoader::load(&path)?;
    let locator = config.build()?;

    Ok(locator)
}
