//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, ListCommand, LocationsCommand, ResolveCommand,
    StreamsCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving scheme://path URIs across layered
/// directory trees.
#[derive(Parser)]
#[command(name = "strata")]
#[command(version, about = "Resolve scheme://path URIs to filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to the locator configuration file
    #[arg(long, value_name = "PATH", global = true, env = "STRATA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a URI to one or more filesystem paths
    Resolve(ResolveCommand),

    /// List the files provided by every directory a URI resolves to
    List(ListCommand),

    /// Show the registered streams
    Streams(StreamsCommand),

    /// Show the registered locations in priority order
    Locations(LocationsCommand),

    /// Check whether a URI is resolvable
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
