//! Main entry point for the strata CLI.
//!
//! This is the command-line interface for the strata resource locator.
//! It resolves `scheme://path` URIs against a registry declared in a YAML
//! configuration file:
//! - `resolve`: Resolve a URI to one or more filesystem paths
//! - `list`: List the files provided by every directory a URI resolves to
//! - `streams`: Show the registered streams
//! - `locations`: Show the registered locations in priority order
//! - `check`: Check whether a URI is resolvable

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = strata::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Streams(cmd) => cmd.execute(&global),
        cli::Command::Locations(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
