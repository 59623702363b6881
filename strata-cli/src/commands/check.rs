//! Command to check whether a URI is resolvable.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions};
use clap::Args;

/// Check whether a URI is resolvable by the configured locator.
///
/// Succeeds when the URI normalizes and its scheme is registered,
/// independent of whether the resource exists on disk.
#[derive(Args)]
pub struct CheckCommand {
    /// URI to check (scheme://path)
    pub uri: String,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let locator = load_locator(global)?;

        if locator.is_stream(&self.uri) {
            println!("{} is resolvable", self.uri);
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not resolvable",
                self.uri
            )))
        }
    }
}
