//! Command to resolve a URI to filesystem paths.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions, OutputFormat};
use clap::Args;

/// Resolve a URI to one or more filesystem paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// URI to resolve (scheme://path)
    pub uri: String,

    /// Print every matching path instead of the first
    #[arg(long)]
    pub all: bool,

    /// Include candidates that do not exist on disk
    #[arg(long)]
    pub missing: bool,

    /// Print paths relative to the locator base path
    #[arg(long)]
    pub relative: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let locator = load_locator(global)?;
        let absolute = !self.relative;

        let paths = if self.all {
            locator.find_resources(&self.uri, absolute, self.missing)?
        } else {
            locator
                .find_resource(&self.uri, absolute, self.missing)?
                .into_iter()
                .collect()
        };

        if paths.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "No resource found for {}",
                self.uri
            )));
        }

        match self.format {
            OutputFormat::Plain => {
                for path in &paths {
                    println!("{path}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "uri": self.uri, "paths": paths }));
            }
        }

        Ok(())
    }
}
