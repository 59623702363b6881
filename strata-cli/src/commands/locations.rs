//! Command to show the registered locations.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions, OutputFormat};
use clap::Args;

/// Show the registered locations in search priority order.
#[derive(Args)]
pub struct LocationsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl LocationsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let locator = load_locator(global)?;

        match self.format {
            OutputFormat::Plain => {
                for location in locator.locations() {
                    println!("{} -> {}", location.name(), location.path());
                }
            }
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = locator
                    .locations()
                    .iter()
                    .map(|location| {
                        serde_json::json!({
                            "name": location.name(),
                            "path": location.path(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::Value::Array(entries));
            }
        }

        Ok(())
    }
}
