//! Command to list the files a URI resolves to.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions, OutputFormat};
use clap::Args;

/// List the files provided by every directory a URI resolves to.
#[derive(Args)]
pub struct ListCommand {
    /// URI naming the directory to list (scheme://path)
    pub uri: String,

    /// Keep every copy instead of the highest priority one per URI
    #[arg(long)]
    pub all: bool,

    /// Keep priority order instead of sorting by path
    #[arg(long)]
    pub no_sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl ListCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let locator = load_locator(global)?;
        let resources = locator.list_resources(&self.uri, self.all, !self.no_sort)?;

        match self.format {
            OutputFormat::Plain => {
                for resource in &resources {
                    println!("{resource}");
                }
            }
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = resources
                    .iter()
                    .map(|resource| {
                        serde_json::json!({
                            "uri": resource.uri(),
                            "path": resource.path(),
                            "absolute_path": resource.absolute_path(),
                            "location": resource.location().map(|l| l.name()),
                        })
                    })
                    .collect();
                println!("{}", serde_json::Value::Array(entries));
            }
        }

        Ok(())
    }
}
