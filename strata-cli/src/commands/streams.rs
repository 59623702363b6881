//! Command to show the registered streams.

use crate::error::CliError;
use crate::utils::{load_locator, GlobalOptions, OutputFormat};
use clap::Args;

/// Show the registered streams.
#[derive(Args)]
pub struct StreamsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl StreamsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let locator = load_locator(global)?;

        let mut schemes = locator.list_schemes();
        schemes.sort_unstable();

        match self.format {
            OutputFormat::Plain => {
                for scheme in &schemes {
                    let groups = locator.streams_for(scheme)?;
                    for streams in groups.values() {
                        for stream in streams {
                            let shared = if stream.is_shared() { " (shared)" } else { "" };
                            let prefix = if stream.prefix().is_empty() {
                                String::new()
                            } else {
                                format!("{}/", stream.prefix())
                            };
                            println!("{scheme}://{prefix} -> {}{shared}", stream.path());
                        }
                    }
                }
            }
            OutputFormat::Json => {
                let mut entries: Vec<serde_json::Value> = Vec::new();
                for scheme in &schemes {
                    let groups = locator.streams_for(scheme)?;
                    for streams in groups.values() {
                        for stream in streams {
                            entries.push(serde_json::json!({
                                "scheme": stream.scheme(),
                                "prefix": stream.prefix(),
                                "path": stream.path(),
                                "shared": stream.is_shared(),
                            }));
                        }
                    }
                }
                println!("{}", serde_json::Value::Array(entries));
            }
        }

        Ok(())
    }
}
