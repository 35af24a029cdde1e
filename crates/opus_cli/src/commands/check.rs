//! Check command implementation
//!
//! Prints the configuration after file, environment and flag layering,
//! in the same TOML form `--config` accepts.

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Renders the resolved configuration as TOML.
pub fn execute(config: &CliConfig) -> Result<String> {
    info!("Configuration is valid");
    Ok(toml::to_string_pretty(config)?)
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    let output = execute(config)?;
    print!("{}", output);
    Ok(())
}
