//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. `execute` functions
//! return the rendered output; `run` prints it.

pub mod check;
pub mod compare;
pub mod price;

use opus_core::types::OptionParameters;

use crate::config::CliConfig;
use crate::Result;

/// Market inputs from the resolved configuration.
pub(crate) fn market_params(config: &CliConfig) -> Result<OptionParameters> {
    Ok(OptionParameters::new(
        config.spot,
        config.strike,
        config.expiry,
        config.rate,
        config.volatility,
    )?)
}
