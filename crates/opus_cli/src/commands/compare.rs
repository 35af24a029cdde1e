//! Compare command implementation
//!
//! Prices the configured European option with every model so the
//! numerical engines can be checked against the closed form.

use tracing::{info, warn};

use opus_core::types::OptionType;
use opus_pricing::facade::PricingFacade;

use super::market_params;
use crate::config::CliConfig;
use crate::output::{render_comparison, ComparisonReport};
use crate::Result;

/// Prices with all models and renders the comparison.
pub fn execute(config: &CliConfig, option_type: OptionType) -> Result<String> {
    let params = market_params(config)?;
    info!(
        "Comparing models: {} steps, {} paths",
        config.steps, config.paths
    );

    let comparisons = PricingFacade::new().compare(
        params,
        option_type,
        config.steps,
        config.paths,
        config.seed,
    );
    for c in &comparisons {
        match &c.result {
            Ok(r) => info!("{}: {:.6}", c.model, r.price()),
            Err(e) => warn!("{} failed: {}", c.model, e),
        }
    }

    let report = ComparisonReport::new(params, option_type, &comparisons);
    render_comparison(&report, config.format)
}

/// Run the compare command
pub fn run(config: &CliConfig, option_type: OptionType) -> Result<()> {
    let output = execute(config, option_type)?;
    println!("{}", output);
    Ok(())
}
