//! Price command implementation
//!
//! Prices one option with the selected model through the pricing facade.

use tracing::{debug, info};

use opus_core::types::{OptionStyle, OptionType};
use opus_pricing::facade::{ModelConfig, ModelKind, PricingFacade, PricingRequest};

use super::market_params;
use crate::config::CliConfig;
use crate::output::{render_price, PriceReport};
use crate::Result;

/// Contract and model choice for `opus price`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCommand {
    /// Pricing model
    pub model: ModelKind,
    /// Exercise style
    pub style: OptionStyle,
    /// Call or put
    pub option_type: OptionType,
}

/// Combines the command with the resolved settings into a request.
pub fn build_request(config: &CliConfig, command: &PriceCommand) -> Result<PricingRequest> {
    let params = market_params(config)?;
    let model = match command.model {
        ModelKind::BlackScholes => ModelConfig::BlackScholes,
        ModelKind::Binomial => ModelConfig::Binomial {
            steps: config.steps,
        },
        ModelKind::MonteCarlo => ModelConfig::MonteCarlo {
            paths: config.paths,
            steps: Some(config.mc_steps),
            seed: config.seed,
        },
    };
    Ok(PricingRequest::new(
        params,
        model,
        command.style,
        command.option_type,
    ))
}

/// Prices the option and renders the result.
pub fn execute(config: &CliConfig, command: &PriceCommand) -> Result<String> {
    let request = build_request(config, command)?;
    info!(
        "Pricing {} {} with {} model",
        command.style, command.option_type, command.model
    );
    debug!("Request: {:?}", request);

    let result = PricingFacade::new().price(&request)?;
    info!("Price: {:.6}", result.price());
    if let Some(se) = result.std_error() {
        info!("Standard error: {:.6}", se);
    }
    if let Some(seed) = result.seed() {
        info!("Seed: {}", seed);
    }

    let report = PriceReport {
        model: command.model,
        style: command.style,
        option_type: command.option_type,
        params: request.params,
        result,
    };
    render_price(&report, config.format)
}

/// Run the price command
pub fn run(config: &CliConfig, command: &PriceCommand) -> Result<()> {
    let output = execute(config, command)?;
    println!("{}", output);
    Ok(())
}
