//! Enum dispatch over the pricing engines.

use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

use super::request::ModelConfig;
use crate::analytical::BlackScholesEngine;
use crate::engine::PricingEngine;
use crate::greeks::{GreeksConfig, PricingResult};
use crate::lattice::BinomialTreeEngine;
use crate::mc::{MonteCarloConfig, MonteCarloEngine};

/// One of the three engines, built from a [`ModelConfig`].
///
/// Static dispatch keeps the engines as plain values that can be copied
/// into worker threads.
#[derive(Clone, Copy, Debug)]
pub enum Engine {
    /// Closed-form engine
    BlackScholes(BlackScholesEngine),
    /// Lattice engine
    Binomial(BinomialTreeEngine),
    /// Simulation engine
    MonteCarlo(MonteCarloEngine),
}

impl Engine {
    /// Builds the engine selected by `model` with the given bumps.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` for zero steps or paths, or an
    /// invalid bump configuration.
    pub fn from_config(model: &ModelConfig, greeks: GreeksConfig) -> Result<Self, PricingError> {
        let engine = match *model {
            ModelConfig::BlackScholes => Engine::BlackScholes(BlackScholesEngine::new()),
            ModelConfig::Binomial { steps } => {
                Engine::Binomial(BinomialTreeEngine::new(steps)?.with_greeks_config(greeks)?)
            }
            ModelConfig::MonteCarlo { paths, steps, seed } => {
                let mut builder = MonteCarloConfig::builder().n_paths(paths).maybe_seed(seed);
                if let Some(steps) = steps {
                    builder = builder.n_steps(steps);
                }
                Engine::MonteCarlo(MonteCarloEngine::new(builder.build()?).with_greeks_config(greeks)?)
            }
        };
        Ok(engine)
    }
}

impl PricingEngine for Engine {
    fn name(&self) -> &'static str {
        match self {
            Engine::BlackScholes(e) => e.name(),
            Engine::Binomial(e) => e.name(),
            Engine::MonteCarlo(e) => e.name(),
        }
    }

    fn supports(&self, style: OptionStyle) -> bool {
        match self {
            Engine::BlackScholes(e) => e.supports(style),
            Engine::Binomial(e) => e.supports(style),
            Engine::MonteCarlo(e) => e.supports(style),
        }
    }

    fn price(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        style: OptionStyle,
    ) -> Result<PricingResult, PricingError> {
        match self {
            Engine::BlackScholes(e) => e.price(params, option_type, style),
            Engine::Binomial(e) => e.price(params, option_type, style),
            Engine::MonteCarlo(e) => e.price(params, option_type, style),
        }
    }
}
