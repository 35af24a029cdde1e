//! Request validation, dispatch, batch pricing and model comparison.

use rayon::prelude::*;

use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

use super::dispatch::Engine;
use super::request::{ModelConfig, ModelKind, PricingRequest};
use crate::engine::PricingEngine;
use crate::greeks::{GreeksConfig, PricingResult};

/// Outcome of one model in a [`PricingFacade::compare`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelComparison {
    /// Model used
    pub model: ModelKind,
    /// Its result or the reason it failed
    pub result: Result<PricingResult, PricingError>,
}

/// Validates requests and dispatches them to the right engine.
///
/// Holds only the bump configuration shared by the numerical engines, so
/// one facade can serve any number of threads.
///
/// # Examples
///
/// ```rust
/// use opus_core::types::{OptionParameters, OptionStyle, OptionType};
/// use opus_pricing::facade::{ModelConfig, PricingFacade, PricingRequest};
///
/// let facade = PricingFacade::new();
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let request = PricingRequest::new(
///     params,
///     ModelConfig::BlackScholes,
///     OptionStyle::European,
///     OptionType::Call,
/// );
/// let result = facade.price(&request).unwrap();
/// assert!((result.price() - 10.4506).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PricingFacade {
    greeks: GreeksConfig,
}

impl PricingFacade {
    /// Creates a facade with default bumps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a facade whose numerical engines use `config` for Greeks.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` if the configuration fails validation.
    pub fn with_greeks_config(config: GreeksConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { greeks: config })
    }

    /// Prices one request.
    ///
    /// # Errors
    /// - `PricingError::InvalidRequest` for an unsupported style/model pair
    ///   or zero steps/paths; raised before any numerical work
    /// - `PricingError::InvalidParameters` from the engine, e.g. a lattice
    ///   probability outside (0, 1)
    pub fn price(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
        request.validate()?;
        let engine = Engine::from_config(&request.model, self.greeks)?;
        engine.price(&request.params, request.option_type, request.style)
    }

    /// Prices independent requests in parallel.
    ///
    /// Results come back in request order; one failing request does not
    /// affect the others.
    pub fn price_batch(
        &self,
        requests: &[PricingRequest],
    ) -> Vec<Result<PricingResult, PricingError>> {
        requests.par_iter().map(|request| self.price(request)).collect()
    }

    /// Prices the same European option with all three models.
    ///
    /// `steps` sets the lattice depth and `paths`/`seed` the simulation.
    pub fn compare(
        &self,
        params: OptionParameters,
        option_type: OptionType,
        steps: usize,
        paths: usize,
        seed: Option<u64>,
    ) -> Vec<ModelComparison> {
        let models = [
            ModelConfig::BlackScholes,
            ModelConfig::Binomial { steps },
            ModelConfig::MonteCarlo {
                paths,
                steps: None,
                seed,
            },
        ];
        let requests: Vec<PricingRequest> = models
            .iter()
            .map(|&model| PricingRequest::new(params, model, OptionStyle::European, option_type))
            .collect();

        requests
            .iter()
            .zip(self.price_batch(&requests))
            .map(|(request, result)| ModelComparison {
                model: request.model.kind(),
                result,
            })
            .collect()
    }
}
