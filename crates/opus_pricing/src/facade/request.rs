//! Pricing request types.

use std::fmt;
use std::str::FromStr;

use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

use crate::analytical::BlackScholesEngine;
use crate::lattice::BinomialTreeEngine;
use crate::mc::MonteCarloEngine;

/// The three pricing models, without their settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ModelKind {
    /// Closed-form Black-Scholes
    BlackScholes,
    /// Cox-Ross-Rubinstein binomial tree
    Binomial,
    /// Monte Carlo path simulation
    MonteCarlo,
}

impl ModelKind {
    /// All models, in display order.
    pub const ALL: [ModelKind; 3] = [
        ModelKind::BlackScholes,
        ModelKind::Binomial,
        ModelKind::MonteCarlo,
    ];

    /// Exercise styles the model's engine prices.
    pub fn styles(&self) -> &'static [OptionStyle] {
        match self {
            ModelKind::BlackScholes => BlackScholesEngine::STYLES,
            ModelKind::Binomial => BinomialTreeEngine::STYLES,
            ModelKind::MonteCarlo => MonteCarloEngine::STYLES,
        }
    }

    /// Returns whether the model can price `style`.
    pub fn supports(&self, style: OptionStyle) -> bool {
        self.styles().contains(&style)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::BlackScholes => write!(f, "Black-Scholes"),
            ModelKind::Binomial => write!(f, "Binomial"),
            ModelKind::MonteCarlo => write!(f, "Monte Carlo"),
        }
    }
}

impl FromStr for ModelKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalised.as_str() {
            "blackscholes" | "bs" => Ok(ModelKind::BlackScholes),
            "binomial" | "tree" | "crr" => Ok(ModelKind::Binomial),
            "montecarlo" | "mc" => Ok(ModelKind::MonteCarlo),
            _ => Err(PricingError::InvalidRequest(format!(
                "unknown model '{}': expected black-scholes, binomial or monte-carlo",
                s
            ))),
        }
    }
}

/// A model together with its numerical settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelConfig {
    /// Closed-form Black-Scholes; no settings.
    BlackScholes,
    /// Binomial tree with `steps` time steps.
    Binomial {
        /// Lattice depth (>= 1)
        steps: usize,
    },
    /// Monte Carlo simulation.
    MonteCarlo {
        /// Number of paths (>= 1)
        paths: usize,
        /// Monitoring steps for Asian options (>= 1 when given)
        steps: Option<usize>,
        /// Fixed seed; `None` seeds from entropy on every call
        seed: Option<u64>,
    },
}

impl ModelConfig {
    /// The model this configuration selects.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelConfig::BlackScholes => ModelKind::BlackScholes,
            ModelConfig::Binomial { .. } => ModelKind::Binomial,
            ModelConfig::MonteCarlo { .. } => ModelKind::MonteCarlo,
        }
    }
}

/// Everything needed to price one option.
///
/// # Examples
///
/// ```rust
/// use opus_core::types::{OptionParameters, OptionStyle, OptionType};
/// use opus_pricing::facade::{ModelConfig, PricingRequest};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let ok = PricingRequest::new(
///     params,
///     ModelConfig::Binomial { steps: 100 },
///     OptionStyle::American,
///     OptionType::Put,
/// );
/// assert!(ok.validate().is_ok());
///
/// let bad = PricingRequest::new(
///     params,
///     ModelConfig::BlackScholes,
///     OptionStyle::Asian,
///     OptionType::Call,
/// );
/// assert!(bad.validate().unwrap_err().is_invalid_request());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRequest {
    /// Market and contract inputs
    pub params: OptionParameters,
    /// Model and its settings
    pub model: ModelConfig,
    /// Exercise style
    pub style: OptionStyle,
    /// Call or put
    pub option_type: OptionType,
}

impl PricingRequest {
    /// Creates a request.
    pub fn new(
        params: OptionParameters,
        model: ModelConfig,
        style: OptionStyle,
        option_type: OptionType,
    ) -> Self {
        Self {
            params,
            model,
            style,
            option_type,
        }
    }

    /// Checks style/model compatibility and the model's step and path counts.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` describing the first problem found.
    pub fn validate(&self) -> Result<(), PricingError> {
        let kind = self.model.kind();
        if !kind.supports(self.style) {
            return Err(PricingError::InvalidRequest(format!(
                "{} model cannot price {} options",
                kind, self.style
            )));
        }

        match self.model {
            ModelConfig::BlackScholes => {}
            ModelConfig::Binomial { steps } => {
                if steps == 0 {
                    return Err(PricingError::InvalidRequest(
                        "binomial steps must be at least 1".to_string(),
                    ));
                }
            }
            ModelConfig::MonteCarlo { paths, steps, .. } => {
                if paths == 0 {
                    return Err(PricingError::InvalidRequest(
                        "Monte Carlo paths must be at least 1".to_string(),
                    ));
                }
                if steps == Some(0) {
                    return Err(PricingError::InvalidRequest(
                        "Monte Carlo steps must be at least 1".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
