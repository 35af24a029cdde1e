//! Pricing result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensitivities of an option value.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `theta`: -∂V/∂T (value change per year as time passes)
/// - `vega`: ∂V/∂σ per unit of volatility
/// - `rho`: ∂V/∂r per unit of rate
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// -∂V/∂T, per year
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Returns whether every sensitivity is a finite number.
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.theta.is_finite()
            && self.vega.is_finite()
            && self.rho.is_finite()
    }
}

/// Outcome of pricing one option.
///
/// Built once by an engine and never modified afterwards. `std_error` is
/// only populated by Monte Carlo pricing, where it is the discounted
/// standard error of the price estimate. `seed` is likewise Monte Carlo
/// only: the seed every path of this valuation was drawn from, so an
/// unseeded run can be replayed exactly.
///
/// # Examples
///
/// ```rust
/// use opus_pricing::greeks::{Greeks, PricingResult};
///
/// let result = PricingResult::new(10.45, Greeks::default()).with_std_error(0.02);
/// assert_eq!(result.price(), 10.45);
/// assert!((result.confidence_95().unwrap() - 0.0392).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingResult {
    price: f64,
    greeks: Greeks,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    std_error: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    seed: Option<u64>,
}

impl PricingResult {
    /// Creates a result without a sampling error.
    pub fn new(price: f64, greeks: Greeks) -> Self {
        Self {
            price,
            greeks,
            std_error: None,
            seed: None,
        }
    }

    /// Attaches the standard error of a sampled price.
    pub fn with_std_error(self, std_error: f64) -> Self {
        Self {
            std_error: Some(std_error),
            ..self
        }
    }

    /// Records the seed the valuation was drawn from.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Present value.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Sensitivities at the priced point.
    #[inline]
    pub fn greeks(&self) -> Greeks {
        self.greeks
    }

    /// Standard error of the price estimate, if sampled.
    #[inline]
    pub fn std_error(&self) -> Option<f64> {
        self.std_error
    }

    /// Seed of a sampled valuation.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Half-width of the 95% confidence interval (1.96 standard errors).
    pub fn confidence_95(&self) -> Option<f64> {
        self.std_error.map(|se| 1.96 * se)
    }
}
