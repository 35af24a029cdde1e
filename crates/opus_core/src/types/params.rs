//! Validated option pricing inputs.

use super::error::PricingError;
use crate::math::discount;

/// Market and contract inputs for a single pricing request.
///
/// Immutable once constructed. [`OptionParameters::new`] rejects
/// non-positive spot, strike, expiry or volatility and any non-finite value,
/// so every engine can rely on `S, K, T, σ > 0` and a finite rate.
///
/// # Examples
/// ```
/// use opus_core::types::OptionParameters;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// assert!(OptionParameters::new(0.0, 100.0, 1.0, 0.05, 0.2).is_err());
/// assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to maturity in years (T)
    expiry: f64,
    /// Continuously-compounded risk-free rate (r)
    rate: f64,
    /// Annualised volatility (σ)
    volatility: f64,
}

fn require_positive(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidParameters(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

impl OptionParameters {
    /// Creates validated parameters.
    ///
    /// # Arguments
    /// * `spot` - Spot price S (> 0)
    /// * `strike` - Strike price K (> 0)
    /// * `expiry` - Time to maturity T in years (> 0)
    /// * `rate` - Risk-free rate r (finite, may be negative)
    /// * `volatility` - Volatility σ (> 0)
    ///
    /// # Errors
    /// `PricingError::InvalidParameters` naming the first offending input.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        require_positive("spot", spot)?;
        require_positive("strike", strike)?;
        require_positive("expiry", expiry)?;
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameters(format!(
                "rate must be finite, got {}",
                rate
            )));
        }
        require_positive("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Discount factor to expiry, exp(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        discount(self.rate, self.expiry)
    }

    /// Total volatility over the life of the option, σ√T.
    #[inline]
    pub fn vol_sqrt_t(&self) -> f64 {
        self.volatility * self.expiry.sqrt()
    }

    /// Copy with a different spot, revalidated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Copy with a different expiry, revalidated.
    pub fn with_expiry(&self, expiry: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, expiry, self.rate, self.volatility)
    }

    /// Copy with a different rate, revalidated.
    pub fn with_rate(&self, rate: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, self.expiry, rate, self.volatility)
    }

    /// Copy with a different volatility, revalidated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, self.expiry, self.rate, volatility)
    }
}
