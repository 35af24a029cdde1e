//! Bump sizes for finite-difference Greeks.
//!
//! Provides [`GreeksConfig`] and its builder. The defaults are the ones both
//! numerical engines are calibrated against:
//!
//! | Parameter | Default | Bump actually applied |
//! |-----------|---------|-----------------------|
//! | `spot_bump_relative` | 0.01 | `0.01 * S` |
//! | `vol_bump_absolute` | 0.01 | `min(0.01, σ/2)` |
//! | `rate_bump_absolute` | 1e-4 | `1e-4` |
//! | `time_bump_years` | 1/365 | `min(1/365, T/2)` |
//!
//! Capping the volatility and time bumps at half the current value keeps
//! every bumped point strictly inside the valid parameter domain.

use opus_core::types::PricingError;
use thiserror::Error;

/// Configuration errors for [`GreeksConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GreeksConfigError {
    /// Spot bump outside (0, 0.5].
    #[error("Invalid spot bump: {0}")]
    InvalidSpotBump(String),

    /// Volatility bump not positive.
    #[error("Invalid volatility bump: {0}")]
    InvalidVolBump(String),

    /// Rate bump not positive.
    #[error("Invalid rate bump: {0}")]
    InvalidRateBump(String),

    /// Time bump not positive.
    #[error("Invalid time bump: {0}")]
    InvalidTimeBump(String),
}

impl From<GreeksConfigError> for PricingError {
    fn from(err: GreeksConfigError) -> Self {
        PricingError::InvalidRequest(err.to_string())
    }
}

/// Bump sizes for bump-and-revalue Greeks.
///
/// # Examples
///
/// ```rust
/// use opus_pricing::greeks::GreeksConfig;
///
/// let config = GreeksConfig::default();
/// assert_eq!(config.spot_bump(200.0), 2.0);
/// assert_eq!(config.vol_bump(0.01), 0.005);
///
/// let custom = GreeksConfig::builder()
///     .spot_bump_relative(0.005)
///     .build()
///     .unwrap();
/// assert_eq!(custom.spot_bump(200.0), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreeksConfig {
    /// Relative spot bump; the applied bump is `spot_bump_relative * S`.
    pub spot_bump_relative: f64,
    /// Absolute volatility bump, capped at σ/2.
    pub vol_bump_absolute: f64,
    /// Absolute rate bump.
    pub rate_bump_absolute: f64,
    /// Time bump in years, capped at T/2.
    pub time_bump_years: f64,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            spot_bump_relative: 0.01,
            vol_bump_absolute: 0.01,
            rate_bump_absolute: 1e-4,
            time_bump_years: 1.0 / 365.0,
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder starting from the defaults.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Spot bump applied at `spot`.
    #[inline]
    pub fn spot_bump(&self, spot: f64) -> f64 {
        self.spot_bump_relative * spot
    }

    /// Volatility bump applied at `volatility`.
    #[inline]
    pub fn vol_bump(&self, volatility: f64) -> f64 {
        self.vol_bump_absolute.min(0.5 * volatility)
    }

    /// Rate bump.
    #[inline]
    pub fn rate_bump(&self) -> f64 {
        self.rate_bump_absolute
    }

    /// Time bump applied at `expiry`.
    #[inline]
    pub fn time_bump(&self, expiry: f64) -> f64 {
        self.time_bump_years.min(0.5 * expiry)
    }

    /// Validates the configuration.
    ///
    /// The spot bump is limited to 50% so that `S - h_S` stays positive.
    pub fn validate(&self) -> Result<(), GreeksConfigError> {
        if !(self.spot_bump_relative > 0.0 && self.spot_bump_relative <= 0.5) {
            return Err(GreeksConfigError::InvalidSpotBump(format!(
                "spot_bump_relative must be in (0, 0.5], got {}",
                self.spot_bump_relative
            )));
        }
        if !(self.vol_bump_absolute > 0.0 && self.vol_bump_absolute.is_finite()) {
            return Err(GreeksConfigError::InvalidVolBump(format!(
                "vol_bump_absolute must be positive, got {}",
                self.vol_bump_absolute
            )));
        }
        if !(self.rate_bump_absolute > 0.0 && self.rate_bump_absolute.is_finite()) {
            return Err(GreeksConfigError::InvalidRateBump(format!(
                "rate_bump_absolute must be positive, got {}",
                self.rate_bump_absolute
            )));
        }
        if !(self.time_bump_years > 0.0 && self.time_bump_years.is_finite()) {
            return Err(GreeksConfigError::InvalidTimeBump(format!(
                "time_bump_years must be positive, got {}",
                self.time_bump_years
            )));
        }
        Ok(())
    }
}

/// Builder for [`GreeksConfig`].
#[derive(Clone, Debug, Default)]
pub struct GreeksConfigBuilder {
    config: GreeksConfig,
}

impl GreeksConfigBuilder {
    /// Sets the relative spot bump.
    pub fn spot_bump_relative(mut self, bump: f64) -> Self {
        self.config.spot_bump_relative = bump;
        self
    }

    /// Sets the absolute volatility bump.
    pub fn vol_bump_absolute(mut self, bump: f64) -> Self {
        self.config.vol_bump_absolute = bump;
        self
    }

    /// Sets the absolute rate bump.
    pub fn rate_bump_absolute(mut self, bump: f64) -> Self {
        self.config.rate_bump_absolute = bump;
        self
    }

    /// Sets the time bump in years.
    pub fn time_bump_years(mut self, bump: f64) -> Self {
        self.config.time_bump_years = bump;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<GreeksConfig, GreeksConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
