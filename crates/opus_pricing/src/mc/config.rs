//! Monte Carlo simulation configuration.

use opus_core::types::PricingError;

/// Monitoring steps per path for Asian options when none are given.
pub const DEFAULT_ASIAN_STEPS: usize = 100;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. `n_steps` only affects Asian options; European
/// options are always simulated with a single exact step to expiry.
///
/// # Examples
///
/// ```rust
/// use opus_pricing::mc::{MonteCarloConfig, DEFAULT_ASIAN_STEPS};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), DEFAULT_ASIAN_STEPS);
/// assert_eq!(config.seed(), Some(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulated paths.
    n_paths: usize,
    /// Monitoring steps per Asian path.
    n_steps: usize,
    /// Seed; `None` draws a fresh seed from entropy on every call.
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of monitoring steps per Asian path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the fixed seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` if `n_paths` or `n_steps` is zero.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 {
            return Err(PricingError::InvalidRequest(
                "Monte Carlo paths must be at least 1".to_string(),
            ));
        }
        if self.n_steps == 0 {
            return Err(PricingError::InvalidRequest(
                "Monte Carlo steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulated paths (required).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the monitoring steps per Asian path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Fixes the seed for reproducible results.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` if `n_paths` is unset or either count
    /// is zero.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let n_paths = self.n_paths.ok_or_else(|| {
            PricingError::InvalidRequest("Monte Carlo paths must be specified".to_string())
        })?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps: self.n_steps.unwrap_or(DEFAULT_ASIAN_STEPS),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
