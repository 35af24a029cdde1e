//! Geometric Brownian motion path generation.
//!
//! Each step uses the exact log-space solution
//!
//! ```text
//! S(t + Δt) = S(t) · exp((r - σ²/2)Δt + σ√Δt · Z),   Z ~ N(0, 1)
//! ```
//!
//! so a single step of length T reproduces the terminal distribution
//! exactly and no discretisation bias enters European prices.

use opus_core::types::OptionParameters;

/// One GBM time step of fixed length under the risk-neutral measure.
///
/// # Examples
///
/// ```rust
/// use opus_core::types::OptionParameters;
/// use opus_pricing::mc::GbmStepper;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let stepper = GbmStepper::new(&params, 1);
///
/// // Z = 0 moves spot by the deterministic drift only
/// let expected = 100.0 * (0.05_f64 - 0.5 * 0.04).exp();
/// assert!((stepper.advance(100.0, 0.0) - expected).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStepper {
    /// (r - σ²/2)Δt
    drift: f64,
    /// σ√Δt
    diffusion: f64,
}

impl GbmStepper {
    /// Builds the stepper for `n_steps` equal steps to expiry.
    ///
    /// `n_steps` must be at least 1; the engine validates this before any
    /// stepper is built.
    pub fn new(params: &OptionParameters, n_steps: usize) -> Self {
        let dt = params.expiry() / n_steps as f64;
        let sigma = params.volatility();
        Self {
            drift: (params.rate() - 0.5 * sigma * sigma) * dt,
            diffusion: sigma * dt.sqrt(),
        }
    }

    /// Advances `spot` by one step driven by the standard normal `z`.
    #[inline]
    pub fn advance(&self, spot: f64, z: f64) -> f64 {
        spot * (self.drift + self.diffusion * z).exp()
    }

    /// Writes a full path into `path`.
    ///
    /// `path[0]` is the initial spot and `path[i + 1]` the price after the
    /// `i`-th normal in `randoms`. Only the first `randoms.len() + 1`
    /// entries of `path` are written.
    pub fn fill_path(&self, spot: f64, randoms: &[f64], path: &mut [f64]) {
        debug_assert!(path.len() > randoms.len());
        path[0] = spot;
        for (i, &z) in randoms.iter().enumerate() {
            path[i + 1] = self.advance(path[i], z);
        }
    }
}
