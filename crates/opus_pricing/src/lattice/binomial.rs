//! Cox-Ross-Rubinstein binomial tree.
//!
//! ## Parameterisation
//!
//! - Δt = T / steps
//! - u = e^(σ√Δt), d = 1/u
//! - p = (e^(rΔt) - d) / (u - d), required to lie strictly in (0, 1)
//!
//! Node `j` of layer `i` carries spot `S·u^j·d^(i-j)`. Values are rolled back
//! layer by layer in a single buffer of `steps + 1` entries, so memory is
//! O(steps) while time is O(steps²).
//!
//! ## Greeks
//!
//! No closed form exists for lattice prices, so every Greek comes from
//! revaluing the full tree at bumped inputs (see [`GreeksConfig`]). Delta,
//! gamma, vega and rho are central differences. Theta is the one-sided
//! difference `(V(T - h) - V(T)) / h`, which never evaluates the tree past
//! the contract's own expiry.
//!
//! A tree price is piecewise linear in spot, with a kink wherever a terminal
//! node crosses the strike. Kinks are a factor `u²` apart, so the spot bump
//! is widened to at least `S·(u² - 1)`; a narrower bump lets a single kink
//! dominate the second difference and inflates gamma.

use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

use crate::engine::{ensure_supported, PricingEngine};
use crate::greeks::{bump_and_revalue, BumpSizes, GreeksConfig, PricingResult, ThetaScheme};

/// Step parameters of a CRR tree for one set of inputs.
///
/// # Examples
/// ```
/// use opus_core::types::{OptionParameters, OptionStyle, OptionType};
/// use opus_pricing::lattice::CrrLattice;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let lattice = CrrLattice::new(&params, 100).unwrap();
/// assert!((lattice.up() * lattice.down() - 1.0).abs() < 1e-15);
///
/// let price = lattice.roll_back(OptionType::Call, OptionStyle::European);
/// assert!((price - 10.43).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CrrLattice {
    spot: f64,
    strike: f64,
    steps: usize,
    dt: f64,
    /// σ√Δt, the log-spot distance between adjacent nodes' parents
    log_up: f64,
    probability: f64,
    step_discount: f64,
}

impl CrrLattice {
    /// Builds the step parameters.
    ///
    /// # Errors
    /// - `PricingError::InvalidRequest` if `steps` is zero
    /// - `PricingError::InvalidParameters` if the risk-neutral probability
    ///   falls outside (0, 1), which happens when `|r|·√Δt` is large
    ///   relative to σ
    pub fn new(params: &OptionParameters, steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidRequest(
                "binomial steps must be at least 1".to_string(),
            ));
        }

        let dt = params.expiry() / steps as f64;
        let log_up = params.volatility() * dt.sqrt();
        let u = log_up.exp();
        let d = 1.0 / u;
        let probability = ((params.rate() * dt).exp() - d) / (u - d);

        if !(probability > 0.0 && probability < 1.0) {
            return Err(PricingError::InvalidParameters(format!(
                "risk-neutral probability {} outside (0, 1) for dt = {}, rate = {}, volatility = {}",
                probability,
                dt,
                params.rate(),
                params.volatility()
            )));
        }

        Ok(Self {
            spot: params.spot(),
            strike: params.strike(),
            steps,
            dt,
            log_up,
            probability,
            step_discount: (-params.rate() * dt).exp(),
        })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Length of one time step in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up factor u.
    #[inline]
    pub fn up(&self) -> f64 {
        self.log_up.exp()
    }

    /// Down factor d = 1/u.
    #[inline]
    pub fn down(&self) -> f64 {
        (-self.log_up).exp()
    }

    /// Risk-neutral up probability p.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// One-step discount factor e^(-rΔt).
    #[inline]
    pub fn step_discount(&self) -> f64 {
        self.step_discount
    }

    /// Spot distance between adjacent terminal nodes at the root spot, S·(u² - 1).
    #[inline]
    pub fn node_spacing(&self) -> f64 {
        self.spot * (2.0 * self.log_up).exp_m1()
    }

    /// Lowest spot in layer `layer`, S·d^layer.
    #[inline]
    fn floor_spot(&self, layer: usize) -> f64 {
        self.spot * (-(layer as f64) * self.log_up).exp()
    }

    /// Rolls terminal payoffs back to the root and returns the option value.
    ///
    /// With `OptionStyle::American` every interior node takes the larger of
    /// its continuation and exercise values. Any other style is treated as
    /// exercisable at expiry only.
    pub fn roll_back(&self, option_type: OptionType, style: OptionStyle) -> f64 {
        let n = self.steps;
        // Moving one node up a layer multiplies spot by u/d = u².
        let node_ratio = (2.0 * self.log_up).exp();
        let disc_up = self.step_discount * self.probability;
        let disc_down = self.step_discount * (1.0 - self.probability);
        let early_exercise = style.allows_early_exercise();

        let mut values = Vec::with_capacity(n + 1);
        let mut node_spot = self.floor_spot(n);
        for _ in 0..=n {
            values.push(option_type.intrinsic(node_spot, self.strike));
            node_spot *= node_ratio;
        }

        for layer in (0..n).rev() {
            let mut node_spot = self.floor_spot(layer);
            for j in 0..=layer {
                let continuation = disc_up * values[j + 1] + disc_down * values[j];
                values[j] = if early_exercise {
                    continuation.max(option_type.intrinsic(node_spot, self.strike))
                } else {
                    continuation
                };
                node_spot *= node_ratio;
            }
        }

        values[0]
    }
}

/// Binomial tree engine for European and American options.
///
/// # Examples
/// ```
/// use opus_core::types::{OptionParameters, OptionStyle, OptionType};
/// use opus_pricing::lattice::BinomialTreeEngine;
/// use opus_pricing::PricingEngine;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let engine = BinomialTreeEngine::new(200).unwrap();
///
/// let american = engine.price(&params, OptionType::Put, OptionStyle::American).unwrap();
/// let european = engine.price(&params, OptionType::Put, OptionStyle::European).unwrap();
/// assert!(american.price() > european.price());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BinomialTreeEngine {
    steps: usize,
    greeks: GreeksConfig,
}

impl BinomialTreeEngine {
    /// Exercise styles this engine prices.
    pub const STYLES: &'static [OptionStyle] = &[OptionStyle::European, OptionStyle::American];

    /// Creates an engine with `steps` time steps and default bumps.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` if `steps` is zero.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidRequest(
                "binomial steps must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            steps,
            greeks: GreeksConfig::default(),
        })
    }

    /// Replaces the bump configuration.
    ///
    /// # Errors
    /// `PricingError::InvalidRequest` if the configuration fails validation.
    pub fn with_greeks_config(mut self, config: GreeksConfig) -> Result<Self, PricingError> {
        config.validate()?;
        self.greeks = config;
        Ok(self)
    }

    /// Number of time steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Price only, without Greeks.
    pub fn value(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        style: OptionStyle,
    ) -> Result<f64, PricingError> {
        ensure_supported(self, style)?;
        Ok(CrrLattice::new(params, self.steps)?.roll_back(option_type, style))
    }
}

impl PricingEngine for BinomialTreeEngine {
    fn name(&self) -> &'static str {
        "Binomial"
    }

    fn supports(&self, style: OptionStyle) -> bool {
        Self::STYLES.contains(&style)
    }

    fn price(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        style: OptionStyle,
    ) -> Result<PricingResult, PricingError> {
        ensure_supported(self, style)?;
        let lattice = CrrLattice::new(params, self.steps)?;
        let price = lattice.roll_back(option_type, style);

        let bumps = BumpSizes::new(&self.greeks, params)
            .widen_spot(lattice.node_spacing(), params.spot());
        let greeks = bump_and_revalue(
            params,
            price,
            &bumps,
            ThetaScheme::Backward,
            |bumped| Ok(CrrLattice::new(bumped, self.steps)?.roll_back(option_type, style)),
        )?;
        Ok(PricingResult::new(price, greeks))
    }
}
