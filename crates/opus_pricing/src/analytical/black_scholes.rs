//! Black-Scholes engine for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Greeks
//!
//! All five sensitivities are the exact derivatives of the pricing formula.
//! Theta is `-∂V/∂T`, the value change per year as calendar time passes.

use opus_core::math::{norm_cdf, norm_pdf};
use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

use crate::engine::{ensure_supported, PricingEngine};
use crate::greeks::{Greeks, PricingResult};

/// Black-Scholes engine.
///
/// Stateless; European style only.
///
/// # Examples
/// ```
/// use opus_core::types::{OptionParameters, OptionType};
/// use opus_pricing::analytical::BlackScholesEngine;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let engine = BlackScholesEngine::new();
///
/// let call = engine.price_european(&params, OptionType::Call).unwrap();
/// let put = engine.price_european(&params, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call.price() - put.price() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// assert!((call.price() - 10.450583572185565).abs() < 1e-8);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BlackScholesEngine;

/// Intermediate terms shared by the price and every Greek.
#[derive(Clone, Copy, Debug)]
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    discount: f64,
}

impl Terms {
    fn new(params: &OptionParameters) -> Result<Self, PricingError> {
        let vol_sqrt_t = params.vol_sqrt_t();
        // Parameters are validated positive, but σ√T can still underflow.
        if !(vol_sqrt_t > 0.0 && vol_sqrt_t.is_finite()) {
            return Err(PricingError::InvalidParameters(format!(
                "degenerate volatility-time product σ√T = {}",
                vol_sqrt_t
            )));
        }

        // Divided through by σ√T so σ² never forms; finite whenever σ√T is.
        let sigma = params.volatility();
        let sqrt_t = params.expiry().sqrt();
        let moneyness = (params.spot() / params.strike()).ln() / vol_sqrt_t;
        let drift = params.rate() / sigma * sqrt_t;
        let half_total_vol = 0.5 * sigma * sqrt_t;

        Ok(Self {
            d1: moneyness + drift + half_total_vol,
            d2: moneyness + drift - half_total_vol,
            sqrt_t,
            discount: params.discount_factor(),
        })
    }
}

impl BlackScholesEngine {
    /// Exercise styles this engine prices.
    pub const STYLES: &'static [OptionStyle] = &[OptionStyle::European];

    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    /// Returns `(d₁, d₂)` for `params`.
    ///
    /// # Errors
    /// `PricingError::InvalidParameters` if σ√T is not strictly positive.
    pub fn d1_d2(&self, params: &OptionParameters) -> Result<(f64, f64), PricingError> {
        let terms = Terms::new(params)?;
        Ok((terms.d1, terms.d2))
    }

    /// Price only, without Greeks.
    ///
    /// Rounding can push a far out-of-the-money value a few ulps below
    /// zero; such results are reported as `0.0`.
    pub fn value(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<f64, PricingError> {
        let terms = Terms::new(params)?;
        Ok(Self::value_from_terms(params, option_type, &terms))
    }

    fn value_from_terms(params: &OptionParameters, option_type: OptionType, t: &Terms) -> f64 {
        let s = params.spot();
        let k_df = params.strike() * t.discount;
        let value = match option_type {
            OptionType::Call => s * norm_cdf(t.d1) - k_df * norm_cdf(t.d2),
            OptionType::Put => k_df * norm_cdf(-t.d2) - s * norm_cdf(-t.d1),
        };
        value.max(0.0)
    }

    /// Prices a European option with analytic Greeks.
    ///
    /// # Errors
    /// `PricingError::InvalidParameters` if σ√T is not strictly positive.
    pub fn price_european(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
    ) -> Result<PricingResult, PricingError> {
        let t = Terms::new(params)?;
        let price = Self::value_from_terms(params, option_type, &t);

        let s = params.spot();
        let k = params.strike();
        let sigma = params.volatility();
        let r = params.rate();
        let pdf_d1 = norm_pdf(t.d1);

        // Gamma and vega are the same for calls and puts
        let gamma = pdf_d1 / (s * sigma * t.sqrt_t);
        let vega = s * t.sqrt_t * pdf_d1;
        let decay = -(s * pdf_d1 * sigma) / (2.0 * t.sqrt_t);

        let greeks = match option_type {
            OptionType::Call => Greeks {
                delta: norm_cdf(t.d1),
                gamma,
                theta: decay - r * k * t.discount * norm_cdf(t.d2),
                vega,
                rho: k * params.expiry() * t.discount * norm_cdf(t.d2),
            },
            OptionType::Put => Greeks {
                delta: norm_cdf(t.d1) - 1.0,
                gamma,
                theta: decay + r * k * t.discount * norm_cdf(-t.d2),
                vega,
                rho: -k * params.expiry() * t.discount * norm_cdf(-t.d2),
            },
        };

        Ok(PricingResult::new(price, greeks))
    }
}

impl PricingEngine for BlackScholesEngine {
    fn name(&self) -> &'static str {
        "Black-Scholes"
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
        self.price_european(params, option_type)
    }
}
