//! Monte Carlo engine for European and Asian options.

use opus_core::rng::PricerRng;
use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

use super::config::MonteCarloConfig;
use super::paths::GbmStepper;
use super::payoff::PathPayoff;
use crate::engine::{ensure_supported, PricingEngine};
use crate::greeks::{bump_and_revalue, BumpSizes, GreeksConfig, PricingResult, ThetaScheme};

/// Discounted price estimate from one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonteCarloEstimate {
    /// Discounted sample mean of the payoff.
    pub price: f64,
    /// Discounted standard error of the mean (zero for a single path).
    pub std_error: f64,
}

/// Welford running mean and variance.
#[derive(Default)]
struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    #[inline]
    fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn std_error(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let variance = self.m2 / (self.count - 1) as f64;
        (variance / self.count as f64).sqrt()
    }
}

/// Monte Carlo engine.
///
/// Holds no random state between calls. Every valuation builds its own
/// [`PricerRng`] from a seed, so concurrent calls never share a generator
/// and a fixed seed reproduces results bit for bit.
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
    greeks: GreeksConfig,
}

impl MonteCarloEngine {
    /// Exercise styles this engine prices.
    pub const STYLES: &'static [OptionStyle] = &[OptionStyle::European, OptionStyle::Asian];

    /// Creates an engine with default bumps.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self {
            config,
            greeks: GreeksConfig::default(),
        }
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

    /// Returns the simulation configuration.
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Simulates the discounted payoff with draws from `seed`.
    ///
    /// European options take one exact step to expiry; Asian options take
    /// `n_steps` monitoring steps and average all `n_steps + 1` prices.
    pub fn estimate(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        style: OptionStyle,
        seed: u64,
    ) -> Result<MonteCarloEstimate, PricingError> {
        ensure_supported(self, style)?;
        let payoff = PathPayoff::new(option_type, style, params.strike())?;
        Ok(self.simulate(params, &payoff, seed))
    }

    fn simulate(
        &self,
        params: &OptionParameters,
        payoff: &PathPayoff,
        seed: u64,
    ) -> MonteCarloEstimate {
        let n_steps = if payoff.is_averaging() {
            self.config.n_steps()
        } else {
            1
        };
        let stepper = GbmStepper::new(params, n_steps);
        let mut rng = PricerRng::from_seed(seed);
        let mut randoms = vec![0.0; n_steps];
        let mut path = vec![0.0; n_steps + 1];
        let mut stats = RunningStats::default();

        for _ in 0..self.config.n_paths() {
            rng.fill_normal(&mut randoms);
            stepper.fill_path(params.spot(), &randoms, &mut path);
            stats.push(payoff.evaluate(&path));
        }

        let discount = params.discount_factor();
        MonteCarloEstimate {
            price: discount * stats.mean,
            std_error: discount * stats.std_error(),
        }
    }

    /// Prices with Greeks using draws from `seed`.
    ///
    /// The base valuation and all nine bumped valuations restart from `seed`.
    pub fn price_with_seed(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        style: OptionStyle,
        seed: u64,
    ) -> Result<PricingResult, PricingError> {
        ensure_supported(self, style)?;
        let payoff = PathPayoff::new(option_type, style, params.strike())?;

        let base = self.simulate(params, &payoff, seed);
        let greeks = bump_and_revalue(
            params,
            base.price,
            &BumpSizes::new(&self.greeks, params),
            ThetaScheme::Central,
            |bumped| Ok(self.simulate(bumped, &payoff, seed).price),
        )?;

        Ok(PricingResult::new(base.price, greeks)
            .with_std_error(base.std_error)
            .with_seed(seed))
    }
}

impl PricingEngine for MonteCarloEngine {
    fn name(&self) -> &'static str {
        "Monte Carlo"
    }

    fn supports(&self, style: OptionStyle) -> bool {
        Self::STYLES.contains(&style)
    }

    /// Uses the configured seed, or a fresh entropy seed when none is set.
    /// Either way the seed used is reported on the result.
    fn price(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        style: OptionStyle,
    ) -> Result<PricingResult, PricingError> {
        let seed = match self.config.seed() {
            Some(seed) => seed,
            None => PricerRng::from_entropy().seed(),
        };
        self.price_with_seed(params, option_type, style, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholesEngine;
    use approx::assert_relative_eq;

    fn atm() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    fn engine(n_paths: usize, seed: u64) -> MonteCarloEngine {
        MonteCarloEngine::new(
            MonteCarloConfig::builder()
                .n_paths(n_paths)
                .seed(seed)
                .build()
                .unwrap(),
        )
    }

    // ==========================================================
    // Statistics
    // ==========================================================

    #[test]
    fn test_running_stats() {
        let mut stats = RunningStats::default();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.push(x);
        }
        assert_relative_eq!(stats.mean, 5.0, epsilon = 1e-12);
        // sample variance 32/7
        assert_relative_eq!(
            stats.std_error(),
            (32.0 / 7.0 / 8.0_f64).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_single_path_has_zero_std_error() {
        let est = engine(1, 3)
            .estimate(&atm(), OptionType::Call, OptionStyle::European, 3)
            .unwrap();
        assert_eq!(est.std_error, 0.0);
        assert!(est.price >= 0.0);
    }

    // ==========================================================
    // Pricing
    // ==========================================================

    #[test]
    fn test_european_call_converges_to_black_scholes() {
        let result = engine(200_000, 42)
            .price(&atm(), OptionType::Call, OptionStyle::European)
            .unwrap();
        let exact = BlackScholesEngine::new()
            .value(&atm(), OptionType::Call)
            .unwrap();

        assert_relative_eq!(result.price(), exact, max_relative = 0.02);
        let se = result.std_error().unwrap();
        assert!(se > 0.0 && se < 0.05);
        assert!((result.price() - exact).abs() < 5.0 * se);
    }

    #[test]
    fn test_european_put_within_error_bars() {
        let result = engine(50_000, 7)
            .price(&atm(), OptionType::Put, OptionStyle::European)
            .unwrap();
        let exact = BlackScholesEngine::new()
            .value(&atm(), OptionType::Put)
            .unwrap();
        assert!((result.price() - exact).abs() < 5.0 * result.std_error().unwrap());
    }

    #[test]
    fn test_asian_cheaper_than_european() {
        let mc = MonteCarloEngine::new(
            MonteCarloConfig::builder()
                .n_paths(20_000)
                .n_steps(50)
                .seed(11)
                .build()
                .unwrap(),
        );
        let asian = mc
            .estimate(&atm(), OptionType::Call, OptionStyle::Asian, 11)
            .unwrap();
        let european = mc
            .estimate(&atm(), OptionType::Call, OptionStyle::European, 11)
            .unwrap();

        // Arithmetic-average ATM call is worth about 5.8
        assert!(asian.price > 5.0 && asian.price < 6.6);
        assert!(asian.price < european.price);
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let mc = engine(5_000, 99);
        let a = mc
            .price(&atm(), OptionType::Call, OptionStyle::Asian)
            .unwrap();
        let b = mc
            .price(&atm(), OptionType::Call, OptionStyle::Asian)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed(), Some(99));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = engine(5_000, 1)
            .estimate(&atm(), OptionType::Call, OptionStyle::European, 1)
            .unwrap();
        let b = engine(5_000, 1)
            .estimate(&atm(), OptionType::Call, OptionStyle::European, 2)
            .unwrap();
        assert_ne!(a.price, b.price);
    }

    #[test]
    fn test_unseeded_engine_prices() {
        let mc = MonteCarloEngine::new(MonteCarloConfig::builder().n_paths(2_000).build().unwrap());
        let result = mc
            .price(&atm(), OptionType::Call, OptionStyle::European)
            .unwrap();
        assert!(result.price() > 0.0);
        assert!(result.greeks().is_finite());

        // The reported seed replays the run exactly
        let seed = result.seed().unwrap();
        let replay = mc
            .price_with_seed(&atm(), OptionType::Call, OptionStyle::European, seed)
            .unwrap();
        assert_eq!(replay, result);
    }

    #[test]
    fn test_american_rejected() {
        let err = engine(100, 1)
            .price(&atm(), OptionType::Put, OptionStyle::American)
            .unwrap_err();
        assert!(err.is_invalid_request());
    }

    // ==========================================================
    // Greeks
    // ==========================================================

    #[test]
    fn test_common_random_number_greeks_near_analytic() {
        let mc = engine(100_000, 2024)
            .price(&atm(), OptionType::Call, OptionStyle::European)
            .unwrap()
            .greeks();
        let exact = BlackScholesEngine::new()
            .price_european(&atm(), OptionType::Call)
            .unwrap()
            .greeks();

        assert_relative_eq!(mc.delta, exact.delta, epsilon = 0.02);
        assert_relative_eq!(mc.vega, exact.vega, max_relative = 0.05);
        assert_relative_eq!(mc.rho, exact.rho, max_relative = 0.05);
        assert_relative_eq!(mc.theta, exact.theta, max_relative = 0.05);
        assert!(mc.gamma.is_finite());
    }

    #[test]
    fn test_deep_itm_and_otm_delta() {
        let itm = OptionParameters::new(1000.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let otm = OptionParameters::new(10.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let mc = engine(20_000, 5);

        let itm_delta = mc
            .price(&itm, OptionType::Call, OptionStyle::European)
            .unwrap()
            .greeks()
            .delta;
        let otm_delta = mc
            .price(&otm, OptionType::Call, OptionStyle::European)
            .unwrap()
            .greeks()
            .delta;

        assert_relative_eq!(itm_delta, 1.0, epsilon = 0.02);
        assert!(otm_delta.abs() < 1e-6);
    }

    #[test]
    fn test_asian_greeks_finite() {
        let mc = MonteCarloEngine::new(
            MonteCarloConfig::builder()
                .n_paths(5_000)
                .n_steps(20)
                .seed(3)
                .build()
                .unwrap(),
        );
        let g = mc
            .price(&atm(), OptionType::Put, OptionStyle::Asian)
            .unwrap()
            .greeks();
        assert!(g.is_finite());
        assert!(g.delta < 0.0);
        assert!(g.vega > 0.0);
    }
}
