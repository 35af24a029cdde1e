//! Monte Carlo pricing under risk-neutral geometric Brownian motion.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── MonteCarloConfig  (paths, Asian monitoring steps, optional seed)
//! ├── GbmStepper        (exact log-space GBM step)
//! ├── PathPayoff        (terminal or arithmetic-average payoff)
//! └── PricerRng         (one generator per valuation, reseeded per bump)
//! ```
//!
//! Paths are streamed one at a time through a single buffer, so memory use
//! is independent of the path count. Greeks are central differences in
//! which every bumped valuation restarts the generator from the same seed;
//! the base and bumped prices therefore share their normal draws (common
//! random numbers) and the sampling noise largely cancels in the difference.
//!
//! # Examples
//!
//! ```rust
//! use opus_core::types::{OptionParameters, OptionStyle, OptionType};
//! use opus_pricing::mc::{MonteCarloConfig, MonteCarloEngine};
//! use opus_pricing::PricingEngine;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let engine = MonteCarloEngine::new(config);
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//!
//! let result = engine.price(&params, OptionType::Call, OptionStyle::European).unwrap();
//! assert!((result.price() - 10.45).abs() < 5.0 * result.std_error().unwrap());
//! ```

mod config;
mod paths;
mod payoff;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_ASIAN_STEPS};
pub use paths::GbmStepper;
pub use payoff::PathPayoff;
pub use pricer::{MonteCarloEngine, MonteCarloEstimate};
