//! Closed-form pricing.
//!
//! This module provides:
//! - [`BlackScholesEngine`]: European prices and analytic Greeks under
//!   lognormal dynamics

mod black_scholes;

pub use black_scholes::BlackScholesEngine;
