//! Single entry point for pricing requests.
//!
//! This module provides:
//! - [`PricingRequest`] and [`ModelConfig`]: what to price and with which model
//! - [`Engine`]: enum dispatch over the three engines
//! - [`PricingFacade`]: validation, dispatch, batch pricing and model comparison
//!
//! ## Style/model compatibility
//!
//! | Style | Black-Scholes | Binomial | Monte Carlo |
//! |-------|---------------|----------|-------------|
//! | European | yes | yes | yes |
//! | American | no | yes | no |
//! | Asian | no | no | yes |
//!
//! An unsupported combination fails with `PricingError::InvalidRequest`
//! before any numerical work starts.

mod dispatch;
mod pricing;
mod request;

pub use dispatch::Engine;
pub use pricing::{ModelComparison, PricingFacade};
pub use request::{ModelConfig, ModelKind, PricingRequest};
