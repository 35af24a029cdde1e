//! Greeks results and finite-difference configuration.
//!
//! This module provides:
//! - [`Greeks`]: the five first- and second-order sensitivities
//! - [`PricingResult`]: price, Greeks and optional Monte Carlo standard error
//! - [`GreeksConfig`]: bump sizes for bump-and-revalue engines
//!
//! The lattice and Monte Carlo engines share one bump-and-revalue routine so
//! that both use the same step sizes and sign conventions. Theta is always
//! reported as the change in value per year of calendar time passing,
//! i.e. `-∂V/∂T`, which is negative for a long vanilla call.

mod bump;
mod config;
mod result;

pub use config::{GreeksConfig, GreeksConfigBuilder, GreeksConfigError};
pub use result::{Greeks, PricingResult};

pub(crate) use bump::{bump_and_revalue, BumpSizes, ThetaScheme};
