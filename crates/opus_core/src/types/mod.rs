//! Domain types for option pricing requests.
//!
//! This module provides:
//! - `params`: [`OptionParameters`], the validated market/contract inputs
//! - `option`: [`OptionType`] (call/put) and [`OptionStyle`] (exercise style)
//! - `error`: [`PricingError`], the typed failure shared by every engine

pub mod error;
pub mod option;
pub mod params;

pub use error::PricingError;
pub use option::{OptionStyle, OptionType};
pub use params::OptionParameters;
