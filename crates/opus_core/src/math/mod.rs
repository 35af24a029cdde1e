//! Mathematical primitives shared by every pricing engine.
//!
//! This module provides:
//! - `distributions`: standard normal CDF and PDF
//! - `discounting`: continuous-compounding discount factors

pub mod discounting;
pub mod distributions;

pub use discounting::discount;
pub use distributions::{norm_cdf, norm_pdf, CDF_SATURATION};
