//! # opus_core: Numerical Foundation for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! opus_core is the bottom layer of the OPUS workspace, providing:
//! - Standard normal CDF/PDF and discounting (`math`)
//! - Seeded, per-call random number generation (`rng`)
//! - Validated option parameters, option/exercise types and errors (`types`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other opus_* crates, with minimal external dependencies:
//! - statrs: double-precision complementary error function
//! - rand / rand_distr: seedable generator and Ziggurat normal sampling
//! - thiserror: error derivation
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use opus_core::math::{discount, norm_cdf};
//! use opus_core::types::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!((params.discount_factor() - discount(0.05, 1.0)).abs() < 1e-15);
//! assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for parameters, option types and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod types;
