//! # opus_pricing: Option Pricing Engines
//!
//! ## Layer 2 (Pricing) Role
//!
//! opus_pricing turns validated [`OptionParameters`](opus_core::types::OptionParameters)
//! into prices and Greeks:
//! - Closed-form Black-Scholes for European options (`analytical`)
//! - Cox-Ross-Rubinstein binomial tree for European and American options (`lattice`)
//! - Monte Carlo simulation for European and Asian options (`mc`)
//! - Greeks result types and bump configuration (`greeks`)
//! - Request validation, dispatch, batch pricing and comparison (`facade`)
//!
//! Every engine is a pure function of its inputs. Monte Carlo draws come
//! from a generator created per valuation, so there is no shared mutable
//! state and no locking anywhere in the crate. Nothing here logs; callers
//! decide what to report.
//!
//! ## Usage Examples
//!
//! ```rust
//! use opus_core::types::{OptionParameters, OptionStyle, OptionType};
//! use opus_pricing::facade::{ModelConfig, PricingFacade, PricingRequest};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let request = PricingRequest::new(
//!     params,
//!     ModelConfig::MonteCarlo { paths: 20_000, steps: None, seed: Some(42) },
//!     OptionStyle::European,
//!     OptionType::Call,
//! );
//!
//! let result = PricingFacade::new().price(&request).unwrap();
//! assert!(result.price() > 9.5 && result.price() < 11.5);
//! assert!(result.greeks().is_finite());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for results, Greeks and model kinds

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod facade;
pub mod greeks;
pub mod lattice;
pub mod mc;

pub use engine::PricingEngine;
pub use greeks::{Greeks, PricingResult};
