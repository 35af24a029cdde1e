//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for Monte Carlo simulation.
//!
//! ## Properties
//!
//! - **Reproducibility**: Every generator is built from an explicit `u64` seed
//! - **Per-call ownership**: No process-wide generator exists; each valuation
//!   owns its own [`PricerRng`], so concurrent pricing needs no locking
//! - **Batching**: `fill_normal` writes into caller-owned buffers
//!
//! ## Usage Example
//!
//! ```rust
//! use opus_core::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Single standard normal variate
//! let z = rng.gen_normal();
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // Owned batch of draws
//! let draws = rng.sample_standard_normal(64);
//! assert_eq!(draws.len(), 64);
//! # let _ = z;
//! ```

mod prng;

pub use prng::PricerRng;
