//! Recombining lattice pricing.
//!
//! This module provides:
//! - [`CrrLattice`]: Cox-Ross-Rubinstein step parameters and backward induction
//! - [`BinomialTreeEngine`]: European and American prices with
//!   bump-and-revalue Greeks

mod binomial;

pub use binomial::{BinomialTreeEngine, CrrLattice};
