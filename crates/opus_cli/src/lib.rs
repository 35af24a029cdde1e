//! # OPUS CLI
//!
//! Command-line front end for the OPUS pricing engines.
//!
//! ## Commands
//!
//! - `opus price` - Price one option with a chosen model
//! - `opus compare` - Price a European option with every model side by side
//! - `opus check` - Print the resolved configuration
//!
//! ## Layer Role
//!
//! This crate is the only one that logs or reads the environment. The
//! pricing crates stay pure; this layer resolves settings, builds
//! requests, and renders the results.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
