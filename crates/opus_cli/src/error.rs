//! CLI error types

use thiserror::Error;

use opus_core::types::PricingError;

use crate::config::ConfigError;

/// Errors surfaced by the `opus` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected by the pricing library
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Bad configuration from file, environment or flags
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON rendering failed
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML rendering failed
    #[error("TOML output failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
