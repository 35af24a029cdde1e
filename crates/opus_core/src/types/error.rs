//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and pricing requests

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every engine either succeeds with a valid result or fails with one of
/// these variants. Nothing is clamped to a "safe" default.
///
/// # Variants
/// - `InvalidParameters`: non-positive or non-finite market/contract inputs,
///   degenerate volatility-time product, risk-neutral probability outside (0, 1)
/// - `InvalidRequest`: unsupported model/style combination, non-positive
///   step or path counts, unparsable option type or style
///
/// # Examples
/// ```
/// use opus_core::types::PricingError;
///
/// let err = PricingError::InvalidParameters("spot must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid parameters: spot must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid market data or contract parameters.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Request that no engine can serve as specified.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PricingError {
    /// Returns whether this is an `InvalidParameters` error.
    #[inline]
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, PricingError::InvalidParameters(_))
    }

    /// Returns whether this is an `InvalidRequest` error.
    #[inline]
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, PricingError::InvalidRequest(_))
    }
}
