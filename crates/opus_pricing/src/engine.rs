//! Common interface of the pricing engines.
//!
//! Every engine holds its numerical settings (step count, path count, bump
//! sizes) and prices one `(parameters, option type, style)` triple at a time.
//! Dispatch across engines is enum-based; see
//! [`Engine`](crate::facade::Engine).

use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

use crate::greeks::PricingResult;

/// An option pricing engine.
///
/// # Invariants
/// - `price` is pure: the same inputs (and, for Monte Carlo, the same seed)
///   give a bit-identical result.
/// - A successful result carries a non-negative price and finite Greeks.
/// - A style the engine cannot price is rejected with
///   `PricingError::InvalidRequest`, never silently approximated.
pub trait PricingEngine {
    /// Human-readable engine name.
    fn name(&self) -> &'static str;

    /// Returns whether this engine can price `style`.
    fn supports(&self, style: OptionStyle) -> bool;

    /// Prices the option and computes its Greeks.
    fn price(
        &self,
        params: &OptionParameters,
        option_type: OptionType,
        style: OptionStyle,
    ) -> Result<PricingResult, PricingError>;
}

/// Rejects a style the engine does not support.
pub(crate) fn ensure_supported<E: PricingEngine + ?Sized>(
    engine: &E,
    style: OptionStyle,
) -> Result<(), PricingError> {
    if engine.supports(style) {
        Ok(())
    } else {
        Err(PricingError::InvalidRequest(format!(
            "{} engine cannot price {} options",
            engine.name(),
            style
        )))
    }
}
