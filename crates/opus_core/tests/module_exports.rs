//! Integration tests for module exports.
//!
//! Verify that the public modules and re-exports are reachable via absolute
//! paths, the way the pricing crate consumes them.

/// Math kernel functions are accessible at module and submodule level.
#[test]
fn test_math_module_exports() {
    use opus_core::math::discounting::discount as discount_full;
    use opus_core::math::distributions::{norm_cdf as cdf_full, norm_pdf as pdf_full};
    use opus_core::math::{discount, norm_cdf, norm_pdf, CDF_SATURATION};

    assert_eq!(norm_cdf(0.3), cdf_full(0.3));
    assert_eq!(norm_pdf(0.3), pdf_full(0.3));
    assert_eq!(discount(0.05, 2.0), discount_full(0.05, 2.0));
    assert_eq!(CDF_SATURATION, 8.0);
}

/// RNG is exported and usable without further imports.
#[test]
fn test_rng_module_exports() {
    use opus_core::rng::PricerRng;

    let mut rng = PricerRng::from_seed(3);
    assert_eq!(rng.seed(), 3);
    assert_eq!(rng.sample_standard_normal(5).len(), 5);
}

/// Domain types are re-exported from `types`.
#[test]
fn test_types_module_exports() {
    use opus_core::types::error::PricingError as FullPathError;
    use opus_core::types::{OptionParameters, OptionStyle, OptionType, PricingError};

    let params = OptionParameters::new(100.0, 95.0, 0.5, 0.01, 0.3).unwrap();
    assert_eq!(OptionType::Put.intrinsic(params.spot(), params.strike()), 0.0);
    assert!(OptionStyle::American.allows_early_exercise());

    let err: FullPathError = PricingError::InvalidRequest("x".to_string());
    assert!(err.is_invalid_request());
}
