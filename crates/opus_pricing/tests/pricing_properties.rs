//! Cross-engine properties of the pricing library.
//!
//! # Test Categories
//!
//! 1. **Parity and convergence**: Black-Scholes parity, lattice and Monte
//!    Carlo convergence to the closed form
//! 2. **Early exercise**: American vs European lattice prices
//! 3. **Greeks limits**: deep in- and out-of-the-money delta
//! 4. **Validation**: invalid parameters and unsupported style/model pairs
//! 5. **Idempotence**: identical requests give bit-identical results

use approx::assert_relative_eq;
use opus_core::types::{OptionParameters, OptionStyle, OptionType};
use opus_pricing::analytical::BlackScholesEngine;
use opus_pricing::facade::{ModelConfig, PricingFacade, PricingRequest};
use opus_pricing::lattice::BinomialTreeEngine;
use opus_pricing::mc::{MonteCarloConfig, MonteCarloEngine};
use opus_pricing::PricingEngine;
use proptest::prelude::*;

const BS_ATM_CALL: f64 = 10.450583572185565;

fn atm() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
}

fn request(model: ModelConfig, style: OptionStyle, option_type: OptionType) -> PricingRequest {
    PricingRequest::new(atm(), model, style, option_type)
}

// ============================================================================
// Parity and convergence
// ============================================================================

#[test]
fn test_put_call_parity_closed_form() {
    let engine = BlackScholesEngine::new();
    for (spot, strike, expiry, rate, vol) in [
        (100.0, 100.0, 1.0, 0.05, 0.2),
        (50.0, 120.0, 2.5, 0.01, 0.6),
        (300.0, 250.0, 0.1, 0.08, 0.15),
        (100.0, 100.0, 1.0, -0.01, 0.3),
    ] {
        let p = OptionParameters::new(spot, strike, expiry, rate, vol).unwrap();
        let call = engine.price_european(&p, OptionType::Call).unwrap().price();
        let put = engine.price_european(&p, OptionType::Put).unwrap().price();
        assert_relative_eq!(
            call - put,
            spot - strike * (-rate * expiry).exp(),
            epsilon = 1e-8
        );
    }
}

#[test]
fn test_binomial_converges_at_500_steps() {
    let tree = BinomialTreeEngine::new(500)
        .unwrap()
        .price(&atm(), OptionType::Call, OptionStyle::European)
        .unwrap();
    assert_relative_eq!(tree.price(), BS_ATM_CALL, max_relative = 0.01);
}

#[test]
fn test_binomial_error_shrinks_with_steps() {
    let engine = |steps| BinomialTreeEngine::new(steps).unwrap();
    let error = |steps| {
        (engine(steps)
            .value(&atm(), OptionType::Call, OptionStyle::European)
            .unwrap()
            - BS_ATM_CALL)
            .abs()
    };
    assert!(error(400) < error(50));
}

#[test]
fn test_monte_carlo_converges_at_200k_paths() {
    let engine = MonteCarloEngine::new(
        MonteCarloConfig::builder()
            .n_paths(200_000)
            .seed(12345)
            .build()
            .unwrap(),
    );
    let mc = engine
        .estimate(&atm(), OptionType::Call, OptionStyle::European, 12345)
        .unwrap();
    assert_relative_eq!(mc.price, BS_ATM_CALL, max_relative = 0.02);
}

// ============================================================================
// Early exercise
// ============================================================================

#[test]
fn test_american_call_matches_european_at_200_steps() {
    let facade = PricingFacade::new();
    let model = ModelConfig::Binomial { steps: 200 };
    let american = facade
        .price(&request(model, OptionStyle::American, OptionType::Call))
        .unwrap();
    let european = facade
        .price(&request(model, OptionStyle::European, OptionType::Call))
        .unwrap();
    assert_relative_eq!(american.price(), european.price(), epsilon = 1e-10);
}

#[test]
fn test_american_put_at_least_intrinsic_and_european() {
    let facade = PricingFacade::new();
    let model = ModelConfig::Binomial { steps: 200 };
    for spot in [60.0, 90.0, 100.0, 130.0] {
        let params = atm().with_spot(spot).unwrap();
        let american = facade
            .price(&PricingRequest::new(
                params,
                model,
                OptionStyle::American,
                OptionType::Put,
            ))
            .unwrap()
            .price();
        let european = facade
            .price(&PricingRequest::new(
                params,
                model,
                OptionStyle::European,
                OptionType::Put,
            ))
            .unwrap()
            .price();
        assert!(american >= european - 1e-12);
        assert!(american >= (100.0 - spot).max(0.0) - 1e-12);
    }
}

// ============================================================================
// Greeks limits
// ============================================================================

#[test]
fn test_delta_limits_for_every_model() {
    let facade = PricingFacade::new();
    let models = [
        ModelConfig::BlackScholes,
        ModelConfig::Binomial { steps: 200 },
        ModelConfig::MonteCarlo {
            paths: 20_000,
            steps: None,
            seed: Some(77),
        },
    ];

    for model in models {
        let deep_itm = PricingRequest::new(
            OptionParameters::new(1000.0, 100.0, 1.0, 0.05, 0.2).unwrap(),
            model,
            OptionStyle::European,
            OptionType::Call,
        );
        let deep_otm = PricingRequest::new(
            OptionParameters::new(10.0, 100.0, 1.0, 0.05, 0.2).unwrap(),
            model,
            OptionStyle::European,
            OptionType::Call,
        );

        let itm_delta = facade.price(&deep_itm).unwrap().greeks().delta;
        let otm_delta = facade.price(&deep_otm).unwrap().greeks().delta;
        assert_relative_eq!(itm_delta, 1.0, epsilon = 0.02);
        assert!(otm_delta.abs() < 1e-3, "{:?}: {}", model, otm_delta);
    }
}

#[test]
fn test_theta_negative_for_long_call() {
    let facade = PricingFacade::new();
    for model in [
        ModelConfig::BlackScholes,
        ModelConfig::Binomial { steps: 200 },
        ModelConfig::MonteCarlo {
            paths: 20_000,
            steps: None,
            seed: Some(5),
        },
    ] {
        let theta = facade
            .price(&request(model, OptionStyle::European, OptionType::Call))
            .unwrap()
            .greeks()
            .theta;
        assert!(theta < 0.0, "{:?}: {}", model, theta);
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_zero_inputs_are_invalid_parameters() {
    for (s, k, t, v) in [
        (0.0, 100.0, 1.0, 0.2),
        (100.0, 0.0, 1.0, 0.2),
        (100.0, 100.0, 0.0, 0.2),
        (100.0, 100.0, 1.0, 0.0),
    ] {
        let err = OptionParameters::new(s, k, t, 0.05, v).unwrap_err();
        assert!(err.is_invalid_parameters());
    }
}

#[test]
fn test_unsupported_combinations_are_invalid_requests() {
    let facade = PricingFacade::new();
    let mc = ModelConfig::MonteCarlo {
        paths: 100,
        steps: None,
        seed: Some(1),
    };

    let american_mc = facade.price(&request(mc, OptionStyle::American, OptionType::Put));
    assert!(american_mc.unwrap_err().is_invalid_request());

    let asian_bs = facade.price(&request(
        ModelConfig::BlackScholes,
        OptionStyle::Asian,
        OptionType::Call,
    ));
    assert!(asian_bs.unwrap_err().is_invalid_request());
}

#[test]
fn test_lattice_probability_failure_is_invalid_parameters() {
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.5, 0.1).unwrap();
    let err = PricingFacade::new()
        .price(&PricingRequest::new(
            params,
            ModelConfig::Binomial { steps: 1 },
            OptionStyle::European,
            OptionType::Call,
        ))
        .unwrap_err();
    assert!(err.is_invalid_parameters());
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_repeated_requests_are_bit_identical() {
    let facade = PricingFacade::new();
    let requests = [
        request(ModelConfig::BlackScholes, OptionStyle::European, OptionType::Put),
        request(
            ModelConfig::Binomial { steps: 120 },
            OptionStyle::American,
            OptionType::Put,
        ),
        request(
            ModelConfig::MonteCarlo {
                paths: 4_000,
                steps: Some(24),
                seed: Some(2024),
            },
            OptionStyle::Asian,
            OptionType::Call,
        ),
    ];

    for req in &requests {
        assert_eq!(facade.price(req).unwrap(), facade.price(req).unwrap());
    }

    // Parallel batch pricing gives the same answers as sequential calls
    let batch = facade.price_batch(&requests);
    for (req, result) in requests.iter().zip(batch) {
        assert_eq!(result.unwrap(), facade.price(req).unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_lattice_results_non_negative_and_finite(
        spot in 20.0f64..200.0,
        strike in 20.0f64..200.0,
        expiry in 0.05f64..3.0,
        rate in 0.0f64..0.1,
        vol in 0.1f64..0.8,
        american in any::<bool>(),
    ) {
        let params = OptionParameters::new(spot, strike, expiry, rate, vol).unwrap();
        let style = if american { OptionStyle::American } else { OptionStyle::European };
        let engine = BinomialTreeEngine::new(64).unwrap();
        for option_type in [OptionType::Call, OptionType::Put] {
            let result = engine.price(&params, option_type, style).unwrap();
            prop_assert!(result.price() >= 0.0);
            prop_assert!(result.greeks().is_finite());
        }
    }

    #[test]
    fn prop_monte_carlo_results_non_negative_and_finite(
        spot in 20.0f64..200.0,
        strike in 20.0f64..200.0,
        vol in 0.1f64..0.8,
        seed in any::<u64>(),
    ) {
        let params = OptionParameters::new(spot, strike, 1.0, 0.03, vol).unwrap();
        let engine = MonteCarloEngine::new(
            MonteCarloConfig::builder().n_paths(500).n_steps(8).build().unwrap(),
        );
        for style in [OptionStyle::European, OptionStyle::Asian] {
            let result = engine.price_with_seed(&params, OptionType::Put, style, seed).unwrap();
            prop_assert!(result.price() >= 0.0);
            prop_assert!(result.greeks().is_finite());
            prop_assert!(result.std_error().unwrap() >= 0.0);
        }
    }
}
