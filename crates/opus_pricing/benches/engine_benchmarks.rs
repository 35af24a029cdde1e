//! Criterion benchmarks for the pricing engines.
//!
//! Measures closed-form pricing, lattice scaling in step count and Monte
//! Carlo scaling in path count, each with the full set of Greeks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use opus_core::types::{OptionParameters, OptionStyle, OptionType};
use opus_pricing::analytical::BlackScholesEngine;
use opus_pricing::facade::{ModelConfig, PricingFacade, PricingRequest};
use opus_pricing::lattice::{BinomialTreeEngine, CrrLattice};
use opus_pricing::mc::{MonteCarloConfig, MonteCarloEngine};
use opus_pricing::PricingEngine;

fn atm() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
}

/// Benchmark Black-Scholes price and analytic Greeks.
fn bench_black_scholes(c: &mut Criterion) {
    let engine = BlackScholesEngine::new();
    let params = atm();

    c.bench_function("black_scholes/price_with_greeks", |b| {
        b.iter(|| {
            engine
                .price_european(black_box(&params), OptionType::Call)
                .unwrap()
        })
    });
}

/// Benchmark a single backward induction and a full Greeks run.
fn bench_binomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial");
    let params = atm();

    for steps in [100, 500, 1000] {
        group.bench_with_input(BenchmarkId::new("roll_back", steps), &steps, |b, &steps| {
            let lattice = CrrLattice::new(&params, steps).unwrap();
            b.iter(|| lattice.roll_back(OptionType::Put, black_box(OptionStyle::American)));
        });

        group.bench_with_input(
            BenchmarkId::new("price_with_greeks", steps),
            &steps,
            |b, &steps| {
                let engine = BinomialTreeEngine::new(steps).unwrap();
                b.iter(|| {
                    engine
                        .price(black_box(&params), OptionType::Put, OptionStyle::American)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark Monte Carlo European and Asian pricing.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(10);
    let params = atm();

    for paths in [10_000, 100_000] {
        let engine = MonteCarloEngine::new(
            MonteCarloConfig::builder()
                .n_paths(paths)
                .seed(42)
                .build()
                .unwrap(),
        );

        group.bench_with_input(BenchmarkId::new("european_estimate", paths), &engine, |b, engine| {
            b.iter(|| {
                engine
                    .estimate(black_box(&params), OptionType::Call, OptionStyle::European, 42)
                    .unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("asian_estimate", paths), &engine, |b, engine| {
            b.iter(|| {
                engine
                    .estimate(black_box(&params), OptionType::Call, OptionStyle::Asian, 42)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark parallel batch pricing through the facade.
fn bench_batch(c: &mut Criterion) {
    let facade = PricingFacade::new();
    let requests: Vec<PricingRequest> = (0..64)
        .map(|i| {
            let params = OptionParameters::new(100.0, 80.0 + i as f64, 1.0, 0.05, 0.2).unwrap();
            PricingRequest::new(
                params,
                ModelConfig::Binomial { steps: 200 },
                OptionStyle::American,
                OptionType::Put,
            )
        })
        .collect();

    c.bench_function("facade/price_batch_64_binomial", |b| {
        b.iter(|| facade.price_batch(black_box(&requests)))
    });
}

criterion_group!(
    benches,
    bench_black_scholes,
    bench_binomial,
    bench_monte_carlo,
    bench_batch
);
criterion_main!(benches);
