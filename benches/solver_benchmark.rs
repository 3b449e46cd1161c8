// ============================================================================
// Quadratic Solver Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Square Root - Newton iteration across operand magnitudes
// 2. Full Solve - End-to-end root evaluation
// 3. Seed Regimes - Values below and above the raw-seed threshold (4.0)
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use quadratic_solver::prelude::*;
use std::hint::black_box;

const ONE: i128 = 1_000_000_000_000_000_000_000_000_000;

// ============================================================================
// Square Root Benchmarks
// ============================================================================

fn benchmark_sqrt_magnitudes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_magnitude");
    let fp = FixedPoint::default();

    // Whole-unit magnitudes from 10^0 to 10^30
    for exponent in [0u32, 10, 20, 30].iter() {
        let value = ScaledValue::from_raw(BigInt::from(10u32).pow(*exponent) * fp.scale().factor());

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("1e{}", exponent)),
            &value,
            |b, value| {
                b.iter(|| black_box(fp.sqrt(value)));
            },
        );
    }

    group.finish();
}

fn benchmark_sqrt_seed_regimes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_seed_regime");
    let fp = FixedPoint::default();

    let below = ScaledValue::from(3 * ONE);
    let above = ScaledValue::from(5 * ONE);

    group.bench_function("below_threshold", |b| {
        b.iter(|| black_box(fp.sqrt(&below)));
    });
    group.bench_function("above_threshold", |b| {
        b.iter(|| black_box(fp.sqrt(&above)));
    });

    group.finish();
}

// ============================================================================
// Full Solve Benchmarks
// ============================================================================

fn benchmark_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let solver = QuadraticSolver::default();

    let cases = [
        ("integer_roots", Coefficients::new(ONE, -3 * ONE, 2 * ONE)),
        ("double_root", Coefficients::new(ONE, -2 * ONE, ONE)),
        ("irrational_root", Coefficients::new(ONE, ONE, -ONE)),
        (
            "large_coefficients",
            Coefficients::new(ONE, -100_000_000_000 * ONE, ONE),
        ),
    ];

    for (name, coefficients) in cases.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), coefficients, |b, c| {
            b.iter(|| black_box(solver.solve(c)));
        });
    }

    group.finish();
}

fn benchmark_solve_rejected(c: &mut Criterion) {
    let solver = QuadraticSolver::default();
    let coefficients = Coefficients::new(ONE, 0, ONE);

    c.bench_function("solve_negative_discriminant", |b| {
        b.iter(|| black_box(solver.solve(&coefficients)));
    });
}

criterion_group!(
    benches,
    benchmark_sqrt_magnitudes,
    benchmark_sqrt_seed_regimes,
    benchmark_solve,
    benchmark_solve_rejected,
);
criterion_main!(benches);
