// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Alignment - Zero-padding operands of different shapes
// 2. Operators - Addition and subtraction at growing widths
// 3. Session - Keystroke-driven evaluation through the calculator
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use digit_calculator::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

fn operand(width: usize, fill: char) -> DigitSequence {
    let integer: String = std::iter::repeat(fill).take(width).collect();
    let fraction: String = std::iter::repeat(fill).take(width / 2).collect();
    format!("{}.{}", integer, fraction).parse().unwrap_or_default()
}

// ============================================================================
// Alignment
// ============================================================================

fn benchmark_level_up_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_up_numbers");

    for width in [8, 64, 512].iter() {
        let first = operand(*width, '9');
        let second: DigitSequence = "1.5".parse().unwrap_or_default();

        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &(first, second),
            |b, (first, second)| {
                b.iter(|| black_box(level_up_numbers(first, second)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Operators
// ============================================================================

fn benchmark_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    let notation = Notation::default();

    for width in [8, 64, 512].iter() {
        // All nines forces a carry through every position
        let first = operand(*width, '9');
        let second = operand(*width, '1');

        group.bench_with_input(
            BenchmarkId::new("Addition", width),
            &(&first, &second),
            |b, (first, second)| {
                b.iter(|| black_box(Addition.compute(&notation, first, second)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Subtraction", width),
            &(&second, &first),
            |b, (first, second)| {
                b.iter(|| black_box(Subtraction.compute(&notation, first, second)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Session
// ============================================================================

fn benchmark_keyed_evaluation(c: &mut Criterion) {
    c.bench_function("keyed_evaluation", |b| {
        b.iter(|| {
            let mut calc = CalculatorBuilder::new()
                .with_max_places(32)
                .build(Arc::new(NoOpEventHandler))
                .unwrap();
            black_box(calc.submit_str("123456789.25+987654321.75=").unwrap());
            black_box(calc.submit_str("1000-0.001=").unwrap());
        });
    });
}

criterion_group!(
    benches,
    benchmark_level_up_numbers,
    benchmark_operators,
    benchmark_keyed_evaluation,
);
criterion_main!(benches);
