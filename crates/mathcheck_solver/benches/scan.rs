use criterion::{criterion_group, criterion_main, Criterion};
use mathcheck_parser::build_equation_evaluator;
use mathcheck_solver::{scan_for_roots, verify_and_augment_math_answer, ScanOptions};
use std::hint::black_box;

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let options = ScanOptions::default();

    let radical = build_equation_evaluator("sqrt(4 - x) = -2 + sqrt(5 - 2x)").unwrap();
    group.bench_function("radical_full_range", |b| {
        b.iter(|| black_box(scan_for_roots(|x| radical.eval(x), &[], &options)))
    });

    group.bench_function("radical_narrow_range", |b| {
        b.iter(|| black_box(scan_for_roots(|x| radical.eval(x), &[-4.0], &options)))
    });

    let cubic = build_equation_evaluator("x^3 - 6x^2 + 11x - 6 = 0").unwrap();
    group.bench_function("cubic_full_range", |b| {
        b.iter(|| black_box(scan_for_roots(|x| cubic.eval(x), &[], &options)))
    });

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let answer = "**Problem**: Solve $\\sqrt{4 - x} = -2 + \\sqrt{5 - 2x}$\n\n\
                  Normalized Equation: sqrt(4 - x) = -2 + sqrt(5 - 2x)\n\n\
                  Squaring both sides twice gives x² + 22x − 55 = 0.\n\
                  Final Answer: x = -4";
    group.bench_function("verify_and_augment_recovery", |b| {
        b.iter(|| black_box(verify_and_augment_math_answer(None, black_box(answer))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_scan, benchmark_pipeline);
criterion_main!(benches);
