//! Performance benchmarks for report parsing and evaluation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use statmon::poller::check_report;
use statmon::report::{evaluate, parse};

const REPORTS: [(&str, &str); 3] = [
    ("quiet", "1.5,1000,100,1000000000,100000000,100000000,1000000"),
    ("loud", "31,100,81,1000000000,950000000,100000000,95000000"),
    (
        "padded",
        "  45.678 , 17179869184 , 16106127360 , 536870912000 , 531502202880 , 125000000 , 120000000 \r\n",
    ),
];

/// Benchmark parsing alone
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, raw) in REPORTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
            b.iter(|| black_box(parse(black_box(raw))))
        });
    }

    group.finish();
}

/// Benchmark the threshold rules on an already parsed report
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, raw) in REPORTS.iter() {
        let report = parse(raw).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &report, |b, report| {
            b.iter(|| black_box(evaluate(black_box(report))))
        });
    }

    group.finish();
}

/// Benchmark the full per-cycle path, including alert rendering
fn bench_check_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_and_render");

    for (name, raw) in REPORTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
            b.iter(|| {
                let lines: Vec<String> = check_report(black_box(raw))
                    .unwrap_or_default()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                black_box(lines)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_evaluate, bench_check_and_render);
criterion_main!(benches);
