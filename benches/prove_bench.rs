use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use mathsproofbot::core::parse::parse;
use mathsproofbot::core::prove::prove;
use mathsproofbot::core::{fitch, prop::Prop};

/// Benchmark parsing of nested propositions.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let inputs = [
        ("identity", "a>a"),
        ("transitivity", "((a>b)&(b>c))>(a>c)"),
        ("wide", "(a|b)&(c|d)&(e|f)&(g|h)"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("proposition", name), input, |b, input| {
            b.iter(|| parse(black_box(input)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark proof search over theorems of increasing difficulty.
fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove");
    group.sample_size(20);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    let theorems = [
        ("identity", "a>a"),
        ("modus_ponens", "(a&(a>b))>b"),
        ("transitivity", "((a>b)&(b>c))>(a>c)"),
        ("excluded_middle", "a|-a"),
        ("peirce", "((a>b)>a)>a"),
    ];

    for (name, input) in theorems {
        let prop = parse(input).unwrap();
        group.bench_with_input(BenchmarkId::new("theorem", name), &prop, |b, prop| {
            b.iter(|| prove(black_box(prop), 25).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the full challenge pipeline: parse, prove, render.
fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("pipeline/transitivity", |b| {
        b.iter(|| {
            let prop: Prop = parse(black_box("((a>b)&(b>c))>(a>c)")).unwrap();
            let proof = prove(&prop, 25).unwrap();
            black_box(fitch::pretty_print(&proof));
        });
    });
}

criterion_group!(benches, bench_parse, bench_prove, bench_pipeline);
criterion_main!(benches);
