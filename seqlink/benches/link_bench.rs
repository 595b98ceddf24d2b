//! Benchmarks for link resolution and line rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqlink::prelude::*;

fn resolve_benchmark(c: &mut Criterion) {
    let resolver = LinkResolver::default().with_warning_sink(std::sync::Arc::new(NoOpWarningSink));
    let coords = HitCoordinates::new(12_000, 12_500);

    c.bench_function("resolve_local", |b| {
        b.iter(|| resolver.resolve(black_box("lcl|scaffold00042 length=2000000"), coords))
    });
    c.bench_function("resolve_global_label", |b| {
        b.iter(|| resolver.resolve(black_box("gnl|Amborella|AmTr_v1.0_scaffold00001.1"), coords))
    });
    c.bench_function("resolve_unparsed", |b| {
        b.iter(|| resolver.resolve(black_box("sp|P69905|HBA_HUMAN"), coords))
    });
}

fn render_benchmark(c: &mut Criterion) {
    let renderer = LineRenderer::new(
        LinkResolver::default().with_warning_sink(std::sync::Arc::new(NoOpWarningSink)),
    );
    let standard = |id: &str, _: HitCoordinates| format!("/get_sequence/?id={id}");
    let hits: Vec<HitDescriptor> = (1..=100_u64)
        .map(|i| {
            HitDescriptor::new(
                format!("lcl|scaffold_{i} "),
                HitCoordinates::new(i * 100, i * 100 + 50),
            )
        })
        .collect();

    c.bench_function("render_all_100", |b| {
        b.iter(|| renderer.render_all(black_box(&hits), &standard))
    });
}

criterion_group!(benches, resolve_benchmark, render_benchmark);
criterion_main!(benches);
