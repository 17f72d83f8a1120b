//! Criterion benchmarks for polyline bend extraction.
//! Focus sizes: n in {10, 100, 1000} points.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polybend::bend::line_angles;
use polybend::rand::{draw_polyline, ReplayToken, WalkCfg};

fn bench_line_angles(c: &mut Criterion) {
    let mut group = c.benchmark_group("bend");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("line_angles", n), &n, |b, &n| {
            let cfg = WalkCfg {
                steps: n.saturating_sub(1),
                ..WalkCfg::default()
            };
            b.iter_batched(
                || draw_polyline(cfg, ReplayToken { seed: 43, index: 0 }),
                |pts| {
                    let _res = line_angles(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line_angles);
criterion_main!(benches);
