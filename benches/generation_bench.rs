//! Eager vs lazy generation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ruler_ticks::{generate_all, generate_lazy};

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ruler_ticks");

    for height in [5, 10, 15] {
        group.bench_with_input(BenchmarkId::new("eager", height), &height, |b, &h| {
            b.iter(|| generate_all(0.0, black_box(1024.0), black_box(h)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("lazy", height), &height, |b, &h| {
            b.iter(|| {
                generate_lazy(0.0, black_box(1024.0), black_box(h))
                    .unwrap()
                    .fold(0.0, |acc, tick| acc + tick.position)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_generation);
criterion_main!(benches);
