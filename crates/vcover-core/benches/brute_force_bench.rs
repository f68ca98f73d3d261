//! Benchmarks for the brute-force vertex cover search
//!
//! Run with: cargo bench -p vcover-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vcover_core::{Assignment, BruteForce, RandomGraph, WeightMatrix, is_full_edge_coverage};

/// Benchmark the full search on random graphs of growing size
fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    group.sample_size(10);

    for n_nodes in &[8, 12, 16, 20] {
        let graph = RandomGraph::new(*n_nodes)
            .with_edge_probability(0.3)
            .with_seed(10_598)
            .generate()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("random_p0.3", n_nodes), &graph, |b, g| {
            b.iter(|| BruteForce::new().solve(black_box(g)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark a single coverage check
fn bench_coverage_check(c: &mut Criterion) {
    let graph = WeightMatrix::complete(20);
    let candidate = Assignment::from_index((1 << 19) - 1, 20);

    c.bench_function("coverage_check_k20", |b| {
        b.iter(|| is_full_edge_coverage(black_box(&candidate), black_box(&graph)));
    });
}

criterion_group!(benches, bench_brute_force, bench_coverage_check);
criterion_main!(benches);
