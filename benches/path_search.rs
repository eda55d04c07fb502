use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kshortest::graph::generators::{generate_grid, generate_random};
use kshortest::{shortest_path, shortest_paths_batch, SearchMode, Yen};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark a single query on grids of growing size
fn bench_grid_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_shortest_path");

    for side in [20usize, 50, 100] {
        let graph = generate_grid(side, side);
        let target = side * side - 1;

        for mode in [SearchMode::Vanilla, SearchMode::Bidirectional] {
            group.bench_with_input(BenchmarkId::new(format!("{:?}", mode), side), &side, |b, _| {
                b.iter(|| black_box(shortest_path(&graph, &0, &target, mode)));
            });
        }
    }

    group.finish();
}

/// Benchmark a single query on sparse random graphs
fn bench_random_queries(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = generate_random(&mut rng, 10_000, 4.0, 1, 100);

    let mut group = c.benchmark_group("random_shortest_path");
    for mode in [SearchMode::Vanilla, SearchMode::Bidirectional] {
        group.bench_function(format!("{:?}", mode), |b| {
            b.iter(|| black_box(shortest_path(&graph, &0, &9_999, mode)));
        });
    }
    group.finish();
}

/// Benchmark k-shortest enumeration for a few values of k
fn bench_yen(c: &mut Criterion) {
    let graph = generate_grid(15, 15);
    let target = 15 * 15 - 1;

    let mut group = c.benchmark_group("yen_grid_15");
    group.sample_size(20);

    for k in [1usize, 5, 20] {
        group.throughput(Throughput::Elements(k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            let yen = Yen::new(SearchMode::Bidirectional);
            b.iter(|| black_box(yen.k_shortest_paths(&graph, &0, &target, k)));
        });
    }

    group.finish();
}

/// Benchmark parallel batch queries
fn bench_batch(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate_random(&mut rng, 5_000, 4.0, 1, 50);
    let queries: Vec<(usize, usize)> = (0..256).map(|i| (i * 13 % 5_000, i * 31 % 5_000)).collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("256_queries", |b| {
        b.iter(|| black_box(shortest_paths_batch(&graph, &queries, SearchMode::Bidirectional)));
    });
    group.finish();
}

criterion_group!(benches, bench_grid_queries, bench_random_queries, bench_yen, bench_batch);
criterion_main!(benches);
