//! Criterion benchmarks for the ant colony search.
//!
//! Uses synthetic dense matrices to measure tour construction and the
//! full colony loop independent of any input format.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_antpath::aco::{AcoConfig, AcoRunner, Ant, PathProblem};
use u_antpath::matrix::{presets, DistanceMatrix, SquareMatrix};

// ===========================================================================
// Synthetic matrices
// ===========================================================================

/// Fully connected asymmetric matrix with pseudo-random costs in [1, 100].
fn dense_matrix(n: usize) -> DistanceMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        1.0 + ((i * 31 + j * 17) % 100) as f64
                    }
                })
                .collect()
        })
        .collect();
    DistanceMatrix::from_rows(rows).expect("valid matrix")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_construct_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_tour");

    for n in [12, 50, 200] {
        let dm = dense_matrix(n);
        let pheromone = SquareMatrix::filled(n, 1.0);
        let visibility = dm.visibility();

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                let mut ant = Ant::new(n, 0, n - 1);
                ant.construct_tour(&pheromone, &visibility, &dm, &mut rng);
                black_box(ant.distance())
            });
        });
    }

    group.finish();
}

fn bench_colony(c: &mut Criterion) {
    let mut group = c.benchmark_group("colony");
    group.sample_size(10);

    let demo = PathProblem::new(presets::demo_12(), 0, 11).expect("valid problem");
    let config = AcoConfig::default()
        .with_num_ants(50)
        .with_num_iterations(50)
        .with_seed(42);
    group.bench_function("demo_12", |b| {
        b.iter(|| black_box(AcoRunner::run(&demo, &config).expect("run")))
    });

    for n in [50, 100] {
        let problem = PathProblem::new(dense_matrix(n), 0, n - 1).expect("valid problem");
        let config = AcoConfig::default()
            .with_num_ants(20)
            .with_num_iterations(20)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::new("sequential", n), &problem, |b, p| {
            b.iter(|| black_box(AcoRunner::run(p, &config).expect("run")))
        });

        let parallel = config.clone().with_parallel(true);
        group.bench_with_input(BenchmarkId::new("parallel", n), &problem, |b, p| {
            b.iter(|| black_box(AcoRunner::run(p, &parallel).expect("run")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construct_tour, bench_colony);
criterion_main!(benches);
