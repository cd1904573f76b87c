//! Criterion benchmarks for u-swarm optimization algorithms.
//!
//! Uses the built-in problem instances (a 10-city Euclidean tour, the
//! sphere function) to measure pure algorithm overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_swarm::aco::{AcoConfig, AcoRunner, EuclideanTour};
use u_swarm::cuckoo::{CuckooConfig, CuckooRunner, Sphere};

/// The classic 10-city demo instance.
fn ten_cities() -> EuclideanTour {
    EuclideanTour::new(vec![
        (0.0, 0.0),
        (1.0, 1.0),
        (2.0, 0.0),
        (1.0, 2.0),
        (3.0, 3.0),
        (4.0, 1.0),
        (2.0, 4.0),
        (0.0, 3.0),
        (3.0, 0.0),
        (1.0, 3.0),
    ])
}

fn bench_aco_ten_cities(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_ten_cities");
    group.sample_size(10);

    for &ants in &[5usize, 20, 50] {
        let problem = ten_cities();
        let config = AcoConfig::default()
            .with_num_ants(ants)
            .with_max_iterations(100)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(ants),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_cuckoo_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("cuckoo_sphere");
    group.sample_size(10);

    for &dim in &[2usize, 10, 50] {
        let problem = Sphere::new(dim);
        let config = CuckooConfig::default()
            .with_num_nests(25)
            .with_max_iterations(100)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = CuckooRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_aco_ten_cities, bench_cuckoo_sphere);
criterion_main!(benches);
