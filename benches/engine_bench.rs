//! Criterion benchmarks for the iteration engine.
//!
//! Uses the synthetic sphere function to measure pure engine overhead —
//! initialization, one firefly round under both shipped topologies, and
//! best-extraction — independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metapop::algorithm::{Algorithm, ClonedPopulationInitialization};
use metapop::comparator::FitnessOrdering;
use metapop::entity::PointEntity;
use metapop::firefly::FireflyIteration;
use metapop::problem::{Bounds, FnProblem};
use metapop::topology::LBestTopology;

const DIMENSION: usize = 10;

fn sphere_fitness(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

type Sphere = FnProblem<fn(&[f64]) -> f64>;

fn engine(population: usize) -> Algorithm<Sphere, PointEntity> {
    let problem: Sphere =
        FnProblem::new(Bounds::symmetric(DIMENSION, 5.0).unwrap(), sphere_fitness);
    Algorithm::new(problem)
        .with_fitness_ordering(FitnessOrdering::Ascending)
        .with_iteration_strategy(FireflyIteration::default())
        .with_initialization_strategy(
            ClonedPopulationInitialization::new()
                .with_prototype(PointEntity::new(DIMENSION))
                .with_population_size(population),
        )
        .with_seed(42)
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for population in [25, 50, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, &population| {
                b.iter(|| {
                    let mut algorithm = engine(population);
                    algorithm.initialize().unwrap();
                    black_box(algorithm.topology().len())
                });
            },
        );
    }
    group.finish();
}

fn bench_iterate_gbest(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_gbest");
    for population in [25, 50] {
        let mut algorithm = engine(population);
        algorithm.initialize().unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, _| {
                b.iter(|| {
                    algorithm.iterate().unwrap();
                    black_box(algorithm.iterations())
                });
            },
        );
    }
    group.finish();
}

fn bench_iterate_lbest(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_lbest");
    for population in [25, 50] {
        let mut algorithm = engine(population)
            .with_topology(LBestTopology::new().with_neighborhood_size(3));
        algorithm.initialize().unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, _| {
                b.iter(|| {
                    algorithm.iterate().unwrap();
                    black_box(algorithm.iterations())
                });
            },
        );
    }
    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut algorithm = engine(100);
    algorithm.initialize().unwrap();

    c.bench_function("best_solution_100", |b| {
        b.iter(|| black_box(algorithm.best_solution().unwrap()));
    });
    c.bench_function("solutions_100", |b| {
        b.iter(|| black_box(algorithm.solutions().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_initialize,
    bench_iterate_gbest,
    bench_iterate_lbest,
    bench_extraction
);
criterion_main!(benches);
