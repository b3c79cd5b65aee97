//! Density-surface benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (mesh resolution)
//! - Sample density (samples per group)
//! - Density estimation from raw observations
//!
//! For serial execution, use `FASTDENSURF_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTDENSURF_BACKEND=parallel cargo bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastDensurf::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTDENSURF_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate per-year observations whose centre drifts over time.
fn generate_observations(years: i32, per_year: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 15.0).unwrap();

    let mut obs = Vec::with_capacity(years as usize * per_year);
    for k in 0..years {
        let centre = 100.0 + 2.0 * k as f64;
        for _ in 0..per_year {
            obs.push(((2000 + k) as f64, centre + noise.sample(&mut rng)));
        }
    }
    obs
}

/// Generate density samples with unique y per group.
fn generate_samples(years: i32, per_year: usize, seed: u64) -> Vec<Sample<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(years as usize * per_year);
    for k in 0..years {
        for i in 0..per_year {
            let y = 50.0 + i as f64 * 100.0 / per_year as f64 + rng.random_range(0.0..0.5);
            let z = (-(y - 100.0).powi(2) / 800.0).exp();
            samples.push(Sample::new((2000 + k) as f64, y, z));
        }
    }
    samples
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_mesh_resolution(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("mesh_resolution_{mode_name}"));
    let samples = generate_samples(20, 50, 42);

    for step in [0.1, 0.05, 0.01] {
        let model = Surface::new()
            .x_step(step)
            .y_range(50.0, 150.0)
            .y_step(step * 10.0)
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        let cells = ((19.0 / step) as u64 + 1) * ((100.0 / (step * 10.0)) as u64 + 1);
        group.throughput(Throughput::Elements(cells));
        group.bench_with_input(BenchmarkId::from_parameter(step), &samples, |b, s| {
            b.iter(|| model.fit_samples(black_box(s)).unwrap())
        });
    }
    group.finish();
}

fn bench_samples_per_group(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("samples_per_group_{mode_name}"));

    let model = Surface::new()
        .x_step(0.1)
        .y_range(50.0, 150.0)
        .y_step(0.5)
        .adapter(Batch)
        .parallel(use_parallel)
        .build()
        .unwrap();

    for per_year in [10, 100, 1000] {
        let samples = generate_samples(20, per_year, 7);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_year), &samples, |b, s| {
            b.iter(|| model.fit_samples(black_box(s)).unwrap())
        });
    }
    group.finish();
}

fn bench_observations(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("observations_{mode_name}"));

    let model = Surface::new()
        .x_step(0.1)
        .y_range(50.0, 200.0)
        .y_step(1.0)
        .bandwidth(Scott)
        .adapter(Batch)
        .parallel(use_parallel)
        .build()
        .unwrap();

    for per_year in [50, 500] {
        let obs = generate_observations(20, per_year, 123);
        group.throughput(Throughput::Elements(obs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_year), &obs, |b, o| {
            b.iter(|| model.fit_observations(black_box(o)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_mesh_resolution,
    bench_samples_per_group,
    bench_observations
);
criterion_main!(benches);
