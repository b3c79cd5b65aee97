//! fastDensurf Parallel Surface Examples
//!
//! This example demonstrates features specific to `fastDensurf`:
//! - Parallel mesh evaluation using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - `tracing` output (set `RUST_LOG=fastDensurf=debug` to see fit events)

use fastDensurf::prelude::*;
use ndarray::Array1;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), SurfaceError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    println!("{}", "=".repeat(80));
    println!("fastDensurf Parallel Surface Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_execution()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;

    Ok(())
}

/// Synthetic observations over twenty years.
fn observations() -> Vec<(f64, f64)> {
    (0..20_000)
        .map(|i| {
            let year = 2000 + (i % 20);
            let phase = (i as f64 * 0.618_034).fract();
            let value = 90.0 + (year - 2000) as f64 + 40.0 * (phase - 0.5);
            (year as f64, value)
        })
        .collect()
}

/// Example 1: Parallel Execution
/// Demonstrates the default parallel execution mode
fn example_1_parallel_execution() -> Result<(), SurfaceError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let obs = observations();

    let start = Instant::now();
    let model = Surface::new()
        .x_step(0.01)
        .y_range(60.0, 140.0)
        .y_step(0.1)
        .adapter(Batch)
        .parallel(true)
        .build()?;

    let surface = model.fit_observations(&obs)?;
    let duration = start.elapsed();

    println!("Processed {} observations in {:?}", obs.len(), duration);
    println!("Execution mode: Parallel");
    println!("Result summary:\n{}", surface);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// The same fit on the calling thread
fn example_2_sequential_fallback() -> Result<(), SurfaceError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let obs = observations();

    let start = Instant::now();
    let model = Surface::new()
        .x_step(0.01)
        .y_range(60.0, 140.0)
        .y_step(0.1)
        .adapter(Batch)
        .parallel(false)
        .build()?;

    let surface = model.fit_observations(&obs)?;
    let duration = start.elapsed();

    println!("Processed {} observations in {:?}", obs.len(), duration);
    println!("Execution mode: Sequential");
    println!(
        "Defined cells: {} / {}",
        surface.defined_count(),
        surface.z.len()
    );

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
/// Columns passed as `ndarray::Array1`
fn example_3_ndarray_integration() -> Result<(), SurfaceError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let x = Array1::from(vec![2000.0, 2000.0, 2000.0, 2001.0, 2001.0, 2001.0]);
    let y = Array1::from(vec![0.0, 5.0, 10.0, 0.0, 5.0, 10.0]);
    let z = Array1::from(vec![0.1, 0.6, 0.2, 0.2, 0.4, 0.3]);

    let model = Surface::new()
        .x_step(0.25)
        .y_step(2.5)
        .adapter(Batch)
        .build()?;

    let surface = model.fit(&x, &y, &z)?;
    println!("{}", surface);

    println!();
    Ok(())
}
