//! densurf Release-Year Surface Examples
//!
//! This example demonstrates:
//! - Interpolating precomputed density samples onto a mesh
//! - Estimating densities from raw `(year, value)` observations
//! - Undefined cells and a caller-side fill policy
//! - The masking coverage policy

use densurf::prelude::*;

fn main() -> Result<(), SurfaceError> {
    println!("{}", "=".repeat(80));
    println!("densurf Release-Year Surface Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_precomputed_samples()?;
    example_2_observations()?;
    example_3_fill_policy()?;
    example_4_zero_coverage()?;

    Ok(())
}

/// Deterministic pseudo-random values in [0, 1).
fn jitter(i: usize) -> f64 {
    let v = ((i as f64) * 12.9898).sin() * 43_758.5453;
    v - v.floor()
}

/// Synthetic observations: one value spread per year, drifting upwards.
fn observations() -> Vec<(f64, f64)> {
    let mut obs = Vec::new();
    for (k, year) in (2000..=2005).enumerate() {
        let centre = 100.0 + 4.0 * k as f64;
        for i in 0..40 {
            let noise = jitter(k * 40 + i) - 0.5;
            obs.push((year as f64, centre + 30.0 * noise));
        }
    }
    obs
}

/// Example 1: Precomputed Samples
/// Interpolates a handful of `(x, y, z)` samples
fn example_1_precomputed_samples() -> Result<(), SurfaceError> {
    println!("Example 1: Precomputed Samples");
    println!("{}", "-".repeat(80));

    let samples = [
        Sample::new(2000.0, 100.0, 1.0),
        Sample::new(2000.0, 200.0, 3.0),
        Sample::new(2001.0, 100.0, 2.0),
        Sample::new(2001.0, 200.0, 4.0),
    ];

    let surface = build_surface(&samples, 0.5, 100.0, 200.0, 25.0)?;
    println!("{}", surface);

    println!();
    Ok(())
}

/// Example 2: Observations
/// Fits a kernel density estimate per year, then interpolates
fn example_2_observations() -> Result<(), SurfaceError> {
    println!("Example 2: Density from Observations");
    println!("{}", "-".repeat(80));

    let model = Surface::new()
        .x_step(0.1)
        .y_range(80.0, 130.0)
        .y_step(2.0)
        .bandwidth(Scott)
        .kernel(Gaussian)
        .adapter(Batch)
        .build()?;

    let surface = model.fit_observations(&observations())?;
    println!("{}", surface);

    println!();
    Ok(())
}

/// Example 3: Fill Policy
/// Undefined cells are left to the caller; here they take the smallest density
fn example_3_fill_policy() -> Result<(), SurfaceError> {
    println!("Example 3: Caller-side Fill");
    println!("{}", "-".repeat(80));

    let model = Surface::new()
        .x_step(0.5)
        .y_range(60.0, 150.0)
        .y_step(5.0)
        .adapter(Batch)
        .build()?;

    let surface = model.fit_observations(&observations())?;
    println!(
        "Undefined cells before fill: {} of {}",
        surface.undefined_count(),
        surface.z.len()
    );

    let fill = surface.min_defined().unwrap_or(0.0);
    let filled = surface.filled(fill);
    println!(
        "Undefined cells after fill with {:.6}: {}",
        fill,
        filled.undefined_count()
    );

    println!();
    Ok(())
}

/// Example 4: Zero Coverage
/// Masks one-sided coverage as zero density instead of leaving it undefined
fn example_4_zero_coverage() -> Result<(), SurfaceError> {
    println!("Example 4: Zero Coverage Policy");
    println!("{}", "-".repeat(80));

    let samples = [Sample::new(2005.0, 50.0, 9.0)];

    let strict = build_surface(&samples, 1.0, 0.0, 100.0, 50.0)?;
    let masked = Surface::new()
        .y_range(0.0, 100.0)
        .y_step(50.0)
        .coverage_policy(Zero)
        .adapter(Batch)
        .build()?
        .fit_samples(&samples)?;

    println!("Undefined policy: {:?}", strict.row(0));
    println!("Zero policy:      {:?}", masked.row(0));

    println!();
    Ok(())
}
