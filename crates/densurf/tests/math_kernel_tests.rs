#![cfg(feature = "dev")]
//! Tests for density kernels and bandwidth rules.
//!
//! ## Test Organization
//!
//! 1. **Kernel Properties** - Names, support, symmetry
//! 2. **Normalization** - Every kernel integrates to one
//! 3. **Bandwidth Rules** - Scott, Silverman, fixed

use approx::assert_relative_eq;

use densurf::internals::math::bandwidth::Bandwidth;
use densurf::internals::math::kernel::{normal_density, DensityKernel};

const ALL_KERNELS: [DensityKernel; 7] = [
    DensityKernel::Gaussian,
    DensityKernel::Epanechnikov,
    DensityKernel::Biweight,
    DensityKernel::Triangle,
    DensityKernel::Tricube,
    DensityKernel::Cosine,
    DensityKernel::Uniform,
];

// ============================================================================
// Kernel Properties Tests
// ============================================================================

/// Test kernel names and support.
#[test]
fn test_kernel_properties() {
    assert_eq!(DensityKernel::default(), DensityKernel::Gaussian);
    assert_eq!(DensityKernel::Gaussian.name(), "Gaussian");
    assert_eq!(DensityKernel::Tricube.name(), "Tricube");

    assert!(DensityKernel::Gaussian.support().is_none());
    for k in ALL_KERNELS.iter().skip(1) {
        assert_eq!(k.support(), Some((-1.0, 1.0)), "{} is bounded", k.name());
    }
}

/// Test symmetry and compact support.
#[test]
fn test_kernel_symmetry_and_support() {
    for k in ALL_KERNELS {
        for u in [0.1, 0.5, 0.9, 1.5] {
            assert_relative_eq!(k.profile(u), k.profile(-u), epsilon = 1e-14);
        }
        if k.support().is_some() {
            assert_eq!(k.profile(1.0), 0.0);
            assert_eq!(k.profile(1.5), 0.0);
        }
        assert!(k.profile(0.0) > 0.0);
    }
}

// ============================================================================
// Normalization Tests
// ============================================================================

/// Test each normalized kernel integrates to one.
#[test]
fn test_kernel_density_integrates_to_one() {
    let step = 1e-4;
    for k in ALL_KERNELS {
        let total: f64 = (0..200_000)
            .map(|i| -10.0 + (i as f64 + 0.5) * step)
            .map(|u| k.density(u) * step)
            .sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-3);
    }
}

/// Test the normal density against its closed form.
#[test]
fn test_normal_density() {
    let peak = normal_density(0.0, 0.0, 1.0);
    assert_relative_eq!(peak, 1.0 / (2.0 * std::f64::consts::PI).sqrt(), epsilon = 1e-12);

    let shifted = normal_density(3.0, 1.0, 2.0);
    let expected = (-0.5f64).exp() / (2.0 * (2.0 * std::f64::consts::PI).sqrt());
    assert_relative_eq!(shifted, expected, epsilon = 1e-12);

    assert!(normal_density(0.0f64, 0.0, 0.0).is_nan());
}

// ============================================================================
// Bandwidth Rule Tests
// ============================================================================

/// Test Scott's and Silverman's rules use the sample standard deviation.
#[test]
fn test_rule_of_thumb_bandwidths() {
    let vals = [1.0, 2.0, 3.0, 4.0, 5.0];
    // Sample std with ddof = 1
    let sd = 2.5f64.sqrt();

    let scott = Bandwidth::Scott.resolve(&vals);
    assert_relative_eq!(scott, sd * 5f64.powf(-0.2), epsilon = 1e-12);

    let silverman = Bandwidth::Silverman.resolve(&vals);
    assert_relative_eq!(silverman, sd * 3.75f64.powf(-0.2), epsilon = 1e-12);
    assert!(silverman > scott);
}

/// Test degenerate inputs resolve to zero and fixed bandwidths pass through.
#[test]
fn test_bandwidth_edge_cases() {
    assert_eq!(Bandwidth::Scott.resolve(&[1.0]), 0.0);
    assert_eq!(Bandwidth::Scott.resolve(&[2.0, 2.0, 2.0]), 0.0);
    assert_eq!(Bandwidth::Fixed(0.7).resolve(&[1.0]), 0.7);
    assert_eq!(Bandwidth::default(), Bandwidth::Scott);
}
