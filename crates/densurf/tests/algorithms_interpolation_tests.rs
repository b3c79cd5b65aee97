#![cfg(feature = "dev")]
//! Tests for two-stage linear interpolation.
//!
//! These tests verify the interpolation rules used to evaluate a surface:
//! - Stage 1 along y within each bracketing group
//! - Stage 2 along x between the two group values
//! - Exact hits, degenerate x, and one-sided coverage
//!
//! ## Test Organization
//!
//! 1. **Linear Interpolation** - `lerp` behavior
//! 2. **Group Interpolation** - Bracketing within a single group
//! 3. **Point Interpolation** - Full two-stage evaluation
//! 4. **Coverage Policy** - Undefined vs zero fallback
//! 5. **Row Interpolation** - NaN sentinels in mesh rows

use approx::assert_relative_eq;

use densurf::internals::algorithms::interpolation::{
    interpolate_group, interpolate_point, interpolate_row, lerp, CoveragePolicy, GroupPair,
};
use densurf::internals::primitives::index::SampleIndex;
use densurf::internals::primitives::sorting::DuplicatePolicy;

fn corner_index() -> SampleIndex<f64> {
    let x = [2000.0, 2000.0, 2001.0, 2001.0];
    let y = [100.0, 200.0, 100.0, 200.0];
    let z = [1.0, 3.0, 2.0, 4.0];
    SampleIndex::from_columns(&x, &y, &z, DuplicatePolicy::Reject).unwrap()
}

// ============================================================================
// Linear Interpolation Tests
// ============================================================================

/// Test lerp at endpoints and midpoint.
#[test]
fn test_lerp_basic() {
    assert_relative_eq!(lerp(0.0, 1.0, 10.0, 3.0, 0.0), 1.0);
    assert_relative_eq!(lerp(0.0, 1.0, 10.0, 3.0, 10.0), 3.0);
    assert_relative_eq!(lerp(0.0, 1.0, 10.0, 3.0, 5.0), 2.0);
}

/// Test lerp with tied abscissae.
///
/// Verifies no division by zero occurs.
#[test]
fn test_lerp_tied_abscissae() {
    let v = lerp(5.0, 1.0, 5.0, 7.0, 5.0);
    assert_eq!(v, 7.0);
}

// ============================================================================
// Group Interpolation Tests
// ============================================================================

/// Test interpolation strictly between two samples.
///
/// Verifies the result is proportional to the y position.
#[test]
fn test_group_proportional() {
    let index = corner_index();
    let g = index.group(2000).unwrap();

    for (y, expected) in [(125.0, 1.5), (150.0, 2.0), (175.0, 2.5)] {
        let z = interpolate_group(g, y, CoveragePolicy::Undefined).unwrap();
        assert_relative_eq!(z, expected, epsilon = 1e-12);
        assert!(z > 1.0 && z < 3.0, "Result must lie between the samples");
    }
}

/// Test exact hits return the stored z.
#[test]
fn test_group_exact_hit() {
    let index = corner_index();
    let g = index.group(2001).unwrap();

    assert_eq!(interpolate_group(g, 100.0, CoveragePolicy::Undefined), Some(2.0));
    assert_eq!(interpolate_group(g, 200.0, CoveragePolicy::Undefined), Some(4.0));
}

/// Test one-sided coverage under both policies.
#[test]
fn test_group_uncovered() {
    let index = corner_index();
    let g = index.group(2000).unwrap();

    assert_eq!(interpolate_group(g, 50.0, CoveragePolicy::Undefined), None);
    assert_eq!(interpolate_group(g, 250.0, CoveragePolicy::Undefined), None);
    assert_eq!(interpolate_group(g, 50.0, CoveragePolicy::Zero), Some(0.0));
    assert_eq!(interpolate_group(g, 250.0, CoveragePolicy::Zero), Some(0.0));
}

// ============================================================================
// Point Interpolation Tests
// ============================================================================

/// Test the four-corner scenario.
///
/// y-interp at 2000 gives 2.0, at 2001 gives 3.0, x-interp gives 2.5.
#[test]
fn test_point_four_corners() {
    let index = corner_index();
    let z = interpolate_point(&index, 2000.5, 150.0, CoveragePolicy::Undefined).unwrap();
    assert_relative_eq!(z, 2.5, epsilon = 1e-12);
}

/// Test exact sample hits at every group key.
#[test]
fn test_point_exact_hits() {
    let index = corner_index();
    for (x, y, z) in [
        (2000.0, 100.0, 1.0),
        (2000.0, 200.0, 3.0),
        (2001.0, 100.0, 2.0),
        (2001.0, 200.0, 4.0),
    ] {
        assert_eq!(
            interpolate_point(&index, x, y, CoveragePolicy::Undefined),
            Some(z)
        );
    }
}

/// Test degenerate x uses a single group with no blending.
#[test]
fn test_point_degenerate_x() {
    let index = corner_index();
    let pair = GroupPair::locate(&index, 2001.0).unwrap();
    assert!(pair.is_degenerate());

    let z = interpolate_point(&index, 2001.0, 150.0, CoveragePolicy::Undefined).unwrap();
    assert_relative_eq!(z, 3.0, epsilon = 1e-12);
}

/// Test x outside the key range is undefined rather than a crash.
#[test]
fn test_point_out_of_key_range() {
    let index = corner_index();
    assert!(GroupPair::locate(&index, 1999.5).is_none());
    assert_eq!(
        interpolate_point(&index, 1999.0, 150.0, CoveragePolicy::Zero),
        None
    );
    assert_eq!(
        interpolate_point(&index, 2001.5, 150.0, CoveragePolicy::Zero),
        None
    );
}

/// Test x values within rounding noise of a key snap onto it.
#[test]
fn test_point_snaps_near_integral_x() {
    let index = corner_index();
    let x = 2000.0 + 1e-12;
    let pair = GroupPair::locate(&index, x).unwrap();
    assert!(pair.is_degenerate());
    assert_eq!(pair.lower.0, 2000);
}

/// Test repeated evaluation gives identical results.
#[test]
fn test_point_is_pure() {
    let index = corner_index();
    let a = interpolate_point(&index, 2000.3, 133.0, CoveragePolicy::Undefined);
    let b = interpolate_point(&index, 2000.3, 133.0, CoveragePolicy::Undefined);
    assert_eq!(a, b);
}

// ============================================================================
// Coverage Policy Tests
// ============================================================================

/// Test a single-sample group.
///
/// An exact hit returns the sample; any other y is one-sided.
#[test]
fn test_single_sample_group() {
    let index = SampleIndex::from_columns(&[2005.0], &[50.0], &[9.0], DuplicatePolicy::Reject)
        .unwrap();

    assert_eq!(
        interpolate_point(&index, 2005.0, 50.0, CoveragePolicy::Undefined),
        Some(9.0)
    );
    assert_eq!(
        interpolate_point(&index, 2005.0, 999.0, CoveragePolicy::Undefined),
        None
    );
    assert_eq!(
        interpolate_point(&index, 2005.0, 999.0, CoveragePolicy::Zero),
        Some(0.0)
    );
}

/// Test one-sided coverage in only one of the two groups.
///
/// Under `Zero` the uncovered group contributes 0 to the x-blend.
#[test]
fn test_partial_coverage_blend() {
    let x = [0.0, 0.0, 1.0, 1.0];
    let y = [0.0, 10.0, 0.0, 20.0];
    let z = [2.0, 2.0, 4.0, 4.0];
    let index = SampleIndex::from_columns(&x, &y, &z, DuplicatePolicy::Reject).unwrap();

    // Group 0 does not reach y = 15
    assert_eq!(
        interpolate_point(&index, 0.5, 15.0, CoveragePolicy::Undefined),
        None
    );
    let masked = interpolate_point(&index, 0.5, 15.0, CoveragePolicy::Zero).unwrap();
    assert_relative_eq!(masked, 2.0, epsilon = 1e-12);
}

/// Test policy names.
#[test]
fn test_coverage_policy_names() {
    assert_eq!(CoveragePolicy::Undefined.name(), "Undefined");
    assert_eq!(CoveragePolicy::Zero.name(), "Zero");
    assert_eq!(CoveragePolicy::default(), CoveragePolicy::Undefined);
}

// ============================================================================
// Row Interpolation Tests
// ============================================================================

/// Test a row mixes defined values and NaN sentinels.
#[test]
fn test_row_sentinels() {
    let index = corner_index();
    let ys = [50.0, 100.0, 150.0, 200.0, 250.0];
    let mut out = [0.0; 5];

    interpolate_row(&index, 2000.5, &ys, CoveragePolicy::Undefined, &mut out);

    assert!(out[0].is_nan());
    assert_relative_eq!(out[1], 1.5, epsilon = 1e-12);
    assert_relative_eq!(out[2], 2.5, epsilon = 1e-12);
    assert_relative_eq!(out[3], 3.5, epsilon = 1e-12);
    assert!(out[4].is_nan());
}

/// Test a row whose bracketing group is missing is entirely NaN.
#[test]
fn test_row_missing_group() {
    let x = [0.0, 0.0, 2.0, 2.0];
    let y = [0.0, 1.0, 0.0, 1.0];
    let z = [1.0, 1.0, 1.0, 1.0];
    let index = SampleIndex::from_columns(&x, &y, &z, DuplicatePolicy::Reject).unwrap();

    let ys = [0.0, 0.5, 1.0];
    let mut out = [0.0; 3];
    interpolate_row(&index, 1.5, &ys, CoveragePolicy::Zero, &mut out);

    assert!(out.iter().all(|v: &f64| v.is_nan()));
}

/// Test a missing bracketing group stays undefined under `Zero`.
///
/// Only one-sided coverage inside a present group is masked as 0.
#[test]
fn test_point_missing_group_zero_policy() {
    let x = [0.0, 0.0, 2.0, 2.0];
    let y = [0.0, 1.0, 0.0, 1.0];
    let z = [1.0, 1.0, 1.0, 1.0];
    let index = SampleIndex::from_columns(&x, &y, &z, DuplicatePolicy::Reject).unwrap();

    assert_eq!(interpolate_point(&index, 1.0, 0.5, CoveragePolicy::Zero), None);
    assert_eq!(interpolate_point(&index, 1.5, 0.5, CoveragePolicy::Zero), None);
    assert_eq!(interpolate_point(&index, 0.5, 0.5, CoveragePolicy::Zero), None);
    assert_eq!(
        interpolate_point(&index, 2.0, 5.0, CoveragePolicy::Zero),
        Some(0.0)
    );
}
