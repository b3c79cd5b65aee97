#![cfg(all(feature = "dev", feature = "cpu"))]
//! Tests for parallel mesh evaluation.
//!
//! These tests verify that the parallel batch adapter produces exactly the
//! surfaces the sequential `densurf` adapter produces.
//!
//! ## Test Organization
//!
//! 1. **Pass Consistency** - Parallel vs sequential buffers
//! 2. **Adapter Behavior** - Defaults, validation, inputs

use approx::assert_abs_diff_eq;
use ndarray::Array1;

use densurf::internals::engine::executor::mesh_pass_sequential;
use densurf::internals::primitives::mesh::Mesh;
use fastDensurf::internals::engine::executor::mesh_pass_parallel;
use fastDensurf::prelude::*;

/// Ten groups with irregular, group-specific y samples.
fn grid_columns() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut z = Vec::new();
    for g in 0..10 {
        let n = 5 + g % 4;
        for i in 0..n {
            let yi = (g as f64) * 0.7 + (i as f64) * (3.0 + (g % 3) as f64);
            x.push(1990.0 + g as f64);
            y.push(yi);
            z.push((yi * 0.3).sin().abs() + 0.1 * g as f64);
        }
    }
    (x, y, z)
}

// ============================================================================
// Pass Consistency Tests
// ============================================================================

/// Test the parallel pass fills the same buffer as the sequential pass.
#[test]
fn test_mesh_pass_consistency() {
    let (x, y, z) = grid_columns();
    let index = SampleIndex::from_columns(&x, &y, &z, Reject).unwrap();
    let mesh = Mesh {
        x: (0..91).map(|i| 1990.0 + i as f64 * 0.1).collect(),
        y: (0..60).map(|j| j as f64 * 0.5).collect(),
    };

    for policy in [Undefined, Zero] {
        let mut seq = vec![f64::NAN; mesh.cells()];
        let mut par = vec![f64::NAN; mesh.cells()];
        mesh_pass_sequential(&index, &mesh, policy, &mut seq);
        mesh_pass_parallel(&index, &mesh, policy, &mut par);

        for (a, b) in seq.iter().zip(&par) {
            if a.is_nan() {
                assert!(b.is_nan());
            } else {
                assert_abs_diff_eq!(*a, *b, epsilon = 0.0);
            }
        }
    }
}

/// Test parallel and sequential adapters give identical surfaces.
#[test]
fn test_adapter_consistency() {
    let (x, y, z) = grid_columns();

    let fit = |parallel: bool| {
        Surface::new()
            .x_step(0.05)
            .y_range(0.0, 30.0)
            .y_step(0.25)
            .adapter(Batch)
            .parallel(parallel)
            .build()
            .unwrap()
            .fit(&x, &y, &z)
            .unwrap()
    };

    let seq = fit(false);
    let par = fit(true);

    assert_eq!(seq.shape(), par.shape());
    assert_eq!(seq.undefined_count(), par.undefined_count());
    for i in 0..seq.x.len() {
        for j in 0..seq.y.len() {
            assert_eq!(seq.get(i, j), par.get(i, j));
        }
    }

    // And both match the core crate
    let core = densurf::prelude::Surface::new()
        .x_step(0.05)
        .y_range(0.0, 30.0)
        .y_step(0.25)
        .adapter(densurf::prelude::Batch)
        .build()
        .unwrap()
        .fit(&x, &y, &z)
        .unwrap();
    assert_eq!(core.defined_count(), par.defined_count());
}

/// Test density estimation through the parallel adapter.
#[test]
fn test_observations_consistency() {
    let obs: Vec<(f64, f64)> = (0..200)
        .map(|i| {
            let year = 2000 + (i % 5);
            let v = 100.0 + ((i * 37) % 50) as f64 + (year - 2000) as f64 * 0.5;
            (year as f64, v)
        })
        .collect();

    let fit = |parallel: bool| {
        Surface::new()
            .x_step(0.25)
            .y_range(100.0, 150.0)
            .y_step(1.0)
            .bandwidth(Silverman)
            .adapter(Batch)
            .parallel(parallel)
            .build()
            .unwrap()
            .fit_observations(&obs)
            .unwrap()
    };

    let seq = fit(false);
    let par = fit(true);
    assert_eq!(seq.groups, 5);
    assert_eq!(seq.z.len(), par.z.len());
    for (a, b) in seq.z.iter().zip(&par.z) {
        assert!(a == b || (a.is_nan() && b.is_nan()));
    }
}

// ============================================================================
// Adapter Behavior Tests
// ============================================================================

/// Test the adapter is parallel unless told otherwise.
#[test]
fn test_parallel_default() {
    let model = Surface::<f64>::new().adapter(Batch).build().unwrap();
    assert_eq!(model.is_parallel(), cfg!(feature = "cpu"));

    let model = Surface::<f64>::new()
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap();
    assert!(!model.is_parallel());
}

/// Test validation is shared with the core crate.
#[test]
fn test_validation_delegated() {
    let err = Surface::<f64>::new()
        .y_step(0.0)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert!(matches!(err, SurfaceError::InvalidStep { .. }));

    let err = Surface::<f64>::new()
        .coverage_policy(Zero)
        .coverage_policy(Undefined)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SurfaceError::DuplicateParameter {
            parameter: "coverage_policy"
        }
    );
}

/// Test point evaluation follows the configured coverage policy.
#[test]
fn test_evaluate_coverage_policy() {
    let x = [2000.0, 2000.0, 2001.0, 2001.0];
    let y = [100.0, 200.0, 100.0, 200.0];
    let z = [1.0, 3.0, 2.0, 4.0];

    let undefined = Surface::new().adapter(Batch).build().unwrap();
    let index = undefined.index(&x[..], &y[..], &z[..]).unwrap();
    assert_eq!(undefined.evaluate(&index, 2000.5, 250.0), None);
    assert_eq!(undefined.evaluate(&index, 2000.5, 150.0), Some(2.5));

    let zero = Surface::new()
        .coverage_policy(Zero)
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap();
    assert_eq!(zero.evaluate(&index, 2000.5, 250.0), Some(0.0));
    assert_eq!(zero.evaluate(&index, 2000.5, 150.0), Some(2.5));
}

/// Test ndarray, Vec and slice columns are interchangeable.
#[test]
fn test_ndarray_inputs() {
    let x = Array1::from(vec![2000.0, 2000.0, 2001.0, 2001.0]);
    let y = vec![100.0, 200.0, 100.0, 200.0];
    let z = [1.0, 3.0, 2.0, 4.0];

    let model = Surface::new()
        .x_step(0.5)
        .y_range(100.0, 200.0)
        .y_step(50.0)
        .adapter(Batch)
        .build()
        .unwrap();

    let surface = model.fit(&x, &y, &z[..]).unwrap();
    assert_abs_diff_eq!(surface.get(1, 1).unwrap(), 2.5, epsilon = 1e-12);

    let index = model.index(&x, &y, &z[..]).unwrap();
    assert_eq!(model.evaluate(&index, 2000.5, 150.0), Some(2.5));
    assert_eq!(model.fit_index(&index).unwrap(), surface);
}

/// Test non-contiguous ndarray input is rejected.
#[test]
fn test_non_contiguous_input() {
    let full = Array1::from(vec![2000.0, 0.0, 2000.0, 0.0]);
    let strided = full.slice(ndarray::s![..;2]);
    let y = vec![1.0, 2.0];
    let z = vec![1.0, 1.0];

    let model = Surface::new().adapter(Batch).build().unwrap();
    let err = model.fit(&strided, &y, &z).unwrap_err();
    assert!(matches!(err, SurfaceError::InvalidInput(_)));
}
