//! Execution engine for density-surface evaluation.
//!
//! ## Purpose
//!
//! This module lays out the evaluation mesh for an index and fills the
//! row-major z buffer, one row per query x.
//!
//! ## Design notes
//!
//! * **Row-major**: `z[i * y.len() + j]` holds the value at `(x[i], y[j])`.
//! * **Pluggable pass**: The mesh pass is a plain function pointer so extension
//!   crates can inject a parallel implementation.
//! * **Pure**: The index is only read; repeated runs produce identical buffers.
//!
//! ## Key concepts
//!
//! * **Mesh pass**: Fills every cell of the z buffer from the index.
//! * **Row independence**: No row reads another row's output, so rows may be
//!   evaluated in any order or concurrently.
//!
//! ## Invariants
//!
//! * The z buffer length equals `x.len() * y.len()`.
//! * Undefined cells hold NaN.
//!
//! ## Non-goals
//!
//! * This module does not validate builder parameters (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::{interpolate_row, CoveragePolicy};
use crate::engine::validator::Validator;
use crate::primitives::errors::{Axis, SurfaceError};
use crate::primitives::index::SampleIndex;
use crate::primitives::mesh::{axis, axis_len, snap_to_key, Mesh};

// ============================================================================
// Type Aliases
// ============================================================================

/// Signature of a mesh pass: fills `z` (row-major) for every mesh cell.
pub type MeshPassFn<T> = fn(&SampleIndex<T>, &Mesh<T>, CoveragePolicy, &mut [T]);

// ============================================================================
// Configuration
// ============================================================================

/// Mesh layout and evaluation settings.
#[derive(Debug, Clone)]
pub struct SurfaceConfig<T> {
    /// Step along the group-key axis.
    pub x_step: T,

    /// Explicit y-range; the sample y-range when `None`.
    pub y_range: Option<(T, T)>,

    /// Step along the continuous axis.
    pub y_step: T,

    /// Policy for one-sided coverage.
    pub coverage_policy: CoveragePolicy,

    /// Replacement mesh pass (e.g., parallel).
    pub custom_mesh_pass: Option<MeshPassFn<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for surface evaluation.
pub struct SurfaceExecutor;

impl SurfaceExecutor {
    /// Lay out the mesh for `index` under `config`.
    pub fn layout<T: Float>(
        index: &SampleIndex<T>,
        config: &SurfaceConfig<T>,
    ) -> Result<Mesh<T>, SurfaceError> {
        Validator::validate_step(config.x_step, Axis::X)?;
        Validator::validate_step(config.y_step, Axis::Y)?;

        let (min_key, max_key) = index.key_range().ok_or(SurfaceError::EmptyInput)?;
        let (y_min, y_max) = match config.y_range {
            Some(range) => range,
            None => index.y_range().ok_or(SurfaceError::EmptyInput)?,
        };
        Validator::validate_range(y_min, y_max)?;

        let to_t = |k: i64| {
            T::from(k).ok_or_else(|| SurfaceError::InvalidInput("group key out of range".into()))
        };
        let x_start = to_t(min_key)?;
        let x_stop = to_t(max_key)?;

        // Size check before allocating anything
        Validator::validate_mesh_size(
            axis_len(x_start, x_stop, config.x_step),
            axis_len(y_min, y_max, config.y_step),
        )?;

        let x = axis(x_start, x_stop, config.x_step)
            .into_iter()
            .map(snap_to_key)
            .collect();
        let y = axis(y_min, y_max, config.y_step);

        Ok(Mesh { x, y })
    }

    /// Evaluate `mesh` from `index`, returning the row-major z buffer.
    pub fn run_with_config<T: Float>(
        index: &SampleIndex<T>,
        mesh: &Mesh<T>,
        config: &SurfaceConfig<T>,
    ) -> Vec<T> {
        let mut z = vec![T::nan(); mesh.cells()];
        let pass = config.custom_mesh_pass.unwrap_or(mesh_pass_sequential);
        pass(index, mesh, config.coverage_policy, &mut z);
        z
    }
}

// ============================================================================
// Sequential Mesh Pass
// ============================================================================

/// Fill the z buffer row by row on the calling thread.
pub fn mesh_pass_sequential<T: Float>(
    index: &SampleIndex<T>,
    mesh: &Mesh<T>,
    policy: CoveragePolicy,
    z: &mut [T],
) {
    let width = mesh.row_len();
    if width == 0 {
        return;
    }

    for (row, &x) in z.chunks_mut(width).zip(&mesh.x) {
        interpolate_row(index, x, &mesh.y, policy, row);
    }
}
