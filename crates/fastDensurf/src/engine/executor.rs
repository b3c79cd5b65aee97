//! Parallel execution engine for density-surface evaluation.
//!
//! ## Purpose
//!
//! This module provides the parallel mesh pass that is injected into the
//! `densurf` crate's execution engine. Mesh rows are independent, so each row
//! is evaluated on whichever worker thread picks it up.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential mesh pass.
//! * **Parallelism**: Uses `rayon` to split the row-major buffer into rows.
//! * **Determinism**: Every cell is written by exactly one row task, so the
//!   output is identical to the sequential pass.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `z.len() == mesh.x.len() * mesh.y.len()`.
//! * The index is only read.
//!
//! ## Non-goals
//!
//! * This module does not lay out the mesh (handled by `densurf::executor`).
//! * This module does not validate input data (handled by `validator`).

// External dependencies
use rayon::prelude::*;
use num_traits::Float;
use tracing::trace;

// Export dependencies from densurf crate
use densurf::internals::algorithms::interpolation::{interpolate_row, CoveragePolicy};
use densurf::internals::primitives::index::SampleIndex;
use densurf::internals::primitives::mesh::Mesh;

// ============================================================================
// Parallel Mesh Pass
// ============================================================================

/// Fill the z buffer with one rayon task per mesh row.
pub fn mesh_pass_parallel<T>(
    index: &SampleIndex<T>,
    mesh: &Mesh<T>,
    policy: CoveragePolicy,
    z: &mut [T],
) where
    T: Float + Send + Sync,
{
    let width = mesh.row_len();
    if width == 0 {
        return;
    }

    z.par_chunks_mut(width)
        .zip(mesh.x.par_iter())
        .enumerate()
        .for_each(|(i, (row, &x))| {
            interpolate_row(index, x, &mesh.y, policy, row);
            trace!(row = i, x = x.to_f64(), "evaluated mesh row");
        });
}
