//! High-level API for density-surface interpolation with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastDensurf`. It
//! re-uses the `densurf` builder and swaps in a `Batch` marker that selects the
//! parallel batch builder.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `densurf` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Feature-Gated**: Parallelism is configurable via crate features.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SurfaceBuilder`] via `Surface::new()`.
//! 2. Chain configuration methods (`.x_step()`, `.y_range()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchSurfaceBuilder;

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use densurf::internals::api::Batch as BaseBatch;

// Publicly re-exported types
pub use crate::adapters::batch::ParallelBatchSurface;
pub use crate::input::SurfaceInput;
pub use densurf::internals::algorithms::interpolation::CoveragePolicy;
pub use densurf::internals::api::{build_surface, SurfaceAdapter, SurfaceBuilder};
pub use densurf::internals::engine::output::DensitySurface;
pub use densurf::internals::math::bandwidth::Bandwidth;
pub use densurf::internals::math::kernel::DensityKernel;
pub use densurf::internals::primitives::errors::SurfaceError;
pub use densurf::internals::primitives::index::{Sample, SampleIndex};
pub use densurf::internals::primitives::sorting::DuplicatePolicy;

// ============================================================================
// Adapter Module
// ============================================================================

#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> SurfaceAdapter<T> for Batch {
    type Output = ParallelBatchSurfaceBuilder<T>;

    fn convert(builder: SurfaceBuilder<T>) -> Self::Output {
        // User choice, or parallel by default
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as SurfaceAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelBatchSurfaceBuilder { base }
    }
}
