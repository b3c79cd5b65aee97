//! Batch adapter for density-surface evaluation with parallel execution.
//!
//! ## Purpose
//!
//! This module wraps the `densurf` batch adapter and evaluates the mesh with
//! one rayon task per row when parallel execution is enabled.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation, indexing and mesh layout stay in `densurf`.
//! * **Parallelism**: Injects the parallel mesh pass through the core hook.
//! * **Inputs**: Columns may be slices, vectors or `ndarray` arrays.
//! * **Logging**: Emits `tracing` events around each fit.
//!
//! ## Invariants
//!
//! * Parallel and sequential evaluation produce identical surfaces.
//!
//! ## Non-goals
//!
//! * This adapter does not install a `tracing` subscriber.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::mesh_pass_parallel;

// External dependencies
use num_traits::Float;
use std::result::Result;
use tracing::debug;

// Export dependencies from densurf crate
use densurf::internals::adapters::batch::{BatchSurface, BatchSurfaceBuilder};
use densurf::internals::algorithms::interpolation::CoveragePolicy;
use densurf::internals::engine::output::DensitySurface;
use densurf::internals::math::bandwidth::Bandwidth;
use densurf::internals::math::kernel::DensityKernel;
use densurf::internals::primitives::errors::SurfaceError;
use densurf::internals::primitives::index::{Sample, SampleIndex};
use densurf::internals::primitives::sorting::DuplicatePolicy;

// Internal dependencies
use crate::input::SurfaceInput;

// ============================================================================
// Extended Batch Surface Builder
// ============================================================================

/// Builder for the batch surface processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchSurfaceBuilder<T: Float> {
    /// Base builder from the densurf crate
    pub base: BatchSurfaceBuilder<T>,
}

impl<T: Float> Default for ParallelBatchSurfaceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchSurfaceBuilder<T> {
    /// Create a new builder; parallel execution is on by default.
    fn new() -> Self {
        let base = BatchSurfaceBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the step along the group-key axis.
    pub fn x_step(mut self, step: T) -> Self {
        self.base = self.base.x_step(step);
        self
    }

    /// Set the y-range of the mesh.
    pub fn y_range(mut self, min: T, max: T) -> Self {
        self.base = self.base.y_range(min, max);
        self
    }

    /// Set the step along the continuous axis.
    pub fn y_step(mut self, step: T) -> Self {
        self.base = self.base.y_step(step);
        self
    }

    /// Set the coverage policy.
    pub fn coverage_policy(mut self, policy: CoveragePolicy) -> Self {
        self.base = self.base.coverage_policy(policy);
        self
    }

    /// Set the duplicate-sample policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.base = self.base.duplicate_policy(policy);
        self
    }

    /// Set the bandwidth rule for density estimation.
    pub fn bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.base = self.base.bandwidth(bandwidth);
        self
    }

    /// Set the kernel for density estimation.
    pub fn kernel(mut self, kernel: DensityKernel) -> Self {
        self.base = self.base.kernel(kernel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchSurface<T>, SurfaceError> {
        // Validate by building the base processor
        let validated = self.base.clone().build()?;

        Ok(ParallelBatchSurface {
            config: self,
            validated,
        })
    }
}

// ============================================================================
// Extended Batch Surface Processor
// ============================================================================

/// Batch surface processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchSurface<T: Float> {
    config: ParallelBatchSurfaceBuilder<T>,
    validated: BatchSurface<T>,
}

impl<T: Float + Send + Sync + 'static> ParallelBatchSurface<T> {
    /// Whether the parallel mesh pass will be used.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "cpu") && self.config.base.parallel.unwrap_or(true)
    }

    /// Base processor with the mesh pass matching the execution mode.
    fn processor(&self) -> Result<BatchSurface<T>, SurfaceError> {
        let mut builder = self.config.base.clone();

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_mesh_pass(mesh_pass_parallel::<T>);
            } else {
                builder.custom_mesh_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_mesh_pass = None;
        }

        builder.build()
    }

    /// Build the sample index from columnar samples.
    pub fn index<I1, I2, I3>(&self, x: &I1, y: &I2, z: &I3) -> Result<SampleIndex<T>, SurfaceError>
    where
        I1: SurfaceInput<T> + ?Sized,
        I2: SurfaceInput<T> + ?Sized,
        I3: SurfaceInput<T> + ?Sized,
    {
        self.processor()?.index(
            x.as_surface_slice()?,
            y.as_surface_slice()?,
            z.as_surface_slice()?,
        )
    }

    /// Evaluate one query point against a prebuilt index.
    ///
    /// Returns `None` when the point is undefined.
    pub fn evaluate(&self, index: &SampleIndex<T>, x: T, y: T) -> Option<T> {
        self.validated.evaluate(index, x, y)
    }

    /// Evaluate the surface mesh from columnar samples.
    pub fn fit<I1, I2, I3>(&self, x: &I1, y: &I2, z: &I3) -> Result<DensitySurface<T>, SurfaceError>
    where
        I1: SurfaceInput<T> + ?Sized,
        I2: SurfaceInput<T> + ?Sized,
        I3: SurfaceInput<T> + ?Sized,
    {
        let x = x.as_surface_slice()?;
        let y = y.as_surface_slice()?;
        let z = z.as_surface_slice()?;

        debug!(
            samples = x.len(),
            parallel = self.is_parallel(),
            "fitting density surface"
        );
        let surface = self.processor()?.fit(x, y, z)?;
        Self::log_surface(&surface);
        Ok(surface)
    }

    /// Evaluate the surface mesh from sample structs.
    pub fn fit_samples(&self, samples: &[Sample<T>]) -> Result<DensitySurface<T>, SurfaceError> {
        debug!(
            samples = samples.len(),
            parallel = self.is_parallel(),
            "fitting density surface"
        );
        let surface = self.processor()?.fit_samples(samples)?;
        Self::log_surface(&surface);
        Ok(surface)
    }

    /// Estimate per-group densities from `(group, value)` observations, then
    /// evaluate the surface mesh.
    pub fn fit_observations(
        &self,
        observations: &[(T, T)],
    ) -> Result<DensitySurface<T>, SurfaceError> {
        debug!(
            observations = observations.len(),
            bandwidth = ?self.config.base.bandwidth,
            kernel = self.config.base.kernel.name(),
            parallel = self.is_parallel(),
            "estimating densities"
        );
        let surface = self.processor()?.fit_observations(observations)?;
        Self::log_surface(&surface);
        Ok(surface)
    }

    /// Evaluate the surface mesh from a prebuilt index.
    pub fn fit_index(&self, index: &SampleIndex<T>) -> Result<DensitySurface<T>, SurfaceError> {
        debug!(
            samples = index.len(),
            groups = index.group_count(),
            parallel = self.is_parallel(),
            "fitting density surface"
        );
        let surface = self.processor()?.fit_index(index)?;
        Self::log_surface(&surface);
        Ok(surface)
    }

    fn log_surface(surface: &DensitySurface<T>) {
        let (rows, cols) = surface.shape();
        debug!(
            groups = surface.groups,
            rows,
            cols,
            defined = surface.defined_count(),
            undefined = surface.undefined_count(),
            "density surface evaluated"
        );
    }
}
