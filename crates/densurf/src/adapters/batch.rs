//! Batch adapter for density-surface evaluation.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes the complete
//! sample set in memory, builds the sample index once, and evaluates the whole
//! mesh in a single sequential pass.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, indexes, lays out the mesh, then evaluates.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Three entry points**: columnar samples, sample structs, or raw
//!   `(group, value)` observations that are density-estimated first.
//!
//! ## Invariants
//!
//! * Input columns must have the same length.
//! * All values must be finite and group keys integral.
//!
//! ## Non-goals
//!
//! * This adapter does not fill undefined cells.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::density::density_samples;
use crate::algorithms::interpolation::{interpolate_point, CoveragePolicy};
use crate::engine::executor::{MeshPassFn, SurfaceConfig, SurfaceExecutor};
use crate::engine::output::DensitySurface;
use crate::engine::validator::Validator;
use crate::math::bandwidth::Bandwidth;
use crate::math::kernel::DensityKernel;
use crate::primitives::errors::{Axis, SurfaceError};
use crate::primitives::index::{Sample, SampleIndex};
use crate::primitives::sorting::DuplicatePolicy;

// ============================================================================
// Batch Surface Builder
// ============================================================================

/// Builder for the batch surface processor.
#[derive(Debug, Clone)]
pub struct BatchSurfaceBuilder<T: Float> {
    /// Step along the group-key axis
    pub x_step: T,

    /// Explicit y-range (defaults to the sample y-range)
    pub y_range: Option<(T, T)>,

    /// Step along the continuous axis
    pub y_step: T,

    /// Policy for one-sided coverage
    pub coverage_policy: CoveragePolicy,

    /// Policy for repeated `(x, y)` pairs
    pub duplicate_policy: DuplicatePolicy,

    /// Bandwidth rule for density estimation
    pub bandwidth: Bandwidth,

    /// Kernel for density estimation
    pub kernel: DensityKernel,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom mesh pass function.
    #[doc(hidden)]
    pub custom_mesh_pass: Option<MeshPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchSurfaceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchSurfaceBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            x_step: T::one(),
            y_range: None,
            y_step: T::one(),
            coverage_policy: CoveragePolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
            bandwidth: Bandwidth::default(),
            kernel: DensityKernel::default(),
            custom_mesh_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the step along the group-key axis.
    pub fn x_step(mut self, step: T) -> Self {
        self.x_step = step;
        self
    }

    /// Set the y-range of the mesh.
    pub fn y_range(mut self, min: T, max: T) -> Self {
        self.y_range = Some((min, max));
        self
    }

    /// Set the step along the continuous axis.
    pub fn y_step(mut self, step: T) -> Self {
        self.y_step = step;
        self
    }

    /// Set the coverage policy.
    pub fn coverage_policy(mut self, policy: CoveragePolicy) -> Self {
        self.coverage_policy = policy;
        self
    }

    /// Set the duplicate-sample policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the bandwidth rule for density estimation.
    pub fn bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the kernel for density estimation.
    pub fn kernel(mut self, kernel: DensityKernel) -> Self {
        self.kernel = kernel;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom mesh pass function.
    #[doc(hidden)]
    pub fn custom_mesh_pass(mut self, pass: MeshPassFn<T>) -> Self {
        self.custom_mesh_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchSurface<T>, SurfaceError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate steps
        Validator::validate_step(self.x_step, Axis::X)?;
        Validator::validate_step(self.y_step, Axis::Y)?;

        // Validate explicit range
        if let Some((min, max)) = self.y_range {
            Validator::validate_range(min, max)?;
        }

        // Validate bandwidth
        Validator::validate_bandwidth(self.bandwidth)?;

        Ok(BatchSurface { config: self })
    }
}

// ============================================================================
// Batch Surface Processor
// ============================================================================

/// Batch surface processor.
#[derive(Debug, Clone)]
pub struct BatchSurface<T: Float> {
    config: BatchSurfaceBuilder<T>,
}

impl<T: Float> BatchSurface<T> {
    /// Build the sample index from columnar samples.
    pub fn index(&self, x: &[T], y: &[T], z: &[T]) -> Result<SampleIndex<T>, SurfaceError> {
        Validator::validate_inputs(x, y, z)?;
        SampleIndex::from_columns(x, y, z, self.config.duplicate_policy)
    }

    /// Evaluate one query point against a prebuilt index.
    ///
    /// Returns `None` when the point is undefined.
    pub fn evaluate(&self, index: &SampleIndex<T>, x: T, y: T) -> Option<T> {
        interpolate_point(index, x, y, self.config.coverage_policy)
    }

    /// Evaluate the surface mesh from columnar samples.
    pub fn fit(&self, x: &[T], y: &[T], z: &[T]) -> Result<DensitySurface<T>, SurfaceError> {
        let index = self.index(x, y, z)?;
        self.fit_index(&index)
    }

    /// Evaluate the surface mesh from sample structs.
    pub fn fit_samples(&self, samples: &[Sample<T>]) -> Result<DensitySurface<T>, SurfaceError> {
        let x: Vec<T> = samples.iter().map(|s| s.x).collect();
        let y: Vec<T> = samples.iter().map(|s| s.y).collect();
        let z: Vec<T> = samples.iter().map(|s| s.z).collect();
        self.fit(&x, &y, &z)
    }

    /// Estimate per-group densities from `(group, value)` observations, then
    /// evaluate the surface mesh from the resulting samples.
    pub fn fit_observations(
        &self,
        observations: &[(T, T)],
    ) -> Result<DensitySurface<T>, SurfaceError> {
        Validator::validate_observations(observations)?;
        let samples = density_samples(observations, self.config.bandwidth, self.config.kernel)?;
        self.fit_samples(&samples)
    }

    /// Evaluate the surface mesh from a prebuilt index.
    pub fn fit_index(&self, index: &SampleIndex<T>) -> Result<DensitySurface<T>, SurfaceError> {
        let config = SurfaceConfig {
            x_step: self.config.x_step,
            y_range: self.config.y_range,
            y_step: self.config.y_step,
            coverage_policy: self.config.coverage_policy,
            custom_mesh_pass: self.config.custom_mesh_pass,
        };

        let mesh = SurfaceExecutor::layout(index, &config)?;
        let z = SurfaceExecutor::run_with_config(index, &mesh, &config);

        Ok(DensitySurface {
            x: mesh.x,
            y: mesh.y,
            z,
            coverage_policy: config.coverage_policy,
            groups: index.group_count(),
            samples: index.len(),
        })
    }
}
