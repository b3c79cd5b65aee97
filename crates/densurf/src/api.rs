//! High-level API for density-surface interpolation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent builder
//! for configuring the mesh and policies, adapter markers for choosing an
//! execution mode, and the one-call [`build_surface`] function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SurfaceBuilder`] via `Surface::new()`.
//! 2. Chain configuration methods (`.x_step()`, `.y_range()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchSurfaceBuilder;
use crate::engine::executor::MeshPassFn;

// Publicly re-exported types
pub use crate::adapters::batch::BatchSurface;
pub use crate::algorithms::interpolation::CoveragePolicy;
pub use crate::engine::output::DensitySurface;
pub use crate::math::bandwidth::Bandwidth;
pub use crate::math::kernel::DensityKernel;
pub use crate::primitives::errors::SurfaceError;
pub use crate::primitives::index::{Sample, SampleIndex};
pub use crate::primitives::sorting::DuplicatePolicy;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// One-call Entry Point
// ============================================================================

/// Interpolate `samples` onto a regular mesh.
///
/// The x-axis spans the smallest to the largest group key in `x_step`
/// increments; the y-axis spans `[y_min, y_max]` in `y_step` increments.
/// Default policies apply: duplicates are rejected and one-sided coverage
/// yields undefined (NaN) cells.
///
/// ```rust
/// use densurf::prelude::*;
///
/// let samples = [
///     Sample::new(2000.0, 100.0, 1.0),
///     Sample::new(2000.0, 200.0, 3.0),
///     Sample::new(2001.0, 100.0, 2.0),
///     Sample::new(2001.0, 200.0, 4.0),
/// ];
///
/// let surface = build_surface(&samples, 0.5, 100.0, 200.0, 50.0)?;
/// assert_eq!(surface.get(1, 1), Some(2.5));
/// # Result::<(), SurfaceError>::Ok(())
/// ```
pub fn build_surface<T: Float>(
    samples: &[Sample<T>],
    x_step: T,
    y_min: T,
    y_max: T,
    y_step: T,
) -> Result<DensitySurface<T>, SurfaceError> {
    SurfaceBuilder::new()
        .x_step(x_step)
        .y_range(y_min, y_max)
        .y_step(y_step)
        .adapter(Batch)
        .build()?
        .fit_samples(samples)
}

// ============================================================================
// Surface Builder
// ============================================================================

/// Fluent builder for configuring surface parameters and execution modes.
#[derive(Debug, Clone)]
pub struct SurfaceBuilder<T> {
    /// Step along the group-key axis.
    pub x_step: Option<T>,

    /// Mesh y-range.
    pub y_range: Option<(T, T)>,

    /// Step along the continuous axis.
    pub y_step: Option<T>,

    /// One-sided coverage policy (default: Undefined).
    pub coverage_policy: Option<CoveragePolicy>,

    /// Duplicate-sample policy (default: Reject).
    pub duplicate_policy: Option<DuplicatePolicy>,

    /// Bandwidth rule for density estimation (default: Scott).
    pub bandwidth: Option<Bandwidth>,

    /// Kernel for density estimation (default: Gaussian).
    pub kernel: Option<DensityKernel>,

    // ======================================
    // DEV
    // ======================================
    /// Custom mesh pass function.
    #[doc(hidden)]
    pub custom_mesh_pass: Option<MeshPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SurfaceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SurfaceBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SurfaceAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            x_step: None,
            y_range: None,
            y_step: None,
            coverage_policy: None,
            duplicate_policy: None,
            bandwidth: None,
            kernel: None,
            custom_mesh_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the step along the group-key axis (may be fractional, e.g. 0.1).
    pub fn x_step(mut self, step: T) -> Self {
        if self.x_step.is_some() {
            self.duplicate_param = Some("x_step");
        }
        self.x_step = Some(step);
        self
    }

    /// Set the y-range of the mesh.
    pub fn y_range(mut self, min: T, max: T) -> Self {
        if self.y_range.is_some() {
            self.duplicate_param = Some("y_range");
        }
        self.y_range = Some((min, max));
        self
    }

    /// Set the step along the continuous axis.
    pub fn y_step(mut self, step: T) -> Self {
        if self.y_step.is_some() {
            self.duplicate_param = Some("y_step");
        }
        self.y_step = Some(step);
        self
    }

    /// Set the policy for groups covering only one side of a query y.
    pub fn coverage_policy(mut self, policy: CoveragePolicy) -> Self {
        if self.coverage_policy.is_some() {
            self.duplicate_param = Some("coverage_policy");
        }
        self.coverage_policy = Some(policy);
        self
    }

    /// Set the policy for samples sharing an `(x, y)` pair.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        if self.duplicate_policy.is_some() {
            self.duplicate_param = Some("duplicate_policy");
        }
        self.duplicate_policy = Some(policy);
        self
    }

    /// Set the bandwidth rule used by `fit_observations`.
    pub fn bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the kernel used by `fit_observations`.
    pub fn kernel(mut self, kernel: DensityKernel) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom mesh pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_mesh_pass(mut self, pass: MeshPassFn<T>) -> Self {
        self.custom_mesh_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SurfaceAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SurfaceBuilder`] into a specialized execution builder.
    fn convert(builder: SurfaceBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> SurfaceAdapter<T> for Batch {
    type Output = BatchSurfaceBuilder<T>;

    fn convert(builder: SurfaceBuilder<T>) -> Self::Output {
        let mut result = BatchSurfaceBuilder::default();

        if let Some(step) = builder.x_step {
            result.x_step = step;
        }
        if let Some(range) = builder.y_range {
            result.y_range = Some(range);
        }
        if let Some(step) = builder.y_step {
            result.y_step = step;
        }
        if let Some(cp) = builder.coverage_policy {
            result.coverage_policy = cp;
        }
        if let Some(dp) = builder.duplicate_policy {
            result.duplicate_policy = dp;
        }
        if let Some(bw) = builder.bandwidth {
            result.bandwidth = bw;
        }
        if let Some(k) = builder.kernel {
            result.kernel = k;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(mp) = builder.custom_mesh_pass {
            result.custom_mesh_pass = Some(mp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
