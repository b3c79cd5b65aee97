//! # fastDensurf: Parallel Density Surfaces for Rust
//!
//! `fastDensurf` extends [`densurf`] with row-parallel mesh evaluation via
//! `rayon`, `ndarray` column inputs and `tracing` instrumentation. The
//! builder, policies and results are the ones from `densurf`; only the
//! `Batch` marker differs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastDensurf::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::from(vec![2000.0, 2000.0, 2001.0, 2001.0]);
//! let y = Array1::from(vec![100.0, 200.0, 100.0, 200.0]);
//! let z = vec![1.0, 3.0, 2.0, 4.0];
//!
//! let model = Surface::new()
//!     .x_step(0.5)
//!     .y_range(100.0, 200.0)
//!     .y_step(50.0)
//!     .adapter(Batch)     // Parallel batch adapter
//!     .build()?;
//!
//! let surface = model.fit(&x, &y, &z)?;
//! assert_eq!(surface.get(1, 1), Some(2.5));
//! # Result::<(), SurfaceError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Fits emit `tracing` events at `DEBUG` (fit start and summary) and `TRACE`
//! (one per mesh row in the parallel pass). No subscriber is installed; the
//! application chooses one.
//!
//! ## Features
//!
//! * `cpu` (default): parallel mesh pass via `rayon`. Without it every fit runs
//!   sequentially.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel mesh evaluation.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for surface interpolation.
mod api;

// Input data handling.
mod input;

// Standard fastDensurf prelude.
pub mod prelude {
    pub use crate::api::{
        build_surface,
        Adapter::Batch,
        Bandwidth::{Fixed, Scott, Silverman},
        CoveragePolicy::{Undefined, Zero},
        DensityKernel::{Biweight, Cosine, Epanechnikov, Gaussian, Triangle, Tricube, Uniform},
        DensitySurface,
        DuplicatePolicy::{Average, KeepFirst, KeepLast, Reject},
        ParallelBatchSurface, Sample, SampleIndex, SurfaceBuilder as Surface, SurfaceError,
        SurfaceInput,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
