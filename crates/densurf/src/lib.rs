//! # densurf: Density Surfaces over Integral Groups for Rust
//!
//! Interpolate scattered `(x, y, z)` samples onto a regular mesh, where `x` is
//! an integral group key (a release year, a batch number), `y` is a continuous
//! value observed within each group and `z` is a density (or any other scalar)
//! measured at `(x, y)`.
//!
//! ## How it works
//!
//! Evaluation is a two-stage linear interpolation:
//!
//! 1. Inside each of the two groups bracketing the query x (`floor(x)` and
//!    `floor(x) + 1`), z is linearly interpolated along y between the nearest
//!    samples below and above the query y.
//! 2. The two per-group values are linearly blended along x.
//!
//! A cell whose bracketing groups do not both cover the query y on both sides
//! is *undefined* and holds NaN, unless the `Zero` coverage policy is chosen.
//!
//! ## Quick Start
//!
//! ```rust
//! use densurf::prelude::*;
//!
//! let x = vec![2000.0, 2000.0, 2001.0, 2001.0];
//! let y = vec![100.0, 200.0, 100.0, 200.0];
//! let z = vec![1.0, 3.0, 2.0, 4.0];
//!
//! let model = Surface::new()
//!     .x_step(0.5)            // Three rows: 2000, 2000.5, 2001
//!     .y_range(100.0, 200.0)  // Mesh y-range
//!     .y_step(50.0)           // Three columns: 100, 150, 200
//!     .adapter(Batch)
//!     .build()?;
//!
//! let surface = model.fit(&x, &y, &z)?;
//!
//! assert_eq!(surface.shape(), (3, 3));
//! assert_eq!(surface.get(1, 1), Some(2.5));
//! println!("{}", surface);
//! # Result::<(), SurfaceError>::Ok(())
//! ```
//!
//! ### Densities from raw observations
//!
//! When only `(group, value)` observations are available, a kernel density
//! estimate is fitted per group and evaluated at each observation first:
//!
//! ```rust
//! use densurf::prelude::*;
//!
//! let observations = vec![
//!     (2000.0, 90.0), (2000.0, 105.0), (2000.0, 120.0), (2000.0, 98.0),
//!     (2001.0, 85.0), (2001.0, 110.0), (2001.0, 125.0), (2001.0, 101.0),
//! ];
//!
//! let model = Surface::new()
//!     .x_step(0.25)
//!     .y_range(90.0, 120.0)
//!     .y_step(5.0)
//!     .bandwidth(Silverman)
//!     .kernel(Gaussian)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let surface = model.fit_observations(&observations)?;
//! assert_eq!(surface.groups, 2);
//! # Result::<(), SurfaceError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, SurfaceError>`. Invalid steps, ranges,
//! mismatched columns, non-integral group keys, rejected duplicates and meshes
//! too large to allocate are all reported before any evaluation starts.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! densurf = { version = "0.3", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - kernels and bandwidth rules.
mod math;

// Layer 3: Algorithms - interpolation and density estimation.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for surface interpolation.
mod api;

// Standard densurf prelude.
pub mod prelude {
    pub use crate::api::{
        build_surface,
        Adapter::Batch,
        Bandwidth::Fixed,
        Bandwidth::Scott,
        Bandwidth::Silverman,
        BatchSurface,
        CoveragePolicy::Undefined,
        CoveragePolicy::Zero,
        DensityKernel::Biweight,
        DensityKernel::Cosine,
        DensityKernel::Epanechnikov,
        DensityKernel::Gaussian,
        DensityKernel::Triangle,
        DensityKernel::Tricube,
        DensityKernel::Uniform,
        DensitySurface,
        DuplicatePolicy::Average,
        DuplicatePolicy::KeepFirst,
        DuplicatePolicy::KeepLast,
        DuplicatePolicy::Reject,
        Sample, SampleIndex, SurfaceBuilder as Surface, SurfaceError,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
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
