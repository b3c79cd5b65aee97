//! Input abstractions for surface evaluation.
//!
//! ## Purpose
//!
//! This module lets the columnar `fit` method accept slices, vectors and
//! one-dimensional `ndarray` arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a view of the caller's buffer.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected up front.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.
//!
//! ## Non-goals
//!
//! * This module does not reshape multi-dimensional arrays.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from densurf crate
use densurf::internals::primitives::errors::SurfaceError;

/// Types usable as one column of sample input.
pub trait SurfaceInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_surface_slice(&self) -> Result<&[T], SurfaceError>;
}

impl<T: Float> SurfaceInput<T> for [T] {
    fn as_surface_slice(&self) -> Result<&[T], SurfaceError> {
        Ok(self)
    }
}

impl<T: Float> SurfaceInput<T> for Vec<T> {
    fn as_surface_slice(&self) -> Result<&[T], SurfaceError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> SurfaceInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_surface_slice(&self) -> Result<&[T], SurfaceError> {
        self.as_slice().ok_or_else(|| {
            SurfaceError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
