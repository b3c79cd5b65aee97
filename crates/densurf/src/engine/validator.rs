//! Input validation for surface configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for builder parameters and
//! input samples. It checks requirements such as matching column lengths,
//! finite values, positive steps, and mesh size limits.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not check group keys (handled by the sample index).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::bandwidth::Bandwidth;
use crate::primitives::errors::{Axis, SurfaceError};

/// Largest mesh the evaluator accepts.
pub const MAX_MESH_CELLS: usize = 50_000_000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for surface configuration and input data.
///
/// All methods return `Result<(), SurfaceError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate columnar sample input.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T], z: &[T]) -> Result<(), SurfaceError> {
        // Check 1: Non-empty
        if x.is_empty() && y.is_empty() && z.is_empty() {
            return Err(SurfaceError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() || n != z.len() {
            return Err(SurfaceError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
                z_len: z.len(),
            });
        }

        // Check 3: All values finite (combined loop for cache locality)
        for i in 0..n {
            for (name, v) in [("x", x[i]), ("y", y[i]), ("z", z[i])] {
                if !v.is_finite() {
                    return Err(SurfaceError::InvalidNumericValue(format!(
                        "{}[{}]={}",
                        name,
                        i,
                        v.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate `(group, value)` observations for density estimation.
    pub fn validate_observations<T: Float>(obs: &[(T, T)]) -> Result<(), SurfaceError> {
        if obs.is_empty() {
            return Err(SurfaceError::EmptyInput);
        }
        for (i, &(x, y)) in obs.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(SurfaceError::InvalidNumericValue(format!(
                    "observation[{}]=({}, {})",
                    i,
                    x.to_f64().unwrap_or(f64::NAN),
                    y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), SurfaceError> {
        if !val.is_finite() {
            return Err(SurfaceError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Mesh Validation
    // ========================================================================

    /// Validate a mesh step: positive and finite.
    pub fn validate_step<T: Float>(step: T, axis: Axis) -> Result<(), SurfaceError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(SurfaceError::InvalidStep {
                axis,
                step: step.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate a mesh range: finite bounds with `min <= max`.
    pub fn validate_range<T: Float>(min: T, max: T) -> Result<(), SurfaceError> {
        Self::validate_scalar(min, "y_min")?;
        Self::validate_scalar(max, "y_max")?;
        if min > max {
            return Err(SurfaceError::InvalidRange {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the number of mesh cells against [`MAX_MESH_CELLS`].
    pub fn validate_mesh_size(x_len: usize, y_len: usize) -> Result<(), SurfaceError> {
        let cells = x_len.saturating_mul(y_len);
        if cells > MAX_MESH_CELLS {
            return Err(SurfaceError::MeshTooLarge {
                cells,
                max: MAX_MESH_CELLS,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Density Validation
    // ========================================================================

    /// Validate a bandwidth rule; fixed bandwidths must be positive and finite.
    pub fn validate_bandwidth(bandwidth: Bandwidth) -> Result<(), SurfaceError> {
        if let Bandwidth::Fixed(h) = bandwidth {
            if !h.is_finite() || h <= 0.0 {
                return Err(SurfaceError::InvalidBandwidth(h));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SurfaceError> {
        if let Some(param) = duplicate_param {
            return Err(SurfaceError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
