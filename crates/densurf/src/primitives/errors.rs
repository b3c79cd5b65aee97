//! Error types for density-surface operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while indexing density
//! samples, estimating per-group densities, and evaluating a surface mesh.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., offending step or key).
//! * **Deferred**: Builder misuse is caught and stored until `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty or mismatched inputs, non-finite values, non-integral keys.
//! 2. **Mesh validation**: Non-positive steps, inverted ranges, oversized meshes.
//! 3. **Density estimation**: Too few observations or zero spread within a group.
//!
//! ## Invariants
//!
//! * Mesh points outside sample coverage are never reported as errors; they are
//!   represented as undefined cells in the output.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Axis Label
// ============================================================================

/// Mesh axis named in step/range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Group-key axis.
    X,
    /// Continuous axis.
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for density-surface operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// No samples were provided.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Columnar `x`, `y` and `z` inputs must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` column.
        x_len: usize,
        /// Number of elements in the `y` column.
        y_len: usize,
        /// Number of elements in the `z` column.
        z_len: usize,
    },

    /// Input data or a mesh parameter contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Group keys must be integral and fit in an `i64`.
    InvalidGroupKey(f64),

    /// Mesh steps must be positive and finite.
    InvalidStep {
        /// Axis the step belongs to.
        axis: Axis,
        /// The step provided.
        step: f64,
    },

    /// The lower bound of a mesh range exceeds its upper bound.
    InvalidRange {
        /// Lower bound provided.
        min: f64,
        /// Upper bound provided.
        max: f64,
    },

    /// The requested mesh has more cells than the evaluator accepts.
    MeshTooLarge {
        /// Number of cells requested.
        cells: usize,
        /// Maximum number of cells.
        max: usize,
    },

    /// Two samples share the same `(x, y)` pair under `DuplicatePolicy::Reject`.
    DuplicateSample {
        /// Group key of the duplicate.
        x: i64,
        /// Continuous coordinate of the duplicate.
        y: f64,
    },

    /// Density estimation needs more observations in a group.
    TooFewPoints {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        min: usize,
    },

    /// All observations are identical, so no bandwidth can be derived.
    DegenerateSpread {
        /// Group key of the degenerate group, when known.
        group: Option<i64>,
    },

    /// Kernel bandwidth must be positive and finite.
    InvalidBandwidth(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SurfaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input samples are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MismatchedInputs {
                x_len,
                y_len,
                z_len,
            } => {
                write!(
                    f,
                    "Length mismatch: x has {x_len} values, y has {y_len}, z has {z_len}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidGroupKey(key) => {
                write!(f, "Invalid group key: {key} (must be an integer)")
            }
            Self::InvalidStep { axis, step } => {
                write!(f, "Invalid {axis}_step: {step} (must be > 0 and finite)")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "Invalid range: min {min} is greater than max {max}")
            }
            Self::MeshTooLarge { cells, max } => {
                write!(f, "Mesh too large: {cells} cells (at most {max})")
            }
            Self::DuplicateSample { x, y } => {
                write!(f, "Duplicate sample at x={x}, y={y}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::DegenerateSpread { group: Some(group) } => {
                write!(f, "Group {group} has zero spread; cannot derive a bandwidth")
            }
            Self::DegenerateSpread { group: None } => {
                write!(f, "Observations have zero spread; cannot derive a bandwidth")
            }
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SurfaceError {}
