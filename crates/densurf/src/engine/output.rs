//! Output types for density-surface evaluation.
//!
//! ## Purpose
//!
//! This module defines [`DensitySurface`], the dense grid of interpolated
//! z-values together with its two coordinate axes, plus the helpers a caller
//! needs to apply its own fill policy to undefined cells.
//!
//! ## Design notes
//!
//! * **Sentinel**: Undefined cells are NaN; they are never filled implicitly.
//! * **Layout**: Row-major, one row per x-coordinate.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `z.len() == x.len() * y.len()`.
//! * Defined cells are finite.
//!
//! ## Non-goals
//!
//! * This module does not render or serialize surfaces.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::CoveragePolicy;

// ============================================================================
// Result Structure
// ============================================================================

/// Interpolated density values on a regular mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct DensitySurface<T> {
    /// Query x-coordinates (rows).
    pub x: Vec<T>,

    /// Query y-coordinates (columns).
    pub y: Vec<T>,

    /// Row-major z-values; NaN marks undefined cells.
    pub z: Vec<T>,

    /// Coverage policy the surface was evaluated with.
    pub coverage_policy: CoveragePolicy,

    /// Number of distinct group keys in the index.
    pub groups: usize,

    /// Number of indexed samples after duplicate resolution.
    pub samples: usize,
}

impl<T: Float> DensitySurface<T> {
    // ========================================================================
    // Shape
    // ========================================================================

    /// Mesh shape as `(rows, columns)`, i.e. `(x.len(), y.len())`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }

    /// Row of z-values at `x[i]`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let w = self.y.len();
        &self.z[i * w..(i + 1) * w]
    }

    // ========================================================================
    // Cell Queries
    // ========================================================================

    /// Value at `(x[i], y[j])`, or `None` when undefined or out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i >= self.x.len() || j >= self.y.len() {
            return None;
        }
        let v = self.z[i * self.y.len() + j];
        if v.is_nan() {
            None
        } else {
            Some(v)
        }
    }

    /// Whether `(x[i], y[j])` holds a defined value.
    #[inline]
    pub fn is_defined(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_some()
    }

    /// Number of defined cells.
    pub fn defined_count(&self) -> usize {
        self.z.iter().filter(|v| !v.is_nan()).count()
    }

    /// Number of undefined cells.
    pub fn undefined_count(&self) -> usize {
        self.z.len() - self.defined_count()
    }

    /// Smallest defined value.
    pub fn min_defined(&self) -> Option<T> {
        self.z
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(|a, b| a.min(b))
    }

    /// Largest defined value.
    pub fn max_defined(&self) -> Option<T> {
        self.z
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(|a, b| a.max(b))
    }

    // ========================================================================
    // Caller-side Fill
    // ========================================================================

    /// Copy of the surface with every undefined cell replaced by `fill`.
    pub fn filled(&self, fill: T) -> Self {
        let mut out = self.clone();
        for v in out.z.iter_mut().filter(|v| v.is_nan()) {
            *v = fill;
        }
        out
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for DensitySurface<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (rows, cols) = self.shape();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Groups:      {}", self.groups)?;
        writeln!(f, "  Samples:     {}", self.samples)?;
        writeln!(f, "  Mesh:        {} x {}", rows, cols)?;
        writeln!(f, "  Coverage:    {}", self.coverage_policy.name())?;
        writeln!(f, "  Undefined:   {}", self.undefined_count())?;
        if let (Some(lo), Some(hi)) = (self.min_defined(), self.max_defined()) {
            writeln!(f, "  Z range:     [{}, {}]", lo, hi)?;
        }
        writeln!(f)?;

        writeln!(f, "Surface:")?;
        write!(f, "{:>10}", "x \\ y")?;

        // Show at most the first 6 columns
        let shown_cols = cols.min(6);
        for j in 0..shown_cols {
            write!(f, " {:>10.2}", self.y[j])?;
        }
        if cols > shown_cols {
            write!(f, " {:>10}", "...")?;
        }
        writeln!(f)?;
        writeln!(f, "{:-<width$}", "", width = 10 + 11 * (shown_cols + 1))?;

        // Data rows (show first 5 and last 5 if more than 10 rows)
        let rows_to_show: Vec<usize> = if rows <= 10 {
            (0..rows).collect()
        } else {
            (0..5).chain(rows - 5..rows).collect()
        };

        let mut prev_idx = 0;
        for (k, &i) in rows_to_show.iter().enumerate() {
            if k > 0 && i != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = i;

            write!(f, "{:>10.2}", self.x[i])?;
            for j in 0..shown_cols {
                match self.get(i, j) {
                    Some(v) => write!(f, " {:>10.6}", v)?,
                    None => write!(f, " {:>10}", "-")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
