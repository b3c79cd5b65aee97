//! Sorting and tie resolution for per-group density samples.
//!
//! ## Purpose
//!
//! This module orders the `(y, z)` pairs of one group by their y-coordinate and
//! collapses pairs that share the same y according to a [`DuplicatePolicy`].
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so "first" and "last" keep their input meaning.
//! * **Fast path**: Already sorted input skips the sort.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output y-values are strictly increasing.
//! * Every input y-value appears exactly once in the output.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (handled by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SurfaceError;

// ============================================================================
// Duplicate Policy
// ============================================================================

/// Policy for samples sharing the same `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`SurfaceError::DuplicateSample`].
    #[default]
    Reject,

    /// Keep the first occurrence in input order.
    KeepFirst,

    /// Keep the last occurrence in input order.
    KeepLast,

    /// Replace the duplicates by the mean of their z-values.
    Average,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort `(y, z)` pairs by y in ascending order (stable).
#[inline]
pub fn sort_by_y<T: Float>(mut pairs: Vec<(T, T)>) -> Vec<(T, T)> {
    let is_sorted = pairs.windows(2).all(|w| w[0].0 <= w[1].0);
    if !is_sorted {
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    }
    pairs
}

/// Collapse runs of equal y-values in sorted pairs according to `policy`.
///
/// `group` is only used to report the offending key under
/// [`DuplicatePolicy::Reject`].
pub fn resolve_ties<T: Float>(
    sorted: Vec<(T, T)>,
    policy: DuplicatePolicy,
    group: i64,
) -> Result<Vec<(T, T)>, SurfaceError> {
    let mut out: Vec<(T, T)> = Vec::with_capacity(sorted.len());
    let mut start = 0;

    while start < sorted.len() {
        let y = sorted[start].0;
        let mut end = start + 1;
        while end < sorted.len() && sorted[end].0 == y {
            end += 1;
        }

        let run = &sorted[start..end];
        let z = if run.len() == 1 {
            run[0].1
        } else {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(SurfaceError::DuplicateSample {
                        x: group,
                        y: y.to_f64().unwrap_or(f64::NAN),
                    });
                }
                DuplicatePolicy::KeepFirst => run[0].1,
                DuplicatePolicy::KeepLast => run[run.len() - 1].1,
                DuplicatePolicy::Average => {
                    let sum = run.iter().fold(T::zero(), |acc, p| acc + p.1);
                    sum / T::from(run.len()).unwrap_or_else(T::one)
                }
            }
        };

        out.push((y, z));
        start = end;
    }

    Ok(out)
}
