//! Two-stage linear interpolation over grouped density samples.
//!
//! ## Purpose
//!
//! This module evaluates a density surface at arbitrary `(x, y)` query points
//! from samples that only exist at integral group keys and at irregular,
//! group-specific y-values.
//!
//! ## Design notes
//!
//! * **Stage 1 (along y)**: Within each of the groups `floor(x)` and `ceil(x)`,
//!   interpolate linearly between the samples bracketing the query y.
//! * **Stage 2 (along x)**: Interpolate linearly between the two group values by
//!   the fractional part of x.
//! * **Undefined cells**: Missing coverage yields `None` (NaN in mesh buffers),
//!   never an error.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Coverage**: A group covers a query y when it has samples on both sides
//!   of it, or exactly at it.
//! * **Degenerate x**: When `floor(x) == ceil(x)` only one group is consulted.
//!
//! ## Invariants
//!
//! * An exact sample hit returns the sample's z without arithmetic.
//! * Results between two samples lie between their z-values.
//!
//! ## Non-goals
//!
//! * This module does not fill undefined cells (a caller decision).
//! * This module does not provide higher-order interpolation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::index::{Bracket, Group, SampleIndex};
use crate::primitives::mesh::snap_to_key;

// ============================================================================
// Coverage Policy
// ============================================================================

/// Policy for a group that has samples on only one side of a query y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoveragePolicy {
    /// The group value is undefined, and so is the interpolated point.
    #[default]
    Undefined,

    /// The group value is zero. This masks missing coverage as zero density.
    Zero,
}

impl CoveragePolicy {
    /// Get the name of the policy.
    pub const fn name(&self) -> &'static str {
        match self {
            CoveragePolicy::Undefined => "Undefined",
            CoveragePolicy::Zero => "Zero",
        }
    }

    #[inline]
    fn uncovered<T: Float>(&self) -> Option<T> {
        match self {
            CoveragePolicy::Undefined => None,
            CoveragePolicy::Zero => Some(T::zero()),
        }
    }
}

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Linear interpolation between `(x0, y0)` and `(x1, y1)` evaluated at `x`.
///
/// Tied abscissae return `y1`.
#[inline]
pub fn lerp<T: Float>(x0: T, y0: T, x1: T, y1: T, x: T) -> T {
    let denom = x1 - x0;
    if denom == T::zero() {
        return y1;
    }
    y0 + (y1 - y0) / denom * (x - x0)
}

/// Interpolate one group along y.
#[inline]
pub fn interpolate_group<T: Float>(group: &Group<T>, y: T, policy: CoveragePolicy) -> Option<T> {
    match group.bracket(y) {
        Bracket::Exact(z) => Some(z),
        Bracket::Between { below, above } => Some(lerp(below.0, below.1, above.0, above.1, y)),
        Bracket::Uncovered => policy.uncovered(),
    }
}

// ============================================================================
// Bracketing Groups
// ============================================================================

/// The pair of groups bracketing a query x.
#[derive(Debug, Clone, Copy)]
pub struct GroupPair<'a, T> {
    /// Snapped query x.
    pub x: T,
    /// Key and group at `floor(x)`.
    pub lower: (i64, &'a Group<T>),
    /// Key and group at `ceil(x)`.
    pub upper: (i64, &'a Group<T>),
}

impl<'a, T: Float> GroupPair<'a, T> {
    /// Resolve the groups at `floor(x)` and `ceil(x)`.
    ///
    /// Returns `None` if either group is absent, including when x lies outside
    /// the key range.
    pub fn locate(index: &'a SampleIndex<T>, x: T) -> Option<Self> {
        let x = snap_to_key(x);
        let lower_key = x.floor().to_i64()?;
        let upper_key = x.ceil().to_i64()?;
        Some(Self {
            x,
            lower: (lower_key, index.group(lower_key)?),
            upper: (upper_key, index.group(upper_key)?),
        })
    }

    /// Whether x sits exactly on a group key.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lower.0 == self.upper.0
    }

    /// Evaluate the pair at query y.
    #[inline]
    pub fn evaluate(&self, y: T, policy: CoveragePolicy) -> Option<T> {
        let z_upper = interpolate_group(self.upper.1, y, policy)?;
        if self.is_degenerate() {
            return Some(z_upper);
        }

        let z_lower = interpolate_group(self.lower.1, y, policy)?;
        let x_lower = T::from(self.lower.0)?;
        let x_upper = T::from(self.upper.0)?;
        Some(lerp(x_lower, z_lower, x_upper, z_upper, self.x))
    }
}

// ============================================================================
// Point and Row Evaluation
// ============================================================================

/// Interpolate the surface at a single `(x, y)` query point.
///
/// Returns `None` when the point is undefined.
#[inline]
pub fn interpolate_point<T: Float>(
    index: &SampleIndex<T>,
    x: T,
    y: T,
    policy: CoveragePolicy,
) -> Option<T> {
    GroupPair::locate(index, x)?.evaluate(y, policy)
}

/// Fill one mesh row (fixed x, every y) with interpolated values.
///
/// Undefined cells are written as NaN.
pub fn interpolate_row<T: Float>(
    index: &SampleIndex<T>,
    x: T,
    ys: &[T],
    policy: CoveragePolicy,
    out: &mut [T],
) {
    debug_assert_eq!(ys.len(), out.len(), "interpolate_row: length mismatch");

    match GroupPair::locate(index, x) {
        Some(pair) => {
            for (cell, &y) in out.iter_mut().zip(ys) {
                *cell = pair.evaluate(y, policy).unwrap_or_else(T::nan);
            }
        }
        None => out.fill(T::nan()),
    }
}
