//! Regular mesh axes for surface evaluation.
//!
//! This module generates the evenly spaced query coordinates along each axis.
//! Values are computed as `start + i * step` rather than by repeated addition,
//! so long axes do not accumulate drift.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// Relative slack allowed when deciding whether the last step lands on `stop`.
const STEP_EPSILON: f64 = 1e-9;

/// Absolute distance under which an x-coordinate is treated as its nearest integer.
pub const KEY_SNAP_EPSILON: f64 = 1e-9;

// Evenly spaced query coordinates of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<T> {
    // Query x-values (group-key axis).
    pub x: Vec<T>,

    // Query y-values (continuous axis).
    pub y: Vec<T>,
}

impl<T: Float> Mesh<T> {
    // Number of mesh cells.
    #[inline]
    pub fn cells(&self) -> usize {
        self.x.len() * self.y.len()
    }

    // Number of points along the y-axis (row width).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.y.len()
    }
}

// Number of points on `[start, stop]` with the given step (inclusive when aligned).
#[inline]
pub fn axis_len<T: Float>(start: T, stop: T, step: T) -> usize {
    let span = (stop - start) / step;
    let eps = T::from(STEP_EPSILON).unwrap_or_else(T::epsilon);
    (span + eps)
        .floor()
        .to_usize()
        .map_or(usize::MAX, |n| n.saturating_add(1))
}

// Generate `[start, start + step, ...]` up to and including `stop` when aligned.
pub fn axis<T: Float>(start: T, stop: T, step: T) -> Vec<T> {
    let n = axis_len(start, stop, step);
    (0..n)
        .map(|i| start + T::from(i).unwrap_or_else(T::zero) * step)
        .collect()
}

// Snap x to the nearest integer when within `KEY_SNAP_EPSILON` of it (or a few
// ulps, for narrow float types).
#[inline]
pub fn snap_to_key<T: Float>(x: T) -> T {
    let nearest = x.round();
    let ulps = T::epsilon() * x.abs() * T::from(4.0).unwrap_or_else(T::one);
    let eps = T::max(T::from(KEY_SNAP_EPSILON).unwrap_or_else(T::epsilon), ulps);
    if (x - nearest).abs() <= eps {
        nearest
    } else {
        x
    }
}
