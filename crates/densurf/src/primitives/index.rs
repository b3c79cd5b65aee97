//! Read-only index of density samples keyed by group.
//!
//! ## Purpose
//!
//! This module provides [`SampleIndex`], which partitions `(x, y, z)` samples by
//! their integral group key `x` and keeps each group's `(y, z)` pairs sorted by
//! `y`. It answers the one question the interpolator asks: which samples of a
//! group bracket a query y?
//!
//! ## Design notes
//!
//! * **Immutable**: Built once from the full sample set, never mutated afterwards.
//! * **Ordered keys**: Groups live in a `BTreeMap`, so the key range is cheap to read.
//! * **Binary search**: Bracketing is `O(log n)` per lookup via `partition_point`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Group key**: An integral x-value (e.g., a release year), stored as `i64`.
//! * **Bracket**: The closest samples at or below and at or above a query y.
//!
//! ## Invariants
//!
//! * Every group is non-empty.
//! * Within a group, y-values are strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not interpolate; it only locates neighbours.
//! * This module does not validate finiteness (handled by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SurfaceError;
use crate::primitives::sorting::{resolve_ties, sort_by_y, DuplicatePolicy};

// ============================================================================
// Sample
// ============================================================================

/// One density sample: z observed at group key x and coordinate y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample<T> {
    /// Group key (integral).
    pub x: T,
    /// Continuous coordinate.
    pub y: T,
    /// Density value.
    pub z: T,
}

impl<T> Sample<T> {
    /// Create a sample.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<(T, T, T)> for Sample<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

// ============================================================================
// Group Keys
// ============================================================================

/// Convert an x-value into an integral group key.
pub fn group_key<T: Float>(x: T) -> Result<i64, SurfaceError> {
    let invalid = || SurfaceError::InvalidGroupKey(x.to_f64().unwrap_or(f64::NAN));
    if !x.is_finite() || x.fract() != T::zero() {
        return Err(invalid());
    }
    x.to_i64().ok_or_else(invalid)
}

// ============================================================================
// Bracket
// ============================================================================

/// Neighbours of a query y within one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket<T> {
    /// A sample sits exactly at the query y; carries its z.
    Exact(T),

    /// The query lies strictly between two samples, given as `(y, z)`.
    Between {
        /// Closest sample below the query.
        below: (T, T),
        /// Closest sample above the query.
        above: (T, T),
    },

    /// Samples exist on at most one side of the query.
    Uncovered,
}

// ============================================================================
// Group
// ============================================================================

/// The `(y, z)` samples observed at one group key, sorted by y.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    ys: Vec<T>,
    zs: Vec<T>,
}

impl<T: Float> Group<T> {
    fn from_sorted(pairs: Vec<(T, T)>) -> Self {
        let (ys, zs) = pairs.into_iter().unzip();
        Self { ys, zs }
    }

    /// Sorted y-values of the group.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// z-values aligned with [`Group::ys`].
    pub fn zs(&self) -> &[T] {
        &self.zs
    }

    /// Number of samples in the group.
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    /// Whether the group holds no samples (never true for an indexed group).
    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// Locate the samples bracketing `y`.
    ///
    /// `below` is the largest sample y `<= y` and `above` the smallest `>= y`.
    /// Since y-values are unique these are also the nearest samples by
    /// absolute distance on each side.
    pub fn bracket(&self, y: T) -> Bracket<T> {
        let n = self.ys.len();

        // First index whose y is not below the query
        let i = self.ys.partition_point(|&v| v < y);

        if i < n && self.ys[i] == y {
            return Bracket::Exact(self.zs[i]);
        }
        if i == 0 || i == n {
            return Bracket::Uncovered;
        }

        Bracket::Between {
            below: (self.ys[i - 1], self.zs[i - 1]),
            above: (self.ys[i], self.zs[i]),
        }
    }
}

// ============================================================================
// Sample Index
// ============================================================================

/// Samples partitioned by integral group key.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleIndex<T> {
    groups: BTreeMap<i64, Group<T>>,
    len: usize,
}

impl<T: Float> SampleIndex<T> {
    /// Build an index from columnar samples.
    ///
    /// Columns are assumed to have equal length and finite values; group keys
    /// are checked here because they are an index concern.
    pub fn from_columns(
        x: &[T],
        y: &[T],
        z: &[T],
        duplicates: DuplicatePolicy,
    ) -> Result<Self, SurfaceError> {
        if x.is_empty() {
            return Err(SurfaceError::EmptyInput);
        }

        let mut buckets: BTreeMap<i64, Vec<(T, T)>> = BTreeMap::new();
        for ((&xi, &yi), &zi) in x.iter().zip(y).zip(z) {
            buckets.entry(group_key(xi)?).or_default().push((yi, zi));
        }

        let mut groups = BTreeMap::new();
        let mut len = 0;
        for (key, pairs) in buckets {
            let pairs = resolve_ties(sort_by_y(pairs), duplicates, key)?;
            len += pairs.len();
            groups.insert(key, Group::from_sorted(pairs));
        }

        Ok(Self { groups, len })
    }

    /// Look up the group stored under `key`.
    #[inline]
    pub fn group(&self, key: i64) -> Option<&Group<T>> {
        self.groups.get(&key)
    }

    /// Iterate over `(key, group)` in ascending key order.
    pub fn groups(&self) -> impl Iterator<Item = (i64, &Group<T>)> {
        self.groups.iter().map(|(&k, g)| (k, g))
    }

    /// Number of distinct group keys.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of indexed samples after duplicate resolution.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest and largest group keys.
    pub fn key_range(&self) -> Option<(i64, i64)> {
        let first = self.groups.keys().next()?;
        let last = self.groups.keys().next_back()?;
        Some((*first, *last))
    }

    /// Smallest and largest sample y over all groups.
    pub fn y_range(&self) -> Option<(T, T)> {
        let mut range: Option<(T, T)> = None;
        for g in self.groups.values() {
            if let (Some(&lo), Some(&hi)) = (g.ys.first(), g.ys.last()) {
                range = Some(match range {
                    Some((a, b)) => (T::min(a, lo), T::max(b, hi)),
                    None => (lo, hi),
                });
            }
        }
        range
    }
}
