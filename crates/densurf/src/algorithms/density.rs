//! Per-group kernel density estimation.
//!
//! ## Purpose
//!
//! This module turns raw `(group, value)` observations into density samples
//! `(group, value, density)`: one kernel density estimate is fitted per group
//! and evaluated at each of that group's own observations. The samples can be
//! fed straight into the surface interpolator.
//!
//! ## Design notes
//!
//! * **Independence**: Each group gets its own bandwidth from its own spread.
//! * **Normalization**: Estimates integrate to one over the value axis.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **KDE**: f(t) = 1 / (n h) * sum_i K((t - v_i) / h).
//! * **Self-evaluation**: Each observation receives the density at its own value.
//!
//! ## Invariants
//!
//! * Output order follows the first occurrence of each observation.
//! * Repeated `(group, value)` observations share one density and yield a
//!   single sample, so the result never holds duplicate `(x, y)` pairs.
//!
//! ## Non-goals
//!
//! * This module does not perform multivariate density estimation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::math::bandwidth::Bandwidth;
use crate::math::kernel::DensityKernel;
use crate::primitives::errors::SurfaceError;
use crate::primitives::index::{group_key, Sample};

// ============================================================================
// Kernel Density Estimate
// ============================================================================

/// A univariate kernel density estimate fitted to one set of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelDensity<T> {
    values: Vec<T>,
    bandwidth: T,
    kernel: DensityKernel,
}

impl<T: Float> KernelDensity<T> {
    /// Fit an estimate to `values`.
    ///
    /// Rule-based bandwidths need at least two distinct observations; a fixed
    /// bandwidth works with a single one.
    pub fn fit(
        values: &[T],
        bandwidth: Bandwidth,
        kernel: DensityKernel,
    ) -> Result<Self, SurfaceError> {
        let min = match bandwidth {
            Bandwidth::Fixed(_) => 1,
            _ => 2,
        };
        if values.len() < min {
            return Err(SurfaceError::TooFewPoints {
                got: values.len(),
                min,
            });
        }

        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SurfaceError::InvalidNumericValue(format!(
                "value[{}]={}",
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let h = bandwidth.resolve(values);
        if !h.is_finite() || h <= T::zero() {
            return Err(match bandwidth {
                Bandwidth::Fixed(raw) => SurfaceError::InvalidBandwidth(raw),
                _ => SurfaceError::DegenerateSpread { group: None },
            });
        }

        Ok(Self {
            values: values.to_vec(),
            bandwidth: h,
            kernel,
        })
    }

    /// Bandwidth in use.
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Kernel in use.
    pub fn kernel(&self) -> DensityKernel {
        self.kernel
    }

    /// Evaluate the density at `at`.
    pub fn evaluate(&self, at: T) -> T {
        let h = self.bandwidth;
        let sum = self
            .values
            .iter()
            .fold(T::zero(), |acc, &v| acc + self.kernel.density((at - v) / h));
        let n = T::from(self.values.len()).unwrap_or_else(T::one);
        sum / (n * h)
    }

    /// Evaluate the density at every observation it was fitted to.
    pub fn evaluate_self(&self) -> Vec<T> {
        self.values.iter().map(|&v| self.evaluate(v)).collect()
    }
}

// ============================================================================
// Grouped Density Samples
// ============================================================================

/// Estimate a density per group and evaluate it at each observation.
///
/// `observations` are `(group, value)` pairs. Every observation feeds its
/// group's estimate, but repeated pairs evaluate to the same density, so one
/// [`Sample`] is returned per distinct pair, in order of first occurrence.
pub fn density_samples<T: Float>(
    observations: &[(T, T)],
    bandwidth: Bandwidth,
    kernel: DensityKernel,
) -> Result<Vec<Sample<T>>, SurfaceError> {
    if observations.is_empty() {
        return Err(SurfaceError::EmptyInput);
    }

    // Group the observation positions so output keeps input order
    let mut positions: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (i, &(x, _)) in observations.iter().enumerate() {
        positions.entry(group_key(x)?).or_default().push(i);
    }

    let mut densities = vec![T::nan(); observations.len()];
    let mut keep = vec![true; observations.len()];
    for (key, idx) in positions {
        let values: Vec<T> = idx.iter().map(|&i| observations[i].1).collect();
        let kde = KernelDensity::fit(&values, bandwidth, kernel).map_err(|err| match err {
            SurfaceError::DegenerateSpread { .. } => {
                SurfaceError::DegenerateSpread { group: Some(key) }
            }
            other => other,
        })?;

        for (&i, d) in idx.iter().zip(kde.evaluate_self()) {
            densities[i] = d;
        }

        // Later repeats of a value are dropped
        let mut order = idx;
        order.sort_by(|&a, &b| {
            observations[a]
                .1
                .partial_cmp(&observations[b].1)
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });
        for w in order.windows(2) {
            if observations[w[0]].1 == observations[w[1]].1 {
                keep[w[1]] = false;
            }
        }
    }

    Ok(observations
        .iter()
        .zip(densities)
        .zip(keep)
        .filter(|(_, kept)| *kept)
        .map(|((&(x, y), z), _)| Sample::new(x, y, z))
        .collect())
}
