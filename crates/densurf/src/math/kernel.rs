//! Kernel functions for per-group density estimation.
//!
//! ## Purpose
//!
//! This module provides the smoothing kernels used to turn raw observations of
//! one group into density values. Each kernel is normalized so it integrates to
//! one, which makes the resulting z-values comparable across groups.
//!
//! ## Design notes
//!
//! * **Normalization**: The raw profile K(u) is divided by its integral c_K.
//! * **Support**: All kernels except the Gaussian are bounded on [-1, 1].
//! * **Scale**: For the Gaussian the bandwidth is the standard deviation; for
//!   bounded kernels it is the support radius.
//!
//! ## Invariants
//!
//! * Kernels are non-negative (K(u) >= 0) and symmetric (K(u) = K(-u)).
//! * Bounded kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not select bandwidths (see `math::bandwidth`).

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi, the Gaussian normalizing constant.
const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

/// pi/2, used in cosine kernel calculations.
const PI_OVER_2: f64 = PI / 2.0;

// ============================================================================
// Density Kernel Enum
// ============================================================================

/// | Kernel       | Profile K(u)     | c_K = integral K(u) du |
/// |--------------|------------------|------------------------|
/// | Gaussian     | exp(-u^2 / 2)    | sqrt(2 pi)             |
/// | Epanechnikov | 1 - u^2          | 4/3                    |
/// | Biweight     | (1 - u^2)^2      | 16/15                  |
/// | Triangle     | 1 - abs(u)       | 1                      |
/// | Tricube      | (1 - abs(u)^3)^3 | 81/70                  |
/// | Cosine       | cos(pi u / 2)    | 4/pi                   |
/// | Uniform      | 1                | 2                      |
///
/// Kernel used to estimate a group's density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DensityKernel {
    /// Gaussian kernel (unbounded support). The default.
    #[default]
    Gaussian,

    /// Epanechnikov kernel: (1 - u^2) for |u| < 1.
    Epanechnikov,

    /// Biweight (quartic) kernel: (1 - u^2)^2 for |u| < 1.
    Biweight,

    /// Triangular kernel: (1 - |u|) for |u| < 1.
    Triangle,

    /// Tricube kernel: (1 - |u|^3)^3 for |u| < 1.
    Tricube,

    /// Cosine kernel: cos(pi * u / 2) for |u| < 1.
    Cosine,

    /// Uniform (rectangular) kernel for |u| < 1.
    Uniform,
}

impl DensityKernel {
    /// Get the name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            DensityKernel::Gaussian => "Gaussian",
            DensityKernel::Epanechnikov => "Epanechnikov",
            DensityKernel::Biweight => "Biweight",
            DensityKernel::Triangle => "Triangle",
            DensityKernel::Tricube => "Tricube",
            DensityKernel::Cosine => "Cosine",
            DensityKernel::Uniform => "Uniform",
        }
    }

    /// Integral of the raw kernel profile over its support.
    #[inline]
    pub fn integrator(&self) -> f64 {
        match self {
            DensityKernel::Gaussian => SQRT_2PI,
            DensityKernel::Epanechnikov => 4.0 / 3.0,
            DensityKernel::Biweight => 16.0 / 15.0,
            DensityKernel::Triangle => 1.0,
            DensityKernel::Tricube => 81.0 / 70.0,
            DensityKernel::Cosine => 4.0 / PI,
            DensityKernel::Uniform => 2.0,
        }
    }

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            DensityKernel::Gaussian => None,
            _ => Some((-1.0, 1.0)),
        }
    }

    /// Raw (unnormalized) kernel profile K(u).
    #[inline]
    pub fn profile<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        if self.support().is_some() && abs_u >= T::one() {
            return T::zero();
        }

        match self {
            DensityKernel::Gaussian => {
                let half = T::from(0.5).unwrap_or_else(T::zero);
                (-half * abs_u * abs_u).exp()
            }
            DensityKernel::Epanechnikov => T::one() - abs_u * abs_u,
            DensityKernel::Biweight => {
                let tmp = T::one() - abs_u * abs_u;
                tmp * tmp
            }
            DensityKernel::Triangle => T::one() - abs_u,
            DensityKernel::Tricube => {
                let tmp = T::one() - abs_u * abs_u * abs_u;
                tmp * tmp * tmp
            }
            DensityKernel::Cosine => {
                let pi_over_2 = T::from(PI_OVER_2).unwrap_or_else(T::one);
                (pi_over_2 * abs_u).cos()
            }
            DensityKernel::Uniform => T::one(),
        }
    }

    /// Normalized kernel K(u) / c_K, integrating to one over u.
    #[inline]
    pub fn density<T: Float>(&self, u: T) -> T {
        let c = T::from(self.integrator()).unwrap_or_else(T::one);
        self.profile(u) / c
    }
}

// ============================================================================
// Normal Density
// ============================================================================

/// Density of the normal distribution N(mean, std^2) at `x`.
///
/// Returns NaN when `std` is not positive.
#[inline]
pub fn normal_density<T: Float>(x: T, mean: T, std: T) -> T {
    if std <= T::zero() {
        return T::nan();
    }
    DensityKernel::Gaussian.density((x - mean) / std) / std
}
