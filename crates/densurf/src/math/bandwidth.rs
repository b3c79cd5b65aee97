//! Bandwidth selection for kernel density estimation.
//!
//! Rule-of-thumb bandwidths scale the sample standard deviation (`ddof = 1`)
//! by a factor that shrinks with the number of observations.

// External dependencies
use num_traits::Float;

// Rule for choosing the kernel bandwidth of a group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Bandwidth {
    // Scott's rule: `sd * n^(-1/5)`.
    #[default]
    Scott,

    // Silverman's rule: `sd * (n * 3/4)^(-1/5)`.
    Silverman,

    // Fixed absolute bandwidth shared by every group.
    Fixed(f64),
}

impl Bandwidth {
    // Resolve the bandwidth for the given observations.
    //
    // Returns zero when fewer than two observations are given or all of them
    // coincide; callers treat that as a degenerate group.
    pub fn resolve<T: Float>(&self, vals: &[T]) -> T {
        if let Self::Fixed(h) = self {
            return T::from(*h).unwrap_or_else(T::nan);
        }

        let n = vals.len();
        if n < 2 {
            return T::zero();
        }

        let sd = Self::sample_std(vals);
        let n_t = T::from(n).unwrap_or_else(T::one);
        let exponent = T::from(-0.2).unwrap_or_else(T::zero);

        let factor = match self {
            Self::Scott => n_t.powf(exponent),
            Self::Silverman => {
                let three_quarters = T::from(0.75).unwrap_or_else(T::one);
                (n_t * three_quarters).powf(exponent)
            }
            Self::Fixed(_) => T::one(),
        };

        sd * factor
    }

    // Sample standard deviation with Bessel's correction.
    #[inline]
    fn sample_std<T: Float>(vals: &[T]) -> T {
        let n = T::from(vals.len()).unwrap_or_else(T::one);
        let mean = vals.iter().fold(T::zero(), |acc, &v| acc + v) / n;
        let ss = vals.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean;
            acc + d * d
        });
        (ss / (n - T::one())).sqrt()
    }
}
