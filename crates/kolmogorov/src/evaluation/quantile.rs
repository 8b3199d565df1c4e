//! Quantile inversion by bisection.
//!
//! The CDF is monotone non-decreasing in the statistic and bounded on
//! [0, 1], so plain bisection is both robust and sufficient. Each probe
//! costs one full CDF evaluation; the iteration cap bounds total work.

// External dependencies
use num_traits::Float;

/// Smallest `d` in [0, 1] with `cdf(d) >= target`, to within `tolerance`.
///
/// `cdf` must be monotone non-decreasing. The search gives up refinement
/// after `max_iterations` halvings and returns the current midpoint, which
/// is already within `2^-max_iterations` of the answer.
pub fn invert_cdf<T, F>(cdf: F, target: T, tolerance: T, max_iterations: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let mut lo = T::zero();
    let mut hi = T::one();
    let two = T::from(2.0).unwrap();

    let mut iterations = 0;
    while hi - lo > tolerance && iterations < max_iterations {
        let mid = (lo + hi) / two;
        if cdf(mid) >= target {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
    }

    (lo + hi) / two
}
