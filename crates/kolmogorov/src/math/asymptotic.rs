//! Asymptotic forms of the Kolmogorov distribution.
//!
//! ## Purpose
//!
//! This module provides the limiting law of `sqrt(n) * Dn` as n grows, and
//! the finite-n right-tail estimate used by the optional shortcut. Both are
//! closed-form series, independent of the matrix machinery.
//!
//! ## Key concepts
//!
//! * **Limiting CDF**: `K(t) = 1 - 2 * sum_{j>=1} (-1)^(j-1) exp(-2 j^2 t^2)`,
//!   with the dual theta-series for small t where the alternating form
//!   converges slowly.
//! * **Right-tail estimate**: a fitted exponential bound on `P(Dn <= d)`
//!   accurate to about seven digits when `n * d^2` is large.
//!
//! ## Invariants
//!
//! * Both functions return values in [0, 1] for valid input.

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// ============================================================================
// Series Constants
// ============================================================================

/// Square root of 2*pi, used by the small-argument theta series.
const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

/// Crossover point between the two theta-series expansions.
///
/// Below this argument the alternating series needs many terms; the dual
/// series converges in two or three.
const SERIES_CROSSOVER: f64 = 1.18;

/// Relative truncation tolerance for both series.
const SERIES_EPS: f64 = 1e-12;

/// Hard cap on series terms.
const MAX_TERMS: usize = 200;

// Fitted coefficients of the right-tail exponent (Marsaglia, Tsang & Wang).
const TAIL_C0: f64 = 2.000_071;
const TAIL_C1: f64 = 0.331;
const TAIL_C2: f64 = 1.409;

// Activation thresholds for the right-tail shortcut, in units of n*d^2.
const TAIL_ALWAYS: f64 = 7.24;
const TAIL_LARGE_N: f64 = 3.76;
const TAIL_MIN_N: usize = 100;

// ============================================================================
// Limiting Distribution
// ============================================================================

/// CDF of the Kolmogorov limit law: `lim P(sqrt(n) * Dn <= t)`.
pub fn limiting_cdf<T: Float>(t: T) -> T {
    let t = t.to_f64().unwrap_or(f64::NAN);
    if !(t > 0.0) {
        return T::zero();
    }

    let value = if t < SERIES_CROSSOVER {
        // sqrt(2*pi)/t * sum_{j>=1} exp(-(2j-1)^2 pi^2 / (8 t^2))
        let factor = -PI * PI / (8.0 * t * t);
        let mut sum = 0.0;
        for j in 1..=MAX_TERMS {
            let odd = (2 * j - 1) as f64;
            let term = (factor * odd * odd).exp();
            sum += term;
            if term < SERIES_EPS * sum {
                break;
            }
        }
        SQRT_2PI / t * sum
    } else {
        // 1 - 2 * sum_{j>=1} (-1)^(j-1) exp(-2 j^2 t^2)
        let mut sum = 0.0;
        let mut sign = 1.0;
        for j in 1..=MAX_TERMS {
            let jf = j as f64;
            let term = (-2.0 * jf * jf * t * t).exp();
            sum += sign * term;
            sign = -sign;
            if term < SERIES_EPS {
                break;
            }
        }
        1.0 - 2.0 * sum
    };

    T::from(value.clamp(0.0, 1.0)).unwrap_or_else(T::zero)
}

// ============================================================================
// Finite-n Right Tail
// ============================================================================

/// Whether the right-tail estimate is accurate enough to replace the exact
/// computation, given `s = n * d^2`.
pub fn tail_shortcut_applies(n: usize, s: f64) -> bool {
    s > TAIL_ALWAYS || (s > TAIL_LARGE_N && n >= TAIL_MIN_N)
}

/// Right-tail estimate of `P(Dn <= d)` for `s = n * d^2`.
///
/// Only meaningful where [`tail_shortcut_applies`] holds; accuracy degrades
/// toward the body of the distribution.
pub fn right_tail_estimate<T: Float>(n: usize, s: T) -> T {
    let s = s.to_f64().unwrap_or(f64::NAN);
    let nf = n as f64;
    let exponent = (TAIL_C0 + TAIL_C1 / nf.sqrt() + TAIL_C2 / nf) * s;
    let value = 1.0 - 2.0 * (-exponent).exp();
    T::from(value.clamp(0.0, 1.0)).unwrap_or_else(T::zero)
}
