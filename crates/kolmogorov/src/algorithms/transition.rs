//! Kolmogorov recursion-matrix construction.
//!
//! ## Purpose
//!
//! This module builds the `(2k-1) x (2k-1)` matrix H whose n-th power yields
//! the exact distribution of the Kolmogorov-Smirnov statistic, following
//! Marsaglia, Tsang & Wang (2003).
//!
//! ## Key concepts
//!
//! * **Band structure**: `H[i][j]` starts at 1 when `i - j + 1 >= 0`, else 0
//!   (one superdiagonal of ones above a full lower triangle).
//! * **Fractional boundary**: The first column and last row absorb powers of
//!   the fractional remainder `h = k - n*d`, which is what makes the method
//!   exact rather than a crude discretization. The bottom-left corner picks
//!   up an extra `(2h-1)^m` term when `2h - 1 > 0`.
//! * **Factorial weights**: Each entry is divided by `(i - j + 1)!` where
//!   that argument is positive, encoding the combinatorial recurrence.
//!
//! ## Invariants
//!
//! * All entries are non-negative for `h` in [0, 1].
//! * `h = 1` (integral `n*d`) zeroes the boundary terms naturally.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::SquareMatrix;

/// Build the recursion matrix `H(k, h)` of dimension `2k - 1`.
///
/// `k` must be at least 1 and `h` in [0, 1]; the engine derives both from
/// the sample size and statistic (`k = floor(n*d) + 1`, `h = k - n*d`).
pub fn build_transition<T: Float>(k: usize, h: T) -> SquareMatrix<T> {
    let m = 2 * k - 1;

    // Band of ones: H[i][j] = 1 when i - j + 1 >= 0.
    let mut matrix = SquareMatrix::from_fn(m, |i, j| {
        if j <= i + 1 {
            T::one()
        } else {
            T::zero()
        }
    });

    // Fractional-boundary adjustments down the first column and across the
    // last row.
    for i in 0..m {
        let first = matrix.get(i, 0) - h.powi(i as i32 + 1);
        matrix.set(i, 0, first);

        let last = matrix.get(m - 1, i) - h.powi((m - i) as i32);
        matrix.set(m - 1, i, last);
    }

    // Corner correction: the two adjustments above overlap at the
    // bottom-left entry.
    let two_h_minus_one = h + h - T::one();
    if two_h_minus_one > T::zero() {
        let corner = matrix.get(m - 1, 0) + two_h_minus_one.powi(m as i32);
        matrix.set(m - 1, 0, corner);
    }

    // Divide by (i - j + 1)! where the argument is positive.
    for i in 0..m {
        for j in 0..=i {
            let mut entry = matrix.get(i, j);
            let mut g = 1;
            while g <= i + 1 - j {
                entry = entry / T::from(g).unwrap();
                g += 1;
            }
            matrix.set(i, j, entry);
        }
    }

    matrix
}
