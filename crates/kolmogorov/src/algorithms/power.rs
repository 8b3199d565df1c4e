//! Binary exponentiation with decimal rescaling.
//!
//! ## Purpose
//!
//! This module raises a square matrix to a non-negative integer power in
//! `O(log e)` multiplications, carrying a decimal scale exponent so that
//! entries never leave the representable range.
//!
//! ## Design notes
//!
//! * **Iterative**: The exponent is consumed bit by bit; the accumulator
//!   picks up the running square whenever the current bit is set.
//! * **Scale bookkeeping**: Squaring the running matrix doubles its
//!   exponent; multiplying into the accumulator adds it. A rescale after
//!   every product keeps entries below the policy threshold.
//! * **Buffer recycling**: All products go through one [`PowerBuffer`];
//!   no allocation happens inside the loop.
//!
//! ## Invariants
//!
//! * At every step, `accumulator * 10^acc_exp * (running * 10^run_exp)^rest`
//!   equals the true value of `base^e`.
//! * Exponent 0 yields the identity with exponent 0; exponent 1 yields a
//!   copy of the base with exponent 0.
//!
//! ## Non-goals
//!
//! * Negative exponents (the exponent parameter is unsigned).

// External dependencies
use core::mem;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::multiply::multiply_into;
use crate::math::scaling::ScalePolicy;
use crate::primitives::buffer::PowerBuffer;
use crate::primitives::matrix::{ScaledMatrix, SquareMatrix};

/// Compute `base^exponent` with decimal scale tracking.
///
/// The returned [`ScaledMatrix`] holds entries and a decimal exponent whose
/// product is the true matrix power.
pub fn power<T: Float>(base: &SquareMatrix<T>, exponent: u64) -> ScaledMatrix<T> {
    let policy = ScalePolicy::new();
    let mut buffer = PowerBuffer::new(base);
    power_with_scale(exponent, &policy, &mut buffer)
}

/// Exponentiation core operating on a prepared buffer.
///
/// `buffer.running` must hold the base and `buffer.accumulator` the
/// identity, which is how [`PowerBuffer::new`] initializes them.
pub fn power_with_scale<T: Float>(
    mut exponent: u64,
    policy: &ScalePolicy<T>,
    buffer: &mut PowerBuffer<T>,
) -> ScaledMatrix<T> {
    let mut acc_exp: i32 = 0;
    let mut run_exp: i32 = 0;
    let mut acc_is_identity = true;

    while exponent > 0 {
        if exponent & 1 == 1 {
            if acc_is_identity {
                // First set bit: the accumulator is still the identity, so
                // the product is just the running matrix.
                buffer.accumulator.copy_from(&buffer.running);
                acc_exp = run_exp;
                acc_is_identity = false;
            } else {
                multiply_into(&buffer.accumulator, &buffer.running, &mut buffer.product);
                mem::swap(&mut buffer.accumulator, &mut buffer.product);
                acc_exp += run_exp;
                acc_exp += policy.rescale(&mut buffer.accumulator);
            }
        }

        exponent >>= 1;
        if exponent == 0 {
            break;
        }

        multiply_into(&buffer.running, &buffer.running, &mut buffer.product);
        mem::swap(&mut buffer.running, &mut buffer.product);
        run_exp *= 2;
        run_exp += policy.rescale(&mut buffer.running);
    }

    ScaledMatrix {
        matrix: buffer.accumulator.clone(),
        exponent: acc_exp,
    }
}
