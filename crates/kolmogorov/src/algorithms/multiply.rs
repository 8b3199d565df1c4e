//! Dense square-matrix product.
//!
//! The classic triple loop with a scalar accumulator. Matrices in this crate
//! stay small (dimension `2*ceil(n*d) - 1`), so a cache-blocked or SIMD
//! kernel would be unwarranted complexity; the accumulator form also keeps
//! rounding behavior identical across platforms.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::SquareMatrix;

/// Compute `out = a * b` for square matrices of equal dimension.
///
/// The output buffer is necessarily distinct from both inputs (`&mut` cannot
/// alias the shared borrows). Dimension 0 is a no-op.
pub fn multiply_into<T: Float>(a: &SquareMatrix<T>, b: &SquareMatrix<T>, out: &mut SquareMatrix<T>) {
    let m = a.dim();
    debug_assert_eq!(m, b.dim());
    debug_assert_eq!(m, out.dim());

    let a = a.as_slice();
    let b = b.as_slice();
    let out = out.as_mut_slice();

    for i in 0..m {
        for j in 0..m {
            let mut s = T::zero();
            for k in 0..m {
                s = s + a[i * m + k] * b[k * m + j];
            }
            out[i * m + j] = s;
        }
    }
}

/// Allocating convenience wrapper around [`multiply_into`].
pub fn multiply<T: Float>(a: &SquareMatrix<T>, b: &SquareMatrix<T>) -> SquareMatrix<T> {
    let mut out = SquareMatrix::zeros(a.dim());
    multiply_into(a, b, &mut out);
    out
}
