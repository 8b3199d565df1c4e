#![cfg(feature = "dev")]
//! Tests for the dense multiply kernel.
//!
//! These tests verify the square-matrix product against algebraic
//! identities and hand-computed values:
//! - Identity absorption on both sides
//! - Known small products
//! - Degenerate dimensions
//!
//! ## Test Organization
//!
//! 1. **Identities** - I*B = B, B*I = B
//! 2. **Known Values** - hand-computed 2x2 products
//! 3. **Degenerate Cases** - dimension 0 and 1

use approx::assert_relative_eq;

use kolmogorov::internals::algorithms::multiply::{multiply, multiply_into};
use kolmogorov::internals::primitives::matrix::SquareMatrix;

// ============================================================================
// Identity Tests
// ============================================================================

#[test]
fn test_identity_times_matrix_is_matrix() {
    let identity: SquareMatrix<f64> = SquareMatrix::identity(3);
    let b = SquareMatrix::from_fn(3, |i, j| (i * 3 + j) as f64 + 0.5);

    let left = multiply(&identity, &b);
    let right = multiply(&b, &identity);

    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(left.get(i, j), b.get(i, j), max_relative = 1e-14);
            assert_relative_eq!(right.get(i, j), b.get(i, j), max_relative = 1e-14);
        }
    }
}

// ============================================================================
// Known Value Tests
// ============================================================================

#[test]
fn test_known_2x2_product() {
    // [1 2] [5 6]   [19 22]
    // [3 4] [7 8] = [43 50]
    let a = SquareMatrix::from_fn(2, |i, j| (i * 2 + j + 1) as f64);
    let b = SquareMatrix::from_fn(2, |i, j| (i * 2 + j + 5) as f64);

    let c = multiply(&a, &b);

    assert_relative_eq!(c.get(0, 0), 19.0, max_relative = 1e-14);
    assert_relative_eq!(c.get(0, 1), 22.0, max_relative = 1e-14);
    assert_relative_eq!(c.get(1, 0), 43.0, max_relative = 1e-14);
    assert_relative_eq!(c.get(1, 1), 50.0, max_relative = 1e-14);
}

#[test]
fn test_multiply_into_matches_allocating_form() {
    let a = SquareMatrix::from_fn(4, |i, j| ((i + 1) * (j + 2)) as f64 / 7.0);
    let b = SquareMatrix::from_fn(4, |i, j| ((i * j) as f64).sin());

    let allocated = multiply(&a, &b);
    let mut reused: SquareMatrix<f64> = SquareMatrix::zeros(4);
    multiply_into(&a, &b, &mut reused);

    assert_eq!(allocated, reused);
}

// ============================================================================
// Degenerate Case Tests
// ============================================================================

#[test]
fn test_dimension_zero_is_noop() {
    let a: SquareMatrix<f64> = SquareMatrix::zeros(0);
    let b: SquareMatrix<f64> = SquareMatrix::zeros(0);

    let c = multiply(&a, &b);
    assert_eq!(c.dim(), 0);
}

#[test]
fn test_dimension_one_is_scalar_product() {
    let mut a: SquareMatrix<f64> = SquareMatrix::zeros(1);
    let mut b: SquareMatrix<f64> = SquareMatrix::zeros(1);
    a.set(0, 0, 2.5);
    b.set(0, 0, -4.0);

    let c = multiply(&a, &b);
    assert_relative_eq!(c.get(0, 0), -10.0, max_relative = 1e-14);
}
