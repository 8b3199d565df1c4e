//! Scratch-buffer management for the power iteration.
//!
//! ## Purpose
//!
//! This module provides the reusable workspace for binary exponentiation.
//! Raising an `m x m` matrix to the n-th power needs three live matrices
//! (accumulator, running square, product target); allocating them once per
//! call and swapping between them avoids an allocation per multiplication.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: The buffer owns all scratch space for one
//!   power computation.
//! * **Per-call allocation**: A fresh buffer per evaluation keeps calls
//!   reentrant; no global or thread-local scratch space exists anywhere in
//!   the crate.
//!
//! ## Invariants
//!
//! * All three matrices always share the same dimension.
//!
//! ## Non-goals
//!
//! * Cross-call buffer pooling (every call allocates and drops its own
//!   workspace).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// PowerBuffer - Working Memory for Binary Exponentiation
// ============================================================================

/// Working memory for one matrix-power computation.
#[derive(Debug, Clone)]
pub struct PowerBuffer<T> {
    /// Partial-result accumulator.
    pub accumulator: SquareMatrix<T>,

    /// Running square of the base.
    pub running: SquareMatrix<T>,

    /// Product target, swapped with the operand after each multiply.
    pub product: SquareMatrix<T>,
}

impl<T: Float> PowerBuffer<T> {
    /// Create a buffer for matrices of the given dimension.
    ///
    /// The accumulator starts as the identity and the running matrix as a
    /// copy of `base`, which is exactly the state the exponentiation loop
    /// starts from.
    pub fn new(base: &SquareMatrix<T>) -> Self {
        let dim = base.dim();
        Self {
            accumulator: SquareMatrix::identity(dim),
            running: base.clone(),
            product: SquareMatrix::zeros(dim),
        }
    }
}
