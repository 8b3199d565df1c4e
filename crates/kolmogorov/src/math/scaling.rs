//! Decimal rescaling policy for overflow-free matrix powers.
//!
//! Entries of the Kolmogorov recursion matrix grow combinatorially under
//! repeated squaring and overflow the double range near n = 150 if left
//! unscaled. The policy shifts whole decades out of a matrix (or scalar) and
//! into a tracked integer exponent, deferring normalization to the final
//! scalar extraction.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::SquareMatrix;

// Decades reserved below the representable maximum so that one full
// row-by-column sum of threshold-magnitude products stays finite:
// 2 * (half_range - HEADROOM) + log10(dim) must not exceed the type's
// decade range.
const PRODUCT_HEADROOM_DECADES: i32 = 14;

// ============================================================================
// Scale Policy
// ============================================================================

/// Decimal rescaling thresholds derived from the float type's range.
///
/// For `f64` the policy rescales entries above `1e140` by `1e-140`, the
/// classical choice for this algorithm; for narrower types the same
/// construction yields proportionally smaller thresholds.
#[derive(Debug, Clone, Copy)]
pub struct ScalePolicy<T> {
    /// Entries above this magnitude trigger a rescale.
    pub threshold: T,

    /// Scalars below this magnitude (and nonzero) trigger an upward rescale.
    pub tiny: T,

    /// Decades moved between entries and exponent per rescale.
    pub decades: i32,

    shift_down: T,
    shift_up: T,
}

impl<T: Float> Default for ScalePolicy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ScalePolicy<T> {
    /// Derive the policy from the float type's representable range.
    pub fn new() -> Self {
        let ten = T::from(10.0).unwrap();
        let range = T::max_value().log10().to_f64().unwrap_or(308.0);
        let decades = (range / 2.0).floor() as i32 - PRODUCT_HEADROOM_DECADES;

        Self {
            threshold: ten.powi(decades),
            tiny: ten.powi(-decades),
            decades,
            shift_down: ten.powi(-decades),
            shift_up: ten.powi(decades),
        }
    }

    /// Shift decades out of `matrix` until its largest entry magnitude is
    /// below the threshold.
    ///
    /// Returns the number of decades removed (to be added to the matrix's
    /// scale exponent); zero when no rescale was needed.
    pub fn rescale(&self, matrix: &mut SquareMatrix<T>) -> i32 {
        let mut removed = 0;
        while matrix.max_abs() > self.threshold {
            for v in matrix.as_mut_slice().iter_mut() {
                *v = *v * self.shift_down;
            }
            removed += self.decades;
        }
        removed
    }

    /// Shift decades into an underflowing scalar.
    ///
    /// Returns the (non-positive) exponent adjustment; the caller adds it to
    /// its running scale exponent.
    pub fn absorb_underflow(&self, s: &mut T) -> i32 {
        let mut adjustment = 0;
        while *s != T::zero() && s.abs() < self.tiny {
            *s = *s * self.shift_up;
            adjustment -= self.decades;
        }
        adjustment
    }

    /// Apply a decimal exponent to a scalar: `s * 10^exponent`.
    pub fn apply_exponent(s: T, exponent: i32) -> T {
        s * T::from(10.0).unwrap().powi(exponent)
    }
}
