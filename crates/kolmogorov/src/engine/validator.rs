//! Input validation for distribution queries.
//!
//! ## Purpose
//!
//! This module provides validation functions for the public query surface:
//! sample sizes, observed statistics, significance levels, and builder
//! parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Domain bounds**: Sample size >= 1; statistic anything but NaN
//!   (out-of-range statistics resolve through the exact boundary cases,
//!   not through errors).
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp, correct, or transform invalid inputs.
//! * This module does not perform the computation itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KolmogorovError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for distribution queries and builder parameters.
///
/// Provides static methods returning `Result<(), KolmogorovError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the sample size.
    pub fn validate_sample_size(n: usize) -> Result<(), KolmogorovError> {
        if n == 0 {
            return Err(KolmogorovError::InvalidSampleSize(n));
        }
        Ok(())
    }

    /// Validate an observed statistic.
    ///
    /// Negative and out-of-range values are legal (the CDF is 0 or 1 there);
    /// only NaN is rejected, since it cannot be ordered against the
    /// boundaries.
    pub fn validate_statistic<T: Float>(d: T) -> Result<(), KolmogorovError> {
        if d.is_nan() {
            return Err(KolmogorovError::InvalidStatistic(
                d.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a significance level (must lie strictly inside (0, 1)).
    pub fn validate_level<T: Float>(level: T) -> Result<(), KolmogorovError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(KolmogorovError::InvalidLevel(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the quantile search tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), KolmogorovError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(KolmogorovError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KolmogorovError> {
        if let Some(param) = duplicate_param {
            return Err(KolmogorovError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
