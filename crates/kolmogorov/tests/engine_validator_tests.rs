#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the fail-fast validation of the query surface:
//! - Sample-size bounds
//! - Statistic domain (NaN rejection, out-of-range acceptance)
//! - Significance levels and tolerances
//! - Duplicate-parameter detection
//!
//! ## Test Organization
//!
//! 1. **Sample Size** - zero rejected, positive accepted
//! 2. **Statistic** - NaN rejected, everything orderable accepted
//! 3. **Parameters** - levels, tolerances, duplicates

use kolmogorov::internals::engine::validator::Validator;
use kolmogorov::internals::primitives::errors::KolmogorovError;

// ============================================================================
// Sample Size Tests
// ============================================================================

#[test]
fn test_sample_size_zero_rejected() {
    assert_eq!(
        Validator::validate_sample_size(0),
        Err(KolmogorovError::InvalidSampleSize(0))
    );
}

#[test]
fn test_sample_size_positive_accepted() {
    assert!(Validator::validate_sample_size(1).is_ok());
    assert!(Validator::validate_sample_size(100_000).is_ok());
}

// ============================================================================
// Statistic Tests
// ============================================================================

#[test]
fn test_statistic_nan_rejected() {
    let err = Validator::validate_statistic(f64::NAN).unwrap_err();
    assert!(matches!(err, KolmogorovError::InvalidStatistic(_)));
}

/// Out-of-range statistics are legal: the CDF resolves them exactly.
#[test]
fn test_statistic_out_of_range_accepted() {
    assert!(Validator::validate_statistic(-3.0_f64).is_ok());
    assert!(Validator::validate_statistic(7.5_f64).is_ok());
    assert!(Validator::validate_statistic(f64::INFINITY).is_ok());
    assert!(Validator::validate_statistic(f64::NEG_INFINITY).is_ok());
}

// ============================================================================
// Parameter Tests
// ============================================================================

#[test]
fn test_level_bounds() {
    assert!(Validator::validate_level(0.05_f64).is_ok());
    assert!(Validator::validate_level(0.999_f64).is_ok());

    assert_eq!(
        Validator::validate_level(0.0_f64),
        Err(KolmogorovError::InvalidLevel(0.0))
    );
    assert_eq!(
        Validator::validate_level(1.0_f64),
        Err(KolmogorovError::InvalidLevel(1.0))
    );
    assert!(Validator::validate_level(f64::NAN).is_err());
}

#[test]
fn test_tolerance_bounds() {
    assert!(Validator::validate_tolerance(1e-12_f64).is_ok());

    assert_eq!(
        Validator::validate_tolerance(0.0_f64),
        Err(KolmogorovError::InvalidTolerance(0.0))
    );
    assert_eq!(
        Validator::validate_tolerance(-1.0_f64),
        Err(KolmogorovError::InvalidTolerance(-1.0))
    );
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
}

#[test]
fn test_duplicate_detection() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    assert_eq!(
        Validator::validate_no_duplicates(Some("quantile_tolerance")),
        Err(KolmogorovError::DuplicateParameter {
            parameter: "quantile_tolerance"
        })
    );
}
