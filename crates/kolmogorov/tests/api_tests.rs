#![cfg(feature = "dev")]
//! Tests for the high-level API.
//!
//! These tests exercise the builder, the evaluator queries, and the
//! end-to-end statistical behavior of the crate:
//! - Builder defaults, duplicate detection, deferred validation
//! - CDF/survival queries and their domain errors
//! - Critical-value round trips
//! - Convergence to the limiting distribution
//!
//! ## Test Organization
//!
//! 1. **Builder** - construction and validation
//! 2. **Queries** - cdf, sf, evaluate, Display
//! 3. **Critical Values** - closed-form round trips
//! 4. **Statistical Behavior** - asymptotics, precision types

use approx::assert_abs_diff_eq;

use kolmogorov::prelude::*;

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_default_build_succeeds() {
    let dist = Kolmogorov::<f64>::new().build();
    assert!(dist.is_ok());
}

#[test]
fn test_duplicate_parameter_rejected() {
    let err = Kolmogorov::<f64>::new()
        .quantile_tolerance(1e-8)
        .quantile_tolerance(1e-9)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        KolmogorovError::DuplicateParameter {
            parameter: "quantile_tolerance"
        }
    );
}

#[test]
fn test_invalid_tolerance_rejected_at_build() {
    let err = Kolmogorov::new().quantile_tolerance(-1.0).build().unwrap_err();
    assert_eq!(err, KolmogorovError::InvalidTolerance(-1.0));
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_cdf_validates_inputs() {
    let dist = Kolmogorov::new().build().unwrap();

    assert_eq!(
        dist.cdf(0, 0.5),
        Err(KolmogorovError::InvalidSampleSize(0))
    );
    assert!(matches!(
        dist.cdf(10, f64::NAN),
        Err(KolmogorovError::InvalidStatistic(_))
    ));
}

#[test]
fn test_cdf_known_value() {
    let dist = Kolmogorov::new().build().unwrap();
    assert_abs_diff_eq!(dist.cdf(2, 0.75).unwrap(), 0.875, epsilon = 1e-14);
}

#[test]
fn test_sf_complements_cdf() {
    let dist = Kolmogorov::new().build().unwrap();

    let cdf = dist.cdf(7, 0.33).unwrap();
    let sf = dist.sf(7, 0.33).unwrap();
    assert_abs_diff_eq!(cdf + sf, 1.0, epsilon = 1e-12);
}

#[test]
fn test_evaluate_reports_metadata() {
    let dist = Kolmogorov::new().build().unwrap();
    let report = dist.evaluate(10, 0.41).unwrap();

    assert_eq!(report.sample_size, 10);
    assert_abs_diff_eq!(report.statistic, 0.41, epsilon = 1e-15);
    assert_abs_diff_eq!(report.cdf + report.p_value, 1.0, epsilon = 1e-12);
    assert!(report.is_exact());
    // k = floor(4.1) + 1 = 5, so the matrix is 9x9.
    assert_eq!(report.matrix_dim, Some(9));
}

#[test]
fn test_significance_query() {
    let dist = Kolmogorov::new().build().unwrap();

    // The classical 5% critical value for n = 10 is about 0.409.
    let report = dist.evaluate(10, 0.45).unwrap();
    assert!(report.is_significant_at(0.05));

    let weak = dist.evaluate(10, 0.2).unwrap();
    assert!(!weak.is_significant_at(0.05));
}

#[test]
fn test_display_summarizes_report() {
    let dist = Kolmogorov::new().build().unwrap();
    let report = dist.evaluate(10, 0.41).unwrap();
    let text = format!("{report}");

    assert!(text.contains("Sample size: 10"));
    assert!(text.contains("exact"));
}

// ============================================================================
// Critical Value Tests
// ============================================================================

#[test]
fn test_critical_value_validates_level() {
    let dist = Kolmogorov::new().build().unwrap();

    assert_eq!(
        dist.critical_value(10, 0.0),
        Err(KolmogorovError::InvalidLevel(0.0))
    );
    assert_eq!(
        dist.critical_value(10, 1.0),
        Err(KolmogorovError::InvalidLevel(1.0))
    );
}

/// Closed-form round trip: `P(D1 > 0.75) = 0.5`, so the 50% critical value
/// for one sample is exactly 0.75.
#[test]
fn test_critical_value_single_sample() {
    let dist = Kolmogorov::new().build().unwrap();
    let d = dist.critical_value(1, 0.5).unwrap();
    assert_abs_diff_eq!(d, 0.75, epsilon = 1e-7);
}

/// Closed-form round trip: `P(D2 <= 0.75) = 0.875`.
#[test]
fn test_critical_value_two_samples() {
    let dist = Kolmogorov::new().build().unwrap();
    let d = dist.critical_value(2, 0.125).unwrap();
    assert_abs_diff_eq!(d, 0.75, epsilon = 1e-7);
}

/// The classical n = 10 critical value at 5% is about 0.409.
#[test]
fn test_critical_value_matches_tables() {
    let dist = Kolmogorov::new().build().unwrap();
    let d = dist.critical_value(10, 0.05).unwrap();
    assert_abs_diff_eq!(d, 0.409, epsilon = 2e-3);
}

// ============================================================================
// Statistical Behavior Tests
// ============================================================================

/// For large n, `P(Dn <= t / sqrt(n))` approaches the limiting law; the
/// finite-n error at n = 10^4 is well under a percent.
#[test]
fn test_converges_to_limiting_distribution() {
    let dist = Kolmogorov::new().build().unwrap();
    let n = 10_000;
    let scale = (n as f64).sqrt();

    for &t in &[0.6, 0.83, 1.1] {
        let exact = dist.cdf(n, t / scale).unwrap();
        let limit = limiting_cdf(t);
        assert_abs_diff_eq!(exact, limit, epsilon = 1e-2);
    }
}

/// Single precision carries the same construction with a smaller rescale
/// threshold.
#[test]
fn test_f32_smoke() {
    let dist = Kolmogorov::<f32>::new().build().unwrap();
    let p = dist.cdf(2, 0.75_f32).unwrap();
    assert_abs_diff_eq!(p, 0.875_f32, epsilon = 1e-4);
}

#[test]
fn test_shortcut_builder_wiring() {
    let dist = Kolmogorov::new().right_tail_shortcut().build().unwrap();
    let report = dist.evaluate(200, 0.4).unwrap();

    assert!(report.used_shortcut);
    assert!(!report.is_exact());
    assert!(report.cdf > 0.999);
}
