//! High-level API for Kolmogorov distribution evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the evaluator, and the evaluator itself
//! with CDF, survival, and critical-value queries.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `build()` is called;
//!   queries validate their own inputs.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KolmogorovBuilder`] via `Kolmogorov::new()`.
//! 2. Chain configuration methods (`.right_tail_shortcut()`, ...).
//! 3. Call `.build()` to obtain a [`KolmogorovDist`] evaluator.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CdfConfig, CdfExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::quantile::invert_cdf;

// Publicly re-exported types
pub use crate::engine::output::KolmogorovResult;
pub use crate::math::asymptotic::limiting_cdf;
pub use crate::primitives::errors::KolmogorovError;

/// Default bisection tolerance for critical-value searches.
const DEFAULT_QUANTILE_TOLERANCE: f64 = 1e-9;

/// Default bisection iteration cap.
const DEFAULT_QUANTILE_MAX_ITERATIONS: usize = 64;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a Kolmogorov distribution evaluator.
#[derive(Debug, Clone)]
pub struct KolmogorovBuilder<T> {
    /// Replace the exact computation with the closed-form right-tail
    /// estimate when `n * d^2` is large.
    pub right_tail_shortcut: Option<bool>,

    /// Bisection tolerance for critical-value searches.
    pub quantile_tolerance: Option<T>,

    /// Bisection iteration cap for critical-value searches.
    pub quantile_max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KolmogorovBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KolmogorovBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            right_tail_shortcut: None,
            quantile_tolerance: None,
            quantile_max_iterations: None,
            duplicate_param: None,
        }
    }

    /// Enable the right-tail shortcut.
    ///
    /// Statistics deep in the right tail are then resolved by a closed-form
    /// estimate (accurate to about seven digits there) instead of the full
    /// matrix power.
    pub fn right_tail_shortcut(mut self) -> Self {
        if self.right_tail_shortcut.is_some() {
            self.duplicate_param = Some("right_tail_shortcut");
        }
        self.right_tail_shortcut = Some(true);
        self
    }

    /// Set the bisection tolerance for critical-value searches.
    pub fn quantile_tolerance(mut self, tolerance: T) -> Self {
        if self.quantile_tolerance.is_some() {
            self.duplicate_param = Some("quantile_tolerance");
        }
        self.quantile_tolerance = Some(tolerance);
        self
    }

    /// Set the bisection iteration cap for critical-value searches.
    pub fn quantile_max_iterations(mut self, max_iterations: usize) -> Self {
        if self.quantile_max_iterations.is_some() {
            self.duplicate_param = Some("quantile_max_iterations");
        }
        self.quantile_max_iterations = Some(max_iterations);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the evaluator.
    pub fn build(self) -> Result<KolmogorovDist<T>, KolmogorovError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate quantile search parameters
        if let Some(tol) = self.quantile_tolerance {
            Validator::validate_tolerance(tol)?;
        }

        Ok(KolmogorovDist {
            config: CdfConfig {
                right_tail_shortcut: self.right_tail_shortcut.unwrap_or(false),
            },
            quantile_tolerance: self
                .quantile_tolerance
                .unwrap_or_else(|| T::from(DEFAULT_QUANTILE_TOLERANCE).unwrap()),
            quantile_max_iterations: self
                .quantile_max_iterations
                .unwrap_or(DEFAULT_QUANTILE_MAX_ITERATIONS),
        })
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Kolmogorov distribution evaluator.
#[derive(Debug, Clone)]
pub struct KolmogorovDist<T> {
    config: CdfConfig,
    quantile_tolerance: T,
    quantile_max_iterations: usize,
}

impl<T: Float> KolmogorovDist<T> {
    /// `P(Dn <= d)` for a sample of size `n`.
    pub fn cdf(&self, n: usize, d: T) -> Result<T, KolmogorovError> {
        Validator::validate_sample_size(n)?;
        Validator::validate_statistic(d)?;

        Ok(CdfExecutor::run(n, d, &self.config).cdf)
    }

    /// `P(Dn > d)`, the p-value of an observed statistic.
    pub fn sf(&self, n: usize, d: T) -> Result<T, KolmogorovError> {
        Ok(T::one() - self.cdf(n, d)?)
    }

    /// Full query report including method metadata.
    pub fn evaluate(&self, n: usize, d: T) -> Result<KolmogorovResult<T>, KolmogorovError> {
        Validator::validate_sample_size(n)?;
        Validator::validate_statistic(d)?;

        let report = CdfExecutor::run(n, d, &self.config);
        Ok(KolmogorovResult {
            sample_size: n,
            statistic: d,
            cdf: report.cdf,
            p_value: T::one() - report.cdf,
            matrix_dim: report.matrix_dim,
            used_shortcut: report.used_shortcut,
        })
    }

    /// Smallest `d` with `P(Dn > d) <= level`.
    ///
    /// Found by bisection over the monotone CDF; each probe is one full
    /// evaluation, so cost is `O(log(1/tolerance))` CDF calls.
    pub fn critical_value(&self, n: usize, level: T) -> Result<T, KolmogorovError> {
        Validator::validate_sample_size(n)?;
        Validator::validate_level(level)?;

        let target = T::one() - level;
        let cdf = |d: T| CdfExecutor::run(n, d, &self.config).cdf;
        Ok(invert_cdf(
            cdf,
            target,
            self.quantile_tolerance,
            self.quantile_max_iterations,
        ))
    }
}
