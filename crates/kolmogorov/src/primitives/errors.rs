//! Error types for distribution evaluation.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! querying the Kolmogorov distribution evaluator, covering domain validation
//! and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value.
//! * **Deferred**: Builder errors are caught when `build()` is called.
//! * **No-std**: No heap allocation is needed for any variant.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Domain validation**: Sample size and statistic preconditions.
//! 2. **Parameter validation**: Significance levels and tolerances.
//! 3. **Builder misuse**: Parameters set more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Numeric overflow is prevented by the scale-tracking machinery and is
//!   never reported as an error.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Kolmogorov distribution operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KolmogorovError {
    /// Sample size must be at least 1.
    InvalidSampleSize(usize),

    /// The statistic must not be NaN.
    InvalidStatistic(f64),

    /// Significance level must be strictly between 0 and 1.
    InvalidLevel(f64),

    /// Quantile search tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KolmogorovError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidSampleSize(n) => {
                write!(f, "Invalid sample size: {n} (must be at least 1)")
            }
            Self::InvalidStatistic(d) => {
                write!(f, "Invalid statistic: {d} (must not be NaN)")
            }
            Self::InvalidLevel(level) => {
                write!(f, "Invalid level: {level} (must be > 0 and < 1)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KolmogorovError {}
