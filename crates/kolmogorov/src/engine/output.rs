//! Output types for distribution queries.
//!
//! ## Purpose
//!
//! This module defines the `KolmogorovResult` struct which packages the
//! outcome of one distribution query: the CDF value, its complement, and
//! metadata about how the value was obtained.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `cdf` and `p_value` lie in [0, 1] and sum to 1 up to round-off.
//! * `matrix_dim` is `None` exactly when a shortcut resolved the query.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of one Kolmogorov distribution query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KolmogorovResult<T> {
    /// Sample size the statistic was computed from.
    pub sample_size: usize,

    /// Observed statistic `d`.
    pub statistic: T,

    /// `P(Dn <= d)`.
    pub cdf: T,

    /// `P(Dn > d)`, the p-value of the observed statistic.
    pub p_value: T,

    /// Dimension of the recursion matrix, when the exact pipeline ran.
    pub matrix_dim: Option<usize>,

    /// Whether the right-tail estimate replaced the exact computation.
    pub used_shortcut: bool,
}

impl<T: Float> KolmogorovResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check whether the observed statistic is significant at `level`.
    pub fn is_significant_at(&self, level: T) -> bool {
        self.p_value <= level
    }

    /// Check whether the exact matrix pipeline produced this value.
    pub fn is_exact(&self) -> bool {
        !self.used_shortcut
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for KolmogorovResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Kolmogorov-Smirnov distribution:")?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Statistic:   {}", self.statistic)?;
        writeln!(f, "  P(Dn <= d):  {}", self.cdf)?;
        writeln!(f, "  P(Dn > d):   {}", self.p_value)?;

        match self.matrix_dim {
            Some(dim) => writeln!(f, "  Method:      exact ({dim}x{dim} matrix power)")?,
            None if self.used_shortcut => writeln!(f, "  Method:      right-tail estimate")?,
            None => writeln!(f, "  Method:      boundary case")?,
        }

        Ok(())
    }
}
