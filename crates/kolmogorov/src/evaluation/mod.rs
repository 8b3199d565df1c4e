//! Layer 4: Evaluation
//!
//! This layer provides post-processing over the exact CDF: inversion of the
//! monotone distribution function for critical values.

/// Quantile inversion by bisection.
pub mod quantile;
