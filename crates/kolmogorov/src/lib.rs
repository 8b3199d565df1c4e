//! # Kolmogorov — Exact Kolmogorov–Smirnov Distribution for Rust
//!
//! Exact evaluation of the cumulative distribution function of the
//! Kolmogorov–Smirnov statistic, `P(Dn <= d)`, for finite sample sizes.
//!
//! ## What is the Kolmogorov distribution?
//!
//! The Kolmogorov–Smirnov statistic `Dn` is the largest absolute difference
//! between an empirical distribution function built from `n` samples and a
//! reference cumulative distribution. Its exact finite-`n` law has no simple
//! closed form; this crate evaluates it with the Marsaglia–Tsang–Wang matrix
//! method: a small transition matrix encoding the combinatorial recurrence is
//! raised to the n-th power, with a decimal scale exponent carried alongside
//! the matrix so that repeated squaring never overflows double precision.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use kolmogorov::prelude::*;
//!
//! // Build the evaluator
//! let dist = Kolmogorov::<f64>::new().build()?;
//!
//! // P(D2 <= 0.75), exactly 0.875
//! let p = dist.cdf(2, 0.75)?;
//! assert!((p - 0.875).abs() < 1e-12);
//! # Result::<(), KolmogorovError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use kolmogorov::prelude::*;
//!
//! let dist = Kolmogorov::new()
//!     .right_tail_shortcut()      // O(1) tail estimate for extreme statistics
//!     .quantile_tolerance(1e-10)  // bisection tolerance for critical values
//!     .build()?;
//!
//! // Full report for an observed statistic
//! let report = dist.evaluate(10, 0.41)?;
//! println!("{}", report);
//!
//! // Critical value: smallest d with P(D10 > d) <= 0.05
//! let d_crit = dist.critical_value(10, 0.05)?;
//! assert!(d_crit > 0.3 && d_crit < 0.5);
//! # Result::<(), KolmogorovError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible entry points return `Result<_, KolmogorovError>`; the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use kolmogorov::prelude::*;
//!
//! let dist = Kolmogorov::new().build()?;
//! match dist.cdf(0, 0.5) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e, KolmogorovError::InvalidSampleSize(0)),
//! }
//! # Result::<(), KolmogorovError>::Ok(())
//! ```
//!
//! ## Complexity and precision
//!
//! The transition matrix has dimension `2*ceil(n*d) - 1`, so time is
//! `O(log n)` multiplications of an `O((n*d)^2)` matrix and memory is
//! `O((n*d)^2)`. Accumulated floating round-off degrades precision for
//! pathologically large `n` (beyond roughly 100,000); this is a documented
//! limit, not an error. The optional right-tail shortcut replaces the matrix
//! computation with a closed-form estimate when `n*d^2` is large, trading
//! seven-digit right-tail accuracy for constant-time evaluation.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kolmogorov = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Marsaglia, G., Tsang, W. W., Wang, J. (2003). "Evaluating Kolmogorov's
//!   Distribution". Journal of Statistical Software 8(18).
//! - Kolmogorov, A. (1933). "Sulla determinazione empirica di una legge di
//!   distribuzione".
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - matrix kernels and the recursion matrix.
mod algorithms;

// Layer 4: Evaluation - quantile inversion.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for distribution evaluation.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        limiting_cdf, KolmogorovBuilder as Kolmogorov, KolmogorovError, KolmogorovResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
