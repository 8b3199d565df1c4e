//! Unified execution engine for CDF evaluation.
//!
//! ## Purpose
//!
//! This module runs the full exact-CDF pipeline: boundary shortcuts,
//! recursion-matrix construction, scaled matrix power, scalar extraction,
//! and the `n!/n^n` normalization.
//!
//! ## Design notes
//!
//! * **Config + executor split**: A plain config struct feeds a stateless
//!   executor, keeping every call independent and reentrant.
//! * **Per-call buffers**: All matrices are allocated inside `run` and
//!   dropped with it; there is no shared scratch space.
//! * **Exact shortcuts first**: `d <= 0`, `d >= 1`, and `d <= 1/(2n)` are
//!   resolved without touching the matrix machinery. `Dn >= 1/(2n)` holds
//!   for every sample, so the third shortcut is exact, not an approximation.
//!
//! ## Key concepts
//!
//! * **Pipeline**: `H(k, h)` → `H^n` (scaled) → `Q[k-1][k-1]` →
//!   `* n!/n^n` → `* 10^exponent` → clamp.
//! * **Normalization**: `n!/n^n` is accumulated incrementally as
//!   `prod i/n`, rescaling the scalar whenever it underflows the policy's
//!   small threshold.
//!
//! ## Invariants
//!
//! * The returned CDF lies in [0, 1] (round-off is clamped at the end).
//! * Inputs are already validated by the API layer; the executor never
//!   fails.
//!
//! ## Non-goals
//!
//! * Input validation (see `engine::validator`).
//! * Quantile inversion (see `evaluation::quantile`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::power::power_with_scale;
use crate::algorithms::transition::build_transition;
use crate::math::asymptotic::{right_tail_estimate, tail_shortcut_applies};
use crate::math::scaling::ScalePolicy;
use crate::primitives::buffer::PowerBuffer;

// ============================================================================
// Configuration
// ============================================================================

/// Execution options for one CDF evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdfConfig {
    /// Replace the exact computation with the closed-form right-tail
    /// estimate when `n * d^2` is large.
    pub right_tail_shortcut: bool,
}

// ============================================================================
// Report
// ============================================================================

/// Raw outcome of one CDF evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdfReport<T> {
    /// `P(Dn <= d)`, clamped to [0, 1].
    pub cdf: T,

    /// Dimension of the recursion matrix, when one was built.
    pub matrix_dim: Option<usize>,

    /// Net decimal exponent accumulated during the computation.
    pub scale_exponent: i32,

    /// Whether the right-tail estimate replaced the exact pipeline.
    pub used_shortcut: bool,
}

impl<T: Float> CdfReport<T> {
    fn boundary(cdf: T) -> Self {
        Self {
            cdf,
            matrix_dim: None,
            scale_exponent: 0,
            used_shortcut: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for the exact-CDF pipeline.
pub struct CdfExecutor;

impl CdfExecutor {
    /// Evaluate `P(Dn <= d)` for validated inputs (`n >= 1`, `d` not NaN).
    pub fn run<T: Float>(n: usize, d: T, config: &CdfConfig) -> CdfReport<T> {
        let nf = T::from(n).unwrap();

        // Exact boundary cases: the statistic always lies in [1/(2n), 1].
        if d <= T::zero() {
            return CdfReport::boundary(T::zero());
        }
        if d >= T::one() {
            return CdfReport::boundary(T::one());
        }
        let half_step = (nf + nf).recip();
        if d <= half_step {
            return CdfReport::boundary(T::zero());
        }

        if config.right_tail_shortcut {
            let s = nf * d * d;
            if tail_shortcut_applies(n, s.to_f64().unwrap_or(0.0)) {
                return CdfReport {
                    cdf: right_tail_estimate(n, s),
                    matrix_dim: None,
                    scale_exponent: 0,
                    used_shortcut: true,
                };
            }
        }

        // Step discretization: k steps with fractional remainder h in (0, 1].
        let nd = nf * d;
        let k = nd.floor().to_usize().unwrap_or(0) + 1;
        let h = T::from(k).unwrap() - nd;

        // H^n with decimal scale tracking.
        let transition = build_transition(k, h);
        let dim = transition.dim();
        let policy = ScalePolicy::new();
        let mut buffer = PowerBuffer::new(&transition);
        let powered = power_with_scale(n as u64, &policy, &mut buffer);

        // Terminal-state entry, then the n!/n^n normalization.
        let mut s = powered.matrix.get(k - 1, k - 1);
        let mut exponent = powered.exponent;
        for i in 1..=n {
            s = s * T::from(i).unwrap() / nf;
            exponent += policy.absorb_underflow(&mut s);
        }

        let cdf = ScalePolicy::apply_exponent(s, exponent);

        CdfReport {
            cdf: cdf.max(T::zero()).min(T::one()),
            matrix_dim: Some(dim),
            scale_exponent: exponent,
            used_shortcut: false,
        }
    }
}
