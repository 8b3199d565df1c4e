//! Kolmogorov Distribution Examples
//!
//! This example demonstrates the main queries offered by the crate:
//! - Exact CDF evaluation for small and moderate samples
//! - p-values for observed statistics
//! - Critical values at standard significance levels
//! - The right-tail shortcut for extreme statistics
//! - Agreement with the limiting distribution

use kolmogorov::prelude::*;

fn main() -> Result<(), KolmogorovError> {
    println!("{}", "=".repeat(80));
    println!("Kolmogorov Distribution Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_exact_cdf()?;
    example_2_hypothesis_test()?;
    example_3_critical_values()?;
    example_4_tail_shortcut()?;
    example_5_limiting_law()?;

    Ok(())
}

/// Example 1: Exact CDF Evaluation
/// Closed-form check: P(D2 <= 0.75) is exactly 0.875.
fn example_1_exact_cdf() -> Result<(), KolmogorovError> {
    println!("Example 1: Exact CDF Evaluation");
    println!("{}", "-".repeat(80));

    let dist = Kolmogorov::new().build()?;
    let p = dist.cdf(2, 0.75)?;

    println!("P(D2 <= 0.75) = {p} (closed form: 0.875)");
    println!();
    Ok(())
}

/// Example 2: Hypothesis Test
/// Full report for an observed statistic.
fn example_2_hypothesis_test() -> Result<(), KolmogorovError> {
    println!("Example 2: Hypothesis Test");
    println!("{}", "-".repeat(80));

    let dist = Kolmogorov::new().build()?;
    let report = dist.evaluate(10, 0.41)?;

    println!("{report}");
    println!(
        "Significant at 5%: {}",
        report.is_significant_at(0.05)
    );
    println!();
    Ok(())
}

/// Example 3: Critical Values
/// Smallest d with P(Dn > d) <= alpha, for the standard levels.
fn example_3_critical_values() -> Result<(), KolmogorovError> {
    println!("Example 3: Critical Values (n = 20)");
    println!("{}", "-".repeat(80));

    let dist = Kolmogorov::new().build()?;
    for alpha in [0.10, 0.05, 0.01] {
        let d = dist.critical_value(20, alpha)?;
        println!("alpha = {alpha:<5} -> d_crit = {d:.5}");
    }
    println!();
    Ok(())
}

/// Example 4: Right-Tail Shortcut
/// Extreme statistics resolve in constant time with the shortcut enabled.
fn example_4_tail_shortcut() -> Result<(), KolmogorovError> {
    println!("Example 4: Right-Tail Shortcut");
    println!("{}", "-".repeat(80));

    let fast = Kolmogorov::new().right_tail_shortcut().build()?;
    let report = fast.evaluate(1_000, 0.2)?;

    println!("{report}");
    Ok(())
}

/// Example 5: Limiting Law
/// For large n, P(Dn <= t / sqrt(n)) approaches the Kolmogorov limit.
fn example_5_limiting_law() -> Result<(), KolmogorovError> {
    println!("Example 5: Limiting Law (n = 5000)");
    println!("{}", "-".repeat(80));

    let dist = Kolmogorov::new().build()?;
    let n = 5_000;
    let scale = (n as f64).sqrt();

    for t in [0.8, 1.0, 1.2] {
        let exact = dist.cdf(n, t / scale)?;
        let limit = limiting_cdf(t);
        println!("t = {t}: exact = {exact:.6}, limit = {limit:.6}");
    }
    println!();
    Ok(())
}
