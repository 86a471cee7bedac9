//! Quadrature evaluation: the weighted sum over a scaled rule.

use gq_core::{Real, Result, Size};

use crate::integrand::Integrand;
use crate::legendre::legendre_rule;
use crate::scaling::{scale_rule, ScaledRule};

/// Approximate `∫ f` with a scaled rule: `Σ wᵢ f(xᵢ)`.
///
/// The integrand is evaluated once, vectorized over all nodes.  Non-finite
/// function values propagate into the sum unchanged.
pub fn approximate_integral<F: Integrand + ?Sized>(f: &F, rule: &ScaledRule) -> Real {
    f.evaluate(rule.nodes()).dot(rule.weights())
}

/// One-shot convenience: build the `n`-point rule, scale it to `[lo, hi]`,
/// and evaluate.
///
/// # Errors
/// Propagates rule-construction and interval errors.
pub fn integrate<F: Integrand>(n: Size, f: &F, lo: Real, hi: Real) -> Result<Real> {
    let rule = legendre_rule(n)?;
    let scaled = scale_rule(lo, hi, &rule)?;
    Ok(approximate_integral(f, &scaled))
}
