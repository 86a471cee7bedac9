//! Affine scaling of a standard-interval rule to arbitrary bounds.

use gq_core::{ensure, Error, Real, Result, Size};

use crate::array::Array;
use crate::legendre::QuadratureRule;

/// A quadrature rule transformed from `[-1, 1]` to `[lo, hi]`.
///
/// Nodes map as `x' = ½(hi − lo)·x + ½(hi + lo)` and weights as
/// `w' = ½(hi − lo)·w`, so the scaled weights sum to `hi − lo`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledRule {
    nodes: Array,
    weights: Array,
    lo: Real,
    hi: Real,
}

impl ScaledRule {
    /// Scaled nodes in `(lo, hi)`.
    pub fn nodes(&self) -> &Array {
        &self.nodes
    }

    /// Scaled weights.
    pub fn weights(&self) -> &Array {
        &self.weights
    }

    /// Number of quadrature points.
    pub fn order(&self) -> Size {
        self.nodes.len()
    }

    /// The interval the rule was scaled to.
    pub fn bounds(&self) -> (Real, Real) {
        (self.lo, self.hi)
    }
}

/// Scale a standard-interval rule to `[lo, hi]`.
///
/// Reversed bounds are rejected rather than given signed-interval meaning:
/// a caller wanting `∫_hi^lo` negates the result of the forward interval.
///
/// # Errors
/// - `Precondition` if either bound is non-finite.
/// - [`Error::DegenerateInterval`] if `lo == hi`.
/// - [`Error::InvalidInterval`] if `lo > hi`.
pub fn scale_rule(lo: Real, hi: Real, rule: &QuadratureRule) -> Result<ScaledRule> {
    ensure!(
        lo.is_finite() && hi.is_finite(),
        "integration bounds must be finite, got [{lo}, {hi}]"
    );
    if lo == hi {
        return Err(Error::DegenerateInterval { bound: lo });
    }
    if lo > hi {
        return Err(Error::InvalidInterval { lo, hi });
    }

    let half = 0.5 * (hi - lo);
    let mid = 0.5 * (hi + lo);

    Ok(ScaledRule {
        nodes: rule.nodes().map(|x| half * x + mid),
        weights: rule.weights() * half,
        lo,
        hi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::close;
    use crate::legendre::legendre_rule;

    #[test]
    fn scaled_weights_sum_to_interval_length() {
        let rule = legendre_rule(7).unwrap();
        let scaled = scale_rule(1.0, 3.0, &rule).unwrap();
        assert!(close(scaled.weights().sum(), 2.0, 1e-12));

        let scaled = scale_rule(-5.0, 2.5, &rule).unwrap();
        assert!(close(scaled.weights().sum(), 7.5, 1e-12));
    }

    #[test]
    fn nodes_land_inside_the_interval() {
        let rule = legendre_rule(10).unwrap();
        let scaled = scale_rule(1.0, 3.0, &rule).unwrap();
        assert!(scaled.nodes().iter().all(|&x| x > 1.0 && x < 3.0));
        assert_eq!(scaled.bounds(), (1.0, 3.0));
    }

    #[test]
    fn identity_scaling_is_a_no_op() {
        let rule = legendre_rule(5).unwrap();
        let scaled = scale_rule(-1.0, 1.0, &rule).unwrap();
        assert_eq!(scaled.nodes(), rule.nodes());
        assert_eq!(scaled.weights(), rule.weights());
    }

    #[test]
    fn degenerate_interval_rejected() {
        let rule = legendre_rule(3).unwrap();
        assert_eq!(
            scale_rule(2.0, 2.0, &rule),
            Err(Error::DegenerateInterval { bound: 2.0 })
        );
    }

    #[test]
    fn reversed_interval_rejected() {
        let rule = legendre_rule(3).unwrap();
        assert_eq!(
            scale_rule(3.0, 1.0, &rule),
            Err(Error::InvalidInterval { lo: 3.0, hi: 1.0 })
        );
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let rule = legendre_rule(3).unwrap();
        assert!(scale_rule(f64::NEG_INFINITY, 1.0, &rule).is_err());
        assert!(scale_rule(0.0, f64::NAN, &rule).is_err());
    }
}
