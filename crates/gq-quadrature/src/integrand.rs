//! The integrand capability.
//!
//! The function being integrated is modeled as a vectorizable mapping: given
//! an ordered sequence of abscissae it returns the function values in the
//! same order.  Any scalar `Fn(Real) -> Real` closure satisfies the trait
//! through the blanket impl; implementors that can evaluate a whole batch at
//! once (table lookups, SIMD kernels) implement it directly.

use gq_core::Real;

use crate::array::Array;

/// A real-valued function of one real variable, evaluated in batches.
///
/// `evaluate` must return one value per input abscissa, in input order.
/// Non-finite outputs (NaN, ±∞) are passed through by the quadrature
/// evaluator, never clamped.
pub trait Integrand {
    /// Evaluate the function at every element of `x`.
    fn evaluate(&self, x: &Array) -> Array;
}

impl<F> Integrand for F
where
    F: Fn(Real) -> Real,
{
    fn evaluate(&self, x: &Array) -> Array {
        x.map(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_an_integrand() {
        let f = |x: Real| x * x;
        let values = f.evaluate(&Array::from_slice(&[1.0, 2.0, 3.0]));
        assert_eq!(values.as_slice(), &[1.0, 4.0, 9.0]);
    }

    struct Precomputed(Vec<Real>);

    impl Integrand for Precomputed {
        fn evaluate(&self, x: &Array) -> Array {
            assert_eq!(x.len(), self.0.len());
            Array::from_slice(&self.0)
        }
    }

    #[test]
    fn batch_implementor() {
        let f = Precomputed(vec![5.0, 5.0]);
        let values = f.evaluate(&Array::from_slice(&[0.0, 1.0]));
        assert_eq!(values.as_slice(), &[5.0, 5.0]);
    }
}
