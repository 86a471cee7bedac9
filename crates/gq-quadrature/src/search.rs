//! Adaptive order search.
//!
//! Drives the quadrature evaluator across increasing orders, comparing each
//! approximation against a caller-supplied reference value, and stops at the
//! first order meeting the tolerance.  The search is a bounded state machine:
//! `Trying(n)` either converges, advances to `Trying(n + 1)`, or fails once
//! the order cap is exhausted, so it terminates even when the tolerance is
//! unreachable.

use gq_core::{ensure, Error, Real, Result, Size};

use crate::integrand::Integrand;
use crate::integrator::approximate_integral;
use crate::legendre::legendre_rule;
use crate::scaling::scale_rule;

/// Default order cap.  The worked examples converge well under 10 points;
/// anything still failing at 64 points has a wrong or unreachable reference.
pub const DEFAULT_MAX_ORDER: Size = 64;

/// How the trial error is measured against the reference value.
///
/// Both conventions appear in practice; they are an explicit caller choice
/// rather than being silently unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorNorm {
    /// `|value − reference| / |reference|`.  With a zero reference every
    /// trial error is infinite and the search runs to its order cap.
    #[default]
    Relative,
    /// Bare `|value − reference|`.
    Absolute,
}

impl ErrorNorm {
    fn measure(self, value: Real, reference: Real) -> Real {
        let diff = (value - reference).abs();
        match self {
            ErrorNorm::Relative => diff / reference.abs(),
            ErrorNorm::Absolute => diff,
        }
    }
}

/// One order-search trial, reported through the observation hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    /// The candidate order.
    pub order: Size,
    /// The approximate integral at that order.
    pub value: Real,
    /// The trial error under the configured norm.
    pub error: Real,
}

/// A successful search: the smallest order meeting the tolerance and the
/// approximate integral at that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// The smallest converged order.
    pub order: Size,
    /// The approximate integral at that order.
    pub value: Real,
}

enum State {
    Trying(Size),
    Converged(SearchResult),
    Failed,
}

/// Adaptive search for the smallest quadrature order meeting a tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSearch {
    reference: Real,
    tolerance: Real,
    max_order: Size,
    norm: ErrorNorm,
}

impl OrderSearch {
    /// Configure a search against `reference` with the given tolerance,
    /// using the relative error norm and [`DEFAULT_MAX_ORDER`].
    ///
    /// # Errors
    /// `Precondition` if the reference is non-finite or the tolerance is
    /// not strictly positive.
    pub fn new(reference: Real, tolerance: Real) -> Result<Self> {
        ensure!(
            reference.is_finite(),
            "reference value must be finite, got {reference}"
        );
        ensure!(
            tolerance > 0.0,
            "tolerance must be > 0, got {tolerance}"
        );
        Ok(Self {
            reference,
            tolerance,
            max_order: DEFAULT_MAX_ORDER,
            norm: ErrorNorm::default(),
        })
    }

    /// Replace the order cap.
    ///
    /// # Errors
    /// `Precondition` if `max_order` is zero.
    pub fn with_max_order(mut self, max_order: Size) -> Result<Self> {
        ensure!(max_order >= 1, "max order must be >= 1, got {max_order}");
        self.max_order = max_order;
        Ok(self)
    }

    /// Replace the error norm.
    pub fn with_norm(mut self, norm: ErrorNorm) -> Self {
        self.norm = norm;
        self
    }

    /// Run the search for `f` on `[lo, hi]`.
    ///
    /// # Errors
    /// [`Error::MaxOrderExceeded`] when no order up to the cap meets the
    /// tolerance; rule-construction and interval errors propagate.
    pub fn run<F: Integrand>(&self, f: &F, lo: Real, hi: Real) -> Result<SearchResult> {
        self.run_with(f, lo, hi, |_| {})
    }

    /// Run the search, invoking `on_trial` after every candidate order.
    ///
    /// The hook observes every trial including the converging one; it is the
    /// only side channel of the search and has no effect on the result.
    ///
    /// # Errors
    /// Same as [`OrderSearch::run`].
    pub fn run_with<F, C>(&self, f: &F, lo: Real, hi: Real, mut on_trial: C) -> Result<SearchResult>
    where
        F: Integrand,
        C: FnMut(&Trial),
    {
        let mut state = State::Trying(1);
        loop {
            state = match state {
                State::Trying(n) => {
                    let rule = legendre_rule(n)?;
                    let scaled = scale_rule(lo, hi, &rule)?;
                    let value = approximate_integral(f, &scaled);
                    let error = self.norm.measure(value, self.reference);
                    on_trial(&Trial {
                        order: n,
                        value,
                        error,
                    });
                    if error <= self.tolerance {
                        State::Converged(SearchResult { order: n, value })
                    } else if n >= self.max_order {
                        State::Failed
                    } else {
                        State::Trying(n + 1)
                    }
                }
                State::Converged(result) => return Ok(result),
                State::Failed => {
                    return Err(Error::MaxOrderExceeded {
                        max_order: self.max_order,
                    })
                }
            };
        }
    }
}

/// Find the smallest order whose relative error against `reference` is
/// within `tolerance` on `[lo, hi]`.
///
/// Convenience wrapper over [`OrderSearch`] with the relative norm.
///
/// # Errors
/// Same as [`OrderSearch::run`].
pub fn find_order<F: Integrand>(
    f: &F,
    lo: Real,
    hi: Real,
    reference: Real,
    tolerance: Real,
    max_order: Size,
) -> Result<SearchResult> {
    OrderSearch::new(reference, tolerance)?
        .with_max_order(max_order)?
        .run(f, lo, hi)
}
