//! Error types for gaussquad.
//!
//! All failure conditions of the numerical core are distinct, catchable
//! variants of a single `thiserror`-derived enum.  Nothing is swallowed:
//! the core never retries with adjusted parameters on its own, so every
//! variant surfaces to the caller unchanged.

use thiserror::Error;

/// The top-level error type used throughout gaussquad.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Newton iteration for the Legendre nodes did not settle within the
    /// sweep cap.
    #[error("Legendre node solver did not converge for order {order} within {sweeps} Newton sweeps")]
    NonConvergence {
        /// The quadrature order being solved for.
        order: usize,
        /// The sweep cap that was exhausted.
        sweeps: usize,
    },

    /// Integration bounds collapse to a single point (`lo == hi`).
    #[error("degenerate integration interval: lo == hi == {bound}")]
    DegenerateInterval {
        /// The coinciding bound.
        bound: f64,
    },

    /// Integration bounds are reversed (`lo > hi`).
    #[error("invalid integration interval: lo ({lo}) > hi ({hi})")]
    InvalidInterval {
        /// Lower bound as supplied.
        lo: f64,
        /// Upper bound as supplied.
        hi: f64,
    },

    /// The adaptive order search exhausted its budget without meeting the
    /// tolerance.
    #[error("order search exceeded maximum order {max_order} without meeting tolerance")]
    MaxOrderExceeded {
        /// The order cap that was exhausted.
        max_order: usize,
    },
}

/// Shorthand `Result` type used throughout gaussquad.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gq_core::ensure;
/// fn positive(x: f64) -> gq_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use gq_core::fail;
/// fn always_err() -> gq_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_distinct() {
        let a = Error::DegenerateInterval { bound: 1.0 };
        let b = Error::InvalidInterval { lo: 3.0, hi: 1.0 };
        assert_ne!(a, b);
    }

    #[test]
    fn display_messages() {
        let e = Error::NonConvergence {
            order: 12,
            sweeps: 100,
        };
        let msg = e.to_string();
        assert!(msg.contains("order 12"), "got {msg}");
        assert!(msg.contains("100"), "got {msg}");

        let e = Error::MaxOrderExceeded { max_order: 64 };
        assert!(e.to_string().contains("64"));
    }
}
