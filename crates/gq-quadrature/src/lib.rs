//! # gq-quadrature
//!
//! Gauss-Legendre quadrature over a finite interval with automatic order
//! selection: a Newton-based node/weight solver, affine interval scaling,
//! vectorized evaluation, and an adaptive search for the smallest order
//! meeting a caller-specified tolerance against a known reference value.
//!
//! ```
//! use gq_quadrature::{find_order, integrate};
//!
//! // ∫₁³ (x⁶ − x² sin 2x) dx ≈ 317.3442467
//! let f = |x: f64| x.powi(6) - x * x * (2.0 * x).sin();
//! let result = find_order(&f, 1.0, 3.0, 317.3442467, 1e-6, 64).unwrap();
//! assert!(result.order <= 7);
//!
//! let value = integrate(result.order, &f, 1.0, 3.0).unwrap();
//! assert!((value - result.value).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D vector of reals (newtype over nalgebra).
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// The vectorizable integrand capability.
pub mod integrand;

/// Weighted-sum evaluation over a scaled rule.
pub mod integrator;

/// Gauss-Legendre node and weight solver.
pub mod legendre;

/// Affine scaling of rules to arbitrary bounds.
pub mod scaling;

/// Adaptive order search.
pub mod search;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use integrand::Integrand;
pub use integrator::{approximate_integral, integrate};
pub use legendre::{legendre_rule, QuadratureRule};
pub use scaling::{scale_rule, ScaledRule};
pub use search::{find_order, ErrorNorm, OrderSearch, SearchResult, Trial};
