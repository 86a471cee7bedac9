//! # gaussquad
//!
//! Adaptive Gauss-Legendre quadrature with automatic order selection.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `gq-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use gaussquad::quadrature::find_order;
//!
//! // How many quadrature points does ∫₁³ (x⁶ − x² sin 2x) dx need to
//! // match the reference value to one part in a million?
//! let f = |x: f64| x.powi(6) - x * x * (2.0 * x).sin();
//! let result = find_order(&f, 1.0, 3.0, 317.3442467, 1e-6, 64).unwrap();
//! assert_eq!(result.order, 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use gq_core as core;

/// Quadrature rules, scaling, evaluation, and the order search.
pub use gq_quadrature as quadrature;
