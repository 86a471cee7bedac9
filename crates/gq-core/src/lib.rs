//! # gq-core
//!
//! Core types, aliases, and error definitions for the gaussquad workspace.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the primitive type aliases, the error
//! taxonomy, and the `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes, indices, and quadrature orders.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
