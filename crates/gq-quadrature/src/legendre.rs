//! Gauss-Legendre node and weight solver.
//!
//! The degree-`n` Legendre polynomial has `n` simple zeros in `(-1, 1)`;
//! those zeros are the nodes of the `n`-point Gauss-Legendre rule, which
//! integrates polynomials up to degree `2n − 1` exactly.  The solver seeds
//! every node with the classical asymptotic approximation and refines all of
//! them simultaneously with Newton-Raphson sweeps until the largest update
//! falls below an absolute threshold.

use std::f64::consts::PI;

use gq_core::{ensure, Error, Real, Result, Size};

use crate::array::Array;

/// Absolute threshold on the largest Newton update per sweep.
pub const NEWTON_THRESHOLD: Real = 1e-15;

/// Cap on Newton sweeps.  The n = 1 rule alone needs ~48 sweeps to push its
/// single node below the threshold, so the cap leaves ample headroom while
/// still bounding the loop.
pub const MAX_NEWTON_SWEEPS: Size = 100;

/// An `n`-point quadrature rule on the standard interval `[-1, 1]`.
///
/// Invariants: nodes are strictly decreasing and pairwise distinct, weights
/// are strictly positive, and the weights sum to 2 (the length of `[-1, 1]`)
/// within numerical tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule {
    nodes: Array,
    weights: Array,
}

impl QuadratureRule {
    /// Quadrature nodes in `(-1, 1)`.
    pub fn nodes(&self) -> &Array {
        &self.nodes
    }

    /// Quadrature weights.
    pub fn weights(&self) -> &Array {
        &self.weights
    }

    /// Number of quadrature points.
    pub fn order(&self) -> Size {
        self.nodes.len()
    }
}

/// Compute the `n`-point Gauss-Legendre rule on `[-1, 1]`.
///
/// Nodes are found by Newton-Raphson iteration on the degree-`n` Legendre
/// polynomial, all `n` nodes refined in lockstep per sweep.  The iteration
/// stops when the largest absolute update falls below [`NEWTON_THRESHOLD`];
/// the stopping criterion is absolute, not relative.
///
/// # Errors
/// - `Precondition` if `n == 0`.
/// - [`Error::NonConvergence`] if the iteration does not settle within
///   [`MAX_NEWTON_SWEEPS`] sweeps.
pub fn legendre_rule(n: Size) -> Result<QuadratureRule> {
    ensure!(n >= 1, "quadrature order must be >= 1, got {n}");

    let nf = n as Real;

    // Asymptotic initial guess for every zero at once:
    //   a_i = (4i + 3) / (4n + 2),  x_i = cos(π a_i + 1 / (8 n² tan a_i))
    let mut x: Vec<Real> = (0..n)
        .map(|i| {
            let a = (4 * i + 3) as Real / (4.0 * nf + 2.0);
            (PI * a + 1.0 / (8.0 * nf * nf * a.tan())).cos()
        })
        .collect();

    let mut dp = vec![0.0; n];

    for _ in 0..MAX_NEWTON_SWEEPS {
        // Three-term recurrence up to degree n, carrying only the last two
        // polynomial values per node: after the loop p1 = P_n, p0 = P_{n-1}.
        let mut p0 = vec![1.0; n];
        let mut p1 = x.clone();
        for k in 1..n {
            let kf = k as Real;
            for i in 0..n {
                let next = ((2.0 * kf + 1.0) * x[i] * p1[i] - kf * p0[i]) / (kf + 1.0);
                p0[i] = p1[i];
                p1[i] = next;
            }
        }

        // P'_n(x) = (n + 1)(P_{n-1} - x P_n) / (1 - x²).  The 1 - x²
        // denominator degrades near ±1 at large n; no special-casing.
        for i in 0..n {
            dp[i] = (nf + 1.0) * (p0[i] - x[i] * p1[i]) / (1.0 - x[i] * x[i]);
        }

        let mut delta: Real = 0.0;
        for i in 0..n {
            let dx = p1[i] / dp[i];
            x[i] -= dx;
            delta = delta.max(dx.abs());
        }

        if delta <= NEWTON_THRESHOLD {
            // w = 2(n+1)² / (n² (1 - x²) P'²), with P' from this sweep,
            // evaluated at the pre-update abscissae.
            let scale = 2.0 * (nf + 1.0) * (nf + 1.0) / (nf * nf);
            let weights: Array = x
                .iter()
                .zip(dp.iter())
                .map(|(&xi, &dpi)| scale / ((1.0 - xi * xi) * dpi * dpi))
                .collect();
            return Ok(QuadratureRule {
                nodes: Array::from_vec(x),
                weights,
            });
        }
    }

    Err(Error::NonConvergence {
        order: n,
        sweeps: MAX_NEWTON_SWEEPS,
    })
}
