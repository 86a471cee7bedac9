//! `Array` — a one-dimensional vector of reals.
//!
//! A thin newtype around `nalgebra::DVector<f64>` used for node and weight
//! sequences and for vectorized integrand values: indexing, element-wise
//! mapping, scalar scaling, and dot product.

use gq_core::Real;
use nalgebra::DVector;
use std::ops::{Index, IndexMut, Mul};

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Apply `f` element-wise, producing a new array of the same length.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Array {
        Array(self.0.map(f))
    }

    /// Dot product with another array.
    ///
    /// # Panics
    /// Panics if the lengths differ (nalgebra dimension check).
    pub fn dot(&self, other: &Array) -> Real {
        self.0.dot(&other.0)
    }

    /// Sum of the elements.
    pub fn sum(&self) -> Real {
        self.0.sum()
    }
}

impl Index<usize> for Array {
    type Output = Real;

    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.0[i]
    }
}

impl Mul<Real> for &Array {
    type Output = Array;

    fn mul(self, scalar: Real) -> Array {
        Array(&self.0 * scalar)
    }
}

impl From<Vec<Real>> for Array {
    fn from(data: Vec<Real>) -> Self {
        Self::from_vec(data)
    }
}

impl FromIterator<Real> for Array {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
