//! Floating-point comparison utilities.

use num_traits::Float;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close<T: Float>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `|a - b| <= n * epsilon` where `epsilon` is the
/// machine-epsilon relative to `max(|a|, |b|)`.
#[inline]
pub fn close_enough<T: Float>(a: T, b: T, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = a.abs().max(b.abs()) * T::epsilon() * T::from(n).unwrap();
    (a - b).abs() <= eps
}
