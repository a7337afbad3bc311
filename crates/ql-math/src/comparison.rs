//! Floating-point comparison.

use ql_core::Real;

/// Default absolute tolerance for [`close`].
pub const EPSILON: Real = 1e-10;

/// `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// `true` if `a` and `b` agree to within `n` ulps of the larger magnitude.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = a.abs().max(b.abs()) * f64::EPSILON * f64::from(n);
    (a - b).abs() <= eps
}

/// `true` if `x` is zero or a denormal-scale residue of zero.
///
/// Used to detect a vanishing total variance, where `√v` would appear in a
/// denominator.
#[inline]
pub fn is_zero(x: Real) -> bool {
    x.abs() < f64::MIN_POSITIVE
}
