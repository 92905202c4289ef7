//! Two-tier absolute/relative equality.

use crate::primitives::{Point2, Scalar};

/// Absolute and relative tolerance used by all comparisons.
pub const EPSILON: f64 = 1.0e-9;

/// Returns `true` if `a` and `b` are equal within tolerance.
///
/// The absolute test `|a - b| <= EPSILON` runs first and handles values near
/// zero. Otherwise the difference is compared against `EPSILON` scaled by the
/// larger magnitude, which handles large coordinates.
///
/// For integer types the tolerance truncates to zero and the comparison is
/// exact. It never subtracts, so it holds across the whole range of the type.
///
/// # Example
///
/// ```
/// use geofence::tolerance::is_equal;
///
/// assert!(is_equal(15, 15));
/// assert!(!is_equal(15, -15));
/// assert!(is_equal(0.1 + 0.2, 0.3));
/// assert!(!is_equal(0.0, 0.001));
/// ```
#[inline]
pub fn is_equal<T: Scalar>(a: T, b: T) -> bool {
    let eps = T::epsilon();
    if eps == T::zero() {
        return a == b;
    }

    let diff = (a - b).abs();
    if diff <= eps {
        return true;
    }
    diff <= eps * a.abs().max_of(b.abs())
}

/// Returns `true` if both coordinates of `a` and `b` are equal within tolerance.
#[inline]
pub fn points_equal<T: Scalar>(a: Point2<T>, b: Point2<T>) -> bool {
    is_equal(a.x, b.x) && is_equal(a.y, b.y)
}
