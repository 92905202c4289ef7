//! Geometric predicates with the crate-wide tolerance.

use super::points_equal;
use crate::primitives::{Point2, Scalar};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if twice the signed area is within the tolerance
#[inline]
pub fn orient2d<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Orientation {
    let eps = T::epsilon();
    let cross = cross(a, b, c);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `c` lies on the closed segment from `a` to `b`.
///
/// `c` must be collinear with `a` and `b` (cross product within tolerance) and
/// its projection onto the segment must fall between the endpoints, both
/// included. A zero-length segment contains only its own endpoint.
///
/// # Example
///
/// ```
/// use geofence::tolerance::is_in_between;
/// use geofence::Point2;
///
/// let a = Point2::new(0, 0);
/// let b = Point2::new(10, 0);
///
/// assert!(is_in_between(a, b, Point2::new(5, 0)));
/// assert!(is_in_between(a, b, Point2::new(10, 0)));
/// assert!(!is_in_between(a, b, Point2::new(11, 0)));
/// assert!(!is_in_between(a, b, Point2::new(5, 1)));
/// ```
pub fn is_in_between<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> bool {
    if points_equal(a, b) {
        return points_equal(a, c);
    }

    let ab = b - a;
    let ac = c - a;

    if ab.cross(ac).abs() > T::epsilon() {
        return false;
    }

    let dot = ac.dot(ab);
    if dot < T::zero() {
        return false;
    }

    dot <= ab.magnitude_squared()
}

/// Cross product of vectors OA and OB where O is the origin point.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
pub(crate) fn cross<T: Scalar>(o: Point2<T>, a: Point2<T>, b: Point2<T>) -> T {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient2d_ccw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1.0);
        assert_eq!(orient2d(a, b, c), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orient2d_cw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, -1.0);
        assert_eq!(orient2d(a, b, c), Orientation::Clockwise);
    }

    #[test]
    fn test_orient2d_nearly_collinear() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1e-12);
        assert_eq!(orient2d(a, b, c), Orientation::Collinear);
    }

    #[test]
    fn test_orient2d_integers() {
        let a = Point2::new(0_i32, 0);
        let b = Point2::new(4, 0);
        assert_eq!(orient2d(a, b, Point2::new(2, 1)), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, Point2::new(2, -1)), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, Point2::new(9, 0)), Orientation::Collinear);
    }

    #[test]
    fn test_in_between_endpoints() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(10.0, 10.0);
        assert!(is_in_between(a, b, a));
        assert!(is_in_between(a, b, b));
        assert!(is_in_between(a, b, Point2::new(2.5, 2.5)));
    }

    #[test]
    fn test_in_between_outside_projection() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(10.0, 10.0);
        // Collinear but before `a`.
        assert!(!is_in_between(a, b, Point2::new(-1.0, -1.0)));
        // Collinear but past `b`.
        assert!(!is_in_between(a, b, Point2::new(10.5, 10.5)));
    }

    #[test]
    fn test_in_between_off_line() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert!(!is_in_between(a, b, Point2::new(5.0, 0.001)));
        assert!(is_in_between(a, b, Point2::new(5.0, 1e-12)));
    }

    #[test]
    fn test_in_between_degenerate_segment() {
        let a = Point2::new(3_i32, 3);
        assert!(is_in_between(a, a, a));
        assert!(!is_in_between(a, a, Point2::new(3, 4)));
    }

    #[test]
    fn test_in_between_reversed_segment() {
        let a = Point2::new(10_i32, 0);
        let b = Point2::new(0, 0);
        assert!(is_in_between(a, b, Point2::new(4, 0)));
        assert!(!is_in_between(a, b, Point2::new(-4, 0)));
    }

    #[test]
    fn test_cross_product() {
        let o = Point2::new(0.0_f64, 0.0);
        let a = Point2::new(1.0, 0.0);
        let b = Point2::new(0.0, 1.0);

        // O -> A -> B is CCW, so cross product is positive
        assert!(cross(o, a, b) > 0.0);

        // O -> B -> A is CW, so cross product is negative
        assert!(cross(o, b, a) < 0.0);
    }
}
