//! Convex hull construction and convex containment.
//!
//! A geofence polygon drawn by hand is often concave or has its vertices in an
//! arbitrary order. Its convex hull is a superset of the region that can be
//! tested with one orientation check per edge.
//!
//! # Example
//!
//! ```
//! use geofence::hull::{convex_hull, point_in_convex_hull};
//! use geofence::Point2;
//!
//! let points = vec![
//!     Point2::new(0, 0),
//!     Point2::new(10, 0),
//!     Point2::new(5, 5), // Interior point
//!     Point2::new(10, 10),
//!     Point2::new(0, 10),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! assert!(point_in_convex_hull(&hull, Point2::new(5, 5)));
//! ```

use crate::primitives::{Point2, Scalar};
use crate::tolerance::{cross, orient2d, Orientation};
use std::cmp::Ordering;

/// Computes the convex hull of a set of points using Andrew's monotone chain algorithm.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// point with the smallest x (then smallest y). The hull is implicitly closed.
/// Collinear points on hull edges are dropped.
///
/// The input is never reordered: sorting happens on an internal copy, using the
/// exact coordinate values rather than the tolerance rule.
///
/// Points with a NaN or infinite coordinate are skipped. Exact duplicates are
/// collapsed into one point, so three copies of `p` give `[p]`.
///
/// Fewer than three finite points have no hull to construct, so they are
/// returned in input order. Fewer than three distinct points are returned
/// sorted by x, then y. If all points are collinear the result is the two
/// extreme points.
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
pub fn convex_hull<T: Scalar>(points: &[Point2<T>]) -> Vec<Point2<T>> {
    let mut sorted: Vec<Point2<T>> = points
        .iter()
        .copied()
        .filter(|p| p.is_finite())
        .collect();
    if sorted.len() < 3 {
        return sorted;
    }

    sorted.sort_by(lexicographic);
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    // Build lower hull
    let mut lower: Vec<Point2<T>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= T::zero()
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Build upper hull
    let mut upper: Vec<Point2<T>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= T::zero()
        {
            upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}

/// Tests if a point is inside a convex hull.
///
/// A point on the boundary (within tolerance) is considered inside. The hull
/// must be in counter-clockwise order, as produced by [`convex_hull`].
/// Returns `false` for fewer than 3 hull vertices.
pub fn point_in_convex_hull<T: Scalar>(hull: &[Point2<T>], point: Point2<T>) -> bool {
    if hull.len() < 3 {
        return false;
    }

    let n = hull.len();
    (0..n).all(|i| orient2d(hull[i], hull[(i + 1) % n], point) != Orientation::Clockwise)
}

/// Computes twice the area of a convex hull.
///
/// Uses the shoelace formula without the final halving so the result stays
/// exact for integer coordinates. Returns 0 for fewer than 3 vertices.
pub fn convex_hull_area2<T: Scalar>(hull: &[Point2<T>]) -> T {
    if hull.len() < 3 {
        return T::zero();
    }

    let n = hull.len();
    let mut area = T::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        area = area + hull[i].x * hull[j].y - hull[j].x * hull[i].y;
    }

    area.abs()
}

/// Order by x, then y, on the raw coordinate values. Total for finite values.
fn lexicographic<T: Scalar>(a: &Point2<T>, b: &Point2<T>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
