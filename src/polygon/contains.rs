//! Point-in-polygon classification.

use crate::primitives::{Point2, Scalar};
use crate::tolerance::{is_in_between, points_equal};

/// Where a query point lies relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Strictly inside the polygon.
    Inside,
    /// Strictly outside the polygon, or the polygon has no interior.
    Outside,
    /// On a vertex or an edge (within tolerance).
    Boundary,
}

/// How points on the polygon boundary are reported by [`is_in_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryPolicy {
    /// Vertices are inside. Other edge points are decided by the crossing
    /// arithmetic and may land on either side.
    #[default]
    Crossing,
    /// Every vertex and every edge point is inside.
    Inclusive,
}

/// Tests if `point` is inside `polygon`.
///
/// The polygon is an ordered, implicitly closed vertex list. Fewer than three
/// vertices have no interior and always yield `false`. A point equal to any
/// vertex (tolerance rule) is inside; otherwise the crossing-number test
/// decides.
///
/// # Example
///
/// ```
/// use geofence::polygon::is_in;
/// use geofence::Point2;
///
/// let triangle = vec![Point2::new(0, 0), Point2::new(10, 0), Point2::new(10, 10)];
///
/// assert!(is_in(&triangle, Point2::new(5, 1)));
/// assert!(is_in(&triangle, Point2::new(10, 10))); // Vertex
/// assert!(!is_in(&triangle, Point2::new(5, 50)));
/// ```
pub fn is_in<T: Scalar>(polygon: &[Point2<T>], point: Point2<T>) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    is_vertex(polygon, point) || crossing_number_odd(polygon, point)
}

/// Tests if `point` is inside `polygon`, reporting boundary points per `policy`.
pub fn is_in_with<T: Scalar>(
    polygon: &[Point2<T>],
    point: Point2<T>,
    policy: BoundaryPolicy,
) -> bool {
    match policy {
        BoundaryPolicy::Crossing => is_in(polygon, point),
        BoundaryPolicy::Inclusive => classify(polygon, point) != Location::Outside,
    }
}

/// Classifies `point` as inside, outside or on the boundary of `polygon`.
///
/// Polygons with fewer than three vertices classify every point as
/// [`Location::Outside`].
pub fn classify<T: Scalar>(polygon: &[Point2<T>], point: Point2<T>) -> Location {
    if polygon.len() < 3 {
        return Location::Outside;
    }

    if is_on_boundary(polygon, point) {
        Location::Boundary
    } else if crossing_number_odd(polygon, point) {
        Location::Inside
    } else {
        Location::Outside
    }
}

/// Returns `true` if `point` is a vertex of `polygon` or lies on one of its
/// edges, including the closing edge from the last vertex to the first.
pub fn is_on_boundary<T: Scalar>(polygon: &[Point2<T>], point: Point2<T>) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    is_vertex(polygon, point) || edges(polygon).any(|(a, b)| is_in_between(a, b, point))
}

/// Returns `true` if `point` equals any vertex under the tolerance rule.
#[inline]
fn is_vertex<T: Scalar>(polygon: &[Point2<T>], point: Point2<T>) -> bool {
    polygon.iter().any(|&v| points_equal(v, point))
}

/// Iterates edges `(polygon[j], polygon[i])` with `j = i - 1`, wrapping around.
fn edges<T: Scalar>(
    polygon: &[Point2<T>],
) -> impl Iterator<Item = (Point2<T>, Point2<T>)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[(i + n - 1) % n], polygon[i]))
}

/// Crossing-number test along a horizontal ray towards +x.
///
/// An edge is crossed when `point.x` lies left of the edge's x at `point.y`.
/// That comparison is cross-multiplied by the edge's `dy` instead of divided,
/// so integer coordinates are decided exactly. The straddle check guarantees
/// `dy != 0`.
fn crossing_number_odd<T: Scalar>(polygon: &[Point2<T>], point: Point2<T>) -> bool {
    let mut inside = false;

    for (vj, vi) in edges(polygon) {
        if (vi.y > point.y) == (vj.y > point.y) {
            continue;
        }

        let dy = vj.y - vi.y;
        let lhs = (point.x - vi.x) * dy;
        let rhs = (vj.x - vi.x) * (point.y - vi.y);
        let left_of_edge = if dy > T::zero() { lhs < rhs } else { lhs > rhs };

        if left_of_edge {
            inside = !inside;
        }
    }

    inside
}
