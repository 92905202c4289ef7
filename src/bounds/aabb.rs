//! Axis-aligned bounding box in map orientation.

use crate::primitives::{Point2, Scalar};

/// A 2D axis-aligned bounding box.
///
/// Stored as two corners in map orientation where "up" is the larger `y`:
/// `top_left` holds the minimum `x` and maximum `y`, `bottom_right` the
/// maximum `x` and minimum `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T> {
    /// Corner with the smallest x and the largest y.
    pub top_left: Point2<T>,
    /// Corner with the largest x and the smallest y.
    pub bottom_right: Point2<T>,
}

impl<T: Scalar> BoundingBox<T> {
    /// Computes the bounding box of a polygon in a single pass.
    ///
    /// Returns `None` for fewer than two vertices: no box is available, which
    /// callers must not read as "everything is outside".
    pub fn from_polygon(polygon: &[Point2<T>]) -> Option<Self> {
        if polygon.len() < 2 {
            return None;
        }

        let first = polygon[0];
        let mut top_left = first;
        let mut bottom_right = first;

        for v in &polygon[1..] {
            if v.x < top_left.x {
                top_left.x = v.x;
            }
            if v.y > top_left.y {
                top_left.y = v.y;
            }
            if v.x > bottom_right.x {
                bottom_right.x = v.x;
            }
            if v.y < bottom_right.y {
                bottom_right.y = v.y;
            }
        }

        Some(Self {
            top_left,
            bottom_right,
        })
    }

    /// Returns `true` if `p` lies strictly inside the box.
    ///
    /// Points on the box edge are reported outside. This is a fast pre-filter
    /// only: a `false` answer for a point on the edge says nothing about the
    /// polygon.
    #[inline]
    pub fn contains(&self, p: Point2<T>) -> bool {
        self.top_left.x < p.x
            && p.x < self.bottom_right.x
            && self.top_left.y > p.y
            && p.y > self.bottom_right.y
    }

    /// Returns `true` if `p` lies inside the box or on its edge.
    ///
    /// Every point of the source polygon passes this test, so it is safe to
    /// reject queries that fail it.
    #[inline]
    pub fn contains_closed(&self, p: Point2<T>) -> bool {
        self.top_left.x <= p.x
            && p.x <= self.bottom_right.x
            && self.top_left.y >= p.y
            && p.y >= self.bottom_right.y
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(&self) -> T {
        self.top_left.y - self.bottom_right.y
    }
}

/// Computes the bounding box of `polygon`.
///
/// Returns `None` if the polygon has fewer than two vertices.
///
/// # Example
///
/// ```
/// use geofence::bounds::bounding_box;
/// use geofence::Point2;
///
/// let polygon = vec![Point2::new(0, 0), Point2::new(10, 0), Point2::new(10, 10)];
/// let bb = bounding_box(&polygon).unwrap();
///
/// assert_eq!(bb.top_left, Point2::new(0, 10));
/// assert_eq!(bb.bottom_right, Point2::new(10, 0));
/// ```
#[inline]
pub fn bounding_box<T: Scalar>(polygon: &[Point2<T>]) -> Option<BoundingBox<T>> {
    BoundingBox::from_polygon(polygon)
}

/// Returns `true` if `p` lies strictly inside `bb`.
///
/// An absent box (`None`) contains nothing.
#[inline]
pub fn is_in_bounding_box<T: Scalar>(bb: Option<&BoundingBox<T>>, p: Point2<T>) -> bool {
    bb.is_some_and(|bb| bb.contains(p))
}
