//! Polygon value type.

use super::contains::{classify, is_in, is_in_with, BoundaryPolicy, Location};
use crate::bounds::BoundingBox;
use crate::hull::convex_hull;
use crate::primitives::{Point2, Scalar};

/// A simple polygon represented as a sequence of vertices.
///
/// The vertex order defines the edges and is never changed by any operation.
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Polygons with fewer than three vertices are degenerate and contain no
/// points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<T> {
    /// The vertices of the polygon, in edge order.
    pub vertices: Vec<Point2<T>>,
}

impl<T: Scalar> Polygon<T> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has fewer than three vertices.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Tests if a point is inside the polygon. See [`is_in`].
    #[inline]
    pub fn contains(&self, point: Point2<T>) -> bool {
        is_in(&self.vertices, point)
    }

    /// Tests if a point is inside the polygon under a boundary policy.
    #[inline]
    pub fn contains_with(&self, point: Point2<T>, policy: BoundaryPolicy) -> bool {
        is_in_with(&self.vertices, point, policy)
    }

    /// Classifies a point against the polygon.
    #[inline]
    pub fn classify(&self, point: Point2<T>) -> Location {
        classify(&self.vertices, point)
    }

    /// Returns the bounding box, or `None` for fewer than two vertices.
    #[inline]
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        BoundingBox::from_polygon(&self.vertices)
    }

    /// Returns the convex hull as a new polygon.
    #[inline]
    pub fn convex_hull(&self) -> Self {
        Self::new(convex_hull(&self.vertices))
    }
}

impl<T: Scalar> From<Vec<Point2<T>>> for Polygon<T> {
    #[inline]
    fn from(vertices: Vec<Point2<T>>) -> Self {
        Self::new(vertices)
    }
}

impl<T: Scalar> FromIterator<Point2<T>> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = Point2<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> AsRef<[Point2<T>]> for Polygon<T> {
    #[inline]
    fn as_ref(&self) -> &[Point2<T>] {
        &self.vertices
    }
}
