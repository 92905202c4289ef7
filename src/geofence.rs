//! Precomputed geofence for repeated containment queries.
//!
//! A [`Geofence`] validates its polygon once and derives the bounding box and
//! convex hull up front. Each query can then be rejected cheaply by one of
//! those derived shapes before the full classifier runs. Both shapes enclose
//! the polygon, so they only ever reject; a pass always falls through to the
//! classifier.

use crate::bounds::BoundingBox;
use crate::error::GeofenceError;
use crate::hull::{convex_hull, point_in_convex_hull};
use crate::polygon::{classify, is_in_with, BoundaryPolicy, Location};
use crate::primitives::{Point2, Scalar};
use crate::tolerance::points_equal;

/// Coarse rejection test run before the full classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Prefilter {
    /// Always run the full classifier.
    None,
    /// Reject points outside the closed bounding box.
    #[default]
    BoundingBox,
    /// Reject points outside the closed convex hull.
    ConvexHull,
}

/// Query behaviour of a [`Geofence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GeofenceConfig {
    /// How points on the boundary are reported.
    pub boundary: BoundaryPolicy,
    /// Which derived shape is consulted first.
    pub prefilter: Prefilter,
}

impl GeofenceConfig {
    /// Returns this configuration with a different boundary policy.
    #[must_use]
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns this configuration with a different pre-filter.
    #[must_use]
    pub fn with_prefilter(mut self, prefilter: Prefilter) -> Self {
        self.prefilter = prefilter;
        self
    }
}

/// A validated polygon with its bounding box and convex hull.
///
/// Immutable once built; share it freely across threads. To change the region,
/// build a new `Geofence`.
///
/// # Example
///
/// ```
/// use geofence::{Geofence, Point2};
///
/// let fence = Geofence::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ])
/// .unwrap();
///
/// assert!(fence.contains(Point2::new(5.0, 1.0)));
/// assert!(!fence.contains(Point2::new(5.0, 50.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geofence<T> {
    vertices: Vec<Point2<T>>,
    bounding_box: BoundingBox<T>,
    hull: Vec<Point2<T>>,
    config: GeofenceConfig,
}

impl<T: Scalar> Geofence<T> {
    /// Builds a geofence with the default configuration.
    pub fn new(vertices: Vec<Point2<T>>) -> Result<Self, GeofenceError> {
        Self::with_config(vertices, GeofenceConfig::default())
    }

    /// Builds a geofence with an explicit configuration.
    ///
    /// Fails if the polygon has fewer than three vertices or any coordinate is
    /// not finite. The vertex order is kept as given.
    pub fn with_config(
        vertices: Vec<Point2<T>>,
        config: GeofenceConfig,
    ) -> Result<Self, GeofenceError> {
        if vertices.len() < 3 {
            tracing::debug!(count = vertices.len(), "rejecting degenerate geofence");
            return Err(GeofenceError::TooFewVertices {
                count: vertices.len(),
            });
        }

        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            tracing::debug!(index, "rejecting geofence with non-finite vertex");
            return Err(GeofenceError::NonFiniteCoordinate { index });
        }

        let bounding_box = BoundingBox::from_polygon(&vertices)
            .ok_or(GeofenceError::TooFewVertices {
                count: vertices.len(),
            })?;
        let hull = convex_hull(&vertices);

        tracing::debug!(
            vertices = vertices.len(),
            hull = hull.len(),
            ?config,
            "built geofence"
        );

        Ok(Self {
            vertices,
            bounding_box,
            hull,
            config,
        })
    }

    /// Tests if `point` is inside the geofence.
    ///
    /// Vertices are always inside. Other points must pass the configured
    /// pre-filter and then the classifier under the configured boundary
    /// policy.
    pub fn contains(&self, point: Point2<T>) -> bool {
        if self.is_vertex(point) {
            return true;
        }

        if self.rejected_by_prefilter(point) {
            tracing::trace!(?point, prefilter = ?self.config.prefilter, "rejected by prefilter");
            return false;
        }

        is_in_with(&self.vertices, point, self.config.boundary)
    }

    /// Classifies `point` against the geofence polygon.
    ///
    /// The pre-filter is applied here as well, so points it rejects are
    /// reported as [`Location::Outside`].
    pub fn classify(&self, point: Point2<T>) -> Location {
        if self.rejected_by_prefilter(point) && !self.is_vertex(point) {
            return Location::Outside;
        }

        classify(&self.vertices, point)
    }

    /// Returns the polygon vertices in their original order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<T>] {
        &self.vertices
    }

    /// Returns the bounding box of the polygon.
    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox<T> {
        &self.bounding_box
    }

    /// Returns the convex hull of the polygon in counter-clockwise order.
    #[inline]
    pub fn hull(&self) -> &[Point2<T>] {
        &self.hull
    }

    /// Returns the query configuration.
    #[inline]
    pub fn config(&self) -> GeofenceConfig {
        self.config
    }

    fn is_vertex(&self, point: Point2<T>) -> bool {
        self.vertices.iter().any(|&v| points_equal(v, point))
    }

    fn rejected_by_prefilter(&self, point: Point2<T>) -> bool {
        match self.config.prefilter {
            Prefilter::None => false,
            Prefilter::BoundingBox => !self.bounding_box.contains_closed(point),
            // A collinear polygon has a two-point hull that contains nothing;
            // fall back to the box.
            Prefilter::ConvexHull if self.hull.len() < 3 => {
                !self.bounding_box.contains_closed(point)
            }
            Prefilter::ConvexHull => !point_in_convex_hull(&self.hull, point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn heptagon() -> Vec<Point2<f64>> {
        [(1, 3), (6, 14), (9, 1), (17, 3), (12, 10), (5, 7), (12, 5)]
            .into_iter()
            .map(|(x, y)| Point2::new(x as f64, y as f64))
            .collect()
    }

    fn all_configs() -> Vec<GeofenceConfig> {
        let mut configs = Vec::new();
        for boundary in [BoundaryPolicy::Crossing, BoundaryPolicy::Inclusive] {
            for prefilter in [Prefilter::None, Prefilter::BoundingBox, Prefilter::ConvexHull] {
                configs.push(
                    GeofenceConfig::default()
                        .with_boundary(boundary)
                        .with_prefilter(prefilter),
                );
            }
        }
        configs
    }

    #[test]
    fn test_rejects_degenerate() {
        let err = Geofence::<i32>::new(vec![]).unwrap_err();
        assert_eq!(err, GeofenceError::TooFewVertices { count: 0 });

        let err = Geofence::new(vec![Point2::new(0, 0), Point2::new(10, 0)]).unwrap_err();
        assert_eq!(err, GeofenceError::TooFewVertices { count: 2 });
        assert_eq!(err.to_string(), "polygon needs at least 3 vertices, got 2");
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Geofence::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(f64::NAN, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, GeofenceError::NonFiniteCoordinate { index: 2 });
    }

    #[test]
    fn test_default_config() {
        let config = GeofenceConfig::default();
        assert_eq!(config.boundary, BoundaryPolicy::Crossing);
        assert_eq!(config.prefilter, Prefilter::BoundingBox);
    }

    #[test]
    fn test_derived_shapes() {
        let fence = Geofence::new(heptagon()).unwrap();
        assert_eq!(fence.vertices(), heptagon().as_slice());
        assert_eq!(fence.hull().len(), 5);
        assert_eq!(fence.bounding_box().top_left, Point2::new(1.0, 14.0));
        assert_eq!(fence.bounding_box().bottom_right, Point2::new(17.0, 1.0));
    }

    #[test]
    fn test_contains_matches_classifier_for_every_config() {
        let polygon = heptagon();
        let queries = [
            Point2::new(6.0, 7.0),
            Point2::new(5.0, 5.0),
            Point2::new(13.0, 6.0),
            Point2::new(17.0, 3.0),
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 5.0),
            Point2::new(3.0, 13.0),
        ];

        for config in all_configs() {
            let fence = Geofence::with_config(polygon.clone(), config).unwrap();
            for q in queries {
                assert_eq!(
                    fence.contains(q),
                    is_in_with(&polygon, q, config.boundary),
                    "config {:?}, query {:?}",
                    config,
                    q
                );
            }
        }
    }

    #[test]
    fn test_vertex_on_box_edge_is_inside() {
        let triangle = vec![Point2::new(0, 0), Point2::new(10, 0), Point2::new(10, 10)];
        let fence = Geofence::new(triangle).unwrap();
        assert!(fence.contains(Point2::new(0, 0)));
        assert!(fence.contains(Point2::new(10, 10)));
        assert!(fence.contains(Point2::new(5, 0)));
    }

    #[test]
    fn test_classify() {
        let fence = Geofence::with_config(
            heptagon(),
            GeofenceConfig::default().with_prefilter(Prefilter::ConvexHull),
        )
        .unwrap();
        assert_eq!(fence.classify(Point2::new(5.0, 5.0)), Location::Inside);
        assert_eq!(fence.classify(Point2::new(6.0, 7.0)), Location::Outside);
        assert_eq!(fence.classify(Point2::new(6.0, 14.0)), Location::Boundary);
        assert_eq!(fence.classify(Point2::new(30.0, 30.0)), Location::Outside);
    }

    #[test]
    fn test_collinear_polygon_with_hull_prefilter() {
        let fence = Geofence::with_config(
            vec![Point2::new(0, 0), Point2::new(5, 0), Point2::new(10, 0)],
            GeofenceConfig::default()
                .with_prefilter(Prefilter::ConvexHull)
                .with_boundary(BoundaryPolicy::Inclusive),
        )
        .unwrap();
        assert_eq!(fence.hull().len(), 2);
        assert!(fence.contains(Point2::new(5, 0)));
        assert!(fence.contains(Point2::new(3, 0)));
        assert!(!fence.contains(Point2::new(3, 1)));
    }

    #[test]
    fn test_integer_prefilters_agree() {
        // (2, 5) lies above the edge y = 2x, outside the triangle but inside
        // its bounding box.
        let triangle = vec![Point2::new(0, 0), Point2::new(10, 0), Point2::new(10, 20)];
        let q = Point2::new(2, 5);

        for config in all_configs() {
            let fence = Geofence::with_config(triangle.clone(), config).unwrap();
            assert!(!fence.contains(q), "config {:?}", config);
            assert_eq!(fence.classify(q), Location::Outside);
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let fence = std::sync::Arc::new(Geofence::new(heptagon()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let fence = std::sync::Arc::clone(&fence);
                std::thread::spawn(move || fence.contains(Point2::new(5.0, 5.0)))
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }

    proptest! {
        #[test]
        fn prop_bounding_box_is_sound(
            coords in prop::collection::vec((-100_i32..100, -100_i32..100), 3..20),
            qx in -120_i32..120,
            qy in -120_i32..120,
        ) {
            let polygon: Vec<Point2<f64>> = coords
                .into_iter()
                .map(|(x, y)| Point2::new(x as f64, y as f64))
                .collect();
            let q = Point2::new(qx as f64, qy as f64);
            let bb = BoundingBox::from_polygon(&polygon).unwrap();

            if crate::polygon::is_in(&polygon, q) {
                let on_edge = q.x == bb.top_left.x
                    || q.x == bb.bottom_right.x
                    || q.y == bb.top_left.y
                    || q.y == bb.bottom_right.y;
                prop_assert!(bb.contains(q) || on_edge);
            }
        }

        #[test]
        fn prop_integer_prefilters_agree_with_classifier(
            coords in prop::collection::vec((-100_i64..100, -100_i64..100), 3..20),
            qx in -120_i64..120,
            qy in -120_i64..120,
        ) {
            let polygon: Vec<Point2<i64>> = coords.into_iter().map(Point2::from).collect();
            let q = Point2::new(qx, qy);

            for config in all_configs() {
                let fence = Geofence::with_config(polygon.clone(), config).unwrap();
                prop_assert_eq!(fence.contains(q), is_in_with(&polygon, q, config.boundary));
                prop_assert_eq!(fence.classify(q), classify(&polygon, q));
            }
        }

        #[test]
        fn prop_prefilters_agree_with_classifier(
            coords in prop::collection::vec((-100_i32..100, -100_i32..100), 3..20),
            qx in -120_i32..120,
            qy in -120_i32..120,
        ) {
            let polygon: Vec<Point2<f64>> = coords
                .into_iter()
                .map(|(x, y)| Point2::new(x as f64, y as f64))
                .collect();
            let q = Point2::new(qx as f64, qy as f64);

            for config in all_configs() {
                let fence = Geofence::with_config(polygon.clone(), config).unwrap();
                prop_assert_eq!(fence.contains(q), is_in_with(&polygon, q, config.boundary));
            }
        }
    }
}
