//! Polygons and point-in-polygon classification.
//!
//! A polygon is an ordered vertex list; the closing edge from the last vertex
//! back to the first is implicit. Classification uses the crossing-number
//! (ray casting) test, with an exact-vertex check in front of it and an
//! optional edge check for callers that need a precise boundary answer.
//!
//! # Example
//!
//! ```
//! use geofence::polygon::{classify, Location, Polygon};
//! use geofence::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! assert!(square.contains(Point2::new(5.0, 5.0)));
//! assert_eq!(classify(&square.vertices, Point2::new(5.0, 10.0)), Location::Boundary);
//! ```

mod contains;
mod core;

pub use contains::{classify, is_in, is_in_with, is_on_boundary, BoundaryPolicy, Location};
pub use core::Polygon;
