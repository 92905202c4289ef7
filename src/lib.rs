//! geofence - Is this point inside that region?
//!
//! Point-in-polygon classification for 2D polygons, together with the
//! supporting pieces that make it fast and robust on real coordinate data:
//! tolerance-aware equality, segment membership, axis-aligned bounding boxes
//! and convex hulls.
//!
//! All coordinates are generic over [`Scalar`]: signed integers, `f32` or
//! `f64`. Geographic (WGS84) coordinates are treated as flat Cartesian pairs,
//! which is only accurate over small areas.

pub mod bounds;
pub mod error;
pub mod geofence;
pub mod hull;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use bounds::BoundingBox;
pub use error::GeofenceError;
pub use geofence::{Geofence, GeofenceConfig, Prefilter};
pub use polygon::{is_in, BoundaryPolicy, Location, Polygon};
pub use primitives::{Point2, Scalar, Vec2};
pub use tolerance::{is_equal, is_in_between};
