//! Error types for geofence construction.

use thiserror::Error;

/// Errors that can occur when building a [`Geofence`](crate::Geofence).
///
/// The geometric predicates themselves never fail; degenerate input there is
/// answered with "not inside".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeofenceError {
    /// The polygon has fewer than three vertices and therefore no interior.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending vertex in the input.
        index: usize,
    },
}
