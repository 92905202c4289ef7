//! Axis-aligned bounding boxes used as a coarse rejection test.

mod aabb;

pub use aabb::{bounding_box, is_in_bounding_box, BoundingBox};
