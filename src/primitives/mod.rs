//! Generic 2D geometric primitives.

mod point2;
mod scalar;
mod vec2;

pub use point2::Point2;
pub use scalar::Scalar;
pub use vec2::Vec2;
