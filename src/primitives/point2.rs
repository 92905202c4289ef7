//! 2D point type.

use super::{Scalar, Vec2};
use crate::tolerance::points_equal;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over any [`Scalar`]: signed integers, `f32` or `f64`. Geographic
/// coordinates are stored as planar pairs, e.g. `x` = longitude and
/// `y` = latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Returns `true` if both coordinates match under the tolerance rule.
    ///
    /// Method form of [`points_equal`].
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        points_equal(self, other)
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> T {
        (other - self).magnitude_squared()
    }

    /// Returns `true` if neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Scalar> From<[T; 2]> for Point2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<(T, T)> for Point2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Point2<T>> for [T; 2] {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        [p.x, p.y]
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<T> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Scalar> Add<Vec2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}
