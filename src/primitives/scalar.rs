//! Numeric coordinate types.

use num_traits::{NumCast, Signed};
use std::fmt::Debug;

use crate::tolerance::EPSILON;

/// A coordinate scalar: a signed integer or a floating-point type.
///
/// Anything that is not a signed arithmetic type is rejected at compile time
/// because it has no `Scalar` implementation.
///
/// # Coordinate range
///
/// The predicates multiply coordinate differences, so integer coordinates
/// must keep `2 * (max - min)^2` within the type. For `i32` that is a span of
/// about 32 000 units per axis; use `i64` for wider grids such as microdegrees.
/// Overflow panics in debug builds and wraps in release builds.
/// [`is_equal`](crate::tolerance::is_equal) is exact over the full range.
pub trait Scalar: Signed + NumCast + PartialOrd + Copy + Debug {
    /// [`EPSILON`] expressed in this type.
    ///
    /// For integer types the cast truncates to zero, so tolerance comparisons
    /// become exact.
    fn epsilon() -> Self {
        <Self as NumCast>::from(EPSILON).unwrap_or_else(Self::zero)
    }

    /// Returns `false` for NaN or infinite values. Integers are always finite.
    fn is_finite(self) -> bool;

    /// Returns the larger of `self` and `other`.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Returns the smaller of `self` and `other`.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32, f64);
