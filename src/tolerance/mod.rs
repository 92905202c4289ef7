//! Tolerance-aware comparisons and geometric predicates.
//!
//! Every place that asks whether two coordinates are "the same" goes through
//! [`is_equal`]. The tolerance is the fixed [`EPSILON`], cast into the
//! coordinate type, so integer coordinates compare exactly.

mod equality;
mod predicates;

pub use equality::{is_equal, points_equal, EPSILON};
pub use predicates::{is_in_between, orient2d, Orientation};

pub(crate) use predicates::cross;
