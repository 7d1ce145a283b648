//! Strategies for bounding the distance between two hyperrectangles.
//!
//! Both strategies implement [`MinMaxDist`](crate::traits::MinMaxDist) so that a
//! [`RectRectDistanceTracker`](crate::tracker::RectRectDistanceTracker) is written once
//! and monomorphised per strategy:
//!
//! * [`Plain`]: ordinary unbounded space.
//! * [`Periodic`]: a toroidal box in which every axis wraps around after a fixed period.

mod periodic;
mod plain;

pub use periodic::{wrap_distance, wrapped_interval_distance, Periodic};
pub use plain::Plain;

use crate::traits::Axis;

/// Raises a per-axis separation to the power `p`, taking the exact
/// `x * x` path for `p = 2` so the general and squared forms agree bit for bit.
#[inline]
pub(crate) fn pow_p<A: Axis>(x: A, p: A) -> A {
    if p == A::two() {
        x * x
    } else if p == A::one() {
        x
    } else {
        x.powf(p)
    }
}
