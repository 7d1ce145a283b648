//! Definitions for the traits shared between the [`rectangle`](crate::rectangle),
//! [`min_max_dist`](crate::min_max_dist) and [`tracker`](crate::tracker) modules
use num_traits::Float;
use std::fmt::Debug;

use crate::error::TrackerError;
use crate::rectangle::Hyperrectangle;

/// Axis trait represents the traits that must be implemented
/// by the type used for co-ordinates and distances. This will be [`f64`] or [`f32`].
///
/// `p = ∞` (Chebyshev distance) is expressed as `A::infinity()` wherever an
/// exponent is taken.
pub trait Axis: Float + Default + Debug + Copy + Sync + Send + std::ops::AddAssign {
    /// the constant `2`, used to select the squared-Euclidean fast paths
    fn two() -> Self;
}
impl<T: Float + Default + Debug + Copy + Sync + Send + std::ops::AddAssign> Axis for T {
    #[inline]
    fn two() -> Self {
        T::one() + T::one()
    }
}

/// Trait that needs to be implemented by any strategy used to bound the
/// distance between two hyperrectangles.
///
/// All values are returned as `distance**p` for finite `p`, and as the plain
/// distance for `p = ∞`.
///
/// Two strategies are provided: [`Plain`](crate::min_max_dist::Plain) for
/// unbounded space and [`Periodic`](crate::min_max_dist::Periodic) for a
/// toroidal box. A [`RectRectDistanceTracker`](crate::tracker::RectRectDistanceTracker)
/// is generic over its strategy, so the choice is made once per tracker.
pub trait MinMaxDist<A: Axis> {
    /// returns the minimum and maximum distance, raised to the power `p`,
    /// between the two rectangles along axis `dim`. Only valid for finite `p`.
    fn interval_interval_p(
        &self,
        rect1: &Hyperrectangle<A>,
        rect2: &Hyperrectangle<A>,
        dim: usize,
        p: A,
    ) -> (A, A);

    /// as [`interval_interval_p`](MinMaxDist::interval_interval_p) with `p = 2`,
    /// without calling `powf`. Must agree exactly with the general form.
    fn interval_interval_2(
        &self,
        rect1: &Hyperrectangle<A>,
        rect2: &Hyperrectangle<A>,
        dim: usize,
    ) -> (A, A);

    /// returns the minimum and maximum Chebyshev (`p = ∞`) distance between
    /// the two rectangles, across all axes.
    fn rect_rect_p_inf(&self, rect1: &Hyperrectangle<A>, rect2: &Hyperrectangle<A>) -> (A, A);

    /// returns the Minkowski p-distance to the power `p` between `x` and `y`.
    ///
    /// If the result would be larger than `upper_bound`, any value larger than
    /// `upper_bound` may be returned instead: the calculation is truncated.
    fn distance_p(&self, x: &[A], y: &[A], p: A, upper_bound: A) -> A;

    /// checks that this strategy can measure rectangles with `dims` axes.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::BoxDimensionMismatch`] when a strategy carries
    /// per-axis data of a different length.
    fn check_dims(&self, _dims: usize) -> Result<(), TrackerError> {
        Ok(())
    }
}

/// Implemented by tree nodes that split space along one axis.
///
/// Consumed by [`push_less_of`](crate::tracker::RectRectDistanceTracker::push_less_of)
/// and [`push_greater_of`](crate::tracker::RectRectDistanceTracker::push_greater_of).
pub trait SplitNode<A: Axis> {
    /// the axis this node splits on
    fn split_dim(&self) -> usize;

    /// the co-ordinate along [`split_dim`](SplitNode::split_dim) that divides the children
    fn split_val(&self) -> A;
}

#[cfg(test)]
mod tests {
    use crate::traits::Axis;

    #[test]
    fn test_two() {
        assert_eq!(<f64 as Axis>::two(), 2.0f64);
        assert_eq!(<f32 as Axis>::two(), 2.0f32);
    }
}
