use crate::distance::minkowski_distance_p;
use crate::min_max_dist::pow_p;
use crate::rectangle::Hyperrectangle;
use crate::traits::{Axis, MinMaxDist};

/// Distance bounds in ordinary, unbounded space.
///
/// Along each axis the minimum separation is the gap between the two
/// intervals, or zero if they overlap; the maximum is the distance between
/// their far edges.
///
/// # Examples
///
/// ```rust
/// use kd_bounds::min_max_dist::Plain;
/// use kd_bounds::rectangle::Hyperrectangle;
/// use kd_bounds::traits::MinMaxDist;
///
/// let rect1 = Hyperrectangle::new(&[0.0], &[1.0]);
/// let rect2 = Hyperrectangle::new(&[2.0], &[3.0]);
///
/// assert_eq!(Plain.interval_interval_2(&rect1, &rect2, 0), (1.0, 9.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plain;

impl Plain {
    #[inline]
    fn separation<A: Axis>(
        rect1: &Hyperrectangle<A>,
        rect2: &Hyperrectangle<A>,
        dim: usize,
    ) -> (A, A) {
        let min = A::zero().max(
            (rect1.min_along(dim) - rect2.max_along(dim))
                .max(rect2.min_along(dim) - rect1.max_along(dim)),
        );
        let max = (rect1.max_along(dim) - rect2.min_along(dim))
            .max(rect2.max_along(dim) - rect1.min_along(dim));
        (min, max)
    }
}

impl<A: Axis> MinMaxDist<A> for Plain {
    #[inline]
    fn interval_interval_p(
        &self,
        rect1: &Hyperrectangle<A>,
        rect2: &Hyperrectangle<A>,
        dim: usize,
        p: A,
    ) -> (A, A) {
        let (min, max) = Self::separation(rect1, rect2, dim);
        (pow_p(min, p), pow_p(max, p))
    }

    #[inline]
    fn interval_interval_2(
        &self,
        rect1: &Hyperrectangle<A>,
        rect2: &Hyperrectangle<A>,
        dim: usize,
    ) -> (A, A) {
        let (min, max) = Self::separation(rect1, rect2, dim);
        (min * min, max * max)
    }

    fn rect_rect_p_inf(&self, rect1: &Hyperrectangle<A>, rect2: &Hyperrectangle<A>) -> (A, A) {
        (0..rect1.dims()).fold((A::zero(), A::zero()), |(min_dist, max_dist), dim| {
            let (min, max) = Self::separation(rect1, rect2, dim);
            (min_dist.max(min), max_dist.max(max))
        })
    }

    #[inline]
    fn distance_p(&self, x: &[A], y: &[A], p: A, upper_bound: A) -> A {
        minkowski_distance_p(x, y, p, upper_bound)
    }
}
