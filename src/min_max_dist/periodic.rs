use crate::distance::accumulate_p;
use crate::error::TrackerError;
use crate::min_max_dist::pow_p;
use crate::rectangle::Hyperrectangle;
use crate::traits::{Axis, MinMaxDist};

/// Distance bounds in a periodic (toroidal) box.
///
/// Each axis wraps around after its box size, so two co-ordinates are never
/// further apart than half a period along that axis. An axis with an infinite
/// box size does not wrap.
///
/// Box sizes are held as one array of length `2 * dims`: the periods for
/// every axis followed by the half-periods for every axis.
///
/// # Examples
///
/// ```rust
/// use kd_bounds::min_max_dist::Periodic;
/// use kd_bounds::rectangle::Hyperrectangle;
/// use kd_bounds::traits::MinMaxDist;
///
/// let periodic = Periodic::new(&[10.0]).unwrap();
/// let rect1 = Hyperrectangle::new(&[0.0], &[1.0]);
/// let rect2 = Hyperrectangle::new(&[9.0], &[9.5]);
///
/// // the short way round is across the boundary at 0 / 10
/// assert_eq!(periodic.interval_interval_p(&rect1, &rect2, 0, 1.0), (0.5, 2.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Periodic<A> {
    boxsize: Vec<A>,
}

impl<A: Axis> Periodic<A> {
    /// Creates a periodic box from one period per axis.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidBoxSize`] if any period is not strictly
    /// positive. Use `A::infinity()` for an axis that should not wrap.
    pub fn new(full: &[A]) -> Result<Self, TrackerError> {
        Self::validate(full)?;

        let two = A::two();
        let mut boxsize = Vec::with_capacity(full.len() * 2);
        boxsize.extend_from_slice(full);
        boxsize.extend(full.iter().map(|&f| f / two));

        Ok(Self { boxsize })
    }

    /// Creates a periodic box from an already concatenated
    /// `[periods..., half-periods...]` array.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MalformedBox`] if `data` has odd length, and
    /// [`TrackerError::InvalidBoxSize`] if any period is not strictly positive.
    pub fn from_concatenated(data: &[A]) -> Result<Self, TrackerError> {
        if data.len() % 2 != 0 {
            return Err(TrackerError::MalformedBox { len: data.len() });
        }
        Self::validate(&data[..data.len() / 2])?;

        Ok(Self {
            boxsize: data.to_vec(),
        })
    }

    fn validate(full: &[A]) -> Result<(), TrackerError> {
        match full.iter().position(|&f| !(f > A::zero())) {
            Some(axis) => Err(TrackerError::InvalidBoxSize { axis }),
            None => Ok(()),
        }
    }

    /// Number of axes covered by this box.
    #[inline]
    pub fn dims(&self) -> usize {
        self.boxsize.len() / 2
    }

    /// Period along `axis`.
    #[inline]
    pub fn full(&self, axis: usize) -> A {
        self.boxsize[axis]
    }

    /// Half the period along `axis`.
    #[inline]
    pub fn half(&self, axis: usize) -> A {
        self.boxsize[axis + self.dims()]
    }

    /// The concatenated `[periods..., half-periods...]` array.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.boxsize
    }

    #[inline]
    fn wrapped(&self, rect1: &Hyperrectangle<A>, rect2: &Hyperrectangle<A>, dim: usize) -> (A, A) {
        wrapped_interval_distance(
            rect1.min_along(dim) - rect2.max_along(dim),
            rect1.max_along(dim) - rect2.min_along(dim),
            self.full(dim),
            self.half(dim),
        )
    }
}

/// Minimum and maximum distance between two intervals on a periodic axis.
///
/// `min_raw` and `max_raw` are the unwrapped separations between the near and
/// far edges, i.e. `rect1.min - rect2.max` and `rect1.max - rect2.min`.
/// `full` and `half` are the period and half-period of the axis.
///
/// The maximum never exceeds `half`: no two points on a periodic axis can be
/// further apart than half the period.
///
/// # Examples
///
/// ```rust
/// use kd_bounds::min_max_dist::wrapped_interval_distance;
///
/// // entirely below half a period: unchanged
/// assert_eq!(wrapped_interval_distance(1.0, 2.0, 10.0, 5.0), (1.0, 2.0));
/// // entirely above half a period: reflected through the period
/// assert_eq!(wrapped_interval_distance(-8.0, -7.0, 10.0, 5.0), (2.0, 3.0));
/// // overlapping intervals
/// assert_eq!(wrapped_interval_distance(-1.0, 2.0, 10.0, 5.0), (0.0, 2.0));
/// ```
#[inline]
pub fn wrapped_interval_distance<A: Axis>(min_raw: A, max_raw: A, full: A, half: A) -> (A, A) {
    if max_raw <= A::zero() || min_raw >= A::zero() {
        // interval does not pass through 0
        let mut min = min_raw.abs();
        let mut max = max_raw.abs();
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }

        if max < half {
            (min, max)
        } else if min > half {
            (full - max, full - min)
        } else {
            (min.min(full - max), half)
        }
    } else {
        // interval passes through 0
        let mut max = max_raw;
        let min = -min_raw;
        if min > max {
            max = min;
        }
        if max > half {
            max = half;
        }
        (A::zero(), max)
    }
}

/// Reduces a co-ordinate difference onto `(-half, half]` by removing the
/// nearest multiple of the period `full`.
///
/// # Examples
///
/// ```rust
/// use kd_bounds::min_max_dist::wrap_distance;
///
/// assert_eq!(wrap_distance(9.0, 10.0, 5.0), -1.0);
/// assert_eq!(wrap_distance(-7.0, 10.0, 5.0), 3.0);
/// assert_eq!(wrap_distance(5.0, 10.0, 5.0), 5.0);
/// assert_eq!(wrap_distance(9.0, f64::INFINITY, f64::INFINITY), 9.0);
/// ```
#[inline]
pub fn wrap_distance<A: Axis>(delta: A, full: A, half: A) -> A {
    if delta > -half && delta <= half {
        return delta;
    }

    let wrapped = delta - full * (delta / full).round();
    if wrapped <= -half {
        wrapped + full
    } else if wrapped > half {
        wrapped - full
    } else {
        wrapped
    }
}

impl<A: Axis> MinMaxDist<A> for Periodic<A> {
    #[inline]
    fn interval_interval_p(
        &self,
        rect1: &Hyperrectangle<A>,
        rect2: &Hyperrectangle<A>,
        dim: usize,
        p: A,
    ) -> (A, A) {
        let (min, max) = self.wrapped(rect1, rect2, dim);
        (pow_p(min, p), pow_p(max, p))
    }

    #[inline]
    fn interval_interval_2(
        &self,
        rect1: &Hyperrectangle<A>,
        rect2: &Hyperrectangle<A>,
        dim: usize,
    ) -> (A, A) {
        let (min, max) = self.wrapped(rect1, rect2, dim);
        (min * min, max * max)
    }

    fn rect_rect_p_inf(&self, rect1: &Hyperrectangle<A>, rect2: &Hyperrectangle<A>) -> (A, A) {
        (0..rect1.dims()).fold((A::zero(), A::zero()), |(min_dist, max_dist), dim| {
            let (min, max) = self.wrapped(rect1, rect2, dim);
            (min_dist.max(min), max_dist.max(max))
        })
    }

    /// Compares the first `min(x.len(), y.len(), self.dims())` axes, as
    /// [`Plain`](crate::min_max_dist::Plain) compares the shorter of the two points.
    #[inline]
    fn distance_p(&self, x: &[A], y: &[A], p: A, upper_bound: A) -> A {
        let (full, half) = self.boxsize.split_at(self.dims());
        accumulate_p(
            x.iter()
                .zip(y)
                .zip(full.iter().zip(half))
                .map(|((&a, &b), (&full, &half))| wrap_distance(a - b, full, half)),
            p,
            upper_bound,
        )
    }

    fn check_dims(&self, dims: usize) -> Result<(), TrackerError> {
        if self.dims() == dims {
            Ok(())
        } else {
            Err(TrackerError::BoxDimensionMismatch {
                expected: dims,
                got: self.dims(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 2.0, (1.0, 2.0))]
    #[case(-2.0, -1.0, (1.0, 2.0))]
    #[case(6.0, 8.0, (2.0, 4.0))]
    #[case(-8.0, -6.0, (2.0, 4.0))]
    #[case(3.0, 8.0, (2.0, 5.0))]
    #[case(4.0, 7.0, (3.0, 5.0))]
    #[case(-3.0, 1.0, (0.0, 3.0))]
    #[case(-1.0, 9.0, (0.0, 5.0))]
    #[case(-9.0, 0.5, (0.0, 5.0))]
    fn wrapped_interval_cases(#[case] min_raw: f64, #[case] max_raw: f64, #[case] expected: (f64, f64)) {
        assert_eq!(wrapped_interval_distance(min_raw, max_raw, 10.0, 5.0), expected);
    }

    #[test]
    fn wrapped_bounds_never_exceed_half() {
        let periodic = Periodic::new(&[10.0]).unwrap();
        let rect1 = Hyperrectangle::new(&[0.0], &[1.0]);
        let rect2 = Hyperrectangle::new(&[9.0], &[9.5]);

        let (min, max) = periodic.interval_interval_p(&rect1, &rect2, 0, 1.0);
        assert!(min <= 0.5 + f64::EPSILON);
        assert!(max <= 5.0);
        assert!(min <= max);

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let a: [f64; 2] = rng.random();
            let b: [f64; 2] = rng.random();
            let rect1 = Hyperrectangle::new(&[a[0].min(a[1]) * 10.0], &[a[0].max(a[1]) * 10.0]);
            let rect2 = Hyperrectangle::new(&[b[0].min(b[1]) * 10.0], &[b[0].max(b[1]) * 10.0]);

            let (min, max) = periodic.interval_interval_p(&rect1, &rect2, 0, 1.0);
            assert!(min >= 0.0);
            assert!(max <= 5.0);
            assert!(min <= max);
        }
    }

    #[test]
    fn squared_path_matches_general_path_exactly() {
        let periodic = Periodic::new(&[1.0, 1.0, 1.0]).unwrap();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);

        for _ in 0..1000 {
            let a: [f64; 3] = rng.random();
            let b: [f64; 3] = rng.random();
            let c: [f64; 3] = rng.random();
            let d: [f64; 3] = rng.random();
            let rect1: Hyperrectangle<f64> = Hyperrectangle::bounding(&[a, b]);
            let rect2: Hyperrectangle<f64> = Hyperrectangle::bounding(&[c, d]);

            for dim in 0..3 {
                let squared = periodic.interval_interval_2(&rect1, &rect2, dim);
                let general = periodic.interval_interval_p(&rect1, &rect2, dim, 2.0);
                assert_eq!(squared.0.to_bits(), general.0.to_bits());
                assert_eq!(squared.1.to_bits(), general.1.to_bits());
            }
        }
    }

    #[test]
    fn infinite_period_does_not_wrap() {
        let periodic = Periodic::new(&[f64::INFINITY]).unwrap();
        let rect1 = Hyperrectangle::new(&[0.0], &[1.0]);
        let rect2 = Hyperrectangle::new(&[9.0], &[9.5]);

        assert_eq!(periodic.interval_interval_p(&rect1, &rect2, 0, 1.0), (8.0, 9.5));
        assert_eq!(periodic.distance_p(&[0.0], &[9.0], 1.0, f64::INFINITY), 9.0);
    }

    #[test]
    fn point_distance_wraps_each_axis() {
        let periodic = Periodic::new(&[10.0, 10.0]).unwrap();

        let d = periodic.distance_p(&[0.5, 0.0], &[9.5, 3.0], 2.0, f64::INFINITY);
        assert_eq!(d, 1.0 + 9.0);

        let d = periodic.distance_p(&[0.5, 0.0], &[9.5, 3.0], f64::INFINITY, f64::INFINITY);
        assert_eq!(d, 3.0);

        let d = periodic.distance_p(&[0.5, 0.0], &[9.5, 3.0], 2.0, 0.5);
        assert!(d > 0.5);
    }

    #[test]
    fn point_distance_ignores_axes_beyond_the_box() {
        let periodic = Periodic::new(&[10.0]).unwrap();

        let d = periodic.distance_p(&[0.0, 1.0], &[4.0, 2.0], 2.0, f64::INFINITY);
        assert_eq!(d, 16.0);

        let d = periodic.distance_p(&[0.5], &[9.5, 2.0], 1.0, f64::INFINITY);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn wrap_distance_handles_multiple_periods() {
        assert_eq!(wrap_distance(23.0, 10.0, 5.0), 3.0);
        assert_eq!(wrap_distance(-27.0, 10.0, 5.0), 3.0);
        assert_eq!(wrap_distance(-5.0, 10.0, 5.0), 5.0);
    }

    #[test]
    fn chebyshev_takes_largest_axis() {
        let periodic = Periodic::new(&[10.0, 4.0]).unwrap();
        let rect1 = Hyperrectangle::new(&[0.0, 0.0], &[1.0, 1.0]);
        let rect2 = Hyperrectangle::new(&[9.0, 3.5], &[9.5, 3.75]);

        // axis 0: (0.5, 2.0); axis 1: raw (-3.75, -2.5) -> (0.25, 1.5)
        assert_eq!(periodic.rect_rect_p_inf(&rect1, &rect2), (0.5, 2.0));
    }

    #[test]
    fn rejects_non_positive_periods() {
        assert_eq!(
            Periodic::new(&[1.0, 0.0]),
            Err(TrackerError::InvalidBoxSize { axis: 1 })
        );
        assert_eq!(
            Periodic::new(&[f64::NAN]),
            Err(TrackerError::InvalidBoxSize { axis: 0 })
        );
        assert_eq!(
            Periodic::<f64>::from_concatenated(&[1.0, 2.0, 0.5]),
            Err(TrackerError::MalformedBox { len: 3 })
        );
    }

    #[test]
    fn concatenated_layout() {
        let periodic = Periodic::new(&[10.0, 4.0]).unwrap();
        assert_eq!(periodic.as_slice(), &[10.0, 4.0, 5.0, 2.0]);
        assert_eq!(periodic.full(1), 4.0);
        assert_eq!(periodic.half(1), 2.0);

        let same = Periodic::from_concatenated(&[10.0, 4.0, 5.0, 2.0]).unwrap();
        assert_eq!(same, periodic);
        assert_eq!(same.check_dims(2), Ok(()));
        assert_eq!(
            same.check_dims(3),
            Err(TrackerError::BoxDimensionMismatch { expected: 3, got: 2 })
        );
    }
}
