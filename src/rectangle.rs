//! Axis-aligned hyperrectangles, as used to describe the region of space
//! enclosing every point beneath a k-d tree node.

use crate::distance::minkowski_norm;
use crate::traits::Axis;

/// Axis-aligned hyperrectangle, stored as per-axis lower and upper bounds.
///
/// A rectangle always owns its co-ordinates: cloning produces an independent
/// deep copy. `mins[i] <= maxes[i]` is expected for every axis but not
/// checked; inverted bounds give meaningless (but finite) distances.
///
/// # Examples
///
/// ```rust
/// use kd_bounds::rectangle::Hyperrectangle;
///
/// let rect = Hyperrectangle::new(&[0.0, 0.0], &[2.0, 3.0]);
///
/// assert_eq!(rect.dims(), 2);
/// assert_eq!(rect.volume(), 6.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hyperrectangle<A> {
    mins: Vec<A>,
    maxes: Vec<A>,
}

impl<A: Axis> Hyperrectangle<A> {
    /// Creates a rectangle by copying the provided lower and upper bounds.
    ///
    /// # Panics
    ///
    /// Panics if `mins` and `maxes` have different lengths.
    pub fn new(mins: &[A], maxes: &[A]) -> Self {
        assert_eq!(
            mins.len(),
            maxes.len(),
            "mins and maxes must have the same length"
        );
        Self {
            mins: mins.to_vec(),
            maxes: maxes.to_vec(),
        }
    }

    /// Creates a zero-volume rectangle enclosing only `point`.
    pub fn from_point(point: &[A]) -> Self {
        Self {
            mins: point.to_vec(),
            maxes: point.to_vec(),
        }
    }

    /// Creates the smallest rectangle enclosing every point in `points`.
    ///
    /// Returns an empty (zero-dimensional) rectangle if `points` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kd_bounds::rectangle::Hyperrectangle;
    ///
    /// let rect: Hyperrectangle<f64> =
    ///     Hyperrectangle::bounding(&[[1.0, 5.0], [3.0, -1.0], [2.0, 2.0]]);
    ///
    /// assert_eq!(rect.mins(), &[1.0, -1.0]);
    /// assert_eq!(rect.maxes(), &[3.0, 5.0]);
    /// ```
    pub fn bounding<P: AsRef<[A]>>(points: &[P]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        let mut rect = Self::from_point(first.as_ref());
        for point in rest {
            rect.extend(point.as_ref());
        }
        rect
    }

    fn extend(&mut self, point: &[A]) {
        self.mins.iter_mut().zip(point).for_each(|(bound, &x)| {
            if x < *bound {
                *bound = x;
            }
        });

        self.maxes.iter_mut().zip(point).for_each(|(bound, &x)| {
            if x > *bound {
                *bound = x;
            }
        });
    }

    /// Number of axes.
    #[inline]
    pub fn dims(&self) -> usize {
        self.mins.len()
    }

    /// Lower bounds, one per axis.
    #[inline]
    pub fn mins(&self) -> &[A] {
        &self.mins
    }

    /// Upper bounds, one per axis.
    #[inline]
    pub fn maxes(&self) -> &[A] {
        &self.maxes
    }

    /// Lower bound along `dim`.
    #[inline]
    pub fn min_along(&self, dim: usize) -> A {
        self.mins[dim]
    }

    /// Upper bound along `dim`.
    #[inline]
    pub fn max_along(&self, dim: usize) -> A {
        self.maxes[dim]
    }

    #[inline]
    pub(crate) fn set_min_along(&mut self, dim: usize, value: A) {
        self.mins[dim] = value;
    }

    #[inline]
    pub(crate) fn set_max_along(&mut self, dim: usize, value: A) {
        self.maxes[dim] = value;
    }

    /// Product of the side lengths. An empty rectangle has volume one.
    pub fn volume(&self) -> A {
        self.mins
            .iter()
            .zip(&self.maxes)
            .fold(A::one(), |acc, (&lo, &hi)| acc * (hi - lo))
    }

    /// Splits the rectangle in two at `value` along `dim`, returning the
    /// `(less, greater)` halves.
    #[must_use]
    pub fn split(&self, dim: usize, value: A) -> (Self, Self) {
        let mut less = self.clone();
        less.set_max_along(dim, value);
        let mut greater = self.clone();
        greater.set_min_along(dim, value);
        (less, greater)
    }

    /// Minimum Minkowski p-distance between `point` and any point inside the
    /// rectangle, in unbounded space.
    pub fn min_distance_point(&self, point: &[A], p: A) -> A {
        minkowski_norm(
            self.mins
                .iter()
                .zip(&self.maxes)
                .zip(point)
                .map(|((&lo, &hi), &x)| A::zero().max((lo - x).max(x - hi))),
            p,
        )
    }

    /// Maximum Minkowski p-distance between `point` and any point inside the
    /// rectangle, in unbounded space.
    pub fn max_distance_point(&self, point: &[A], p: A) -> A {
        minkowski_norm(
            self.mins
                .iter()
                .zip(&self.maxes)
                .zip(point)
                .map(|((&lo, &hi), &x)| (hi - x).max(x - lo)),
            p,
        )
    }

    /// Minimum Minkowski p-distance between any point in `self` and any
    /// point in `other`, in unbounded space.
    pub fn min_distance_rectangle(&self, other: &Self, p: A) -> A {
        minkowski_norm(
            (0..self.dims().min(other.dims())).map(|i| {
                A::zero().max((self.mins[i] - other.maxes[i]).max(other.mins[i] - self.maxes[i]))
            }),
            p,
        )
    }

    /// Maximum Minkowski p-distance between any point in `self` and any
    /// point in `other`, in unbounded space.
    pub fn max_distance_rectangle(&self, other: &Self, p: A) -> A {
        minkowski_norm(
            (0..self.dims().min(other.dims()))
                .map(|i| (self.maxes[i] - other.mins[i]).max(other.maxes[i] - self.mins[i])),
            p,
        )
    }
}
