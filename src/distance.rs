//! Point-to-point Minkowski distances, and conversions between a distance
//! and the `distance**p` form in which bounds are held internally.

use crate::traits::Axis;

/// Returns the Minkowski p-distance to the power `p` between `x` and `y`
/// in unbounded space, comparing the first `min(x.len(), y.len())` axes.
///
/// `p = 2`, `p = 1` and `p = ∞` each take a dedicated path; any other `p`
/// sums `|Δ|^p`. For `p = ∞` the plain Chebyshev distance is returned.
///
/// Accumulation stops as soon as the running total exceeds `upper_bound`, so
/// any result `> upper_bound` only tells you the points are further apart than
/// that. Pass `A::infinity()` to always get the exact value.
///
/// # Examples
///
/// ```rust
/// use kd_bounds::distance::minkowski_distance_p;
///
/// assert_eq!(minkowski_distance_p(&[0.0, 0.0], &[3.0, 4.0], 2.0, f64::INFINITY), 25.0);
/// assert_eq!(minkowski_distance_p(&[0.0, 0.0], &[3.0, 4.0], 1.0, f64::INFINITY), 7.0);
/// assert_eq!(minkowski_distance_p(&[0.0, 0.0], &[3.0, 4.0], f64::INFINITY, f64::INFINITY), 4.0);
/// ```
#[inline]
pub fn minkowski_distance_p<A: Axis>(x: &[A], y: &[A], p: A, upper_bound: A) -> A {
    accumulate_p(x.iter().zip(y).map(|(&a, &b)| a - b), p, upper_bound)
}

/// Sums per-axis differences into a `distance**p`, stopping early once the
/// total exceeds `upper_bound`.
#[inline]
pub(crate) fn accumulate_p<A: Axis, I>(deltas: I, p: A, upper_bound: A) -> A
where
    I: Iterator<Item = A>,
{
    let mut r = A::zero();
    if p == A::two() {
        for delta in deltas {
            r += delta * delta;
            if r > upper_bound {
                return r;
            }
        }
    } else if p == A::infinity() {
        for delta in deltas {
            r = r.max(delta.abs());
            if r > upper_bound {
                return r;
            }
        }
    } else if p == A::one() {
        for delta in deltas {
            r += delta.abs();
            if r > upper_bound {
                return r;
            }
        }
    } else {
        for delta in deltas {
            r += delta.abs().powf(p);
            if r > upper_bound {
                return r;
            }
        }
    }
    r
}

/// Converts a distance into its internal `distance**p` representation.
///
/// Infinite distances and `p = ∞` are left untouched.
#[inline]
pub fn to_internal<A: Axis>(distance: A, p: A) -> A {
    if p == A::two() {
        distance * distance
    } else if p == A::infinity() || distance.is_infinite() {
        distance
    } else {
        distance.powf(p)
    }
}

/// Converts an internal `distance**p` back into a distance.
///
/// Inverse of [`to_internal`], up to floating point rounding.
#[inline]
pub fn from_internal<A: Axis>(distance_p: A, p: A) -> A {
    if p == A::two() {
        distance_p.sqrt()
    } else if p == A::one() || p == A::infinity() || distance_p.is_infinite() {
        distance_p
    } else {
        distance_p.powf(A::one() / p)
    }
}

/// Minkowski norm of a sequence of per-axis separations.
#[inline]
pub(crate) fn minkowski_norm<A: Axis, I>(deltas: I, p: A) -> A
where
    I: Iterator<Item = A>,
{
    from_internal(accumulate_p(deltas, p, A::infinity()), p)
}
