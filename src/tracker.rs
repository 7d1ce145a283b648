//! Rectangle-to-rectangle distance tracker.
//!
//! The unit of work that repeats over and over in a dual-tree search is keeping
//! track of the minimum and maximum distance between the points in two
//! hyperrectangles as those rectangles are successively split. Rather than
//! recompute both bounds over every axis at each node, the tracker adjusts
//! only the contribution of the axis being split, and records enough state on
//! a stack to undo the split exactly when the search returns.
//!
//! ```rust
//! use kd_bounds::rectangle::Hyperrectangle;
//! use kd_bounds::tracker::{RectRectDistanceTracker, SplitPlane, Which};
//!
//! let rect1 = Hyperrectangle::new(&[0.0, 0.0], &[4.0, 4.0]);
//! let rect2 = Hyperrectangle::new(&[6.0, 0.0], &[8.0, 4.0]);
//! let mut tracker =
//!     RectRectDistanceTracker::plain(rect1, rect2, 2.0, 0.0, f64::INFINITY).unwrap();
//!
//! assert_eq!(tracker.min_distance(), 4.0);
//!
//! let node = SplitPlane::new(0, 1.0);
//!
//! tracker.push_less_of(Which::First, &node);
//! assert_eq!(tracker.min_distance(), 25.0);
//! tracker.pop();
//!
//! tracker.push_greater_of(Which::First, &node);
//! assert_eq!(tracker.min_distance(), 4.0);
//! tracker.pop();
//!
//! assert_eq!(tracker.depth(), 0);
//! ```

#[cfg(feature = "tracing")]
use tracing::{event, span, Level};

use crate::distance::to_internal;
use crate::error::TrackerError;
use crate::min_max_dist::Plain;
use crate::rectangle::Hyperrectangle;
use crate::traits::{Axis, MinMaxDist, SplitNode};

const INITIAL_STACK_SIZE: usize = 8;

/// Selects which of the tracker's two rectangles a push narrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Which {
    /// the first rectangle passed at construction
    First,
    /// the second rectangle passed at construction
    Second,
}

/// Selects which child of a split is being descended into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// the child below the split value: narrows the upper bound
    Less,
    /// the child above the split value: narrows the lower bound
    Greater,
}

/// A bare split: an axis and a co-ordinate along it.
///
/// Useful when the caller's tree nodes don't implement [`SplitNode`] themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitPlane<A> {
    split_dim: usize,
    split_val: A,
}

impl<A: Axis> SplitPlane<A> {
    /// Creates a split along `split_dim` at `split_val`.
    pub fn new(split_dim: usize, split_val: A) -> Self {
        Self {
            split_dim,
            split_val,
        }
    }
}

impl<A: Axis> SplitNode<A> for SplitPlane<A> {
    #[inline]
    fn split_dim(&self) -> usize {
        self.split_dim
    }

    #[inline]
    fn split_val(&self) -> A {
        self.split_val
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct StackItem<A> {
    which: Which,
    split_dim: usize,
    min_along_dim: A,
    max_along_dim: A,
    min_distance: A,
    max_distance: A,
}

/// Tracks the minimum and maximum distance between two hyperrectangles while
/// they are narrowed and restored during a depth-first traversal.
///
/// All distances are held as `distance**p` for finite `p`, and as plain
/// distances for `p = ∞`. Pushes and pops must be strictly nested: explore one
/// child fully, pop back, then push for its sibling. For independent parallel
/// branches, [`Clone`] the tracker.
#[derive(Clone, Debug)]
pub struct RectRectDistanceTracker<A, D> {
    strategy: D,
    rect1: Hyperrectangle<A>,
    rect2: Hyperrectangle<A>,
    p: A,
    epsfac: A,
    upper_bound: A,
    min_distance: A,
    max_distance: A,
    stack: Vec<StackItem<A>>,
}

impl<A: Axis> RectRectDistanceTracker<A, Plain> {
    /// Creates a tracker measuring distances in ordinary, unbounded space.
    ///
    /// See [`new_with`](RectRectDistanceTracker::new_with) for the meaning of
    /// the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DimensionMismatch`] if the rectangles have
    /// different dimension counts.
    pub fn plain(
        rect1: Hyperrectangle<A>,
        rect2: Hyperrectangle<A>,
        p: A,
        eps: A,
        upper_bound: A,
    ) -> Result<Self, TrackerError> {
        Self::new_with(Plain, rect1, rect2, p, eps, upper_bound)
    }
}

impl<A: Axis, D: MinMaxDist<A>> RectRectDistanceTracker<A, D> {
    /// Creates a tracker for `rect1` and `rect2`, measured with `strategy`.
    ///
    /// * `p` - the Minkowski exponent, or `A::infinity()` for Chebyshev distance
    /// * `eps` - approximation tolerance; bounds within a factor `1 + eps` are accepted
    /// * `upper_bound` - distance beyond which results are of no interest, possibly infinite
    ///
    /// This is the only step that visits every axis; each push and pop after
    /// it is O(1) for finite `p`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DimensionMismatch`] if the rectangles have
    /// different dimension counts, or [`TrackerError::BoxDimensionMismatch`] if
    /// the strategy cannot measure rectangles of that dimension.
    pub fn new_with(
        strategy: D,
        rect1: Hyperrectangle<A>,
        rect2: Hyperrectangle<A>,
        p: A,
        eps: A,
        upper_bound: A,
    ) -> Result<Self, TrackerError> {
        #[cfg(feature = "tracing")]
        let span = span!(Level::TRACE, "rect_rect_tracker", dims = rect1.dims());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if rect1.dims() != rect2.dims() {
            #[cfg(feature = "tracing")]
            event!(
                Level::WARN,
                rect1 = rect1.dims(),
                rect2 = rect2.dims(),
                "rect1 and rect2 have different dimensions"
            );
            return Err(TrackerError::DimensionMismatch {
                rect1: rect1.dims(),
                rect2: rect2.dims(),
            });
        }
        if let Err(err) = strategy.check_dims(rect1.dims()) {
            #[cfg(feature = "tracing")]
            event!(Level::WARN, %err, "strategy cannot measure these rectangles");
            return Err(err);
        }

        // internally we represent all distances as distance ** p
        let upper_bound = to_internal(upper_bound, p);
        let epsfac = Self::calc_epsfac(p, eps);

        let mut tracker = Self {
            strategy,
            rect1,
            rect2,
            p,
            epsfac,
            upper_bound,
            min_distance: A::zero(),
            max_distance: A::zero(),
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
        };

        if p == A::infinity() {
            let (min, max) = tracker.strategy.rect_rect_p_inf(&tracker.rect1, &tracker.rect2);
            tracker.min_distance = min;
            tracker.max_distance = max;
        } else {
            for dim in 0..tracker.rect1.dims() {
                let (min, max) = tracker.axis_contribution(dim);
                tracker.min_distance += min;
                tracker.max_distance += max;
            }
        }

        #[cfg(feature = "tracing")]
        event!(
            Level::TRACE,
            min_distance = ?tracker.min_distance,
            max_distance = ?tracker.max_distance,
            "initial bounds"
        );

        Ok(tracker)
    }

    fn calc_epsfac(p: A, eps: A) -> A {
        let one = A::one();
        if p == A::two() {
            let tmp = one + eps;
            one / (tmp * tmp)
        } else if eps == A::zero() {
            one
        } else if p == A::infinity() {
            one / (one + eps)
        } else {
            one / (one + eps).powf(p)
        }
    }

    #[inline]
    fn axis_contribution(&self, dim: usize) -> (A, A) {
        if self.p == A::two() {
            self.strategy
                .interval_interval_2(&self.rect1, &self.rect2, dim)
        } else {
            self.strategy
                .interval_interval_p(&self.rect1, &self.rect2, dim, self.p)
        }
    }

    #[inline]
    fn rect_mut(&mut self, which: Which) -> &mut Hyperrectangle<A> {
        match which {
            Which::First => &mut self.rect1,
            Which::Second => &mut self.rect2,
        }
    }

    /// Narrows one rectangle along `split_dim`, as when descending into a child
    /// of the tree node that owns it, and updates the distance bounds.
    ///
    /// [`Direction::Less`] moves the rectangle's upper bound down to
    /// `split_val`; [`Direction::Greater`] moves its lower bound up to it.
    /// Every push must be undone by a [`pop`](RectRectDistanceTracker::pop).
    ///
    /// # Panics
    ///
    /// Panics if `split_dim` is not less than the rectangles' dimension count.
    pub fn push(&mut self, which: Which, direction: Direction, split_dim: usize, split_val: A) {
        if self.stack.len() == self.stack.capacity() {
            let new_size = (self.stack.capacity() * 2).max(INITIAL_STACK_SIZE);
            #[cfg(feature = "tracing")]
            event!(
                Level::DEBUG,
                old_size = self.stack.capacity(),
                new_size,
                "resizing tracker stack"
            );
            self.stack.reserve_exact(new_size - self.stack.len());
        }

        let rect = match which {
            Which::First => &self.rect1,
            Which::Second => &self.rect2,
        };
        self.stack.push(StackItem {
            which,
            split_dim,
            min_along_dim: rect.min_along(split_dim),
            max_along_dim: rect.max_along(split_dim),
            min_distance: self.min_distance,
            max_distance: self.max_distance,
        });

        if self.p == A::infinity() {
            // Chebyshev distance is not a per-axis sum, so recompute over every axis
            self.narrow(which, direction, split_dim, split_val);
            let (min, max) = self.strategy.rect_rect_p_inf(&self.rect1, &self.rect2);
            self.min_distance = min;
            self.max_distance = max;
        } else {
            let (min, max) = self.axis_contribution(split_dim);
            self.min_distance = self.min_distance - min;
            self.max_distance = self.max_distance - max;

            self.narrow(which, direction, split_dim, split_val);

            let (min, max) = self.axis_contribution(split_dim);
            self.min_distance += min;
            self.max_distance += max;
        }
    }

    #[inline]
    fn narrow(&mut self, which: Which, direction: Direction, split_dim: usize, split_val: A) {
        let rect = self.rect_mut(which);
        match direction {
            Direction::Less => rect.set_max_along(split_dim, split_val),
            Direction::Greater => rect.set_min_along(split_dim, split_val),
        }
    }

    /// Pushes for the child of `node` below its split.
    #[inline]
    pub fn push_less_of<N: SplitNode<A>>(&mut self, which: Which, node: &N) {
        self.push(which, Direction::Less, node.split_dim(), node.split_val());
    }

    /// Pushes for the child of `node` above its split.
    #[inline]
    pub fn push_greater_of<N: SplitNode<A>>(&mut self, which: Which, node: &N) {
        self.push(which, Direction::Greater, node.split_dim(), node.split_val());
    }

    /// Undoes the most recent push, restoring the distance bounds and the
    /// narrowed rectangle exactly as they were.
    ///
    /// # Panics
    ///
    /// Panics if there is no push to undo. That can only happen if the
    /// caller's pushes and pops are mismatched.
    #[inline]
    pub fn pop(&mut self) {
        if let Err(err) = self.try_pop() {
            panic!("{err}. This error should never occur.");
        }
    }

    /// As [`pop`](RectRectDistanceTracker::pop), but reports a mismatched pop
    /// instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::StackUnderflow`] if there is no push to undo.
    /// The tracker is left unchanged.
    pub fn try_pop(&mut self) -> Result<(), TrackerError> {
        let item = self.stack.pop().ok_or(TrackerError::StackUnderflow)?;

        self.min_distance = item.min_distance;
        self.max_distance = item.max_distance;

        let rect = self.rect_mut(item.which);
        rect.set_min_along(item.split_dim, item.min_along_dim);
        rect.set_max_along(item.split_dim, item.max_along_dim);

        Ok(())
    }

    /// Minkowski p-distance to the power `p` between two points, measured with
    /// this tracker's strategy and truncated at its upper bound.
    ///
    /// Any result larger than [`upper_bound`](RectRectDistanceTracker::upper_bound)
    /// only means the points are further apart than that.
    #[inline]
    pub fn distance_p(&self, x: &[A], y: &[A]) -> A {
        self.strategy.distance_p(x, y, self.p, self.upper_bound)
    }

    /// Lower bound on the distance between the two rectangles, as `distance**p`.
    #[inline]
    pub fn min_distance(&self) -> A {
        self.min_distance
    }

    /// Upper bound on the distance between the two rectangles, as `distance**p`.
    #[inline]
    pub fn max_distance(&self) -> A {
        self.max_distance
    }

    /// The upper-bound threshold, as `distance**p`.
    #[inline]
    pub fn upper_bound(&self) -> A {
        self.upper_bound
    }

    /// Factor to scale distance comparisons by for an `eps`-approximate search.
    #[inline]
    pub fn epsfac(&self) -> A {
        self.epsfac
    }

    /// The Minkowski exponent.
    #[inline]
    pub fn p(&self) -> A {
        self.p
    }

    /// The first rectangle, as currently narrowed.
    #[inline]
    pub fn rect1(&self) -> &Hyperrectangle<A> {
        &self.rect1
    }

    /// The second rectangle, as currently narrowed.
    #[inline]
    pub fn rect2(&self) -> &Hyperrectangle<A> {
        &self.rect2
    }

    /// The distance-bound strategy in use.
    #[inline]
    pub fn strategy(&self) -> &D {
        &self.strategy
    }

    /// Number of pushes awaiting a pop.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of pushes the stack can hold before it next doubles.
    #[inline]
    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }
}
