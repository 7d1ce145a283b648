#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # kd-bounds
//!
//! Minimum and maximum Minkowski-distance bounds between pairs of axis-aligned
//! hyperrectangles, maintained incrementally as a k-d tree search descends.
//!
//! This is the pruning oracle for branch-and-bound nearest-neighbour, range and
//! pair-counting searches over a pair of k-d trees: at each node pair the search asks
//! [`RectRectDistanceTracker`] for the current bounds, then pushes a split before
//! descending into a child and pops it again on the way back up. Each push or pop costs
//! O(1) rather than the O(K) of recomputing the bounds from scratch.
//!
//! Distances can be measured in ordinary space ([`Plain`](min_max_dist::Plain)) or in a
//! periodic box ([`Periodic`](min_max_dist::Periodic)), for any Minkowski exponent
//! `p >= 1` including `p = ∞`.
//!
//! ## Usage
//! ```rust
//! use kd_bounds::rectangle::Hyperrectangle;
//! use kd_bounds::tracker::{Direction, Which};
//! use kd_bounds::RectRectDistanceTracker;
//!
//! let query = Hyperrectangle::new(&[0.0, 0.0], &[1.0, 1.0]);
//! let node = Hyperrectangle::new(&[2.0, 0.0], &[4.0, 1.0]);
//!
//! let mut tracker = RectRectDistanceTracker::plain(query, node, 2.0, 0.0, f64::INFINITY)?;
//!
//! // distances are held squared for p = 2
//! assert_eq!(tracker.min_distance(), 1.0);
//! assert_eq!(tracker.max_distance(), 16.0 + 1.0);
//!
//! // descend into the right-hand child of a node splitting the second rectangle at x = 3
//! tracker.push(Which::Second, Direction::Greater, 0, 3.0);
//! assert_eq!(tracker.min_distance(), 4.0);
//! tracker.pop();
//!
//! assert_eq!(tracker.min_distance(), 1.0);
//! # Ok::<(), kd_bounds::error::TrackerError>(())
//! ```

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod distance;
pub mod error;
pub mod min_max_dist;
pub mod rectangle;
#[doc(hidden)]
#[cfg(feature = "test_utils")]
pub mod test_utils;
pub mod tracker;
pub mod traits;

pub use crate::error::TrackerError;
pub use crate::rectangle::Hyperrectangle;
pub use crate::tracker::RectRectDistanceTracker;
