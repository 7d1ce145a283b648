//! Error types for kd-bounds.

use thiserror::Error;

/// Errors that can occur when building or driving a
/// [`RectRectDistanceTracker`](crate::tracker::RectRectDistanceTracker).
///
/// All of these are contract violations by the caller rather than runtime
/// conditions to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The two rectangles handed to the tracker have different dimension counts.
    #[error("rect1 and rect2 have different dimensions: {rect1} vs {rect2}")]
    DimensionMismatch {
        /// Dimensions of the first rectangle.
        rect1: usize,
        /// Dimensions of the second rectangle.
        rect2: usize,
    },

    /// The periodic box does not cover the same number of axes as the rectangles.
    #[error("periodic box has {got} axes but the rectangles have {expected}")]
    BoxDimensionMismatch {
        /// Dimensions of the rectangles.
        expected: usize,
        /// Dimensions of the periodic box.
        got: usize,
    },

    /// A box period was zero, negative or NaN.
    #[error("box size along axis {axis} must be positive")]
    InvalidBoxSize {
        /// Offending axis.
        axis: usize,
    },

    /// A concatenated box array did not hold one period and one half-period per axis.
    #[error("concatenated box array has odd length {len}")]
    MalformedBox {
        /// Length of the array supplied.
        len: usize,
    },

    /// `pop` was called without a matching `push`.
    #[error("bad stack size: pop without matching push")]
    StackUnderflow,
}
