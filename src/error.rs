//! Error types.

use thiserror::Error;

use crate::position::Position;

/// Errors raised while configuring a [`QuadTree`](crate::QuadTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// A leaf must be able to hold at least one value.
    #[error("leaf capacity must be at least 1")]
    ZeroCapacity,

    /// The tree must be allowed to grow below its root.
    #[error("maximum depth must be at least 1")]
    ZeroMaxDepth,
}

/// Result alias for fallible tree construction.
pub type QuadTreeResult<T> = Result<T, QuadTreeError>;

/// Why [`QuadTree::insert`](crate::QuadTree::insert) rejected a value.
///
/// A rejected insert never changes the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InsertError {
    /// The point is not strictly inside the root region.
    #[error("position {0} lies outside the root region")]
    OutOfBounds(Position),

    /// A value with the same coordinates is already stored.
    #[error("a value is already stored at {0}")]
    Duplicate(Position),

    /// The point sits on a quadrant boundary inside the tree, so no leaf
    /// strictly contains it.
    #[error("position {0} lies on a quadrant boundary")]
    Unroutable(Position),
}

impl InsertError {
    /// Position of the rejected value.
    pub fn position(&self) -> Position {
        match *self {
            Self::OutOfBounds(p) | Self::Duplicate(p) | Self::Unroutable(p) => p,
        }
    }
}
