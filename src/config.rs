//! Tree configuration.

use crate::error::{QuadTreeError, QuadTreeResult};

/// Values a leaf holds before it splits, unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 4;

/// Deepest level a leaf may split to, unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Tuning knobs for a [`QuadTree`](crate::QuadTree).
///
/// `capacity` bounds how many values a leaf holds before an insert splits it.
/// `max_depth` bounds how far below the root a split may go; a leaf at that
/// depth keeps accepting values past its capacity instead of splitting.
///
/// # Example
/// ```
/// use region_quadtree::QuadTreeConfig;
///
/// let config = QuadTreeConfig::default().with_capacity(8).with_max_depth(10);
/// assert_eq!(config.capacity(), 8);
/// assert!(config.validate().is_ok());
/// assert!(QuadTreeConfig::default().with_capacity(0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    capacity: usize,
    max_depth: usize,
}

impl QuadTreeConfig {
    /// Creates a configuration with the default capacity and depth limit.
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the leaf capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum split depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Leaf capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum split depth.
    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    /// [`QuadTreeError::ZeroCapacity`] if the capacity is zero,
    /// [`QuadTreeError::ZeroMaxDepth`] if the depth limit is zero.
    pub fn validate(&self) -> QuadTreeResult<()> {
        if self.capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        if self.max_depth == 0 {
            return Err(QuadTreeError::ZeroMaxDepth);
        }
        Ok(())
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
