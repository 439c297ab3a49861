//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use region_quadtree::prelude::*;
//! ```

pub use crate::{InsertError, Position, Positioned, QuadTree, QuadTreeConfig, Region};
