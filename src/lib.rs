//! # Region Quadtree - Adaptive Spatial Index for Integer Points
//!
//! A Rust library providing a region quadtree: an in-memory spatial index
//! over 2D points with integer coordinates, for bounded point sets such as
//! game-world entities or map features where region queries dominate.
//!
//! ## Features
//!
//! - **Adaptive Subdivision**: Leaves split into four quadrants once they exceed their capacity
//! - **Merge on Delete**: Four empty sibling leaves collapse back into their parent
//! - **Range Queries**: Find every value strictly inside an axis-aligned region
//! - **Exact Lookup**: Insert, find and remove by coordinates, one value per point
//! - **Any Value Type**: Store anything that implements [`Positioned`]
//!
//! ## Quick Start
//!
//! ```rust
//! use region_quadtree::prelude::*;
//!
//! #[derive(Debug)]
//! struct Unit {
//!     x: i32,
//!     y: i32,
//!     hp: u32,
//! }
//!
//! impl Positioned for Unit {
//!     fn x(&self) -> i32 { self.x }
//!     fn y(&self) -> i32 { self.y }
//! }
//!
//! // The root region hangs down from its origin: x in (0, 500), y in (0, 500)
//! let mut tree = QuadTree::new(Region::new(Position::new(0, 500), 500, 500));
//!
//! assert!(tree.add(Unit { x: 1, y: 499, hp: 10 }));
//! assert!(tree.add(Unit { x: 1, y: 498, hp: 20 }));
//!
//! // Range query over the top-left corner
//! let corner = Region::new(Position::new(0, 500), 20, 20);
//! let found = tree.query(&corner);
//! assert_eq!(found.len(), 2);
//!
//! // Remove everything in the corner
//! tree.remove_in_area(&corner);
//! assert!(tree.query(&tree.region()).is_empty());
//! ```
//!
//! ## How It Works
//!
//! The tree starts as a root already split into four empty leaves. Each value
//! is routed down to the single leaf whose region strictly contains it. When
//! a leaf is full, the next insert splits it and pushes its values one level
//! down. Removing the last value from a group of four sibling leaves turns
//! their parent back into an empty leaf.
//!
//! ## Boundaries
//!
//! All containment is strictly exclusive: a point on the edge of a region is
//! not inside it. Points must lie strictly inside the root region, and a
//! point that sits exactly on a quadrant dividing line cannot be stored
//! ([`InsertError::Unroutable`]). A stored value that falls on a new dividing
//! line when its leaf splits is dropped and logged at `warn` level.
//!
//! ## Concurrency
//!
//! There is no internal locking. Mutating methods take `&mut self`; share a
//! tree across threads behind a mutex, or partition space across several
//! trees.

mod config;
mod error;
mod node;
mod position;
mod quadtree;
mod region;

pub mod prelude;

pub use config::{DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH, QuadTreeConfig};
pub use error::{InsertError, QuadTreeError, QuadTreeResult};
pub use position::{Position, Positioned};
pub use quadtree::QuadTree;
pub use region::{Quadrant, Region};

mod integration_test;
