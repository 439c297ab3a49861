//! Region quadtree over integer points.
//!
//! The root is split as soon as the tree exists, so it is always an internal
//! node. Values live only in leaves. An insert that finds its leaf full splits
//! that leaf into four quadrants and routes on; a removal that empties the
//! last value out of a group of four sibling leaves collapses their parent
//! back into an empty leaf.
//!
//! Routing uses strictly exclusive containment, the same test as
//! [`Region::contains`]. A point on an inner dividing line is therefore
//! strictly inside the root yet inside no leaf: inserting it fails with
//! [`InsertError::Unroutable`], and a stored value that lands on a new
//! dividing line when its leaf splits is dropped from the tree.

use log::{debug, trace, warn};

use crate::config::QuadTreeConfig;
use crate::error::{InsertError, QuadTreeResult};
use crate::node::{Node, NodeArena, NodeId};
use crate::position::{Position, Positioned};
use crate::region::Region;

/// Adaptive quadtree storing values at integer points.
///
/// Values are keyed by their coordinates: at most one value is stored per
/// `(x, y)`. Only points strictly inside the root region can be stored.
///
/// # Example
/// ```
/// use region_quadtree::{Position, QuadTree, Region};
///
/// let mut tree = QuadTree::new(Region::new(Position::new(0, 500), 500, 500));
/// assert!(tree.add(Position::new(1, 499)));
/// assert!(tree.add(Position::new(1, 498)));
/// assert!(!tree.add(Position::new(1, 498)), "duplicate");
///
/// let corner = Region::new(Position::new(0, 500), 20, 20);
/// assert_eq!(tree.query(&corner).len(), 2);
///
/// assert_eq!(tree.remove_in_area(&corner), 2);
/// assert!(tree.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    arena: NodeArena<T>,
    root: NodeId,
    region: Region,
    config: QuadTreeConfig,
    len: usize,
}

impl<T: Positioned> QuadTree<T> {
    /// Creates a tree over `region` with the default configuration
    /// (leaf capacity 4).
    pub fn new(region: Region) -> Self {
        Self::build(region, QuadTreeConfig::default())
    }

    /// Creates a tree over `region` whose leaves hold up to `capacity` values
    /// before splitting.
    ///
    /// # Errors
    /// [`QuadTreeError::ZeroCapacity`](crate::QuadTreeError::ZeroCapacity)
    /// if `capacity` is zero.
    ///
    /// # Example
    /// ```
    /// use region_quadtree::{Position, QuadTree, Region};
    ///
    /// let region = Region::new(Position::new(0, 100), 100, 100);
    /// let tree = QuadTree::<Position>::with_capacity(region, 16).unwrap();
    /// assert_eq!(tree.capacity(), 16);
    /// assert!(QuadTree::<Position>::with_capacity(region, 0).is_err());
    /// ```
    pub fn with_capacity(region: Region, capacity: usize) -> QuadTreeResult<Self> {
        Self::with_config(region, QuadTreeConfig::new().with_capacity(capacity))
    }

    /// Creates a tree over `region` with an explicit configuration.
    ///
    /// # Errors
    /// Whatever [`QuadTreeConfig::validate`] reports.
    pub fn with_config(region: Region, config: QuadTreeConfig) -> QuadTreeResult<Self> {
        config.validate()?;
        Ok(Self::build(region, config))
    }

    fn build(region: Region, config: QuadTreeConfig) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::leaf(region, None));
        let mut tree = Self {
            arena,
            root,
            region,
            config,
            len: 0,
        };
        tree.split(root);
        debug!(
            "created quadtree over {region} (capacity {}, max depth {})",
            config.capacity(),
            config.max_depth()
        );
        tree
    }

    /// Root region.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Values a leaf holds before it splits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Deepest level a leaf may be split to.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.config.max_depth()
    }

    /// Configuration the tree was built with.
    #[inline]
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value`, returning `true` on success.
    ///
    /// Returns `false` and leaves the tree untouched if the point is outside
    /// the root region, already occupied, or on a quadrant boundary. Use
    /// [`insert`](Self::insert) to find out which.
    pub fn add(&mut self, value: T) -> bool {
        self.insert(value).is_ok()
    }

    /// Stores `value`.
    ///
    /// # Errors
    /// - [`InsertError::OutOfBounds`] if the point is not strictly inside the
    ///   root region.
    /// - [`InsertError::Duplicate`] if a value is already stored at the point.
    /// - [`InsertError::Unroutable`] if the point lies on a quadrant boundary.
    ///
    /// # Example
    /// ```
    /// use region_quadtree::{InsertError, Position, QuadTree, Region};
    ///
    /// let mut tree = QuadTree::new(Region::new(Position::new(0, 100), 100, 100));
    /// assert_eq!(tree.insert(Position::new(10, 90)), Ok(()));
    /// assert_eq!(
    ///     tree.insert(Position::new(10, 90)),
    ///     Err(InsertError::Duplicate(Position::new(10, 90)))
    /// );
    /// // x = 50 is the root's vertical dividing line
    /// assert_eq!(
    ///     tree.insert(Position::new(50, 10)),
    ///     Err(InsertError::Unroutable(Position::new(50, 10)))
    /// );
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), InsertError> {
        let at = value.position();
        if !self.region().contains(at) {
            return Err(InsertError::OutOfBounds(at));
        }
        let mut leaf = self.route_from(self.root, at).ok_or(InsertError::Unroutable(at))?;
        if self.find_in_leaf(leaf, at).is_some() {
            return Err(InsertError::Duplicate(at));
        }

        // every split the insert triggers must leave `at` routable
        if !self.routes_through_splits(leaf, at) {
            return Err(InsertError::Unroutable(at));
        }
        while self.is_full(leaf) && self.can_split(leaf) {
            self.split(leaf);
            leaf = self.route_from(leaf, at).ok_or(InsertError::Unroutable(at))?;
        }

        match self.arena.get_mut(leaf) {
            Some(node) => node.values_mut().push(value),
            None => return Err(InsertError::Unroutable(at)),
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the value stored at `value`'s coordinates, returning `true` if
    /// there was one.
    ///
    /// Only the coordinates of `value` are looked at.
    pub fn remove<P: Positioned>(&mut self, value: P) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the value stored at `at`'s coordinates.
    ///
    /// If this empties the last of four sibling leaves, their parent becomes
    /// an empty leaf again. The check looks one level up only, and never
    /// collapses the root.
    pub fn take<P: Positioned>(&mut self, at: P) -> Option<T> {
        let at = at.position();
        if !self.region().contains(at) {
            return None;
        }
        let leaf = self.route_from(self.root, at)?;
        let index = self.find_in_leaf(leaf, at)?;
        let value = self.arena.get_mut(leaf)?.values_mut().remove(index);
        self.len -= 1;
        self.try_merge(leaf);
        Some(value)
    }

    /// Removes every value strictly inside `region` and returns how many
    /// were removed.
    ///
    /// Matches are collected first and then removed one by one.
    pub fn remove_in_area(&mut self, region: &Region) -> usize {
        let targets: Vec<Position> = self
            .query(region)
            .into_iter()
            .map(|value| value.position())
            .collect();
        let mut removed = 0;
        for at in targets {
            if self.take(at).is_some() {
                removed += 1;
            }
        }
        trace!("removed {removed} values inside {region}");
        removed
    }

    /// Returns `true` if a value is stored at `value`'s coordinates.
    pub fn contains<P: Positioned>(&self, value: P) -> bool {
        self.get(value).is_some()
    }

    /// Value stored at `at`'s coordinates.
    pub fn get<P: Positioned>(&self, at: P) -> Option<&T> {
        let at = at.position();
        if !self.region().contains(at) {
            return None;
        }
        let leaf = self.route_from(self.root, at)?;
        let index = self.find_in_leaf(leaf, at)?;
        self.node(leaf).map(|node| &node.values()[index])
    }

    /// All values strictly inside `region`, in no particular order.
    pub fn query(&self, region: &Region) -> Vec<&T> {
        let mut results = Vec::new();
        self.query_into(region, &mut results);
        results
    }

    /// Like [`query`](Self::query), but fills a caller-owned buffer.
    ///
    /// `results` is cleared first, so one buffer can serve many queries.
    ///
    /// # Example
    /// ```
    /// use region_quadtree::{Position, QuadTree, Region};
    ///
    /// let mut tree = QuadTree::new(Region::new(Position::new(0, 100), 100, 100));
    /// for x in [10, 20, 30] {
    ///     tree.add(Position::new(x, 90));
    /// }
    /// let mut results = Vec::new();
    /// tree.query_into(&Region::new(Position::new(0, 100), 25, 20), &mut results);
    /// assert_eq!(results.len(), 2);
    /// tree.query_into(&Region::new(Position::new(60, 40), 5, 5), &mut results);
    /// assert!(results.is_empty());
    /// ```
    pub fn query_into<'a>(&'a self, region: &Region, results: &mut Vec<&'a T>) {
        results.clear();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if !node.region().intersects(region) {
                continue;
            }
            results.extend(node.values().iter().filter(|value| region.contains(*value)));
            if let Some(children) = node.children() {
                stack.extend(children);
            }
        }
    }

    /// Depth of the leaf that `at` routes to, where the root is depth 0.
    ///
    /// `None` if the point is outside the root region or on a boundary.
    pub fn depth_of<P: Positioned>(&self, at: P) -> Option<usize> {
        let at = at.position();
        if !self.region().contains(at) {
            return None;
        }
        self.depth(self.route_from(self.root, at)?)
    }

    /// Iterates over every stored value, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.arena.nodes().flat_map(|node| node.values().iter())
    }

    /// Drops every value and restores the freshly-built shape.
    pub fn clear(&mut self) {
        *self = Self::build(self.region, self.config);
    }

    /// Number of nodes, internal and leaf, including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.arena.nodes().filter(|node| node.is_leaf()).count()
    }

    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// Hops from `id` up to the root.
    pub(crate) fn depth(&self, id: NodeId) -> Option<usize> {
        self.arena.depth(id)
    }

    /// Leaf reached from `start` by descending into whichever child strictly
    /// contains `at`. `None` if some level has no such child.
    pub(crate) fn route_from(&self, start: NodeId, at: Position) -> Option<NodeId> {
        let mut id = start;
        loop {
            let node = self.node(id)?;
            let Some(children) = node.children() else {
                return Some(id);
            };
            id = children
                .into_iter()
                .find(|&child| self.node(child).is_some_and(|c| c.region().contains(at)))?;
        }
    }

    fn region_of(&self, id: NodeId) -> Region {
        self.node(id)
            .map_or_else(|| Region::new(Position::default(), 0, 0), |node| *node.region())
    }

    fn find_in_leaf(&self, leaf: NodeId, at: Position) -> Option<usize> {
        self.node(leaf)?
            .values()
            .iter()
            .position(|value| value.position() == at)
    }

    fn is_full(&self, leaf: NodeId) -> bool {
        self.node(leaf)
            .is_some_and(|node| node.values().len() >= self.config.capacity())
    }

    /// A leaf may split while it is shallower than the depth limit and each
    /// quadrant would still have interior points.
    fn can_split(&self, leaf: NodeId) -> bool {
        self.depth(leaf).is_some_and(|depth| depth < self.config.max_depth())
            && self.region_of(leaf).is_divisible()
    }

    /// Replays, without touching the tree, the chain of splits an insert at
    /// `at` would cause starting from `leaf`. Returns `false` if `at` ends up
    /// on a dividing line at any level of that chain.
    fn routes_through_splits(&self, leaf: NodeId, at: Position) -> bool {
        let Some(node) = self.node(leaf) else {
            return false;
        };
        let Some(mut depth) = self.depth(leaf) else {
            return false;
        };
        let mut region = *node.region();
        let mut held: Vec<Position> = node.values().iter().map(Positioned::position).collect();

        while held.len() >= self.config.capacity()
            && depth < self.config.max_depth()
            && region.is_divisible()
        {
            let Some(next) = region.subdivide().into_iter().find(|q| q.contains(at)) else {
                return false;
            };
            held.retain(|&value| next.contains(value));
            region = next;
            depth += 1;
        }
        true
    }

    /// Turns leaf `id` into an internal node with four fresh leaves and moves
    /// its values down. A value on one of the new dividing lines fits no
    /// child and is dropped.
    fn split(&mut self, id: NodeId) {
        let Some(region) = self.node(id).map(|node| *node.region()) else {
            return;
        };
        let quadrants = region.subdivide();
        let children = quadrants.map(|quadrant| self.arena.alloc(Node::leaf(quadrant, Some(id))));
        let Some(values) = self.arena.get_mut(id).map(|node| node.make_internal(children)) else {
            return;
        };
        trace!("split {region} moving {} values", values.len());

        for value in values {
            let at = value.position();
            let target = quadrants
                .iter()
                .position(|quadrant| quadrant.contains(at))
                .and_then(|slot| self.arena.get_mut(children[slot]));
            match target {
                Some(child) => child.values_mut().push(value),
                None => {
                    warn!("value at {at} lies on a dividing line of {region} and was dropped");
                    self.len -= 1;
                }
            }
        }
    }

    /// Collapses the parent of `leaf` into an empty leaf if `leaf` and all
    /// its siblings are empty leaves. The root is never collapsed.
    fn try_merge(&mut self, leaf: NodeId) {
        let Some(parent) = self.node(leaf).and_then(|node| node.parent()) else {
            return;
        };
        if parent == self.root {
            return;
        }
        let Some(siblings) = self.node(parent).and_then(|node| node.children()) else {
            return;
        };
        let all_empty = siblings.iter().all(|&sibling| {
            self.node(sibling)
                .is_some_and(|node| node.is_leaf() && node.values().is_empty())
        });
        if !all_empty {
            return;
        }

        if let Some(children) = self.arena.get_mut(parent).and_then(|node| node.make_leaf()) {
            for child in children {
                let _released = self.arena.release(child);
            }
            trace!("merged children of {}", self.region_of(parent));
        }
    }
}

impl<T: Positioned> Extend<T> for QuadTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _stored = self.add(value);
        }
    }
}
