//! Node storage for the quadtree.
//!
//! Nodes live in a slot arena and refer to each other by [`NodeId`]. A child
//! owns nothing of its parent: the parent link is only an id, and releasing a
//! slot bumps its generation so an id that outlived its node resolves to
//! nothing instead of to whatever reuses the slot.

use crate::region::Region;

/// Handle to a node in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: usize,
    generation: u32,
}

/// A quadtree node.
///
/// A node is either a leaf (`children` is `None`, `values` holds what is
/// stored here) or internal (`children` holds one id per quadrant, indexed by
/// [`Quadrant::index`](crate::Quadrant::index), and `values` stays empty).
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    region: Region,
    parent: Option<NodeId>,
    children: Option<[NodeId; 4]>,
    values: Vec<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(region: Region, parent: Option<NodeId>) -> Self {
        Self {
            region,
            parent,
            children: None,
            values: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn region(&self) -> &Region {
        &self.region
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub(crate) fn children(&self) -> Option<[NodeId; 4]> {
        self.children
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[inline]
    pub(crate) fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut Vec<T> {
        &mut self.values
    }

    /// Turns this leaf into an internal node, handing back what it stored.
    pub(crate) fn make_internal(&mut self, children: [NodeId; 4]) -> Vec<T> {
        self.children = Some(children);
        std::mem::take(&mut self.values)
    }

    /// Turns this internal node back into an empty leaf, handing back the
    /// ids of the children it dropped.
    pub(crate) fn make_leaf(&mut self) -> Option<[NodeId; 4]> {
        self.children.take()
    }
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Slot arena owning every node of a tree.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Stores a node, reusing a released slot when one is available.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Drops a node and returns it. Any copy of `id` is dead afterwards.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(node)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Number of hops from `id` up to the root, which has depth 0.
    pub(crate) fn depth(&self, id: NodeId) -> Option<usize> {
        let mut node = self.get(id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent() {
            node = self.get(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Every live node, in slot order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.slots.iter().filter_map(|slot| slot.node.as_ref())
    }
}
