//! Multiway tree node definitions.

use alloc::vec::Vec;

/// Node identifier in the tree arena.
pub type NodeId = usize;

/// A stored record at the leaf level.
#[derive(Clone, Debug)]
pub struct LeafEntry<K, V> {
    pub key: K,
    pub value: V,
}

/// A routing entry at an internal level.
///
/// `key` is the smallest key reachable through `child`. The child node is
/// owned by this entry alone.
#[derive(Clone, Debug)]
pub struct InternalEntry<K> {
    pub key: K,
    pub child: NodeId,
}

/// A fixed-capacity node. Entries are kept sorted by key.
#[derive(Clone, Debug)]
pub enum Node<K, V> {
    Leaf(Vec<LeafEntry<K, V>>),
    Internal(Vec<InternalEntry<K>>),
}

impl<K, V> Node<K, V> {
    /// Creates an empty leaf able to hold `capacity` entries.
    pub fn new_leaf(capacity: usize) -> Self {
        Node::Leaf(Vec::with_capacity(capacity))
    }

    /// Creates an internal node from routing entries.
    pub fn new_internal(
        capacity: usize,
        entries: impl IntoIterator<Item = InternalEntry<K>>,
    ) -> Self {
        let mut node = Vec::with_capacity(capacity);
        node.extend(entries);
        Node::Internal(node)
    }

    /// Returns the number of entries in use.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(entries) => entries.len(),
            Node::Internal(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns the smallest key in this node.
    ///
    /// Panics on an empty node; only the initial root leaf is ever empty.
    pub fn first_key(&self) -> &K {
        match self {
            Node::Leaf(entries) => &entries[0].key,
            Node::Internal(entries) => &entries[0].key,
        }
    }

    /// Moves entries `[at, len)` into a new node of the same kind.
    ///
    /// `self` keeps `[0, at)`. Entries are relocated, never copied.
    pub fn split_off(&mut self, at: usize, capacity: usize) -> Self {
        match self {
            Node::Leaf(entries) => {
                let mut right = Vec::with_capacity(capacity);
                right.extend(entries.drain(at..));
                Node::Leaf(right)
            }
            Node::Internal(entries) => {
                let mut right = Vec::with_capacity(capacity);
                right.extend(entries.drain(at..));
                Node::Internal(right)
            }
        }
    }
}
