//! Multiway tree implementation.

use super::iter::Iter;
use super::node::{InternalEntry, LeafEntry, Node, NodeId};
use crate::comparator::{Comparator, SimpleComparator};
use crate::error::{IndexError, Result};
use crate::stats::IndexStats;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use tracing::{debug, trace};

/// Fan-out used when the requested one is below 2.
pub const DEFAULT_MAX_CHILDREN: usize = 4;

/// Indentation added per level by [`MultiwayIndex::debug_dump`].
const DUMP_INDENT: &str = "     ";

/// Outcome of inserting into a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Insertion {
    /// The subtree absorbed the entry.
    NoSplit,
    /// The subtree root overflowed; the parent must adopt this sibling.
    Split(NodeId),
}

/// An ordered index built from fixed-capacity nodes with uniform leaf depth.
///
/// Keys are ordered by the comparator `C`. Duplicate keys are kept: each
/// `put` adds one leaf entry. There is no removal.
#[derive(Debug, Clone)]
pub struct MultiwayIndex<K, V, C = SimpleComparator> {
    /// Arena of all nodes.
    arena: Vec<Node<K, V>>,
    /// Root node ID.
    root: NodeId,
    /// Edges from the root to the leaf level.
    height: usize,
    /// A node splits when it holds this many entries.
    max_children: usize,
    /// Comparator for key ordering.
    comparator: C,
    /// Statistics for this index.
    stats: IndexStats,
}

impl<K: Clone + Ord, V> MultiwayIndex<K, V> {
    /// Creates an empty index in natural ascending key order.
    ///
    /// `max_children` below 2 falls back to [`DEFAULT_MAX_CHILDREN`].
    pub fn new(max_children: usize) -> Self {
        Self::with_comparator(max_children, SimpleComparator::asc())
    }
}

impl<K: Clone + Ord, V> Default for MultiwayIndex<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHILDREN)
    }
}

impl<K: Clone, V, C: Comparator<K>> MultiwayIndex<K, V, C> {
    /// Creates an empty index ordered by a custom comparator.
    pub fn with_comparator(max_children: usize, comparator: C) -> Self {
        let max_children = if max_children < 2 {
            debug!(
                requested = max_children,
                fallback = DEFAULT_MAX_CHILDREN,
                "fan-out below 2, using default"
            );
            DEFAULT_MAX_CHILDREN
        } else {
            max_children
        };

        let mut index = Self {
            arena: Vec::new(),
            root: 0,
            height: 0,
            max_children,
            comparator,
            stats: IndexStats::new(),
        };
        index.root = index.alloc_node(Node::new_leaf(max_children));
        index
    }

    /// Returns the number of successful insertions.
    pub fn len(&self) -> usize {
        self.stats.entries()
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of edges from the root to the leaf level.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the configured fan-out.
    pub fn max_children(&self) -> usize {
        self.max_children
    }

    /// Returns the comparator ordering this index.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the statistics for this index.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Looks up the value stored under `key`.
    ///
    /// Accepts `&K` or `Option<&K>`; `None` is rejected with
    /// [`IndexError::InvalidArgument`]. With duplicate keys, the first
    /// matching entry of the leaf the search lands in is returned.
    pub fn get<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<Option<&V>>
    where
        K: 'k,
    {
        let key = key.into().ok_or(IndexError::absent_key())?;
        Ok(self.search(key))
    }

    /// Returns true if some entry is stored under `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts a value under `key`.
    ///
    /// Accepts `K` or `Option<K>`; `None` is rejected with
    /// [`IndexError::InvalidArgument`] before the tree is touched.
    pub fn put(&mut self, key: impl Into<Option<K>>, value: V) -> Result<()> {
        let key = key.into().ok_or(IndexError::absent_key())?;
        self.insert(key, value);
        Ok(())
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.root, self.height, self.len())
    }

    /// Iterates over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Collects every stored value in ascending key order.
    pub fn serialize(&self) -> Vec<&V> {
        self.values().collect()
    }

    /// Allocates a new node in the arena and returns its ID.
    fn alloc_node(&mut self, node: Node<K, V>) -> NodeId {
        let id = self.arena.len();
        self.arena.push(node);
        self.stats.add_node();
        id
    }

    /// Picks the child slot to descend into: the last entry, or the first
    /// one whose successor's key is greater than `key`.
    #[inline]
    fn route(&self, entries: &[InternalEntry<K>], key: &K) -> usize {
        entries
            .iter()
            .skip(1)
            .take_while(|entry| !self.comparator.is_less(key, &entry.key))
            .count()
    }

    fn search(&self, key: &K) -> Option<&V> {
        let mut current = self.root;
        let mut level = self.height;

        loop {
            match &self.arena[current] {
                Node::Leaf(entries) => {
                    debug_assert_eq!(level, 0);
                    return entries
                        .iter()
                        .find(|entry| self.comparator.is_equal(key, &entry.key))
                        .map(|entry| &entry.value);
                }
                Node::Internal(entries) => {
                    current = entries[self.route(entries, key)].child;
                    level -= 1;
                }
            }
        }
    }

    /// Inserts a key-value pair, growing the tree when the root splits.
    fn insert(&mut self, key: K, value: V) {
        let outcome = self.insert_into(self.root, key, value, self.height);
        self.stats.add_entry();

        if let Insertion::Split(sibling) = outcome {
            self.grow_root(sibling);
        }
    }

    fn insert_into(&mut self, node_id: NodeId, key: K, value: V, level: usize) -> Insertion {
        let (slot, child) = match &self.arena[node_id] {
            Node::Leaf(entries) => {
                debug_assert_eq!(level, 0);
                // After any equal keys, so duplicates keep insertion order.
                let pos = entries
                    .iter()
                    .take_while(|entry| !self.comparator.is_less(&key, &entry.key))
                    .count();
                (pos, None)
            }
            Node::Internal(entries) => {
                let slot = self.route(entries, &key);
                (slot, Some(entries[slot].child))
            }
        };

        match child {
            None => {
                if let Node::Leaf(entries) = &mut self.arena[node_id] {
                    entries.insert(slot, LeafEntry { key, value });
                }
            }
            Some(child) => {
                // Only slot 0 can see a key below its minimum.
                if let Node::Internal(entries) = &mut self.arena[node_id] {
                    if self.comparator.is_less(&key, &entries[slot].key) {
                        entries[slot].key = key.clone();
                    }
                }

                let Insertion::Split(sibling) = self.insert_into(child, key, value, level - 1)
                else {
                    return Insertion::NoSplit;
                };

                let separator = self.arena[sibling].first_key().clone();
                if let Node::Internal(entries) = &mut self.arena[node_id] {
                    entries.insert(
                        slot + 1,
                        InternalEntry {
                            key: separator,
                            child: sibling,
                        },
                    );
                }
            }
        }

        self.split_if_full(node_id, level)
    }

    /// Splits a node that reached the fan-out, keeping `[0, M/2)` in place.
    fn split_if_full(&mut self, node_id: NodeId, level: usize) -> Insertion {
        if self.arena[node_id].len() < self.max_children {
            return Insertion::NoSplit;
        }

        let mid = self.max_children / 2;
        let sibling = self.arena[node_id].split_off(mid, self.max_children);
        let sibling_id = self.alloc_node(sibling);
        self.stats.record_split();

        trace!(
            node = node_id,
            sibling = sibling_id,
            level,
            kept = mid,
            moved = self.arena[sibling_id].len(),
            "split node"
        );

        Insertion::Split(sibling_id)
    }

    /// Replaces the root with a two-entry internal node over the old root
    /// and its new sibling.
    fn grow_root(&mut self, sibling: NodeId) {
        let old_root = self.root;
        let entries = [
            InternalEntry {
                key: self.arena[old_root].first_key().clone(),
                child: old_root,
            },
            InternalEntry {
                key: self.arena[sibling].first_key().clone(),
                child: sibling,
            },
        ];

        self.root = self.alloc_node(Node::new_internal(self.max_children, entries));
        self.height += 1;

        debug!(
            height = self.height,
            entries = self.len(),
            "root split, tree grew one level"
        );
    }
}

impl<K, V, C> MultiwayIndex<K, V, C>
where
    K: Clone + fmt::Debug,
    V: fmt::Debug,
    C: Comparator<K>,
{
    /// Renders keys, values and nesting for debugging.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        // infallible: String sink
        self.write_dump(&mut out).ok();
        out
    }

    /// Writes the debug rendering into `out`.
    ///
    /// Leaf entries print as `key value`, one per line. Every child after the
    /// first is preceded by its separator key in parentheses, and each level
    /// is indented five spaces deeper than its parent.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_node(out, self.root, 0)
    }

    fn write_node<W: Write>(&self, out: &mut W, node_id: NodeId, depth: usize) -> fmt::Result {
        match &self.arena[node_id] {
            Node::Leaf(entries) => {
                for entry in entries {
                    write_indent(out, depth)?;
                    writeln!(out, "{:?} {:?}", entry.key, entry.value)?;
                }
            }
            Node::Internal(entries) => {
                for (j, entry) in entries.iter().enumerate() {
                    if j > 0 {
                        write_indent(out, depth)?;
                        writeln!(out, "({:?})", entry.key)?;
                    }
                    self.write_node(out, entry.child, depth + 1)?;
                }
            }
        }
        Ok(())
    }
}

fn write_indent<W: Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(DUMP_INDENT)?;
    }
    Ok(())
}

impl<'a, K: Clone, V, C: Comparator<K>> IntoIterator for &'a MultiwayIndex<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Clone, V, C: Comparator<K>> Extend<(K, V)> for MultiwayIndex<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Clone + Ord, V> FromIterator<(K, V)> for MultiwayIndex<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut index = Self::default();
        index.extend(iter);
        index
    }
}
