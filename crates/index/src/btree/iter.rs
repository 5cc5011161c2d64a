//! Ordered traversal over a multiway tree.

use super::node::{Node, NodeId};
use alloc::vec::Vec;
use core::iter::FusedIterator;

/// Iterator over `(key, value)` pairs in ascending key order.
///
/// Walks the tree depth-first with an explicit stack of `(node, next slot)`
/// frames, so it holds at most `height + 1` frames at a time.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    /// Reference to the arena of nodes.
    arena: &'a [Node<K, V>],
    /// Path from the root to the node currently being read.
    stack: Vec<(NodeId, usize)>,
    /// Entries not yet yielded.
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Creates an iterator over the subtree rooted at `root`.
    pub(crate) fn new(arena: &'a [Node<K, V>], root: NodeId, height: usize, len: usize) -> Self {
        let mut stack = Vec::with_capacity(height + 1);
        stack.push((root, 0));
        Self {
            arena,
            stack,
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            let frame = self.stack.last_mut()?;
            let (node_id, pos) = *frame;
            frame.1 += 1;

            match &arena[node_id] {
                Node::Leaf(entries) => match entries.get(pos) {
                    Some(entry) => {
                        self.remaining = self.remaining.saturating_sub(1);
                        return Some((&entry.key, &entry.value));
                    }
                    None => {
                        self.stack.pop();
                    }
                },
                Node::Internal(entries) => match entries.get(pos) {
                    Some(entry) => self.stack.push((entry.child, 0)),
                    None => {
                        self.stack.pop();
                    }
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
