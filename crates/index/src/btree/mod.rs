//! Multiway search tree index.
//!
//! Nodes live in an arena and are split when they reach the configured
//! fan-out. The tree only grows at the root, so every leaf stays at the same
//! depth.

mod iter;
mod node;
mod tree;

pub use iter::Iter;
pub use node::{InternalEntry, LeafEntry, Node, NodeId};
pub use tree::{MultiwayIndex, DEFAULT_MAX_CHILDREN};
