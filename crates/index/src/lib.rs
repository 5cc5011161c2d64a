//! Multiway Index - an in-memory ordered index built as a multiway search tree.
//!
//! This crate provides:
//!
//! - `MultiwayIndex`: a B-tree variant with configurable fan-out, point lookup
//!   and ordered traversal
//! - `Comparator`: pluggable key ordering, including composite keys
//! - `IndexStats`: counters describing how the tree has grown
//!
//! # Example
//!
//! ```rust
//! use multiway_index::{IndexError, MultiwayIndex};
//!
//! let mut index: MultiwayIndex<u32, &str> = MultiwayIndex::new(4);
//! index.put(30, "order-30").unwrap();
//! index.put(10, "order-10").unwrap();
//! index.put(20, "order-20").unwrap();
//! index.put(40, "order-40").unwrap();
//!
//! // Point query
//! assert_eq!(index.get(&20), Ok(Some(&"order-20")));
//! assert_eq!(index.get(&25), Ok(None));
//!
//! // The fourth key filled the root leaf and split it.
//! assert_eq!(index.height(), 1);
//!
//! // Ordered traversal
//! assert_eq!(
//!     index.serialize(),
//!     vec![&"order-10", &"order-20", &"order-30", &"order-40"]
//! );
//!
//! // Absent keys are rejected.
//! assert!(matches!(index.get(None::<&u32>), Err(IndexError::InvalidArgument(_))));
//! ```

#![no_std]

extern crate alloc;

pub mod btree;
pub mod comparator;
pub mod error;
pub mod stats;

pub use btree::{Iter, MultiwayIndex, DEFAULT_MAX_CHILDREN};
pub use comparator::{Comparator, MultiKeyComparator, Order, SimpleComparator};
pub use error::{IndexError, Result};
pub use stats::IndexStats;
