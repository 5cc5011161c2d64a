//! Key ordering strategies.
//!
//! The index never calls `Ord` directly; every comparison goes through a
//! [`Comparator`], so the same tree can be sorted descending or keyed by a
//! composite of several columns (for example client code, then order date).

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Sort direction for a key or key column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl Order {
    /// Applies this direction to a natural comparison result.
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }
}

/// Defines the total order the index keeps its keys in.
pub trait Comparator<K> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if `a` sorts strictly before `b`.
    #[inline]
    fn is_less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` and `b` occupy the same position.
    #[inline]
    fn is_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// Comparator for keys with a natural `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleComparator {
    order: Order,
}

impl SimpleComparator {
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    pub fn asc() -> Self {
        Self::new(Order::Asc)
    }

    pub fn desc() -> Self {
        Self::new(Order::Desc)
    }

    pub fn order(&self) -> Order {
        self.order
    }
}

impl<K: Ord> Comparator<K> for SimpleComparator {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.order.apply(a.cmp(b))
    }
}

/// Comparator for composite keys stored column-wise in a `Vec`.
///
/// Columns are compared left to right, each with its own [`Order`]. Columns
/// beyond the configured orders use ascending order. When one key is a prefix
/// of the other, the shorter key sorts first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiKeyComparator {
    orders: Vec<Order>,
}

impl MultiKeyComparator {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Creates a comparator for `columns` columns sharing one direction.
    pub fn uniform(columns: usize, order: Order) -> Self {
        Self::new(alloc::vec![order; columns])
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl<K: Ord> Comparator<Vec<K>> for MultiKeyComparator {
    fn compare(&self, a: &Vec<K>, b: &Vec<K>) -> Ordering {
        for (i, (av, bv)) in a.iter().zip(b.iter()).enumerate() {
            let order = self.orders.get(i).copied().unwrap_or_default();
            match order.apply(av.cmp(bv)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        a.len().cmp(&b.len())
    }
}
