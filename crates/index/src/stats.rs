//! Structural statistics for a multiway index.

/// Counters maintained by the index as it grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of successful insertions.
    entries: usize,
    /// Number of node splits, root splits included.
    splits: usize,
    /// Number of nodes allocated.
    nodes: usize,
}

impl IndexStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of successful insertions.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Returns the number of node splits performed so far.
    pub fn splits(&self) -> usize {
        self.splits
    }

    /// Returns the number of nodes in the tree.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub(crate) fn add_entry(&mut self) {
        self.entries += 1;
    }

    pub(crate) fn record_split(&mut self) {
        self.splits += 1;
    }

    pub(crate) fn add_node(&mut self) {
        self.nodes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counters() {
        let mut stats = IndexStats::new();
        assert_eq!(stats, IndexStats::default());

        stats.add_node();
        stats.add_entry();
        stats.add_entry();
        stats.record_split();
        stats.add_node();

        assert_eq!(stats.entries(), 2);
        assert_eq!(stats.splits(), 1);
        assert_eq!(stats.nodes(), 2);
    }
}
