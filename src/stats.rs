/// A snapshot of the structural metrics of a tree.
///
/// # Examples
/// ```
/// use search_trees::avl_tree::AvlSet;
/// use search_trees::OrderedSet;
///
/// let set: AvlSet<u32> = (1..=5).collect();
/// let stats = set.stats();
/// assert_eq!(stats.len, 5);
/// assert_eq!(stats.depth, 3);
/// assert_eq!(stats.optimal_depth(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of keys stored in the tree.
    pub len: usize,
    /// Number of nodes on the longest root-to-leaf path.
    pub depth: usize,
}

impl TreeStats {
    /// Returns the smallest depth any binary tree holding `len` keys can have.
    pub fn optimal_depth(&self) -> usize {
        let mut depth = 0;
        let mut capacity = 0usize;
        while capacity < self.len {
            capacity = capacity.saturating_mul(2).saturating_add(1);
            depth += 1;
        }
        depth
    }

    /// Returns the ratio of the actual depth to the optimal depth. An empty tree has a ratio of
    /// `1.0`.
    pub fn depth_ratio(&self) -> f64 {
        match self.optimal_depth() {
            0 => 1.0,
            optimal => self.depth as f64 / optimal as f64,
        }
    }
}
