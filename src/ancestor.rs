//! Lowest common ancestor resolution.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::BinaryTree;

impl BinaryTree {
    /// Deepest node that has both `a` and `b` as descendants, a node
    /// counting as its own descendant. None when either index does not
    /// resolve in this tree.
    #[instrument(level = "debug", skip(self))]
    pub fn lowest_common_ancestor(&self, a: Index, b: Index) -> Option<Index> {
        // The bare recursion would report a false ancestor when only one
        // target exists, so membership is checked up front.
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        self.lca_below(self.root(), a, b)
    }

    fn lca_below(&self, idx: Option<Index>, a: Index, b: Index) -> Option<Index> {
        let current_idx = idx?;
        // Covers lca(a, a) and the case where one target is an ancestor
        // of the other
        if current_idx == a || current_idx == b {
            return Some(current_idx);
        }
        let node = self.get_node(current_idx)?;

        let left = self.lca_below(node.left, a, b);
        let right = self.lca_below(node.right, a, b);

        match (left, right) {
            // One target in each subtree: this node is the ancestor
            (Some(_), Some(_)) => Some(current_idx),
            (Some(found), None) | (None, Some(found)) => Some(found),
            (None, None) => None,
        }
    }
}
