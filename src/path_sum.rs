//! Maximum path sum over binary trees.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::BinaryTree;

impl BinaryTree {
    /// Maximum sum over all simple paths in the tree: any endpoints, no node
    /// visited twice, not required to pass through the root. 0 for an empty
    /// tree.
    #[instrument(level = "debug", skip(self))]
    pub fn max_sum(&self) -> i64 {
        let mut best = 0;
        if let Some(root) = self.root() {
            self.downward_sum(root, &mut best);
        }
        best
    }

    /// Best downward path sum starting at `idx`, clamped at 0 so a negative
    /// subtree never extends an ancestor's path. Folds the node-as-apex sum
    /// (both children plus the node itself) into `best` along the way.
    fn downward_sum(&self, idx: Index, best: &mut i64) -> i64 {
        match self.get_node(idx) {
            Some(node) => {
                let left = node
                    .left
                    .map_or(0, |child| self.downward_sum(child, best));
                let right = node
                    .right
                    .map_or(0, |child| self.downward_sum(child, best));
                *best = (*best).max(node.value + left + right);
                0.max(node.value + left).max(node.value + right)
            }
            None => 0,
        }
    }
}
