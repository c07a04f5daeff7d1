//! Depth queries over binary trees.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::BinaryTree;

impl BinaryTree {
    /// Number of nodes on the shortest root-to-leaf path. 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn min_depth(&self) -> usize {
        self.root()
            .map_or(0, |root| self.depth_towards(root, usize::min))
    }

    /// Number of nodes on the longest root-to-leaf path. 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        self.root()
            .map_or(0, |root| self.depth_towards(root, usize::max))
    }

    /// Recursive depth with `pick` choosing between the two subtree depths.
    /// A path must end at an actual leaf: a node with one child descends
    /// into that child, never into the missing side.
    fn depth_towards(&self, idx: Index, pick: fn(usize, usize) -> usize) -> usize {
        match self.get_node(idx) {
            Some(node) => match (node.left, node.right) {
                (None, None) => 1,
                (Some(child), None) | (None, Some(child)) => {
                    1 + self.depth_towards(child, pick)
                }
                (Some(left), Some(right)) => {
                    1 + pick(
                        self.depth_towards(left, pick),
                        self.depth_towards(right, pick),
                    )
                }
            },
            None => 0,
        }
    }
}
