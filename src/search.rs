//! Bounded successor search and the cousin test.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::BinaryTree;

impl BinaryTree {
    /// Smallest value strictly greater than `lower_bound`, or None when no
    /// value qualifies. Visits every node once, breadth-first.
    #[instrument(level = "debug", skip(self))]
    pub fn next_larger(&self, lower_bound: i64) -> Option<i64> {
        let mut closest: Option<i64> = None;
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back(root);
        }

        while let Some(current_idx) = queue.pop_front() {
            if let Some(node) = self.get_node(current_idx) {
                if node.value > lower_bound && closest.map_or(true, |c| node.value < c) {
                    closest = Some(node.value);
                }
                if let Some(left) = node.left {
                    queue.push_back(left);
                }
                if let Some(right) = node.right {
                    queue.push_back(right);
                }
            }
        }

        closest
    }

    /// Two nodes are cousins when they sit at the same depth under different
    /// parents. The root has no parent and is nobody's cousin; an index that
    /// does not resolve in this tree is not a cousin of anything. Identity
    /// is the arena index, never the value.
    #[instrument(level = "debug", skip(self))]
    pub fn are_cousins(&self, a: Index, b: Index) -> bool {
        match (self.locate(a), self.locate(b)) {
            (Some((parent_a, depth_a)), Some((parent_b, depth_b))) => {
                depth_a == depth_b && parent_a != parent_b
            }
            _ => false,
        }
    }

    /// Parent and depth of a node (root at depth 1), by walking the parent
    /// chain. None when the index does not resolve or names the root.
    fn locate(&self, idx: Index) -> Option<(Index, usize)> {
        let node = self.get_node(idx)?;
        let parent = node.parent?;

        let mut depth = 2;
        let mut current = parent;
        while let Some(above) = self.get_node(current).and_then(|n| n.parent) {
            depth += 1;
            current = above;
        }
        Some((parent, depth))
    }
}
