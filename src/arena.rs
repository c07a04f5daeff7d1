use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Node of a binary tree stored in the arena.
#[derive(Debug)]
pub struct BinaryNode {
    /// Payload value of this node
    pub value: i64,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Left child
    pub left: Option<Index>,
    /// Right child
    pub right: Option<Index>,
}

impl BinaryNode {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Child slot of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Arena-based binary tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Every node in the arena is reachable from `root`; node identity is the
/// arena index, so duplicate values stay distinguishable.
#[derive(Debug)]
pub struct BinaryTree {
    /// Arena storage for all tree nodes
    arena: Arena<BinaryNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert the root node of an empty tree.
    ///
    /// Replacing an existing root would leave the old subtree resident in
    /// the arena but unreachable, so a second insert is rejected instead.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, value: i64) -> TreeResult<Index> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        let node_idx = self.arena.insert(BinaryNode {
            value,
            parent: None,
            left: None,
            right: None,
        });
        self.root = Some(node_idx);
        Ok(node_idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_left(&mut self, parent: Index, value: i64) -> TreeResult<Index> {
        self.insert_child(parent, value, Side::Left)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_right(&mut self, parent: Index, value: i64) -> TreeResult<Index> {
        self.insert_child(parent, value, Side::Right)
    }

    fn insert_child(&mut self, parent: Index, value: i64, side: Side) -> TreeResult<Index> {
        let slot = {
            let parent_node = self.arena.get(parent).ok_or(TreeError::NodeNotFound)?;
            match side {
                Side::Left => parent_node.left,
                Side::Right => parent_node.right,
            }
        };
        if slot.is_some() {
            return Err(TreeError::SlotOccupied(side));
        }

        let node_idx = self.arena.insert(BinaryNode {
            value,
            parent: Some(parent),
            left: None,
            right: None,
        });
        if let Some(parent_node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => parent_node.left = Some(node_idx),
                Side::Right => parent_node.right = Some(node_idx),
            }
        }
        Ok(node_idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&BinaryNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn value(&self, idx: Index) -> Option<i64> {
        self.arena.get(idx).map(|node| node.value)
    }

    pub fn parent(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|node| node.parent)
    }

    pub fn contains(&self, idx: Index) -> bool {
        self.arena.contains(idx)
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }
}

/// Structural equality: same shape, same values. Arena indices and insertion
/// order do not participate.
impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        subtree_eq(self, self.root, other, other.root)
    }
}

impl Eq for BinaryTree {}

fn subtree_eq(
    a: &BinaryTree,
    a_idx: Option<Index>,
    b: &BinaryTree,
    b_idx: Option<Index>,
) -> bool {
    match (
        a_idx.and_then(|idx| a.get_node(idx)),
        b_idx.and_then(|idx| b.get_node(idx)),
    ) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            x.value == y.value
                && subtree_eq(a, x.left, b, y.left)
                && subtree_eq(a, x.right, b, y.right)
        }
        _ => false,
    }
}

/// Pre-order traversal over `(Index, &BinaryNode)` pairs.
pub struct TreeIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a BinaryNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push right first so the left subtree is visited first
                if let Some(right) = node.right {
                    self.stack.push(right);
                }
                if let Some(left) = node.left {
                    self.stack.push(left);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
