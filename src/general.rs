//! General (N-ary) tree with aggregate queries.
//!
//! Independent of the binary-tree component: the two share no code beyond
//! the common error enum.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Node of a general tree: a value and an ordered list of children.
#[derive(Debug)]
pub struct GeneralNode {
    /// Payload value of this node
    pub value: i64,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in insertion order
    pub children: Vec<Index>,
}

impl GeneralNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based tree with arbitrary fan-out.
#[derive(Debug)]
pub struct GeneralTree {
    /// Arena storage for all tree nodes
    arena: Arena<GeneralNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for GeneralTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneralTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert the root node of an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, value: i64) -> TreeResult<Index> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        let node_idx = self.arena.insert(GeneralNode {
            value,
            parent: None,
            children: Vec::new(),
        });
        self.root = Some(node_idx);
        Ok(node_idx)
    }

    /// Append a child under `parent`; children keep insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: Index, value: i64) -> TreeResult<Index> {
        if !self.arena.contains(parent) {
            return Err(TreeError::NodeNotFound);
        }
        let node_idx = self.arena.insert(GeneralNode {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(node_idx);
        }
        Ok(node_idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&GeneralNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> GeneralTreeIterator<'_> {
        GeneralTreeIterator::new(self)
    }

    /// Sum of every node value in the tree. 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn sum_values(&self) -> i64 {
        self.iter().map(|(_, node)| node.value).sum()
    }

    /// Number of nodes with an even value. 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn count_evens(&self) -> usize {
        self.iter().filter(|(_, node)| node.value % 2 == 0).count()
    }

    /// Number of nodes with a value strictly greater than `lower_bound`.
    /// 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn num_greater(&self, lower_bound: i64) -> usize {
        self.iter()
            .filter(|(_, node)| node.value > lower_bound)
            .count()
    }
}

/// Pre-order traversal over `(Index, &GeneralNode)` pairs.
pub struct GeneralTreeIterator<'a> {
    tree: &'a GeneralTree,
    stack: Vec<Index>,
}

impl<'a> GeneralTreeIterator<'a> {
    fn new(tree: &'a GeneralTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for GeneralTreeIterator<'a> {
    type Item = (Index, &'a GeneralNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
