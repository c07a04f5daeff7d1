use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::BinaryTree;
use crate::general::GeneralTree;

/// Conversion into a printable `termtree` representation.
pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root().and_then(|idx| self.get_node(idx).map(|n| (idx, n))) {
            Some((root_idx, root_node)) => {
                let mut tree = Tree::new(root_node.value.to_string());

                fn build_tree(source: &BinaryTree, node_idx: Index, parent_tree: &mut Tree<String>) {
                    if let Some(node) = source.get_node(node_idx) {
                        for child_idx in [node.left, node.right].into_iter().flatten() {
                            if let Some(child) = source.get_node(child_idx) {
                                let mut child_tree = Tree::new(child.value.to_string());
                                build_tree(source, child_idx, &mut child_tree);
                                parent_tree.push(child_tree);
                            }
                        }
                    }
                }

                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl TreeRender for GeneralTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root().and_then(|idx| self.get_node(idx).map(|n| (idx, n))) {
            Some((root_idx, root_node)) => {
                let mut tree = Tree::new(root_node.value.to_string());

                fn build_tree(source: &GeneralTree, node_idx: Index, parent_tree: &mut Tree<String>) {
                    if let Some(node) = source.get_node(node_idx) {
                        for &child_idx in &node.children {
                            if let Some(child) = source.get_node(child_idx) {
                                let mut child_tree = Tree::new(child.value.to_string());
                                build_tree(source, child_idx, &mut child_tree);
                                parent_tree.push(child_tree);
                            }
                        }
                    }
                }

                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
