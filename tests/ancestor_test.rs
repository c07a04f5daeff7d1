//! Lowest common ancestor resolution.

use generational_arena::Index;
use rstest::rstest;
use rstree::util::testing;
use rstree::BinaryTree;

/// Index of the first node carrying `value`, via pre-order traversal.
fn node_with_value(tree: &BinaryTree, value: i64) -> Index {
    tree.iter()
        .find(|(_, node)| node.value == value)
        .map(|(idx, _)| idx)
        .expect("value present in tree")
}

fn sample_tree() -> BinaryTree {
    // 1 -> (2 -> (4, 5), 3)
    BinaryTree::deserialize("1 2 4 # # 5 # # 3 # #").unwrap()
}

#[rstest]
fn given_siblings_when_resolving_lca_then_returns_their_parent() {
    testing::init_test_setup();
    let tree = sample_tree();
    let four = node_with_value(&tree, 4);
    let five = node_with_value(&tree, 5);
    let two = node_with_value(&tree, 2);

    assert_eq!(tree.lowest_common_ancestor(four, five), Some(two));
}

#[rstest]
fn given_nodes_in_different_subtrees_when_resolving_lca_then_returns_root() {
    let tree = sample_tree();
    let four = node_with_value(&tree, 4);
    let three = node_with_value(&tree, 3);

    assert_eq!(tree.lowest_common_ancestor(four, three), tree.root());
}

#[rstest]
fn given_ancestor_and_descendant_when_resolving_lca_then_returns_the_ancestor() {
    let tree = sample_tree();
    let two = node_with_value(&tree, 2);
    let four = node_with_value(&tree, 4);

    assert_eq!(tree.lowest_common_ancestor(two, four), Some(two));
    assert_eq!(tree.lowest_common_ancestor(four, two), Some(two));
}

#[rstest]
fn given_identical_nodes_when_resolving_lca_then_returns_the_node_itself() {
    let tree = sample_tree();
    let five = node_with_value(&tree, 5);

    assert_eq!(tree.lowest_common_ancestor(five, five), Some(five));
}

#[rstest]
fn given_duplicate_values_when_resolving_lca_then_identity_decides() {
    // Both leaves carry the value 2; the indices keep them apart
    let tree = BinaryTree::deserialize("1 2 # # 2 # #").unwrap();
    let root = tree.root().unwrap();
    let left = tree.get_node(root).unwrap().left.unwrap();
    let right = tree.get_node(root).unwrap().right.unwrap();

    assert_eq!(tree.lowest_common_ancestor(left, right), Some(root));
    assert_eq!(tree.lowest_common_ancestor(left, left), Some(left));
}

#[rstest]
fn given_unresolvable_index_when_resolving_lca_then_returns_none() {
    let big = sample_tree();
    let deep_idx = node_with_value(&big, 3);

    let small = BinaryTree::deserialize("1 2 # # 3 # #").unwrap();
    let resident = node_with_value(&small, 2);

    // Never a false positive: the resident node alone must not be reported
    assert_eq!(small.lowest_common_ancestor(resident, deep_idx), None);
    assert_eq!(small.lowest_common_ancestor(deep_idx, resident), None);
}

#[rstest]
fn given_empty_tree_when_resolving_lca_then_returns_none() {
    let donor = sample_tree();
    let a = node_with_value(&donor, 4);
    let b = node_with_value(&donor, 5);

    let empty = BinaryTree::new();
    assert_eq!(empty.lowest_common_ancestor(a, b), None);
}
