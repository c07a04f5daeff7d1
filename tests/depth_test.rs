//! Depth queries over binary trees.

use rstest::rstest;
use rstree::util::testing;
use rstree::BinaryTree;

#[rstest]
fn given_empty_tree_when_measuring_depth_then_both_are_zero() {
    testing::init_test_setup();
    let tree = BinaryTree::new();

    assert_eq!(tree.min_depth(), 0);
    assert_eq!(tree.max_depth(), 0);
}

#[rstest]
fn given_single_node_when_measuring_depth_then_both_are_one() {
    let mut tree = BinaryTree::new();
    tree.insert_root(7).unwrap();

    assert_eq!(tree.min_depth(), 1);
    assert_eq!(tree.max_depth(), 1);
}

#[rstest]
fn given_sample_tree_when_measuring_depth_then_min_two_max_three() {
    // 1 -> (2 -> (4, 5), 3)
    let tree = BinaryTree::deserialize("1 2 4 # # 5 # # 3 # #").unwrap();

    assert_eq!(tree.min_depth(), 2);
    assert_eq!(tree.max_depth(), 3);
}

#[rstest]
fn given_left_chain_when_measuring_min_depth_then_descends_into_existing_child() {
    // 1 -> 2 -> 3, all left children: the missing right side is not a leaf
    // and must not shorten the path
    let tree = BinaryTree::deserialize("1 2 3 # # # #").unwrap();

    assert_eq!(tree.min_depth(), 3);
    assert_eq!(tree.max_depth(), 3);
}

#[rstest]
fn given_right_chain_when_measuring_depth_then_descends_into_existing_child() {
    let tree = BinaryTree::deserialize("1 # 2 # 3 # #").unwrap();

    assert_eq!(tree.min_depth(), 3);
    assert_eq!(tree.max_depth(), 3);
}

#[rstest]
fn given_lopsided_tree_when_measuring_depth_then_min_and_max_differ() {
    // Root with a leaf on the right and a two-node chain on the left
    let tree = BinaryTree::deserialize("1 2 4 # # # 3 # #").unwrap();

    assert_eq!(tree.min_depth(), 2);
    assert_eq!(tree.max_depth(), 3);
}

#[rstest]
#[case("#")]
#[case("7 # #")]
#[case("1 2 4 # # 5 # # 3 # #")]
#[case("1 2 3 # # # #")]
#[case("5 -3 # # 9 # #")]
fn given_any_tree_when_measuring_depth_then_min_never_exceeds_max(#[case] encoded: &str) {
    let tree = BinaryTree::deserialize(encoded).unwrap();

    assert!(tree.min_depth() <= tree.max_depth());
    assert_eq!(tree.min_depth() == 0, tree.is_empty());
    assert_eq!(tree.max_depth() == 0, tree.is_empty());
}
