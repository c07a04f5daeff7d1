//! Analytical queries over binary and general trees.
//!
//! Two independent components:
//!
//! * [`BinaryTree`] — arena-backed binary tree with depth queries, maximum
//!   path sum, bounded successor search, cousin test, pre-order text
//!   serialization and lowest-common-ancestor resolution.
//! * [`GeneralTree`] — arena-backed tree with arbitrary fan-out and
//!   single-pass aggregates (sum, even count, greater-than count).
//!
//! Neither component calls the other. All queries are read-only over the
//! tree they are given; only construction and deserialization build
//! structure. Nodes are addressed by `generational_arena::Index`, so
//! identity queries (cousins, lowest common ancestor) distinguish nodes
//! with duplicate values.

pub mod arena;
pub mod codec;
pub mod errors;
pub mod general;
pub mod tree_traits;
pub mod util;

mod ancestor;
mod depth;
mod path_sum;
mod search;

pub use arena::{BinaryNode, BinaryTree, Side};
pub use errors::{TreeError, TreeResult};
pub use general::{GeneralNode, GeneralTree};
