//! Pre-order text serialization of binary trees.
//!
//! Grammar: whitespace-separated tokens, one integer per node in pre-order,
//! with [`SENTINEL`] marking every absent child. The empty tree is the
//! single token `#`. Writers emit single spaces; readers accept any
//! whitespace run.

use generational_arena::Index;
use itertools::Itertools;
use tracing::instrument;

use crate::arena::{BinaryTree, Side};
use crate::errors::{TreeError, TreeResult};

/// Marker for an absent child in the token stream. Cannot collide with a
/// value token, which is always an integer.
pub const SENTINEL: &str = "#";

impl BinaryTree {
    /// Encode the tree as a pre-order token string.
    #[instrument(level = "debug", skip(self))]
    pub fn serialize(&self) -> String {
        let mut tokens = Vec::new();
        self.write_subtree(self.root(), &mut tokens);
        tokens.iter().join(" ")
    }

    fn write_subtree(&self, idx: Option<Index>, tokens: &mut Vec<String>) {
        match idx.and_then(|i| self.get_node(i)) {
            Some(node) => {
                tokens.push(node.value.to_string());
                self.write_subtree(node.left, tokens);
                self.write_subtree(node.right, tokens);
            }
            None => tokens.push(SENTINEL.to_string()),
        }
    }

    /// Decode a pre-order token string produced by [`BinaryTree::serialize`].
    ///
    /// Malformed input is rejected as a whole; no partial tree is ever
    /// returned.
    #[instrument(level = "debug")]
    pub fn deserialize(input: &str) -> TreeResult<Self> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let mut tree = Self::new();
        let mut cursor = 0;

        tree.read_subtree(&tokens, &mut cursor, None)?;
        if cursor != tokens.len() {
            return Err(TreeError::TrailingTokens(tokens.len() - cursor));
        }
        Ok(tree)
    }

    /// Consume one subtree starting at `cursor`, attaching it under
    /// `parent` (None builds the root).
    fn read_subtree(
        &mut self,
        tokens: &[&str],
        cursor: &mut usize,
        parent: Option<(Index, Side)>,
    ) -> TreeResult<Option<Index>> {
        let position = *cursor;
        let token = *tokens.get(position).ok_or(TreeError::UnexpectedEnd)?;
        *cursor += 1;

        if token == SENTINEL {
            return Ok(None);
        }
        let value: i64 = token.parse().map_err(|_| TreeError::InvalidToken {
            position,
            token: token.to_string(),
        })?;

        let node_idx = match parent {
            None => self.insert_root(value)?,
            Some((parent_idx, Side::Left)) => self.insert_left(parent_idx, value)?,
            Some((parent_idx, Side::Right)) => self.insert_right(parent_idx, value)?,
        };
        self.read_subtree(tokens, cursor, Some((node_idx, Side::Left)))?;
        self.read_subtree(tokens, cursor, Some((node_idx, Side::Right)))?;
        Ok(Some(node_idx))
    }
}
