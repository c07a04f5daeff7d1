use thiserror::Error;

use crate::arena::Side;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("root already occupied")]
    RootOccupied,

    #[error("node not found in this tree")]
    NodeNotFound,

    #[error("{0:?} child slot already occupied")]
    SlotOccupied(Side),

    #[error("invalid token at position {position}: {token}")]
    InvalidToken { position: usize, token: String },

    #[error("unexpected end of token stream")]
    UnexpectedEnd,

    #[error("trailing tokens after complete tree: {0} left over")]
    TrailingTokens(usize),
}

pub type TreeResult<T> = Result<T, TreeError>;
