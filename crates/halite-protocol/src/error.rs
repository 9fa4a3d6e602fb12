use std::io;

use halite_core::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("stream closed while waiting for {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("missing {field}")]
    MissingToken { field: &'static str },
    #[error("malformed {field}: {token:?}")]
    InvalidInteger { field: &'static str, token: String },
    #[error("owner runs cover {covered} cells, grid has {expected}")]
    RunOverflow { covered: usize, expected: usize },
    #[error("unexpected trailing token {token:?} after {after}")]
    TrailingToken { after: &'static str, token: String },
    #[error(transparent)]
    Grid(#[from] GridError),
}
