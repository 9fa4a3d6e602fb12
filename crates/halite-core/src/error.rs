use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be non-empty (got {width}x{height})")]
    Empty { width: u16, height: u16 },

    #[error("site count mismatch: expected {expected} for the grid, got {actual}")]
    SiteCount { expected: usize, actual: usize },
}
