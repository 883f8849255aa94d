use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The position has no legal move to return (mate, stalemate or a drawn end).
    #[error("no legal move available")]
    NoMoveAvailable,
    #[error("search depth must be positive, got {0}")]
    InvalidDepth(u8),
}
