//! Error Types
//!
//! Protocol no-ops (boundary moves, vetoes, foreign items) are reported as
//! [`crate::Outcome`] values, not errors. Errors are reserved for direct
//! list manipulation and configuration.

use thiserror::Error;

use crate::item::ItemId;

/// Common result type for list operations
pub type ReorderResult<T> = Result<T, ReorderError>;

/// List-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// The handle does not belong to the list it was used with
    #[error("item {0} is not owned by this list")]
    NotOwned(ItemId),
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("invalid list config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ReorderError {
    fn from(err: serde_json::Error) -> Self {
        ReorderError::Config(err.to_string())
    }
}
