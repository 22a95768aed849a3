//! Error types for Shelfmark Core

use crate::types::{LabelId, LabelKind};
use thiserror::Error;

/// Result type alias using ShelfmarkError
pub type Result<T> = std::result::Result<T, ShelfmarkError>;

/// Top-level error type for all Shelfmark operations
///
/// The first five variants are expected, recoverable rejections of user
/// input; the boundary layer renders them as notifications. The remaining
/// variants are real faults.
#[derive(Debug, Error)]
pub enum ShelfmarkError {
    #[error("title, author and genre are required, and rating must be between 0 and 5")]
    InvalidBook,

    #[error("{kind} '{name}' already exists")]
    DuplicateName { kind: LabelKind, name: String },

    #[error("{kind} '{name}' is still used by {count} book(s)")]
    InUse {
        kind: LabelKind,
        name: String,
        count: usize,
    },

    #[error("book {id} not found")]
    BookNotFound { id: u32 },

    #[error("{kind} {id} not found")]
    LabelNotFound { kind: LabelKind, id: LabelId },

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ShelfmarkError {
    /// True for rejections of user input (duplicate names, in-use labels,
    /// invalid fields, missing entities) as opposed to storage or fetch
    /// faults. Rejections leave state untouched and are safe to retry.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidBook
                | Self::DuplicateName { .. }
                | Self::InUse { .. }
                | Self::BookNotFound { .. }
                | Self::LabelNotFound { .. }
        )
    }
}

/// Errors from the persisted key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the external seed and book-detail sources
#[derive(Debug, Error, Clone)]
pub enum FetchError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed document: {0}")]
    Malformed(String),
}
