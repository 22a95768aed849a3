//! Shelfmark Core Library
//!
//! This crate provides the data synchronization and consistency layer for
//! the Shelfmark book tracker: loading initial state from a persisted store
//! with a seed-document fallback, validating and de-duplicating mutations,
//! and keeping books and their category/tag associations referentially
//! intact. Presentation is a separate concern that calls into [`Library`].

pub mod error;
pub mod idgen;
pub mod library;
pub mod resolve;
pub mod seed;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{FetchError, Result, ShelfmarkError, StoreError};
pub use library::{Library, LoadWarning, BOOK_DETAIL_COUNT};
pub use seed::{BookDetail, BookDetailSource, JsonSeedSource, SampleBookDetails, SeedDocument, SeedSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{Book, BookDraft, BookUpdate, Label, LabelId, LabelKind};
