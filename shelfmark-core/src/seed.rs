//! External data sources: the one-shot seed document and the optional
//! book-detail source consulted on first run

use crate::error::FetchError;
use crate::types::{Book, Label};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result type for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// The seed document shape: default categories, tags and (optionally)
/// books, fetched once when no persisted labels exist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub books: Vec<Book>,

    #[serde(default)]
    pub categories: Vec<Label>,

    #[serde(default)]
    pub tags: Vec<Label>,
}

/// Read-only source of the seed document
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Single best-effort fetch; failure is surfaced to the caller as a
    /// non-fatal warning
    async fn fetch_seed(&self) -> FetchResult<SeedDocument>;
}

/// A book record from the external detail source; unknown fields get
/// defaulted by the loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetail {
    pub title: String,
    pub author: String,
    pub genre: String,
}

/// Read-only source of external book records, fetched one record at a time
/// so the loader can run the fetches concurrently
#[async_trait]
pub trait BookDetailSource: Send + Sync {
    async fn fetch_detail(&self, index: usize) -> FetchResult<BookDetail>;
}

/// Seed source backed by a JSON document on disk
pub struct JsonSeedSource {
    path: PathBuf,
}

impl JsonSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for JsonSeedSource {
    async fn fetch_seed(&self) -> FetchResult<SeedDocument> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Unavailable(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&data).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

/// Built-in book-detail source used by the CLI on first run
pub struct SampleBookDetails;

const SAMPLES: [(&str, &str, &str); 3] = [
    ("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
    ("Dune", "Frank Herbert", "Science Fiction"),
    ("Pride and Prejudice", "Jane Austen", "Romance"),
];

#[async_trait]
impl BookDetailSource for SampleBookDetails {
    async fn fetch_detail(&self, index: usize) -> FetchResult<BookDetail> {
        let (title, author, genre) = SAMPLES
            .get(index)
            .copied()
            .ok_or_else(|| FetchError::Unavailable(format!("no sample record {index}")))?;
        Ok(BookDetail {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
        })
    }
}
