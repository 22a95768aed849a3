//! Persisted key-value store abstraction
//!
//! The store holds one serialized snapshot per collection; every write is a
//! complete overwrite of that key, never a partial merge.

use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Store key for the books collection
pub const KEY_BOOKS: &str = "books";
/// Store key for the categories collection
pub const KEY_CATEGORIES: &str = "categories";
/// Store key for the tags collection
pub const KEY_TAGS: &str = "tags";

/// Abstract persisted text store, keyed by collection name
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the snapshot stored under `key`, or None if absent
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the snapshot stored under `key`
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// File-backed store: one `<key>.json` file per key under a root directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        // Write to a temp file then rename so a crash never leaves a
        // half-written snapshot
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, value).await?;
        tokio::fs::rename(&temp_path, &path).await?;
        Ok(())
    }
}

/// In-memory store (for testing)
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
