//! CLI command implementations

mod book;
mod label;
mod list;

pub use book::{add, delete, edit};
pub use label::{label, LabelAction};
pub use list::list;

use anyhow::Result;
use shelfmark_core::{FileStore, JsonSeedSource, Library, SampleBookDetails};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loaded application state shared by all commands
pub struct Context {
    pub library: Library,
}

impl Context {
    /// Opens the persisted store under `data_dir` and loads the library,
    /// printing any non-fatal load warnings as notifications
    pub async fn load(data_dir: &str, seed: Option<&str>) -> Result<Self> {
        tracing::debug!(data_dir, "opening library");
        let store = Arc::new(FileStore::new(data_dir));
        let seed_path = seed
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(data_dir).join("seed.json"));
        let seed_source = JsonSeedSource::new(seed_path);

        let (library, warnings) = Library::load(store, &seed_source, &SampleBookDetails).await?;
        for warning in &warnings {
            eprintln!("note: {warning}");
        }

        Ok(Self { library })
    }
}
