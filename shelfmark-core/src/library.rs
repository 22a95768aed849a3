//! Entity lifecycle manager
//!
//! [`Library`] owns the three collections and orchestrates every
//! create/update/delete, keeping books, categories and tags mutually
//! consistent. Each mutation stages the new collection, commits it to the
//! store, and only then replaces in-memory state, so a failed commit leaves
//! the library exactly as it was.

use crate::error::{FetchError, Result, ShelfmarkError};
use crate::seed::{BookDetailSource, SeedSource};
use crate::store::{KeyValueStore, KEY_BOOKS, KEY_CATEGORIES, KEY_TAGS};
use crate::types::{Book, BookDraft, Label, LabelId, LabelKind};
use crate::{idgen, resolve, validate};
use futures::future;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Number of records requested from the book-detail source on first run
pub const BOOK_DETAIL_COUNT: usize = 3;

/// Non-fatal problems encountered during the initial load; the boundary
/// layer renders these as notifications while the app stays usable
#[derive(Debug)]
pub enum LoadWarning {
    /// The seed document could not be fetched; labels start empty
    SeedUnavailable(FetchError),

    /// The external book-detail fetch failed; books start empty
    BookDetailsUnavailable(FetchError),
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::SeedUnavailable(e) => write!(
                f,
                "could not load seed data ({e}); starting with empty categories and tags"
            ),
            LoadWarning::BookDetailsUnavailable(e) => {
                write!(f, "could not load starter books ({e}); starting with an empty shelf")
            }
        }
    }
}

/// The book library: three ordered collections mirrored to a persisted
/// store after every successful mutation
pub struct Library {
    books: Vec<Book>,
    categories: Vec<Label>,
    tags: Vec<Label>,
    store: Arc<dyn KeyValueStore>,
}

fn label_key(kind: LabelKind) -> &'static str {
    match kind {
        LabelKind::Category => KEY_CATEGORIES,
        LabelKind::Tag => KEY_TAGS,
    }
}

impl Library {
    /// Loads initial state, reconciling the persisted store with the seed
    /// and book-detail sources
    ///
    /// The labels path and the books path are independent: each prefers its
    /// persisted snapshot and falls back to one best-effort fetch, and each
    /// commits on its own. Fetch failures are returned as [`LoadWarning`]s,
    /// never errors; store and deserialization faults are errors.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        seed: &dyn SeedSource,
        details: &dyn BookDetailSource,
    ) -> Result<(Self, Vec<LoadWarning>)> {
        let mut warnings = Vec::new();

        let persisted_categories = store.get(KEY_CATEGORIES).await?;
        let persisted_tags = store.get(KEY_TAGS).await?;

        let (categories, tags) = match (persisted_categories, persisted_tags) {
            (Some(categories), Some(tags)) => (
                serde_json::from_str(&categories)?,
                serde_json::from_str(&tags)?,
            ),
            _ => match seed.fetch_seed().await {
                Ok(doc) => {
                    store
                        .set(KEY_CATEGORIES, &serde_json::to_string(&doc.categories)?)
                        .await?;
                    store.set(KEY_TAGS, &serde_json::to_string(&doc.tags)?).await?;
                    tracing::info!(
                        categories = doc.categories.len(),
                        tags = doc.tags.len(),
                        "seeded label collections"
                    );
                    (doc.categories, doc.tags)
                }
                Err(e) => {
                    tracing::warn!("seed fetch failed, starting with empty labels: {e}");
                    warnings.push(LoadWarning::SeedUnavailable(e));
                    (Vec::new(), Vec::new())
                }
            },
        };

        let books = match store.get(KEY_BOOKS).await? {
            Some(data) => serde_json::from_str(&data)?,
            None => {
                // The detail fetches run concurrently and are joined
                // all-or-nothing; a failure leaves books untouched
                let fetches = (0..BOOK_DETAIL_COUNT).map(|index| details.fetch_detail(index));
                match future::try_join_all(fetches).await {
                    Ok(records) => {
                        let books: Vec<Book> = records
                            .into_iter()
                            .enumerate()
                            .map(|(index, detail)| Book {
                                id: index as u32 + 1,
                                title: detail.title,
                                author: detail.author,
                                genre: detail.genre,
                                rating: 0.0,
                                categories: Vec::new(),
                                tags: Vec::new(),
                            })
                            .collect();
                        store.set(KEY_BOOKS, &serde_json::to_string(&books)?).await?;
                        tracing::info!(count = books.len(), "fetched starter books");
                        books
                    }
                    Err(e) => {
                        tracing::warn!("book detail fetch failed, starting with no books: {e}");
                        warnings.push(LoadWarning::BookDetailsUnavailable(e));
                        Vec::new()
                    }
                }
            }
        };

        Ok((
            Self {
                books,
                categories,
                tags,
                store,
            },
            warnings,
        ))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn categories(&self) -> &[Label] {
        &self.categories
    }

    pub fn tags(&self) -> &[Label] {
        &self.tags
    }

    pub fn book(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Looks up a label by exact name within one collection
    pub fn find_label(&self, kind: LabelKind, name: &str) -> Option<&Label> {
        self.labels(kind).iter().find(|label| label.name == name)
    }

    /// Display projection of a book's categories; raw ids never leave the
    /// core
    pub fn category_names(&self, book: &Book) -> String {
        resolve::resolve_names(&book.categories, &self.categories)
    }

    /// Display projection of a book's tags
    pub fn tag_names(&self, book: &Book) -> String {
        resolve::resolve_names(&book.tags, &self.tags)
    }

    /// Id the next added book will receive
    ///
    /// One past the highest existing id, so deleting and re-adding books
    /// can never mint an id that is still referenced anywhere.
    pub fn next_book_id(&self) -> u32 {
        self.books.iter().map(|book| book.id).max().unwrap_or(0) + 1
    }

    /// Adds a book; rejects `InvalidBook` drafts without touching state
    pub async fn add_book(&mut self, draft: BookDraft) -> Result<Book> {
        if !validate::is_book_valid(&draft) {
            return Err(ShelfmarkError::InvalidBook);
        }

        let book = draft.into_book(self.next_book_id());
        let mut next = self.books.clone();
        next.push(book.clone());
        self.persist(KEY_BOOKS, &next).await?;
        self.books = next;

        tracing::debug!(id = book.id, title = %book.title, "added book");
        Ok(book)
    }

    /// Replaces all fields of the book with the given id, preserving its
    /// position in the collection
    pub async fn edit_book(&mut self, id: u32, draft: BookDraft) -> Result<Book> {
        if !validate::is_book_valid(&draft) {
            return Err(ShelfmarkError::InvalidBook);
        }
        let position = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or(ShelfmarkError::BookNotFound { id })?;

        let book = draft.into_book(id);
        let mut next = self.books.clone();
        next[position] = book.clone();
        self.persist(KEY_BOOKS, &next).await?;
        self.books = next;

        tracing::debug!(id, "edited book");
        Ok(book)
    }

    /// Removes a book; nothing references books, so no cleanup runs
    pub async fn delete_book(&mut self, id: u32) -> Result<()> {
        let position = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or(ShelfmarkError::BookNotFound { id })?;

        let mut next = self.books.clone();
        next.remove(position);
        self.persist(KEY_BOOKS, &next).await?;
        self.books = next;

        tracing::debug!(id, "deleted book");
        Ok(())
    }

    pub async fn add_category(&mut self, name: &str) -> Result<Label> {
        self.add_label(LabelKind::Category, name).await
    }

    pub async fn add_tag(&mut self, name: &str) -> Result<Label> {
        self.add_label(LabelKind::Tag, name).await
    }

    pub async fn rename_category(&mut self, id: &LabelId, name: &str) -> Result<Label> {
        self.rename_label(LabelKind::Category, id, name).await
    }

    pub async fn rename_tag(&mut self, id: &LabelId, name: &str) -> Result<Label> {
        self.rename_label(LabelKind::Tag, id, name).await
    }

    pub async fn delete_category(&mut self, id: &LabelId) -> Result<()> {
        self.delete_label(LabelKind::Category, id).await
    }

    pub async fn delete_tag(&mut self, id: &LabelId) -> Result<()> {
        self.delete_label(LabelKind::Tag, id).await
    }

    fn labels(&self, kind: LabelKind) -> &[Label] {
        match kind {
            LabelKind::Category => &self.categories,
            LabelKind::Tag => &self.tags,
        }
    }

    fn labels_mut(&mut self, kind: LabelKind) -> &mut Vec<Label> {
        match kind {
            LabelKind::Category => &mut self.categories,
            LabelKind::Tag => &mut self.tags,
        }
    }

    async fn add_label(&mut self, kind: LabelKind, name: &str) -> Result<Label> {
        if validate::is_name_duplicate(name, self.labels(kind), None) {
            return Err(ShelfmarkError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }

        // Ids are unique across both collections, so both are consulted
        let id = idgen::generate_label_id(&self.categories, &self.tags);
        let label = Label::new(id, name);
        let mut next = self.labels(kind).to_vec();
        next.push(label.clone());
        self.persist(label_key(kind), &next).await?;
        *self.labels_mut(kind) = next;

        tracing::debug!(%kind, id = %label.id, name, "added label");
        Ok(label)
    }

    async fn rename_label(&mut self, kind: LabelKind, id: &LabelId, name: &str) -> Result<Label> {
        let position = self
            .labels(kind)
            .iter()
            .position(|label| &label.id == id)
            .ok_or_else(|| ShelfmarkError::LabelNotFound {
                kind,
                id: id.clone(),
            })?;
        if validate::is_name_duplicate(name, self.labels(kind), Some(id)) {
            return Err(ShelfmarkError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }

        let mut next = self.labels(kind).to_vec();
        next[position].name = name.to_string();
        let label = next[position].clone();
        self.persist(label_key(kind), &next).await?;
        *self.labels_mut(kind) = next;

        tracing::debug!(%kind, id = %label.id, name, "renamed label");
        Ok(label)
    }

    async fn delete_label(&mut self, kind: LabelKind, id: &LabelId) -> Result<()> {
        let label = self
            .labels(kind)
            .iter()
            .find(|label| &label.id == id)
            .ok_or_else(|| ShelfmarkError::LabelNotFound {
                kind,
                id: id.clone(),
            })?;

        let count = validate::reference_count(id, &self.books, kind);
        if count > 0 {
            return Err(ShelfmarkError::InUse {
                kind,
                name: label.name.clone(),
                count,
            });
        }

        let mut next_labels = self.labels(kind).to_vec();
        next_labels.retain(|label| &label.id != id);

        // No book should still hold this id once the in-use check passed;
        // prune anyway so a dangling reference can never survive a delete
        let mut next_books = self.books.clone();
        resolve::prune_references(&mut next_books, id);

        self.persist(label_key(kind), &next_labels).await?;
        self.persist(KEY_BOOKS, &next_books).await?;
        *self.labels_mut(kind) = next_labels;
        self.books = next_books;

        tracing::debug!(%kind, %id, "deleted label");
        Ok(())
    }

    async fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let data = serde_json::to_string(value)?;
        self.store.set(key, &data).await?;
        Ok(())
    }
}
