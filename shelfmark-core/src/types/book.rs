//! The Book record and its typed field updates

use super::LabelId;
use crate::validate;
use serde::{Deserialize, Serialize};

/// A tracked book
///
/// `categories` and `tags` hold raw label ids; presentation always goes
/// through the resolver, the raw ids are what gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, stable identifier within the books collection
    pub id: u32,

    pub title: String,
    pub author: String,
    pub genre: String,

    /// Personal rating, always within [0, 5]
    pub rating: f32,

    /// Ids of associated categories
    #[serde(default)]
    pub categories: Vec<LabelId>,

    /// Ids of associated tags
    #[serde(default)]
    pub tags: Vec<LabelId>,
}

impl Book {
    /// Returns an editable draft carrying all fields except the id
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            rating: self.rating,
            categories: self.categories.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// An unsaved book: everything but the id, which the lifecycle manager
/// assigns on add
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub rating: f32,
    pub categories: Vec<LabelId>,
    pub tags: Vec<LabelId>,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            ..Self::default()
        }
    }

    /// Applies a single tagged field update
    pub fn apply(&mut self, update: BookUpdate) {
        match update {
            BookUpdate::SetTitle(title) => self.title = title,
            BookUpdate::SetAuthor(author) => self.author = author,
            BookUpdate::SetGenre(genre) => self.genre = genre,
            BookUpdate::SetRating(rating) => self.rating = validate::clamp_rating(rating),
            BookUpdate::SetCategories(ids) => self.categories = ids,
            BookUpdate::SetTags(ids) => self.tags = ids,
        }
    }

    pub(crate) fn into_book(self, id: u32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            rating: self.rating,
            categories: self.categories,
            tags: self.tags,
        }
    }
}

/// A single field mutation on a book draft
///
/// Ratings are clamped to [0, 5] at the point of application, so a draft
/// built purely from updates never carries an out-of-range rating.
#[derive(Debug, Clone, PartialEq)]
pub enum BookUpdate {
    SetTitle(String),
    SetAuthor(String),
    SetGenre(String),
    SetRating(f32),
    SetCategories(Vec<LabelId>),
    SetTags(Vec<LabelId>),
}
