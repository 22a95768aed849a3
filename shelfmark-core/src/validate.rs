//! Pure validation and duplication guards
//!
//! Every mutation consults these predicates before touching state; they
//! have no side effects and no knowledge of persistence.

use crate::types::{Book, BookDraft, Label, LabelId, LabelKind};

/// True when a draft is acceptable for add/edit: title, author and genre
/// non-empty after trimming, rating within [0, 5]
pub fn is_book_valid(draft: &BookDraft) -> bool {
    !draft.title.trim().is_empty()
        && !draft.author.trim().is_empty()
        && !draft.genre.trim().is_empty()
        && (0.0..=5.0).contains(&draft.rating)
}

/// Clamps a raw rating into [0, 5]
///
/// Applied at the input boundary on every change, so a displayed value
/// self-corrects immediately. NaN passes through; `is_book_valid` rejects
/// it at submission.
pub fn clamp_rating(raw: f32) -> f32 {
    if raw < 0.0 {
        0.0
    } else if raw > 5.0 {
        5.0
    } else {
        raw
    }
}

/// Case-sensitive exact-match duplicate check within one label collection
///
/// `exclude` skips one id so an edit-in-place can keep its own name.
pub fn is_name_duplicate(name: &str, labels: &[Label], exclude: Option<&LabelId>) -> bool {
    labels
        .iter()
        .filter(|label| exclude.map_or(true, |id| &label.id != id))
        .any(|label| label.name == name)
}

/// True when any book's categories (kind=Category) or tags (kind=Tag)
/// reference the given id
pub fn is_referenced(id: &LabelId, books: &[Book], kind: LabelKind) -> bool {
    reference_count(id, books, kind) > 0
}

/// Number of books referencing the given label id
pub fn reference_count(id: &LabelId, books: &[Book], kind: LabelKind) -> usize {
    books
        .iter()
        .filter(|book| match kind {
            LabelKind::Category => book.categories.contains(id),
            LabelKind::Tag => book.tags.contains(id),
        })
        .count()
}
