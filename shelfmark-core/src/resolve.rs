//! Association resolution
//!
//! Books store raw label ids; these helpers project them into display
//! strings and strip dangling references when a label disappears. The
//! projection is derived on demand and never persisted.

use crate::types::{Book, Label, LabelId};

/// Resolves label ids to a comma-separated display string
///
/// Ids with no matching label are silently dropped rather than rendered
/// as gaps.
pub fn resolve_names(ids: &[LabelId], labels: &[Label]) -> String {
    ids.iter()
        .filter_map(|id| labels.iter().find(|label| &label.id == id))
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Removes a deleted label id from every book's category and tag sets
pub fn prune_references(books: &mut [Book], removed: &LabelId) {
    for book in books {
        book.categories.retain(|id| id != removed);
        book.tags.retain(|id| id != removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookDraft;

    fn labels() -> Vec<Label> {
        vec![
            Label::new("10001", "Fiction"),
            Label::new("10002", "Classics"),
        ]
    }

    #[test]
    fn resolves_names_in_id_order() {
        let ids = vec![LabelId::new("10002"), LabelId::new("10001")];
        assert_eq!(resolve_names(&ids, &labels()), "Classics, Fiction");
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let ids = vec![
            LabelId::new("99999"),
            LabelId::new("10001"),
            LabelId::new("55555"),
        ];
        assert_eq!(resolve_names(&ids, &labels()), "Fiction");
    }

    #[test]
    fn empty_ids_resolve_to_empty_string() {
        assert_eq!(resolve_names(&[], &labels()), "");
    }

    #[test]
    fn prune_strips_id_from_both_sets() {
        let removed = LabelId::new("10001");
        let mut book = BookDraft::new("Dune", "Herbert", "Sci-Fi").into_book(1);
        book.categories = vec![removed.clone(), LabelId::new("10002")];
        book.tags = vec![removed.clone()];
        let mut books = vec![book];

        prune_references(&mut books, &removed);

        assert_eq!(books[0].categories, vec![LabelId::new("10002")]);
        assert!(books[0].tags.is_empty());
    }
}
