//! Core types for the Shelfmark data model

mod book;
mod label;

pub use book::{Book, BookDraft, BookUpdate};
pub use label::{Label, LabelId, LabelKind};
