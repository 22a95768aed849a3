//! Categories and tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a category or tag: a 5-digit numeric string drawn from a
/// single id-space shared by both collections
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(String);

impl LabelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LabelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LabelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A user-defined category or tag
///
/// The same shape serves both collections; [`LabelKind`] tells them apart
/// where the distinction matters (duplicate checks, error messages).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
}

impl Label {
    pub fn new(id: impl Into<LabelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Which label collection an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Category,
    Tag,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Category => f.write_str("category"),
            LabelKind::Tag => f.write_str("tag"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_id_serializes_as_plain_string() {
        let id = LabelId::new("10001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"10001\"");

        let parsed: LabelId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn label_kind_display() {
        assert_eq!(LabelKind::Category.to_string(), "category");
        assert_eq!(LabelKind::Tag.to_string(), "tag");
    }
}
