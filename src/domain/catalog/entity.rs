//! Catalog entry and its identifier

use serde::{Deserialize, Serialize};

/// Entry identifier - either a catalog number or an opaque string key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for EntryId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A catalog item eligible for team membership.
///
/// Entries are immutable once built. Team membership compares entries by
/// [`EntryId`] only, see [`Entry::same_identity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Catalog identifier
    id: EntryId,
    /// Display name
    name: String,
    /// Image reference (usually a URL)
    #[serde(default)]
    image: String,
    /// Category tags in display order
    #[serde(default)]
    tags: Vec<String>,
}

impl Entry {
    /// Create a new entry without tags
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            tags: Vec::new(),
        }
    }

    /// Set the category tags (builder pattern)
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether both entries refer to the same catalog item
    pub fn same_identity(&self, other: &Entry) -> bool {
        self.id == other.id
    }
}
