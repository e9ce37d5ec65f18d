//! Item source for the picker.
//!
//! The source owns the full list of selectable items and provides lookup by
//! id. It is read-only once constructed; the selection layer only ever reads
//! from it.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while loading an item source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The items file could not be read.
    #[error("failed to read items file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The items file is not valid JSON.
    #[error("failed to parse items file: {0}")]
    ParseError(#[from] serde_json::Error),

    /// An item has an empty id.
    #[error("item '{0}' has an empty id")]
    EmptyId(String),
}

/// A selectable item.
///
/// Identity is the `id`; `label` is what filtering and display operate on.
/// `avatar` is an optional short badge (initials, an emoji) shown inside the
/// chip for this item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Optional badge rendered ahead of the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Item {
    /// Create a new item without an avatar.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            avatar: None,
        }
    }

    /// Create a new item with an avatar badge.
    pub fn with_avatar(
        id: impl Into<String>,
        label: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            avatar: Some(avatar.into()),
        }
    }
}

/// The full list of selectable items, with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct ItemSource {
    /// Items in their original order.
    items: Vec<Item>,
    /// Index from id to position in `items`.
    by_id: HashMap<String, usize>,
}

impl ItemSource {
    /// Build a source from a list of items.
    ///
    /// Items with an id already seen are dropped; the first occurrence wins.
    /// Items with an empty id are rejected.
    pub fn from_items(items: Vec<Item>) -> Result<Self, SourceError> {
        let mut deduped = Vec::with_capacity(items.len());
        let mut by_id = HashMap::with_capacity(items.len());

        for item in items {
            if item.id.is_empty() {
                return Err(SourceError::EmptyId(item.label));
            }
            if by_id.contains_key(&item.id) {
                warn!(id = %item.id, "duplicate item id, keeping first occurrence");
                continue;
            }
            by_id.insert(item.id.clone(), deduped.len());
            deduped.push(item);
        }

        Ok(Self {
            items: deduped,
            by_id,
        })
    }

    /// Load a source from a JSON file containing an array of items.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let contents = std::fs::read_to_string(path)?;
        let items: Vec<Item> = serde_json::from_str(&contents)?;
        Self::from_items(items)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    /// All items, in source order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the source is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
