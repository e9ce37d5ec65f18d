//! Selection state for the tag input.
//!
//! Owns the ordered set of selected items, the current filter text, and the
//! key of the most recently committed item. The candidate list is derived:
//! every source item that is not selected and whose label matches the filter.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::source::{Item, ItemSource};

/// Notification emitted when the selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// An item was added to the selection (item id).
    Inserted(String),
    /// An item was removed from the selection (item id).
    Cleared(String),
}

/// The selection controller.
///
/// Selected items keep their insertion order and never repeat. The filter
/// text here always mirrors the live text-input value; the widget that owns
/// both keeps them in lockstep.
#[derive(Debug)]
pub struct Selection {
    /// The item source; read-only.
    source: ItemSource,
    /// Selected items in insertion order.
    selected: Vec<Item>,
    /// Current filter text.
    filter_text: String,
    /// Id of the last committed item, cleared when the filter is emptied.
    pending_key: Option<String>,
}

impl Selection {
    /// Create an empty selection over the given source.
    pub fn new(source: ItemSource) -> Self {
        Self {
            source,
            selected: Vec::new(),
            filter_text: String::new(),
            pending_key: None,
        }
    }

    /// Create a selection pre-seeded with the given ids.
    ///
    /// Unknown ids and repeats are skipped.
    pub fn with_preselected(source: ItemSource, ids: &[String]) -> Self {
        let mut selection = Self::new(source);
        for id in ids {
            if let Some(item) = selection.source.get(id) {
                if !selection.is_selected(&item.id) {
                    selection.selected.push(item.clone());
                }
            }
        }
        selection
    }

    /// Select an item by id.
    ///
    /// Appends the item to the selection, clears the filter text, and records
    /// the id as pending. Returns `None` (and changes nothing) when the id is
    /// empty, unknown, or already selected.
    pub fn select(&mut self, id: &str) -> Option<SelectionEvent> {
        if id.is_empty() || self.is_selected(id) {
            return None;
        }

        let item = self.source.get(id)?.clone();
        self.selected.push(item);
        self.filter_text.clear();
        self.pending_key = Some(id.to_string());
        Some(SelectionEvent::Inserted(id.to_string()))
    }

    /// Remove an item by id.
    ///
    /// Returns `None` (and changes nothing) when the id is empty or not
    /// currently selected.
    pub fn remove(&mut self, id: &str) -> Option<SelectionEvent> {
        if id.is_empty() {
            return None;
        }

        let pos = self.selected.iter().position(|item| item.id == id)?;
        self.selected.remove(pos);
        Some(SelectionEvent::Cleared(id.to_string()))
    }

    /// Set the filter text.
    ///
    /// An empty value also clears the pending key; a non-empty value leaves
    /// it untouched.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        if self.filter_text.is_empty() {
            self.pending_key = None;
        }
    }

    /// The current filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Id of the last committed item, if any.
    pub fn pending_key(&self) -> Option<&str> {
        self.pending_key.as_deref()
    }

    /// The selected items, in insertion order.
    pub fn selected(&self) -> &[Item] {
        &self.selected
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Check whether an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|item| item.id == id)
    }

    /// The selected ids, in insertion order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().map(|item| item.id.clone()).collect()
    }

    /// Look up an item in the source by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.source.get(id)
    }

    /// The derived candidate list: unselected items whose label matches the
    /// filter text. Recomputed on every call; an empty filter matches all
    /// unselected items.
    pub fn candidates(&self) -> Vec<&Item> {
        let needle = fold(&self.filter_text);
        self.source
            .items()
            .iter()
            .filter(|item| !self.is_selected(&item.id))
            .filter(|item| needle.is_empty() || fold(&item.label).contains(&needle))
            .collect()
    }

    /// Number of current candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates().len()
    }
}

/// Fold a string for matching: strip diacritics, then lowercase.
///
/// NFD decomposition pulls combining marks out of precomposed characters so
/// that dropping the marks leaves the base letters.
fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
