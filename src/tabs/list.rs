//! Ordered tab list with selection
//!
//! The list is the external collaborator the selection engine addresses
//! into. Insertion order is significant: it defines "next"/"previous" and
//! absolute indices. Two views exist over the same entries:
//!
//! - **all**: every tab, including hidden and pinned ones
//! - **visible**: tabs with `hidden == false`, in the same relative order
//!
//! Every item of the visible view also appears in the all view.

use super::types::{TabEntry, TabId};
use std::num::NonZeroU64;

/// Ordered, mutable list of tabs with a single selected tab
#[derive(Debug, Clone)]
pub struct TabList {
    entries: Vec<TabEntry>,
    selected: Option<TabId>,
    next_id: NonZeroU64,
}

impl TabList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            next_id: NonZeroU64::MIN,
        }
    }

    /// Append a tab and return its id
    ///
    /// The first tab pushed into an empty list becomes the selection, the
    /// way a first opened tab is selected by the surrounding shell.
    pub fn push(&mut self, title: impl Into<String>, url: impl Into<String>) -> TabId {
        let id = TabId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push(TabEntry::new(id, title, url));
        if self.selected.is_none() {
            self.selected = Some(id);
        }
        id
    }

    /// Number of tabs in the all view
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All tabs, in list order
    #[must_use]
    pub fn all(&self) -> &[TabEntry] {
        &self.entries
    }

    /// Visible tabs, in list order
    pub fn visible(&self) -> impl Iterator<Item = &TabEntry> {
        self.entries.iter().filter(|t| !t.hidden)
    }

    /// Number of tabs in the visible view
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    /// Whether a tab with this id is present
    #[must_use]
    pub fn contains(&self, id: TabId) -> bool {
        self.entries.iter().any(|t| t.id == id)
    }

    /// Entry lookup by id
    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&TabEntry> {
        self.entries.iter().find(|t| t.id == id)
    }

    /// Index of a tab in the all view
    #[must_use]
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.entries.iter().position(|t| t.id == id)
    }

    /// Index of a tab in the visible view
    #[must_use]
    pub fn visible_position(&self, id: TabId) -> Option<usize> {
        self.visible().position(|t| t.id == id)
    }

    /// Tab at a visible-view index
    #[must_use]
    pub fn visible_get(&self, index: usize) -> Option<&TabEntry> {
        self.visible().nth(index)
    }

    /// Currently selected tab id, if any
    #[must_use]
    pub const fn selected(&self) -> Option<TabId> {
        self.selected
    }

    /// Currently selected entry, if any
    #[must_use]
    pub fn selected_entry(&self) -> Option<&TabEntry> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select a tab by id; returns false when the tab is not in the list
    pub fn select(&mut self, id: TabId) -> bool {
        if self.contains(id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Set the pinned flag of a tab
    pub fn set_pinned(&mut self, id: TabId, pinned: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|t| t.id == id) {
            entry.pinned = pinned;
        }
    }

    /// Set the hidden flag of a tab
    pub fn set_hidden(&mut self, id: TabId, hidden: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|t| t.id == id) {
            entry.hidden = hidden;
        }
    }

    /// Remove a tab, returning its entry
    ///
    /// Removing the selected tab auto-selects the tab now occupying the
    /// same index (or the new last tab), mirroring what a tab strip does
    /// when no explicit neighbour was chosen beforehand.
    pub fn remove(&mut self, id: TabId) -> Option<TabEntry> {
        let index = self.position(id)?;
        let entry = self.entries.remove(index);
        if self.selected == Some(id) {
            self.selected = self
                .entries
                .get(index)
                .or_else(|| self.entries.last())
                .map(|t| t.id);
        }
        Some(entry)
    }

    /// Move a tab to a new index in the all view (clamped to list bounds)
    pub fn move_to(&mut self, id: TabId, index: usize) {
        if let Some(from) = self.position(id) {
            let entry = self.entries.remove(from);
            let index = index.min(self.entries.len());
            self.entries.insert(index, entry);
        }
    }
}

impl Default for TabList {
    fn default() -> Self {
        Self::new()
    }
}
