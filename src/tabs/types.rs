//! Core tab types
//!
//! These are pure data structures with minimal logic. Tabs are compared by
//! identity (`TabId`), never by contents; the id stays stable while titles,
//! URLs and visibility change underneath it.

use std::fmt;
use std::num::NonZeroU64;

/// Stable identity of a tab
///
/// Ids are handed out by [`super::TabList`] and never reused within a list.
/// Two entries are "the same tab" exactly when their ids are equal, even if
/// every other attribute differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(NonZeroU64);

impl TabId {
    pub(crate) const fn new(raw: NonZeroU64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, for display and diagnostics only
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tab and its addressable attributes
///
/// Owned by the [`super::TabList`]; the selection engine only ever holds
/// `TabId`s or short-lived references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    /// Stable identity within the owning list
    pub id: TabId,

    /// Document title; may be empty for tabs that never loaded
    pub title: String,

    /// Location the tab points at
    pub url: String,

    /// Pinned as an application tab
    pub pinned: bool,

    /// Hidden from the visible view (e.g. belongs to a background group)
    pub hidden: bool,
}

impl TabEntry {
    /// Create an entry with default flags
    #[must_use]
    pub fn new(id: TabId, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            pinned: false,
            hidden: false,
        }
    }

    /// Title as shown to the user; untitled tabs get a placeholder
    #[must_use]
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> TabId {
        TabId::new(NonZeroU64::new(n).unwrap())
    }

    #[test]
    fn test_label_falls_back_for_untitled() {
        let entry = TabEntry::new(id(1), "", "about:blank");
        assert_eq!(entry.label(), "(Untitled)");

        let named = TabEntry::new(id(2), "Docs", "https://example.com/docs");
        assert_eq!(named.label(), "Docs");
    }

    #[test]
    fn test_identity_is_by_id() {
        let a = TabEntry::new(id(1), "Same", "https://example.com");
        let mut b = a.clone();
        b.title = "Renamed".to_string();

        assert_eq!(a.id, b.id);
        assert_ne!(a, b);
    }
}
