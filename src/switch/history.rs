//! Two-slot selection history
//!
//! Remembers the current tab and the one selected before it (the
//! alternate), for quick toggling. The alternate slot is never purged
//! eagerly when its tab leaves the list; it is masked on read instead.

use crate::tabs::{TabId, TabList};
use std::collections::HashSet;

/// Current/alternate selection pair
#[derive(Debug, Clone, Default)]
pub struct SelectionHistory {
    current: Option<TabId>,
    alternate: Option<TabId>,
}

impl SelectionHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            alternate: None,
        }
    }

    /// The recorded current tab
    #[must_use]
    pub const fn current(&self) -> Option<TabId> {
        self.current
    }

    /// The alternate tab, masked to `None` while it is absent from the list
    ///
    /// Non-destructive: a stale slot keeps its value and reads as `None`
    /// until overwritten.
    #[must_use]
    pub fn alternate(&self, list: &TabList) -> Option<TabId> {
        self.alternate.filter(|&id| list.contains(id))
    }

    /// Explicitly overwrite both slots
    ///
    /// Used to pin the pair across an operation that must not disturb the
    /// alternate (run a command, then restore the pair it started with).
    pub fn record(&mut self, current: Option<TabId>, alternate: Option<TabId>) {
        self.current = current;
        self.alternate = alternate;
    }

    /// Overwrite only the current slot
    ///
    /// Removal pre-selects a neighbour this way so the selection event
    /// that follows looks like a no-op re-selection and keeps the
    /// alternate intact.
    pub(crate) fn set_current(&mut self, id: TabId) {
        self.current = Some(id);
    }

    /// Fold the list's selection into the history (automatic mode)
    ///
    /// The alternate is promoted from the old current slot unless one of
    /// these holds, in which case the existing alternate is kept:
    ///
    /// - the selected tab already equals the recorded current tab
    /// - the recorded current tab has vanished from the list
    /// - the recorded current tab is mid-removal (`removing`)
    ///
    /// The latter two debounce the transient selection events fired while
    /// several tabs are being removed at once; without them every interim
    /// selection would clobber the alternate.
    pub fn note_selected(&mut self, list: &TabList, removing: &HashSet<TabId>) {
        let selected = list.selected();
        let alternate_valid = self.alternate(list).is_some();

        let keep_alternate = selected == self.current
            || (alternate_valid
                && self.current.is_some_and(|c| !list.contains(c)))
            || (alternate_valid && self.current.is_some_and(|c| removing.contains(&c)));

        if keep_alternate {
            self.alternate = self.alternate(list);
        } else {
            self.alternate = self.current;
        }
        self.current = selected;
    }
}
