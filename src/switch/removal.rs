//! Removal planning
//!
//! Computes, for a removal of `count` tabs anchored at one position, which
//! neighbour should become selected and which index range disappears. Pure
//! arithmetic over a scope list; applying the plan is the controller's job.

use std::ops::Range;

/// Outcome of planning a removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPlan {
    /// Scope index to select before removing, if any neighbour exists
    ///
    /// `None` means the caller keeps whatever the underlying list
    /// auto-selects.
    pub new_selection: Option<usize>,

    /// Scope index range to remove (half-open)
    pub range: Range<usize>,
}

/// Plan the removal of `count` tabs at `start` within a scope of `len` tabs
///
/// `focus_left` removes leftwards (the anchor and its predecessors) and
/// prefers focusing the tab left of the removed block; otherwise the
/// anchor and its successors go and focus moves right. When the preferred
/// neighbour is out of bounds, the adjacent tab on the other side is
/// tried; if that is also out of bounds no selection is proposed.
#[must_use]
pub fn plan(len: usize, start: usize, count: usize, focus_left: bool) -> RemovalPlan {
    let start_i = start as isize;
    let count_i = count as isize;

    let preferred = start_i + if focus_left { -count_i } else { count_i };
    let fallback = start_i + if focus_left { 1 } else { -1 };

    let in_bounds = |i: isize| i >= 0 && (i as usize) < len;
    let new_selection = if in_bounds(preferred) {
        Some(preferred as usize)
    } else if in_bounds(fallback) {
        Some(fallback as usize)
    } else {
        None
    };

    let range = if focus_left {
        let from = (start_i + 1 - count_i).max(0) as usize;
        from..(start + 1).min(len)
    } else {
        start.min(len)..(start + count).min(len)
    };

    RemovalPlan {
        new_selection,
        range,
    }
}
