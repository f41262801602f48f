//! Spec-to-index resolution
//!
//! Position arithmetic runs over the visible view starting from the
//! selected tab's visible position. Out-of-range results either wrap
//! (euclidean modulo over the visible length) or clamp to the ends.
//! The resolved visible position is then re-mapped to the index of the
//! same tab in the all view.

use super::error::ResolveError;
use super::spec::IndexSpec;
use crate::tabs::{TabEntry, TabList};

/// Resolve a parsed spec to an all-view index
///
/// `offset` shifts absolute specs only; relative specs are anchored at the
/// current position and `""`/`"$"` ignore it. Tab handles bypass position
/// arithmetic and resolve directly, even over an empty visible view.
///
/// # Errors
///
/// - [`ResolveError::EmptyList`] when the visible view is empty
/// - [`ResolveError::NotFound`] when a handle has left the list, or the
///   current position is needed but nothing visible is selected
pub fn resolve(
    list: &TabList,
    spec: &IndexSpec,
    wrap: bool,
    offset: isize,
) -> Result<usize, ResolveError> {
    let visible: Vec<&TabEntry> = list.visible().collect();
    let len = visible.len() as isize;

    let position = match *spec {
        IndexSpec::Handle(id) => {
            return list
                .position(id)
                .ok_or_else(|| ResolveError::NotFound(format!("tab {id}")));
        }
        _ if visible.is_empty() => return Err(ResolveError::EmptyList),
        IndexSpec::Current => current_position(list, &visible)?,
        IndexSpec::Last => len - 1,
        IndexSpec::Absolute(n) => n as isize + offset,
        IndexSpec::Relative(delta) => current_position(list, &visible)? + delta,
    };

    let position = if position >= len {
        if wrap { position.rem_euclid(len) } else { len - 1 }
    } else if position < 0 {
        if wrap { position.rem_euclid(len) } else { 0 }
    } else {
        position
    };

    let entry = visible[position as usize];
    list.position(entry.id)
        .ok_or_else(|| ResolveError::NotFound(format!("tab {}", entry.id)))
}

/// Parse and resolve a textual spec in one step
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] for malformed specs in addition to
/// the conditions of [`resolve`].
pub fn resolve_spec(
    list: &TabList,
    spec: &str,
    wrap: bool,
    offset: isize,
) -> Result<usize, ResolveError> {
    resolve(list, &spec.parse()?, wrap, offset)
}

fn current_position(list: &TabList, visible: &[&TabEntry]) -> Result<isize, ResolveError> {
    let selected = list
        .selected()
        .ok_or_else(|| ResolveError::NotFound("current tab".to_string()))?;
    visible
        .iter()
        .position(|t| t.id == selected)
        .map(|p| p as isize)
        .ok_or_else(|| ResolveError::NotFound("current tab".to_string()))
}
