//! Query resolution against the live list
//!
//! [`matches`] re-evaluates the list every time it is called; the returned
//! iterator is lazy and finite but never a snapshot held across mutations.
//! Resolution priority, first rule that applies wins:
//!
//! 1. no pattern, no count: the current tab
//! 2. no pattern, count: the (count-1)-indexed tab of the scope
//! 3. pattern with a leading numeric reference: the tab at that 1-based
//!    position in the scope (an explicit count alongside is an error)
//! 4. otherwise: scan the scope in list order, yielding the count-th
//!    match, or every match when no count is given

use super::error::MatchError;
use super::pattern::{Pattern, ordinal_ref};
use super::query::{MatchQuery, Scope};
use crate::tabs::{TabEntry, TabList};

/// Run a query against the list
///
/// # Errors
///
/// Returns [`MatchError::CountWithOrdinal`] when the pattern is a numeric
/// tab reference and an explicit count is also present.
pub fn matches<'a>(
    list: &'a TabList,
    query: &'a MatchQuery,
) -> Result<Matches<'a>, MatchError> {
    let mode = match &query.pattern {
        None => match query.count {
            None => Mode::One(list.selected_entry()),
            Some(count) => Mode::One(scope_nth(list, query.scope, count)),
        },
        Some(pattern) => match ordinal_ref(pattern.text()) {
            Some(ordinal) => {
                if query.count.is_some() {
                    return Err(MatchError::CountWithOrdinal);
                }
                Mode::One(scope_nth(list, query.scope, ordinal))
            }
            None => Mode::Scan {
                entries: scope_iter(list, query.scope),
                pattern,
                remaining: query.count,
            },
        },
    };
    Ok(Matches { mode })
}

/// Lazy sequence of matching tabs, in list order
pub struct Matches<'a> {
    mode: Mode<'a>,
}

enum Mode<'a> {
    One(Option<&'a TabEntry>),
    Scan {
        entries: Box<dyn Iterator<Item = &'a TabEntry> + 'a>,
        pattern: &'a Pattern,
        remaining: Option<usize>,
    },
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a TabEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.mode {
            Mode::One(slot) => slot.take(),
            Mode::Scan {
                entries,
                pattern,
                remaining,
            } => {
                for entry in entries {
                    if !pattern.matches(entry) {
                        continue;
                    }
                    match remaining {
                        None => return Some(entry),
                        Some(0) => return None,
                        Some(n) => {
                            *n -= 1;
                            // The count-th match is the only one yielded
                            if *n == 0 {
                                return Some(entry);
                            }
                        }
                    }
                }
                None
            }
        }
    }
}

/// Tab at a 1-based position within the scope
fn scope_nth(list: &TabList, scope: Scope, ordinal: usize) -> Option<&TabEntry> {
    let index = ordinal.checked_sub(1)?;
    match scope {
        Scope::All => list.all().get(index),
        Scope::Visible => list.visible_get(index),
    }
}

fn scope_iter(list: &TabList, scope: Scope) -> Box<dyn Iterator<Item = &TabEntry> + '_> {
    match scope {
        Scope::All => Box::new(list.all().iter()),
        Scope::Visible => Box::new(list.visible()),
    }
}
