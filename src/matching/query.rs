//! Match query construction

use super::pattern::Pattern;

/// Which tabs a query considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Only tabs in the visible view
    #[default]
    Visible,

    /// Every tab regardless of visibility
    All,
}

/// A filter query against the tab list
///
/// `count` is 1-based and selects exactly the Nth match, discarding the
/// rest; without a count every match is yielded. Without a pattern the
/// query addresses the current tab (no count) or the count-th tab of the
/// scope directly.
#[derive(Debug, Clone, Default)]
pub struct MatchQuery {
    pub pattern: Option<Pattern>,
    pub count: Option<usize>,
    pub scope: Scope,
}

impl MatchQuery {
    /// Query for the current tab
    #[must_use]
    pub fn current() -> Self {
        Self::default()
    }

    /// Query for the count-th tab of the scope
    #[must_use]
    pub fn nth(count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }

    /// Query for tabs matching a pattern
    #[must_use]
    pub fn filter(pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..Self::default()
        }
    }

    /// Restrict to the count-th match
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the scope
    #[must_use]
    pub const fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
