//! Filter patterns
//!
//! The two filter modes are a tagged variant rather than a boolean flag:
//! the mode is decided once when the pattern is built, and matching
//! dispatches on the variant.

use super::error::MatchError;
use crate::tabs::TabEntry;
use regex::{Regex, RegexBuilder};

/// A compiled tab filter
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Case-insensitive substring tested against the tab's URL
    Substring(String),

    /// Case-insensitive regular expression tested against title and URL
    Regex(Regex),
}

impl Pattern {
    /// Build a substring pattern
    #[must_use]
    pub fn substring(filter: impl Into<String>) -> Self {
        Self::Substring(filter.into().to_lowercase())
    }

    /// Compile a regular expression pattern
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::BadPattern`] when the expression is invalid.
    pub fn regex(filter: &str) -> Result<Self, MatchError> {
        let compiled = RegexBuilder::new(filter).case_insensitive(true).build()?;
        Ok(Self::Regex(compiled))
    }

    /// The original filter text
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Substring(s) => s,
            Self::Regex(re) => re.as_str(),
        }
    }

    /// Test a tab against the pattern
    #[must_use]
    pub fn matches(&self, entry: &TabEntry) -> bool {
        match self {
            Self::Substring(s) => entry.url.to_lowercase().contains(s),
            Self::Regex(re) => re.is_match(entry.label()) || re.is_match(&entry.url),
        }
    }
}

/// Extract a leading numeric tab reference
///
/// A filter of the form `"12"` or `"12:anything"` addresses the tab at
/// 1-based position 12 instead of being treated as a pattern.
#[must_use]
pub fn ordinal_ref(filter: &str) -> Option<usize> {
    let digits = filter.len() - filter.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = &filter[digits..];
    if rest.is_empty() || rest.starts_with(':') {
        filter[..digits].parse().ok()
    } else {
        None
    }
}
