//! Error types for switch operations
//!
//! Every variant is a user-visible, non-fatal condition: the operation
//! aborts, no selection changes, and the message is surfaced through the
//! notify sink. A failed repeat never corrupts the stored switch memory.

use crate::address::ResolveError;
use crate::matching::MatchError;
use thiserror::Error;

/// Errors that can occur during a switch operation
#[derive(Debug, Error)]
pub enum SwitchError {
    /// No tab matched the filter
    #[error("No matching tab for: {0}")]
    NoMatch(String),

    /// More than one tab matched without ambiguity tolerance
    #[error("More than one matching tab for: {0}")]
    AmbiguousMatch(String),

    /// No alternate tab to switch to
    #[error("No alternate tab")]
    NoAlternate,

    /// Positional resolution failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Filter matching failed
    #[error(transparent)]
    Match(#[from] MatchError),
}
