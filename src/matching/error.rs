//! Error types for match queries

use thiserror::Error;

/// Errors that can occur while building or running a match query
#[derive(Debug, Error)]
pub enum MatchError {
    /// The filter could not be compiled as a regular expression
    #[error("Invalid filter pattern: {0}")]
    BadPattern(#[from] regex::Error),

    /// A numeric tab reference was combined with an explicit count
    ///
    /// No combined semantics exist for "the Nth match of tab 3"; callers
    /// must pass one or the other.
    #[error("A count cannot be combined with a numeric tab reference")]
    CountWithOrdinal,
}
