//! Error types for positional addressing

use thiserror::Error;

/// Errors that can occur while resolving an index spec
///
/// Both variants are local, non-fatal conditions: `NotFound` is typically
/// surfaced as an alert rather than a message, `EmptyList` marks a caller
/// precondition violation (resolving over a zero-length visible view).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The spec did not resolve to any tab
    #[error("No tab matching '{0}'")]
    NotFound(String),

    /// Resolution was attempted over an empty visible view
    #[error("Cannot resolve a position in an empty tab list")]
    EmptyList,
}
