//! Filter-based tab matching
//!
//! Resolves a [`MatchQuery`] against the live tab list, yielding candidate
//! tabs in list order. Queries carry a [`Pattern`] decided once at
//! construction time: either a plain substring tested against the URL, or
//! a case-insensitive regular expression tested against title and URL.

pub mod engine;
pub mod error;
pub mod pattern;
pub mod query;

pub use engine::{Matches, matches};
pub use error::MatchError;
pub use pattern::Pattern;
pub use query::{MatchQuery, Scope};
