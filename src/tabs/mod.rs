//! Tab list data model
//!
//! Provides the ordered tab collaborator the rest of the crate addresses
//! into: stable tab identities, per-tab attributes, and the *all* vs.
//! *visible* views that index arithmetic and matching operate over.

pub mod list;
pub mod types;

pub use list::TabList;
pub use types::{TabEntry, TabId};
