//! tabnav: tab addressing and selection-history engine
//!
//! Resolves position specs ("+2", "$", "-1") against ordered tab lists,
//! matches tabs by substring or regex filters, and drives switching with
//! repeatable filter memory, an alternate-tab toggle, removal planning
//! and a debounced view refresh.
//!
//! The crate is a library for embedding in a browsing shell: it owns the
//! model ([`TabList`]) and the policy ([`TabController`]) but never talks
//! to a real window system itself.

pub mod address;
pub mod config;
pub mod matching;
pub mod notify;
pub mod switch;
pub mod tabs;

#[cfg(test)]
pub mod testing;

pub use address::{IndexSpec, ResolveError};
pub use crate::config::NavConfig;
pub use matching::{MatchError, MatchQuery, Pattern, Scope};
pub use notify::{Notify, StderrNotify};
pub use switch::{SelectionHistory, SwitchError, TabController};
pub use tabs::{TabEntry, TabId, TabList};

use thiserror::Error;

/// Top-level error type covering every fallible operation in the crate
#[derive(Error, Debug)]
pub enum TabNavError {
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Switch error: {0}")]
    Switch(#[from] SwitchError),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}
