//! Tab switching, selection history and removal planning
//!
//! The [`TabController`] ties the other pieces together: it resolves
//! position specs through [`crate::address`], walks filter candidates
//! through [`crate::matching`], and keeps the current/alternate history
//! pair consistent across selections and removals.

pub mod controller;
pub mod error;
pub mod history;
pub mod refresh;
pub mod removal;

pub use controller::TabController;
pub use error::SwitchError;
pub use history::SelectionHistory;
pub use refresh::RefreshDebouncer;
pub use removal::RemovalPlan;
