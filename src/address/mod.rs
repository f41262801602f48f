//! Positional tab addressing
//!
//! Turns a compact spec string (`""`, `"$"`, `"3"`, `"+2"`, `"-1"`) or a
//! tab handle into a concrete index in the tab list. Arithmetic happens
//! over the visible view; the result is reported as an all-view index.

pub mod error;
pub mod resolve;
pub mod spec;

pub use error::ResolveError;
pub use resolve::{resolve, resolve_spec};
pub use spec::IndexSpec;
