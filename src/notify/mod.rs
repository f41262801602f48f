//! User-visible condition reporting
//!
//! The selection engine never prints on its own; every user-visible
//! condition goes through a [`Notify`] sink so frontends can route it to
//! a status bar, a bell, or plain stderr. All conditions are local and
//! non-fatal: an unresolved spec rings the alert, a bad filter gets an
//! error line, nothing ever aborts the process.

use colored::Colorize;
use std::sync::Mutex;

/// Sink for user-visible conditions
pub trait Notify: Send + Sync {
    /// Signal an alert with no message (the bell for an unresolved spec)
    fn alert(&self);

    /// Report a user-visible error message
    fn error(&self, message: &str);

    /// Report an informational message
    fn info(&self, message: &str);
}

/// Stderr implementation with colored output
///
/// The alert writes the terminal bell, matching what users of ex-style
/// navigation expect from an unresolved motion.
#[derive(Debug, Default)]
pub struct StderrNotify;

impl StderrNotify {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notify for StderrNotify {
    fn alert(&self) {
        eprint!("\x07");
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }
}

/// Recorded notification event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Alert,
    Error(String),
    Info(String),
}

/// Recording sink for tests
///
/// Collects every notification so assertions can check what a scenario
/// surfaced, without touching a terminal.
#[derive(Debug, Default)]
pub struct RecordingNotify {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotify {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of alerts recorded
    #[must_use]
    pub fn alerts(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Notification::Alert))
            .count()
    }

    fn record(&self, event: Notification) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Notify for RecordingNotify {
    fn alert(&self) {
        self.record(Notification::Alert);
    }

    fn error(&self, message: &str) {
        self.record(Notification::Error(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.record(Notification::Info(message.to_string()));
    }
}
