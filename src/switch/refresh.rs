//! Debounced refresh scheduling
//!
//! Bursts of list mutations (a session restore opening dozens of tabs)
//! should produce one ordinal/label refresh, not one per event. The
//! debouncer keeps a trailing deadline that each new event pushes out;
//! the owner polls it from its event loop and refreshes when it fires.

use std::time::{Duration, Instant};

/// Cancellable trailing-debounce task
#[derive(Debug, Clone)]
pub struct RefreshDebouncer {
    deadline: Option<Instant>,
    window: Duration,
}

impl RefreshDebouncer {
    /// Create a debouncer with the given trailing window
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            deadline: None,
            window,
        }
    }

    /// Schedule (or re-arm) the task; the window restarts from now
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// Drop any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is armed
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has passed; fires at most once per schedule
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// `poll_at` against the wall clock
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_does_not_fire_before_window() {
        let mut debouncer = RefreshDebouncer::new(Duration::from_millis(50));
        let start = Instant::now();
        debouncer.schedule();
        assert!(!debouncer.poll_at(start));
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_fires_once_after_window() {
        let mut debouncer = RefreshDebouncer::new(Duration::from_millis(50));
        debouncer.schedule();
        let later = Instant::now() + Duration::from_millis(100);
        assert!(debouncer.poll_at(later));
        assert!(!debouncer.poll_at(later));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_extends_deadline() {
        let mut debouncer = RefreshDebouncer::new(Duration::from_millis(50));
        debouncer.schedule();
        let first_deadline = Instant::now() + Duration::from_millis(50);

        // A new event within the window pushes the deadline out
        std::thread::sleep(Duration::from_millis(10));
        debouncer.schedule();
        assert!(!debouncer.poll_at(first_deadline - Duration::from_millis(10)));
    }

    #[test]
    fn test_cancel_disarms() {
        let mut debouncer = RefreshDebouncer::new(Duration::ZERO);
        debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.poll());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_unscheduled_never_fires() {
        let mut debouncer = RefreshDebouncer::new(Duration::ZERO);
        assert!(!debouncer.poll());
    }
}
