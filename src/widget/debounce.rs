//! Resize debouncing.
//!
//! Hosts may report widths at native event frequency. The debouncer keeps
//! only the latest width and releases it once no newer width arrived for
//! the configured window. Time is passed in so tests need no real clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    window: Duration,
    pending: Option<(i32, Instant)>,
    last_applied: Option<i32>,
}

impl ResizeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_applied: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a width reported at `now`, replacing any pending one.
    pub fn push(&mut self, width: i32, now: Instant) {
        self.pending = Some((width, now));
    }

    /// When the pending width becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at + self.window)
    }

    /// Release the pending width if its window has elapsed.
    ///
    /// A width equal to the last released one is dropped.
    pub fn poll(&mut self, now: Instant) -> Option<i32> {
        let (width, at) = self.pending?;
        if now.duration_since(at) < self.window {
            return None;
        }
        self.pending = None;
        if self.last_applied == Some(width) {
            return None;
        }
        self.last_applied = Some(width);
        Some(width)
    }

    /// Release the pending width regardless of the window.
    pub fn flush(&mut self) -> Option<i32> {
        let (width, _) = self.pending.take()?;
        if self.last_applied == Some(width) {
            return None;
        }
        self.last_applied = Some(width);
        Some(width)
    }
}
