//! Chat message pacing.
//!
//! [`MessagePacer::deliver`] awaits a whole script in one go. Event-loop
//! hosts instead [`enqueue`](MessagePacer::enqueue) a script and release one
//! line per [`poll`](MessagePacer::poll), sleeping until
//! [`next_due`](MessagePacer::next_due) in between so input keeps flowing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::chatbot::ChatbotState;
use crate::traits::Delay;

/// Appends bot messages one at a time with a pause between them.
#[derive(Debug, Clone)]
pub struct MessagePacer {
    delay: Duration,
    queue: VecDeque<&'static str>,
    next_due: Option<Instant>,
}

impl MessagePacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            queue: VecDeque::new(),
            next_due: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Deliver `lines` in order, waiting before each one but the first.
    ///
    /// Returns the number of messages appended.
    pub async fn deliver<D>(&self, delay: &D, chat: &mut ChatbotState, lines: &[&str]) -> usize
    where
        D: Delay + ?Sized,
    {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                delay.sleep(self.delay).await;
            }
            chat.push_bot(*line);
        }
        lines.len()
    }

    /// Replace whatever is queued with `lines`; the first is due at `now`.
    pub fn enqueue(&mut self, lines: &[&'static str], now: Instant) {
        self.queue = lines.iter().copied().collect();
        self.next_due = (!self.queue.is_empty()).then_some(now);
    }

    /// When the next queued line is due, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Append the next line if it is due at `now`.
    ///
    /// Releases at most one line per call. Returns whether a line was
    /// appended.
    pub fn poll(&mut self, chat: &mut ChatbotState, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {}
            _ => return false,
        }
        let Some(line) = self.queue.pop_front() else {
            self.next_due = None;
            return false;
        };
        chat.push_bot(line);
        self.next_due = (!self.queue.is_empty()).then(|| now + self.delay);
        true
    }

    /// Drop queued lines without delivering them.
    pub fn cancel(&mut self) {
        self.queue.clear();
        self.next_due = None;
    }
}
