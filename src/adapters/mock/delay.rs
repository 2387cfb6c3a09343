//! Delays that never wait.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::Delay;

/// Delay that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Delay that records every requested duration and returns immediately.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }

    /// Sum of all requested durations.
    pub fn total(&self) -> Duration {
        self.requested.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
    }
}
