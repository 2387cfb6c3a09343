//! Tokio-backed delay.

use std::time::Duration;

use async_trait::async_trait;

use crate::traits::Delay;

/// Delay that sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
