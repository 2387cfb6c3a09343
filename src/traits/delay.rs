//! Delay trait abstraction.
//!
//! Chat messages are paced with short artificial pauses. Putting the timer
//! behind a trait lets tests run the sequencing synchronously.

use std::time::Duration;

use async_trait::async_trait;

/// Trait for waiting between paced operations.
///
/// # Example
///
/// ```ignore
/// use heybo_widget::traits::Delay;
///
/// async fn greet<D: Delay>(delay: &D) {
///     println!("Hi!");
///     delay.sleep(Duration::from_millis(400)).await;
///     println!("What can I get you?");
/// }
/// ```
#[async_trait]
pub trait Delay: Send + Sync {
    /// Wait for `duration`.
    async fn sleep(&self, duration: Duration);
}
