//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`FilePreferencesProvider`] - JSON file preferences storage
//! - [`TokioDelay`] - Real timer backed by `tokio::time::sleep`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::InMemoryPreferences`] - In-memory preferences storage
//! - [`mock::NoDelay`] - Returns immediately
//! - [`mock::RecordingDelay`] - Records requested durations without waiting

pub mod file_preferences;
pub mod mock;
pub mod tokio_delay;

pub use file_preferences::FilePreferencesProvider;
pub use mock::{InMemoryPreferences, NoDelay, RecordingDelay};
pub use tokio_delay::TokioDelay;
