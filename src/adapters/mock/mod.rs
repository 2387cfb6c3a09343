//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`InMemoryPreferences`] - Preferences storage without file system access
//! - [`NoDelay`] - Delay that returns immediately
//! - [`RecordingDelay`] - Delay that records durations and returns immediately

pub mod delay;
pub mod preferences;

pub use delay::{NoDelay, RecordingDelay};
pub use preferences::InMemoryPreferences;
