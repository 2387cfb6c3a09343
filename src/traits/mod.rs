//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`PreferencesProvider`] - Persisted pane preferences storage
//! - [`Delay`] - Timer used to pace chat messages

pub mod delay;
pub mod preferences;

pub use delay::Delay;
pub use preferences::{PreferencesError, PreferencesProvider};
