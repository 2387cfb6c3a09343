//! Preferences provider trait abstraction.
//!
//! Only pane collapse flags and the focused pane survive across sessions.
//! Navigation history and width-derived state are always recomputed.

use async_trait::async_trait;
use thiserror::Error;

use crate::layout::PanePreferences;

/// Preferences operation errors.
#[derive(Debug, Clone, Error)]
pub enum PreferencesError {
    #[error("Failed to load preferences: {0}")]
    LoadFailed(String),
    #[error("Failed to save preferences: {0}")]
    SaveFailed(String),
    #[error("Failed to clear preferences: {0}")]
    ClearFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for pane preferences storage and retrieval.
///
/// # Example
///
/// ```ignore
/// use heybo_widget::traits::PreferencesProvider;
///
/// async fn restore<P: PreferencesProvider>(provider: &P, store: &mut LayoutStore) {
///     if let Ok(Some(prefs)) = provider.load().await {
///         store.apply_preferences(prefs);
///     }
/// }
/// ```
#[async_trait]
pub trait PreferencesProvider: Send + Sync {
    /// Load preferences.
    ///
    /// # Returns
    /// - `Ok(Some(prefs))` if preferences were stored
    /// - `Ok(None)` if nothing is stored yet
    /// - `Err(error)` if loading failed
    async fn load(&self) -> Result<Option<PanePreferences>, PreferencesError>;

    /// Save preferences, replacing whatever was stored.
    async fn save(&self, prefs: &PanePreferences) -> Result<(), PreferencesError>;

    /// Remove stored preferences.
    async fn clear(&self) -> Result<(), PreferencesError>;
}
