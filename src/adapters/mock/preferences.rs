//! In-memory preferences provider for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::layout::PanePreferences;
use crate::traits::{PreferencesError, PreferencesProvider};

/// In-memory preferences provider for testing.
///
/// Failures can be injected per operation to exercise recovery paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    /// Stored preferences
    preferences: Arc<Mutex<Option<PanePreferences>>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with initial preferences.
    pub fn with_preferences(prefs: PanePreferences) -> Self {
        let provider = Self::new();
        provider.set_preferences(Some(prefs));
        provider
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Get the current preferences synchronously (for testing).
    pub fn get_preferences(&self) -> Option<PanePreferences> {
        *self.preferences.lock().unwrap()
    }

    /// Set preferences synchronously (for testing).
    pub fn set_preferences(&self, prefs: Option<PanePreferences>) {
        *self.preferences.lock().unwrap() = prefs;
    }
}

#[async_trait]
impl PreferencesProvider for InMemoryPreferences {
    async fn load(&self) -> Result<Option<PanePreferences>, PreferencesError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(PreferencesError::LoadFailed("Mock load failure".to_string()));
        }
        Ok(*self.preferences.lock().unwrap())
    }

    async fn save(&self, prefs: &PanePreferences) -> Result<(), PreferencesError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(PreferencesError::SaveFailed("Mock save failure".to_string()));
        }
        *self.preferences.lock().unwrap() = Some(*prefs);
        Ok(())
    }

    async fn clear(&self) -> Result<(), PreferencesError> {
        *self.preferences.lock().unwrap() = None;
        Ok(())
    }
}
