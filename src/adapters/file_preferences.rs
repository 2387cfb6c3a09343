//! File-based preferences provider adapter.
//!
//! Preferences are stored as pretty-printed JSON, by default at
//! `<data dir>/heybo-widget/pane_preferences.json`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::layout::PanePreferences;
use crate::traits::{PreferencesError, PreferencesProvider};

/// File name used inside the data directory.
pub const PREFERENCES_FILE: &str = "pane_preferences.json";

/// File-based preferences provider.
///
/// # Example
///
/// ```ignore
/// use heybo_widget::adapters::FilePreferencesProvider;
/// use heybo_widget::traits::PreferencesProvider;
///
/// let provider = FilePreferencesProvider::in_dir(&config.data_dir()?);
/// if let Some(prefs) = provider.load().await? {
///     store.apply_preferences(prefs);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FilePreferencesProvider {
    path: PathBuf,
}

impl FilePreferencesProvider {
    /// Provider storing preferences at exactly `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provider storing [`PREFERENCES_FILE`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILE))
    }

    /// Get the path to the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PreferencesProvider for FilePreferencesProvider {
    async fn load(&self) -> Result<Option<PanePreferences>, PreferencesError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PreferencesError::LoadFailed(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| PreferencesError::Serialization(e.to_string()))
    }

    async fn save(&self, prefs: &PanePreferences) -> Result<(), PreferencesError> {
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| PreferencesError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PreferencesError::SaveFailed(format!("{}: {}", parent.display(), e)))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| PreferencesError::SaveFailed(format!("{}: {}", self.path.display(), e)))
    }

    async fn clear(&self) -> Result<(), PreferencesError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PreferencesError::ClearFailed(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
