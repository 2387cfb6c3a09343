//! Unified error type for the widget crate.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use crate::traits::PreferencesError;

/// Unified error type for the widget crate.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Invalid or incomplete configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Persisted preferences could not be loaded or saved.
    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    /// Filesystem or terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure outside of preferences.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WidgetError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            WidgetError::Config(_) => ErrorCategory::Configuration,
            WidgetError::Preferences(_) => ErrorCategory::User,
            WidgetError::Io(_) | WidgetError::Json(_) => ErrorCategory::System,
        }
    }

    /// Whether the widget can keep running with defaults after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WidgetError::Preferences(_))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            WidgetError::Config(err) => format!("Configuration problem: {}", err),
            WidgetError::Preferences(_) => {
                "Saved layout preferences could not be used; defaults were applied.".to_string()
            }
            WidgetError::Io(err) => format!("A file operation failed: {}", err),
            WidgetError::Json(_) => "Data could not be read or written as JSON.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            WidgetError::Config(err) => err.error_code(),
            WidgetError::Preferences(_) => "PREFS",
            WidgetError::Io(_) => "IO",
            WidgetError::Json(_) => "JSON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_preferences() {
        let err: WidgetError = PreferencesError::LoadFailed("locked".to_string()).into();
        assert!(err.user_message().contains("defaults"));
        assert_eq!(err.error_code(), "PREFS");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: WidgetError = ConfigError::invalid_value("k", "v", "r").into();
        assert_eq!(err.to_string(), "invalid value for k: 'v' (r)");
    }
}
