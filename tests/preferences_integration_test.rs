// Integration tests for persisted pane preferences

use heybo_widget::adapters::{FilePreferencesProvider, InMemoryPreferences};
use heybo_widget::layout::{Pane, PanePreferences};
use heybo_widget::traits::PreferencesProvider;
use heybo_widget::widget::WidgetSession;
use tempfile::TempDir;

#[tokio::test]
async fn test_session_preferences_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let provider = FilePreferencesProvider::in_dir(&dir.path().join("nested"));

    let mut session = WidgetSession::default();
    session.layout_mut().collapse_pane(Pane::Left, true);
    session.layout_mut().set_focused_pane(Some(Pane::Right));
    session.save_preferences(&provider).await.unwrap();
    assert!(provider.path().exists());

    let mut restored = WidgetSession::default();
    assert!(restored.load_preferences(&provider).await.unwrap());
    let state = restored.layout().state();
    assert!(state.left_pane_collapsed);
    assert_eq!(state.focused_pane, Some(Pane::Right));
}

#[tokio::test]
async fn test_missing_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let provider = FilePreferencesProvider::in_dir(dir.path());

    let mut session = WidgetSession::default();
    assert!(!session.load_preferences(&provider).await.unwrap());
    assert!(!session.layout().state().left_pane_collapsed);
}

#[tokio::test]
async fn test_corrupt_file_is_recoverable() {
    let dir = TempDir::new().unwrap();
    let provider = FilePreferencesProvider::in_dir(dir.path());
    tokio::fs::write(provider.path(), "not json").await.unwrap();

    let mut session = WidgetSession::default();
    let err = session.load_preferences(&provider).await.unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(err.error_code(), "PREFS");
}

#[tokio::test]
async fn test_restored_preferences_respect_single_pane() {
    let provider = InMemoryPreferences::with_preferences(PanePreferences {
        left_pane_collapsed: false,
        right_pane_collapsed: false,
        focused_pane: Some(Pane::Right),
    });

    let mut session = WidgetSession::default();
    session.set_screen_width(800);
    session.load_preferences(&provider).await.unwrap();

    let state = session.layout().state();
    assert!(state.right_pane_collapsed);
    assert_eq!(state.focused_pane, None);
}

#[tokio::test]
async fn test_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let provider = FilePreferencesProvider::in_dir(dir.path());
    provider.save(&PanePreferences::default()).await.unwrap();

    provider.clear().await.unwrap();
    assert!(provider.load().await.unwrap().is_none());
    provider.clear().await.unwrap();
}
