// Integration tests for environment-driven configuration
// These mutate process environment variables, so they run serially.

use std::path::PathBuf;
use std::time::Duration;

use heybo_widget::config::{
    WidgetConfig, ENV_DATA_DIR, ENV_LAYOUT_TABLE, ENV_MESSAGE_DELAY_MS, ENV_PX_PER_COLUMN,
    ENV_RESIZE_DEBOUNCE_MS,
};
use heybo_widget::error::ConfigError;
use serial_test::serial;

const ALL_VARS: [&str; 5] = [
    ENV_PX_PER_COLUMN,
    ENV_RESIZE_DEBOUNCE_MS,
    ENV_MESSAGE_DELAY_MS,
    ENV_LAYOUT_TABLE,
    ENV_DATA_DIR,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_without_variables_is_default() {
    clear_env();
    assert_eq!(WidgetConfig::from_env().unwrap(), WidgetConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_every_variable() {
    clear_env();
    std::env::set_var(ENV_PX_PER_COLUMN, "8");
    std::env::set_var(ENV_RESIZE_DEBOUNCE_MS, "0");
    std::env::set_var(ENV_MESSAGE_DELAY_MS, "1000");
    std::env::set_var(ENV_LAYOUT_TABLE, "/etc/heybo/layout.json");
    std::env::set_var(ENV_DATA_DIR, "/var/lib/heybo");

    let config = WidgetConfig::from_env();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.px_per_column, 8);
    assert_eq!(config.resize_debounce, Duration::ZERO);
    assert_eq!(config.message_delay, Duration::from_secs(1));
    assert_eq!(config.layout_table_path, Some(PathBuf::from("/etc/heybo/layout.json")));
    assert_eq!(config.data_dir().unwrap(), PathBuf::from("/var/lib/heybo"));
    assert_eq!(config.columns_to_px(100), 800);
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_number() {
    clear_env();
    std::env::set_var(ENV_MESSAGE_DELAY_MS, "-5");

    let result = WidgetConfig::from_env();
    clear_env();

    match result {
        Err(ConfigError::InvalidValue { key, value, .. }) => {
            assert_eq!(key, ENV_MESSAGE_DELAY_MS);
            assert_eq!(value, "-5");
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_empty_paths_are_ignored() {
    clear_env();
    std::env::set_var(ENV_LAYOUT_TABLE, "");

    let config = WidgetConfig::from_env();
    clear_env();
    assert!(config.unwrap().layout_table_path.is_none());
}
