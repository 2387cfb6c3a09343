//! Widget configuration.
//!
//! Use the builder methods to customize, or [`WidgetConfig::from_env`] to
//! read `HEYBO_*` environment variables.
//!
//! # Example
//!
//! ```ignore
//! use heybo_widget::config::WidgetConfig;
//!
//! let config = WidgetConfig::default()
//!     .with_px_per_column(10)
//!     .with_message_delay(Duration::from_millis(250));
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::layout::{Breakpoints, LayoutTable, ModeThresholds, Resolver};

pub const ENV_PX_PER_COLUMN: &str = "HEYBO_PX_PER_COLUMN";
pub const ENV_RESIZE_DEBOUNCE_MS: &str = "HEYBO_RESIZE_DEBOUNCE_MS";
pub const ENV_MESSAGE_DELAY_MS: &str = "HEYBO_MESSAGE_DELAY_MS";
pub const ENV_LAYOUT_TABLE: &str = "HEYBO_LAYOUT_TABLE";
pub const ENV_DATA_DIR: &str = "HEYBO_DATA_DIR";
pub const ENV_LOG: &str = "HEYBO_LOG";

/// Directory name under the platform data directory.
const APP_DIR: &str = "heybo-widget";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Pixels per terminal column when the viewport is a terminal (default: 12)
    pub px_per_column: u32,
    /// Quiet period before a resize is applied (default: 150ms)
    pub resize_debounce: Duration,
    /// Pause between paced bot messages (default: 400ms)
    pub message_delay: Duration,
    /// Optional JSON layout table replacing the built-in one
    pub layout_table_path: Option<PathBuf>,
    /// Override for the data directory
    pub data_dir: Option<PathBuf>,
    pub breakpoints: Breakpoints,
    pub mode_thresholds: ModeThresholds,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            px_per_column: 12,
            resize_debounce: Duration::from_millis(150),
            message_delay: Duration::from_millis(400),
            layout_table_path: None,
            data_dir: None,
            breakpoints: Breakpoints::DEFAULT,
            mode_thresholds: ModeThresholds::DEFAULT,
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_px_per_column(mut self, px: u32) -> Self {
        self.px_per_column = px;
        self
    }

    pub fn with_resize_debounce(mut self, window: Duration) -> Self {
        self.resize_debounce = window;
        self
    }

    pub fn with_message_delay(mut self, delay: Duration) -> Self {
        self.message_delay = delay;
        self
    }

    pub fn with_layout_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.layout_table_path = Some(path.into());
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_mode_thresholds(mut self, modes: ModeThresholds) -> Self {
        self.mode_thresholds = modes;
        self
    }

    /// Create config from `HEYBO_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PX_PER_COLUMN) {
            let px = parse_number(ENV_PX_PER_COLUMN, &raw)?;
            if px == 0 {
                return Err(ConfigError::invalid_value(ENV_PX_PER_COLUMN, raw, "must be at least 1"));
            }
            config.px_per_column = u32::try_from(px)
                .map_err(|e| ConfigError::invalid_value(ENV_PX_PER_COLUMN, raw.as_str(), e.to_string()))?;
        }
        if let Some(raw) = lookup(ENV_RESIZE_DEBOUNCE_MS) {
            config.resize_debounce = Duration::from_millis(parse_number(ENV_RESIZE_DEBOUNCE_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MESSAGE_DELAY_MS) {
            config.message_delay = Duration::from_millis(parse_number(ENV_MESSAGE_DELAY_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_LAYOUT_TABLE).filter(|v| !v.is_empty()) {
            config.layout_table_path = Some(PathBuf::from(raw));
        }
        if let Some(raw) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            config.data_dir = Some(PathBuf::from(raw));
        }
        Ok(config)
    }

    /// Validated resolver for the configured thresholds.
    pub fn resolver(&self) -> Result<Resolver, ConfigError> {
        Resolver::new(self.breakpoints, self.mode_thresholds)
    }

    /// The configured layout table, or the built-in one.
    pub fn layout_table(&self) -> Result<LayoutTable, ConfigError> {
        match &self.layout_table_path {
            Some(path) => LayoutTable::load(path),
            None => Ok(LayoutTable::default()),
        }
    }

    /// Directory for preferences and log files.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ConfigError::invalid_value(ENV_DATA_DIR, "", "no platform data directory; set it explicitly"))
    }

    /// Convert a terminal column count to a pixel width.
    pub fn columns_to_px(&self, columns: u16) -> i32 {
        i32::from(columns).saturating_mul(self.px_per_column.min(i32::MAX as u32) as i32)
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::invalid_value(key, raw, e.to_string()))
}

/// Whether `path` looks like a layout table file.
pub fn is_json_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
