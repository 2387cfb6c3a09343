//! Tracing subscriber setup.
//!
//! The filter comes from `HEYBO_LOG` (default `info`). `simulate` writes
//! logs to stderr so stdout stays pure JSON; `watch` writes them to
//! `heybo-widget.log` in the data directory because the alternate screen
//! owns the terminal.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::ENV_LOG;
use crate::error::WidgetResult;

pub const LOG_FILE: &str = "heybo-widget.log";

const DEFAULT_FILTER: &str = "info";

/// Build the filter from `HEYBO_LOG`, falling back to `info` when unset or
/// unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to `<dir>/heybo-widget.log`, creating the directory if needed.
///
/// Returns the log file path.
pub fn init_file(dir: &Path) -> WidgetResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(path)
}
