//! Error handling for the widget core.
//!
//! Navigation and layout transitions never fail. Errors only arise at the
//! edges of the crate:
//!
//! - **Configuration**: layout tables, thresholds, environment variables
//! - **Preferences**: loading or saving persisted pane preferences
//! - **I/O and serialization**: wrapped from std and serde_json
//!
//! Everything funnels into [`WidgetError`] and the [`WidgetResult`] alias.
//!
//! | Category | Description | Recoverable |
//! |----------|-------------|-------------|
//! | Configuration | Invalid table, threshold or env value | No |
//! | Preferences | Persisted preferences unavailable | Yes (defaults) |
//! | System | OS/filesystem errors | Sometimes |

mod category;
mod config;
mod result;
mod widget_error;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use result::WidgetResult;
pub use widget_error::WidgetError;
