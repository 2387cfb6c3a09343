//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::layout::{Breakpoint, LayoutMode};

/// Errors raised while building or loading configuration.
///
/// An incomplete layout table is always reported here instead of being
/// silently patched with a fallback entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("layout table has no entry for breakpoint '{breakpoint}'")]
    MissingBreakpoint { breakpoint: Breakpoint },

    #[error("breakpoint thresholds must be strictly ascending: '{lower}' ({lower_min}px) >= '{upper}' ({upper_min}px)")]
    NonAscendingThresholds {
        lower: Breakpoint,
        lower_min: i32,
        upper: Breakpoint,
        upper_min: i32,
    },

    #[error("mode cutoffs must satisfy single-pane ({single_pane_min}px) < dual-pane ({dual_pane_min}px)")]
    InvalidModeCutoffs {
        single_pane_min: i32,
        dual_pane_min: i32,
    },

    #[error("layout table declares '{breakpoint}' as {declared} but widths in that tier resolve to {resolved}")]
    TableModeMismatch {
        breakpoint: Breakpoint,
        declared: LayoutMode,
        resolved: LayoutMode,
    },

    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to read layout table from {}: {source}", .path.display())]
    UnreadableTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout table from {}: {source}", .path.display())]
    MalformedTable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Build an [`ConfigError::InvalidValue`].
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingBreakpoint { .. } => "CFG_MISSING_BREAKPOINT",
            ConfigError::NonAscendingThresholds { .. } => "CFG_THRESHOLDS",
            ConfigError::InvalidModeCutoffs { .. } => "CFG_MODE_CUTOFFS",
            ConfigError::TableModeMismatch { .. } => "CFG_TABLE_MODE",
            ConfigError::InvalidValue { .. } => "CFG_INVALID_VALUE",
            ConfigError::UnreadableTable { .. } => "CFG_TABLE_IO",
            ConfigError::MalformedTable { .. } => "CFG_TABLE_PARSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_breakpoint_message() {
        let err = ConfigError::MissingBreakpoint {
            breakpoint: Breakpoint::Xxl,
        };
        assert_eq!(
            err.to_string(),
            "layout table has no entry for breakpoint '2xl'"
        );
        assert_eq!(err.error_code(), "CFG_MISSING_BREAKPOINT");
    }

    #[test]
    fn test_invalid_value_builder() {
        let err = ConfigError::invalid_value("HEYBO_PX_PER_COLUMN", "abc", "not a number");
        assert!(err.to_string().contains("HEYBO_PX_PER_COLUMN"));
        assert!(err.to_string().contains("abc"));
    }
}
