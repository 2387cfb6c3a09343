//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration errors (incomplete layout table, invalid env values).
    /// Not recoverable until the configuration is corrected.
    Configuration,

    /// User-side state that can be replaced by defaults, such as missing or
    /// corrupt persisted preferences.
    User,

    /// System/OS errors (filesystem, permissions).
    System,
}

impl ErrorCategory {
    /// Short identifier used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
