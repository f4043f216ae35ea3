//! Configuration issues reported while reading settings.
//!
//! Issues never abort loading: the offending value falls back to its
//! default and the issue is shown to the user.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value was ignored.
    Error,
    /// The value works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A duration that must be positive is zero.
    ZeroDuration { field: String },
    /// A number outside its allowed range.
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
    /// A string that does not name a known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Unknown enum value falling back to `fallback`.
    pub fn invalid_enum(field: &str, value: &str, valid_values: &[&str], fallback: &str) -> Self {
        Self::warning(
            ConfigIssueCode::InvalidEnumValue {
                field: field.to_string(),
                value: value.to_string(),
                valid_values: valid_values.iter().map(|v| v.to_string()).collect(),
            },
            format!(
                "{}: unknown value '{}', falling back to '{}'",
                field, value, fallback
            ),
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
