//! Structured configuration issues.
//!
//! Out-of-range values are clamped rather than rejected, so most issues are
//! warnings that tell the operator what value will actually be used.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the value will be adjusted or ignored.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric value lies outside its allowed range and will be clamped.
    OutOfRange { field: String, value: i64, min: i64, max: i64 },
    /// The configured case id is not in the catalog.
    UnknownCase { value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Warn that `value` for `field` will be clamped into `[min, max]`.
    pub fn out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
                value,
                min,
                max,
            },
            message: format!(
                "{}: {} is outside {}..={}, using {}",
                field,
                value,
                min,
                max,
                value.clamp(min, max)
            ),
        }
    }
}
