//! Error types for civil time handling.

use thiserror::Error;

/// Errors from date validation, parsing, or clock access.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar or clock field is outside its valid range.
    #[error("invalid {field}: {value}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A date/time string could not be parsed.
    #[error("cannot parse date/time '{0}' (expected YYYY-MM-DD[Thh:mm[:ss]])")]
    Parse(String),
    /// UTC offset is not representable (must be within +/-18 hours).
    #[error("invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),
}
