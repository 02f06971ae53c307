//! Error types for the divination calculators.

use thiserror::Error;
use xuanji_search::SearchError;
use xuanji_time::TimeError;

/// Errors from the hexagram, qimen and bazi calculators.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DivinationError {
    /// A seed or time field is malformed (non-positive seed, hour 24 ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A field the requested mode cannot do without is absent.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// The date lies outside the sexagenary conversion's supported range.
    #[error("date outside supported calendrical range: {0}")]
    CalendricalRange(SearchError),
}

impl From<SearchError> for DivinationError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Time(t) => t.into(),
            other => Self::CalendricalRange(other),
        }
    }
}

impl From<TimeError> for DivinationError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
