//! Error types for calendrical search.

use thiserror::Error;
use xuanji_time::TimeError;

/// Errors from solar-term search, lunar New Year, or pillar conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The civil year is outside the range the conversion supports.
    #[error("year {year} outside supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },
    /// Bisection failed to bracket or converge on a boundary.
    #[error("search did not converge: {0}")]
    NoConvergence(&'static str),
    /// The input date/time was invalid.
    #[error(transparent)]
    Time(#[from] TimeError),
}
