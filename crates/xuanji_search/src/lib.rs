//! Calendrical search for the Chinese lunisolar calendar.
//!
//! This crate provides:
//! - Solar-term instants by bisection on the apparent solar longitude
//! - Lunar New Year by the winter-solstice / principal-term rules
//! - Four-pillar (year, month, day, hour) sexagenary conversion
//!
//! Supported civil years are 1901..=2099; anything outside yields
//! [`SearchError::OutOfRange`].

pub mod error;
pub mod lunar_year;
pub mod pillars;
pub mod search_util;
pub mod solar_term;

pub use error::SearchError;
pub use lunar_year::lunar_new_year;
pub use pillars::{FourPillars, PillarConfig, YearBoundary, four_pillars, solar_month_offset};
pub use search_util::local_jdn;
pub use solar_term::{
    ALL_SOLAR_TERMS, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, SolarTerm, SolarTermEvent,
    solar_term_jd, solar_terms_for_year,
};
