//! Civil time handling for the divination engine.
//!
//! This crate provides:
//! - Julian Date / Julian Day Number conversions (proleptic Gregorian)
//! - `CivilDateTime`, a zone-less wall-clock value with parsing and validation
//! - `PartialDateTime` for user-supplied, possibly incomplete birth data
//! - Delta T (TT - UT) for the astronomical layer
//! - The `Clock` trait, so "now" is always injected, never read implicitly

pub mod civil_time;
pub mod clock;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod partial;

pub use civil_time::CivilDateTime;
pub use clock::{Clock, FixedClock, SystemClock};
pub use delta_t::{delta_t_seconds, jd_to_decimal_year};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, jd_to_centuries, jdn_to_calendar, julian_day_number,
};
pub use partial::PartialDateTime;

/// Convert a UT Julian Date to TT (dynamical time) using Delta T.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / SECONDS_PER_DAY
}

/// Convert a TT Julian Date to UT using Delta T.
///
/// Delta T changes by well under a second per day, so evaluating it at the
/// TT epoch instead of the UT one is exact to the microsecond.
pub fn jd_tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(jd_to_decimal_year(jd_tt)) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tt_ut_roundtrip() {
        let jd = 2_460_000.5;
        let back = jd_tt_to_ut(jd_ut_to_tt(jd));
        assert!((back - jd).abs() * SECONDS_PER_DAY < 1e-3);
    }

    #[test]
    fn tt_ahead_of_ut_in_2000() {
        let diff_s = (jd_ut_to_tt(J2000_JD) - J2000_JD) * SECONDS_PER_DAY;
        assert!((diff_s - 63.86).abs() < 0.1, "diff = {diff_s}");
    }
}
