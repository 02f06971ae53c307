//! Chinese lunar New Year (chun jie) by the modern (1929+) rules.
//!
//! Months begin on the civil day of the new moon in the reference zone.
//! The month containing the winter solstice is month 11. When the span
//! between two consecutive month-11 starts holds 13 lunations, the first
//! month after month 11 that contains no principal term is intercalary.
//! New Year is the start of month 1.

use tracing::trace;
use xuanji_base::lunation_number_near;
use xuanji_time::{CivilDateTime, jdn_to_calendar};

use crate::error::SearchError;
use crate::search_util::{local_jdn, new_moon_ut};
use crate::solar_term::{SolarTerm, check_year, term_jd_unchecked};

/// Lunation number of the month whose start day is on or before civil day `jdn`.
fn month_containing(jdn: i64, utc_offset_minutes: i32) -> i64 {
    let mut k = lunation_number_near(jdn as f64) + 1;
    while local_jdn(new_moon_ut(k), utc_offset_minutes) > jdn {
        k -= 1;
    }
    k
}

/// Civil day on which lunation `k` begins.
fn month_start_jdn(k: i64, utc_offset_minutes: i32) -> i64 {
    local_jdn(new_moon_ut(k), utc_offset_minutes)
}

/// Julian Day Number of the first day of lunar `year`.
pub(crate) fn lunar_new_year_jdn(year: i32, utc_offset_minutes: i32) -> Result<i64, SearchError> {
    let solstice_before =
        local_jdn(term_jd_unchecked(year - 1, SolarTerm::DongZhi)?, utc_offset_minutes);
    let solstice_after =
        local_jdn(term_jd_unchecked(year, SolarTerm::DongZhi)?, utc_offset_minutes);

    let k11 = month_containing(solstice_before, utc_offset_minutes);
    let k11_next = month_containing(solstice_after, utc_offset_minutes);
    let lunations = k11_next - k11;

    // Principal terms that can fall in months 11 through 1.
    let majors = [
        solstice_before,
        local_jdn(term_jd_unchecked(year, SolarTerm::DaHan)?, utc_offset_minutes),
        local_jdn(term_jd_unchecked(year, SolarTerm::YuShui)?, utc_offset_minutes),
        local_jdn(term_jd_unchecked(year, SolarTerm::ChunFen)?, utc_offset_minutes),
    ];
    let has_major = |k: i64| {
        let start = month_start_jdn(k, utc_offset_minutes);
        let end = month_start_jdn(k + 1, utc_offset_minutes);
        majors.iter().any(|d| (start..end).contains(d))
    };

    let leap_before_new_year = lunations == 13 && (!has_major(k11 + 1) || !has_major(k11 + 2));
    let k1 = if leap_before_new_year { k11 + 3 } else { k11 + 2 };
    trace!(year, lunations, leap_before_new_year, "lunar new year");
    Ok(month_start_jdn(k1, utc_offset_minutes))
}

/// Civil date (at 00:00) of the lunar New Year falling in Gregorian `year`,
/// reckoned in a zone `utc_offset_minutes` east of UTC (480 for China).
pub fn lunar_new_year(year: i32, utc_offset_minutes: i32) -> Result<CivilDateTime, SearchError> {
    check_year(year)?;
    let (y, m, d) = jdn_to_calendar(lunar_new_year_jdn(year, utc_offset_minutes)?);
    Ok(CivilDateTime::date(y, m, d))
}
