//! Local civil date/time with sub-second precision.
//!
//! `CivilDateTime` is the canonical wall-clock representation used
//! throughout the workspace. It carries no zone of its own; conversions to
//! and from Julian Date take the UTC offset explicitly.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jdn_to_calendar};

/// Civil calendar date-time in some local zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Construct and validate in one step.
    pub fn checked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let t = Self::new(year, month, day, hour, minute, second);
        t.validate()?;
        Ok(t)
    }

    /// Check every field against the proleptic Gregorian calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidField {
                field: "month",
                value: self.month as i64,
            });
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidField {
                field: "day",
                value: self.day as i64,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidField {
                field: "hour",
                value: self.hour as i64,
            });
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidField {
                field: "minute",
                value: self.minute as i64,
            });
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidField {
                field: "second",
                value: self.second as i64,
            });
        }
        Ok(())
    }

    /// Fractional hours since local midnight.
    pub fn hours_of_day(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Convert to a Julian Date in UT, given the zone's offset from UTC.
    pub fn to_jd_ut(&self, utc_offset_minutes: i32) -> f64 {
        let day_frac = self.day as f64
            + (self.hours_of_day() - utc_offset_minutes as f64 / 60.0) / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a Julian Date in UT back to civil time in the given zone.
    ///
    /// The result is rounded to the millisecond so that values produced by
    /// [`to_jd_ut`](Self::to_jd_ut) come back with whole seconds intact.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_minutes: i32) -> Self {
        let local = jd_ut + 0.5 + utc_offset_minutes as f64 / 1440.0;
        let ms_total = (local * 86_400_000.0).round() as i64;
        let jdn = ms_total.div_euclid(86_400_000);
        let ms_of_day = ms_total.rem_euclid(86_400_000);
        let (year, month, day) = jdn_to_calendar(jdn);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Integer Julian Day Number of the civil date (ignores time of day).
    pub fn julian_day_number(&self) -> i64 {
        crate::julian::julian_day_number(self.year, self.month, self.day)
    }

    /// The same civil time shifted by whole days.
    pub fn add_days(&self, days: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(self.julian_day_number() + days);
        Self {
            year,
            month,
            day,
            ..*self
        }
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 / 1e9;
        Self::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), second)
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` and `YYYY-MM-DDThh:mm:ss`
    /// (a space may replace the `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for fmt in [
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt.into());
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|d| Self::date(d.year(), d.month(), d.day()))
            .map_err(|_| TimeError::Parse(s.to_string()))
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilDateTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = CivilDateTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00");
    }

    #[test]
    fn parse_formats() {
        let full: CivilDateTime = "1990-06-15T14:30:05".parse().unwrap();
        assert_eq!(full, CivilDateTime::new(1990, 6, 15, 14, 30, 5.0));
        let short: CivilDateTime = "1990-06-15 14:30".parse().unwrap();
        assert_eq!(short, CivilDateTime::new(1990, 6, 15, 14, 30, 0.0));
        let date: CivilDateTime = "1990-06-15".parse().unwrap();
        assert_eq!(date, CivilDateTime::date(1990, 6, 15));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "15/06/1990".parse::<CivilDateTime>(),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn validate_rejects_feb_30() {
        let err = CivilDateTime::checked(2023, 2, 30, 0, 0, 0.0).unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidField {
                field: "day",
                value: 30
            }
        );
    }

    #[test]
    fn validate_rejects_hour_24() {
        assert!(CivilDateTime::checked(2023, 2, 3, 24, 0, 0.0).is_err());
        assert!(CivilDateTime::checked(2023, 2, 3, 23, 59, 59.5).is_ok());
    }

    #[test]
    fn jd_roundtrip_with_offset() {
        let t = CivilDateTime::new(2024, 2, 10, 0, 30, 0.0);
        let jd = t.to_jd_ut(480);
        // 00:30 at UTC+8 is 16:30 UTC on the previous day
        let utc = CivilDateTime::from_jd_ut(jd, 0);
        assert_eq!(utc, CivilDateTime::new(2024, 2, 9, 16, 30, 0.0));
        assert_eq!(CivilDateTime::from_jd_ut(jd, 480), t);
    }

    #[test]
    fn add_days_crosses_year() {
        let t = CivilDateTime::new(2023, 12, 31, 23, 15, 0.0);
        assert_eq!(t.add_days(1), CivilDateTime::new(2024, 1, 1, 23, 15, 0.0));
        assert_eq!(t.add_days(-365), CivilDateTime::new(2022, 12, 31, 23, 15, 0.0));
    }
}
