//! Partially known date/time, as supplied by a user form.

use crate::civil_time::CivilDateTime;

/// Date/time fields any of which may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartialDateTime {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl PartialDateTime {
    /// Every field known.
    pub fn full(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
        }
    }

    /// Date known, time of day unknown.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    /// Whether year, month and day are all present.
    pub fn has_date(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Whether no field at all is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fill each missing field from `now`, field by field.
    ///
    /// The result is not validated: a known day 31 combined with a
    /// fallback 30-day month is passed through as-is.
    pub fn or_now(&self, now: &CivilDateTime) -> CivilDateTime {
        CivilDateTime::new(
            self.year.unwrap_or(now.year),
            self.month.unwrap_or(now.month),
            self.day.unwrap_or(now.day),
            self.hour.unwrap_or(now.hour),
            self.minute.unwrap_or(now.minute),
            0.0,
        )
    }

    /// The full date with a default time of day, if the date is present.
    pub fn with_default_time(&self, hour: u32, minute: u32) -> Option<CivilDateTime> {
        Some(CivilDateTime::new(
            self.year?,
            self.month?,
            self.day?,
            self.hour.unwrap_or(hour),
            self.minute.unwrap_or(minute),
            0.0,
        ))
    }
}

impl From<CivilDateTime> for PartialDateTime {
    fn from(t: CivilDateTime) -> Self {
        Self::full(t.year, t.month, t.day, t.hour, t.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_now_fills_only_missing() {
        let now = CivilDateTime::new(2024, 7, 8, 9, 10, 11.0);
        let partial = PartialDateTime {
            year: Some(1990),
            day: Some(15),
            ..Default::default()
        };
        assert_eq!(
            partial.or_now(&now),
            CivilDateTime::new(1990, 7, 15, 9, 10, 0.0)
        );
    }

    #[test]
    fn default_time_requires_date() {
        let partial = PartialDateTime {
            month: Some(6),
            day: Some(15),
            ..Default::default()
        };
        assert!(!partial.has_date());
        assert_eq!(partial.with_default_time(12, 0), None);
    }

    #[test]
    fn default_time_is_noon() {
        let partial = PartialDateTime::date(1990, 6, 15);
        assert_eq!(
            partial.with_default_time(12, 0),
            Some(CivilDateTime::new(1990, 6, 15, 12, 0, 0.0))
        );
    }

    #[test]
    fn empty_detection() {
        assert!(PartialDateTime::default().is_empty());
        assert!(!PartialDateTime::date(2000, 1, 1).is_empty());
    }
}
