//! Resolution of user-supplied date/time fields against the clock.

use xuanji_time::{CivilDateTime, Clock, PartialDateTime};

use crate::error::DivinationError;

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), DivinationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DivinationError::InvalidInput(format!(
            "{field} {value} not in {min}..={max}"
        )))
    }
}

/// Fill absent fields from `clock.now()` and range-check the result.
///
/// Only field ranges are checked (month 1-12, day 1-31, hour 0-23,
/// minute 0-59); the day is not checked against the month length because
/// the arithmetic calculators never build a calendar date from it.
pub(crate) fn resolve(
    fields: &PartialDateTime,
    clock: &dyn Clock,
) -> Result<CivilDateTime, DivinationError> {
    let dt = fields.or_now(&clock.now());
    check_range("month", dt.month, 1, 12)?;
    check_range("day", dt.day, 1, 31)?;
    check_range("hour", dt.hour, 0, 23)?;
    check_range("minute", dt.minute, 0, 59)?;
    Ok(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xuanji_time::FixedClock;

    #[test]
    fn fills_from_clock() {
        let clock = FixedClock(CivilDateTime::new(2024, 5, 6, 7, 8, 0.0));
        let dt = resolve(
            &PartialDateTime {
                day: Some(20),
                ..Default::default()
            },
            &clock,
        )
        .unwrap();
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (2024, 5, 20, 7, 8));
    }

    #[test]
    fn rejects_hour_24() {
        let clock = FixedClock(CivilDateTime::new(2024, 5, 6, 7, 8, 0.0));
        let err = resolve(
            &PartialDateTime {
                hour: Some(24),
                ..Default::default()
            },
            &clock,
        )
        .unwrap_err();
        assert!(matches!(err, DivinationError::InvalidInput(_)));
    }
}
