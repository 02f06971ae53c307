//! Injectable "current time" providers.
//!
//! Calculators never read the wall clock themselves; callers hand them a
//! [`Clock`]. Production code uses [`SystemClock`], tests use
//! [`FixedClock`].

use chrono::{FixedOffset, Offset, Utc};

use crate::civil_time::CivilDateTime;
use crate::error::TimeError;

/// Source of the current civil time.
pub trait Clock {
    /// Current civil time in the clock's zone.
    fn now(&self) -> CivilDateTime;
}

/// Wall clock shifted into a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Wall clock in the zone `utc_offset_minutes` east of UTC.
    pub fn new(utc_offset_minutes: i32) -> Result<Self, TimeError> {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
            .ok_or(TimeError::InvalidOffset(utc_offset_minutes))?;
        Ok(Self { offset })
    }

    /// Offset from UTC in minutes.
    pub fn utc_offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> CivilDateTime {
        Utc::now().with_timezone(&self.offset).naive_local().into()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub CivilDateTime);

impl Clock for FixedClock {
    fn now(&self) -> CivilDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> CivilDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_fixed() {
        let t = CivilDateTime::new(2024, 5, 1, 9, 15, 0.0);
        let clock = FixedClock(t);
        assert_eq!(clock.now(), t);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_offset() {
        let clock = SystemClock::new(480).unwrap();
        assert_eq!(clock.utc_offset_minutes(), 480);
        let now = clock.now();
        assert!(now.validate().is_ok(), "{now}");
    }

    #[test]
    fn system_clock_rejects_absurd_offset() {
        assert_eq!(
            SystemClock::new(24 * 60),
            Err(TimeError::InvalidOffset(1440))
        );
    }
}
