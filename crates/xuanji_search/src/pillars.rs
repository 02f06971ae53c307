//! Gregorian date-time to the four sexagenary pillars (si zhu).
//!
//! - Year: 60-year cycle from 1984 = 甲子, switching either at the lunar
//!   New Year or at 立春, per [`YearBoundary`].
//! - Month: solar month opened by the sectional terms, 寅 month first at
//!   立春 (315 deg); stem keyed to the 立春-year stem.
//! - Day: continuous 60-day count, `(JDN + 49) mod 60`.
//! - Hour: two-hour branch slots; stem keyed to the day stem. From 23:00
//!   the hour stem follows the next day (late 子 hour).

use serde::{Deserialize, Serialize};
use tracing::debug;
use xuanji_base::{
    Branch, GanZhi, Stem, day_ganzhi, hour_ganzhi, month_ganzhi, normalize_360, year_ganzhi,
};
use xuanji_time::CivilDateTime;

use crate::error::SearchError;
use crate::lunar_year::lunar_new_year_jdn;
use crate::search_util::sun_longitude_at_ut;
use crate::solar_term::{SolarTerm, check_year};

/// Where the sexagenary year changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBoundary {
    /// First day of lunar month 1 (popular almanac convention).
    #[default]
    LunarNewYear,
    /// The 立春 solar term (astrological convention).
    Lichun,
}

impl YearBoundary {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LunarNewYear => "lunar_new_year",
            Self::Lichun => "lichun",
        }
    }

    /// Accepts `lunar_new_year`/`lunar-new-year`/`春节` or `lichun`/`立春`.
    pub fn from_name(name: &str) -> Option<YearBoundary> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "lunar_new_year" | "lunar" | "春节" => Some(Self::LunarNewYear),
            "lichun" | "立春" => Some(Self::Lichun),
            _ => None,
        }
    }
}

/// Calendar conventions for pillar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarConfig {
    /// Zone of the input civil time, minutes east of UTC.
    pub utc_offset_minutes: i32,
    pub year_boundary: YearBoundary,
    /// Whether 23:00 starts the next day's day pillar as well as its hour stem.
    pub zi_hour_starts_day: bool,
}

impl Default for PillarConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 480,
            year_boundary: YearBoundary::LunarNewYear,
            zi_hour_starts_day: false,
        }
    }
}

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(|p| p.stem)
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(|p| p.branch)
    }
}

/// Solar month offset (0 = 寅 .. 11 = 丑) from the Sun's apparent longitude.
pub fn solar_month_offset(sun_longitude_deg: f64) -> u8 {
    let from_lichun = normalize_360(sun_longitude_deg - SolarTerm::LiChun.longitude_deg());
    ((from_lichun / 30.0).floor() as u8).min(11)
}

/// Convert a local civil date-time to its four pillars.
pub fn four_pillars(
    datetime: &CivilDateTime,
    config: &PillarConfig,
) -> Result<FourPillars, SearchError> {
    datetime.validate()?;
    check_year(datetime.year)?;

    let offset = config.utc_offset_minutes;
    let jd_ut = datetime.to_jd_ut(offset);
    let month_offset = solar_month_offset(sun_longitude_at_ut(jd_ut));

    // 子 and 丑 months straddle January; they belong to the previous solar year.
    let solar_year = if datetime.month <= 6 && month_offset >= 10 {
        datetime.year - 1
    } else {
        datetime.year
    };

    let jdn = datetime.julian_day_number();
    let pillar_year = match config.year_boundary {
        YearBoundary::Lichun => solar_year,
        YearBoundary::LunarNewYear => {
            if jdn >= lunar_new_year_jdn(datetime.year, offset)? {
                datetime.year
            } else {
                datetime.year - 1
            }
        }
    };

    let late_zi = datetime.hour >= 23;
    let next_day = i64::from(late_zi);
    let day_jdn = if config.zi_hour_starts_day {
        jdn + next_day
    } else {
        jdn
    };

    let pillars = FourPillars {
        year: year_ganzhi(pillar_year),
        month: month_ganzhi(year_ganzhi(solar_year).stem, month_offset),
        day: day_ganzhi(day_jdn),
        hour: hour_ganzhi(
            day_ganzhi(jdn + next_day).stem,
            Branch::from_hour(datetime.hour),
        ),
    };
    debug!(
        %datetime,
        year = %pillars.year,
        month = %pillars.month,
        day = %pillars.day,
        hour = %pillars.hour,
        boundary = config.year_boundary.name(),
        "four pillars"
    );
    Ok(pillars)
}
