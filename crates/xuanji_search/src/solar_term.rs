//! The 24 solar terms (jie qi) and their instants.
//!
//! Each term begins when the Sun's apparent longitude reaches a multiple
//! of 15 deg. Terms are listed in Gregorian-year order starting with 小寒
//! (285 deg) in early January; even indices are the 12 sectional terms
//! (jie) that open solar months, odd indices the 12 principal terms
//! (zhongqi) that anchor lunar month numbering.

use serde::{Deserialize, Serialize};
use xuanji_base::normalize_360;
use xuanji_time::{CivilDateTime, calendar_to_jd};

use crate::error::SearchError;
use crate::search_util::find_sun_longitude;

/// Earliest civil year accepted by the calendrical searches.
pub const MIN_SUPPORTED_YEAR: i32 = 1901;
/// Latest civil year accepted by the calendrical searches.
pub const MAX_SUPPORTED_YEAR: i32 = 2099;

/// Mean spacing between consecutive terms, days.
const MEAN_TERM_DAYS: f64 = 365.242_189 / 24.0;

/// Bracket half-width around the mean-motion estimate, days.
const SEARCH_HALF_WINDOW_DAYS: f64 = 5.0;

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    #[serde(rename = "小寒")]
    XiaoHan,
    #[serde(rename = "大寒")]
    DaHan,
    #[serde(rename = "立春")]
    LiChun,
    #[serde(rename = "雨水")]
    YuShui,
    #[serde(rename = "惊蛰")]
    JingZhe,
    #[serde(rename = "春分")]
    ChunFen,
    #[serde(rename = "清明")]
    QingMing,
    #[serde(rename = "谷雨")]
    GuYu,
    #[serde(rename = "立夏")]
    LiXia,
    #[serde(rename = "小满")]
    XiaoMan,
    #[serde(rename = "芒种")]
    MangZhong,
    #[serde(rename = "夏至")]
    XiaZhi,
    #[serde(rename = "小暑")]
    XiaoShu,
    #[serde(rename = "大暑")]
    DaShu,
    #[serde(rename = "立秋")]
    LiQiu,
    #[serde(rename = "处暑")]
    ChuShu,
    #[serde(rename = "白露")]
    BaiLu,
    #[serde(rename = "秋分")]
    QiuFen,
    #[serde(rename = "寒露")]
    HanLu,
    #[serde(rename = "霜降")]
    ShuangJiang,
    #[serde(rename = "立冬")]
    LiDong,
    #[serde(rename = "小雪")]
    XiaoXue,
    #[serde(rename = "大雪")]
    DaXue,
    #[serde(rename = "冬至")]
    DongZhi,
}

/// All 24 terms in Gregorian-year order (小寒 first).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

const TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

impl SolarTerm {
    /// 0-based index (小寒=0 .. 冬至=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at `index` modulo 24.
    pub const fn from_index(index: i64) -> SolarTerm {
        ALL_SOLAR_TERMS[index.rem_euclid(24) as usize]
    }

    pub const fn name(self) -> &'static str {
        TERM_NAMES[self as usize]
    }

    /// Apparent solar longitude at which the term begins, degrees.
    pub fn longitude_deg(self) -> f64 {
        normalize_360(285.0 + 15.0 * self.index() as f64)
    }

    /// Principal term (zhongqi): 大寒, 雨水, 春分 ... 冬至.
    pub const fn is_major(self) -> bool {
        self.index() % 2 == 1
    }

    pub fn from_name(name: &str) -> Option<SolarTerm> {
        ALL_SOLAR_TERMS.into_iter().find(|t| t.name() == name)
    }
}

/// A located solar term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Instant the term begins, JD (UT).
    pub jd_ut: f64,
}

impl SolarTermEvent {
    /// Civil time of the term in a zone `utc_offset_minutes` east of UTC.
    pub fn local_time(&self, utc_offset_minutes: i32) -> CivilDateTime {
        CivilDateTime::from_jd_ut(self.jd_ut, utc_offset_minutes)
    }
}

pub(crate) fn check_year(year: i32) -> Result<(), SearchError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(SearchError::OutOfRange {
            year,
            min: MIN_SUPPORTED_YEAR,
            max: MAX_SUPPORTED_YEAR,
        })
    }
}

/// Term instant without the supported-range check. Neighbouring years
/// (e.g. the previous winter solstice) are needed internally.
pub(crate) fn term_jd_unchecked(year: i32, term: SolarTerm) -> Result<f64, SearchError> {
    // 小寒 falls on January 5-6 throughout 1900-2100.
    let estimate = calendar_to_jd(year, 1, 6.0) + term.index() as f64 * MEAN_TERM_DAYS;
    find_sun_longitude(term.longitude_deg(), estimate, SEARCH_HALF_WINDOW_DAYS)
}

/// UT Julian Date at which `term` begins in Gregorian `year`.
pub fn solar_term_jd(year: i32, term: SolarTerm) -> Result<f64, SearchError> {
    check_year(year)?;
    term_jd_unchecked(year, term)
}

/// All 24 terms of Gregorian `year`, in chronological order.
pub fn solar_terms_for_year(year: i32) -> Result<Vec<SolarTermEvent>, SearchError> {
    check_year(year)?;
    ALL_SOLAR_TERMS
        .into_iter()
        .map(|term| {
            Ok(SolarTermEvent {
                term,
                jd_ut: term_jd_unchecked(year, term)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_util::sun_longitude_at_ut;
    use xuanji_base::angle_diff_deg;

    #[test]
    fn longitudes_step_by_15() {
        assert_eq!(SolarTerm::XiaoHan.longitude_deg(), 285.0);
        assert_eq!(SolarTerm::LiChun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::ChunFen.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::DongZhi.longitude_deg(), 270.0);
    }

    #[test]
    fn twelve_major_terms() {
        let majors: Vec<_> = ALL_SOLAR_TERMS.iter().filter(|t| t.is_major()).collect();
        assert_eq!(majors.len(), 12);
        assert!(SolarTerm::DongZhi.is_major());
        assert!(SolarTerm::ChunFen.is_major());
        assert!(!SolarTerm::LiChun.is_major());
    }

    #[test]
    fn found_instant_hits_target() {
        let jd = solar_term_jd(2024, SolarTerm::QiuFen).unwrap();
        let lon = sun_longitude_at_ut(jd);
        assert!(angle_diff_deg(lon, 180.0).abs() < 1e-5, "lon = {lon}");
    }

    #[test]
    fn year_terms_are_increasing() {
        let terms = solar_terms_for_year(2030).unwrap();
        assert_eq!(terms.len(), 24);
        for w in terms.windows(2) {
            let gap = w[1].jd_ut - w[0].jd_ut;
            assert!((14.0..16.5).contains(&gap), "gap {gap} at {}", w[1].term.name());
        }
    }

    #[test]
    fn out_of_range_years() {
        assert!(matches!(
            solar_term_jd(1900, SolarTerm::LiChun),
            Err(SearchError::OutOfRange { year: 1900, .. })
        ));
        assert!(solar_terms_for_year(2100).is_err());
        assert!(solar_term_jd(2099, SolarTerm::DongZhi).is_ok());
    }

    #[test]
    fn name_roundtrip() {
        for t in ALL_SOLAR_TERMS {
            assert_eq!(SolarTerm::from_name(t.name()), Some(t));
        }
    }
}
