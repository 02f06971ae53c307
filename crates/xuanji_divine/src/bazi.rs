//! Four Pillars (bazi) chart with day master and element balance.

use serde::{Deserialize, Serialize};
use tracing::debug;
use xuanji_base::{Branch, Element, ElementTally, GanZhi, Stem};
use xuanji_search::{FourPillars, PillarConfig, four_pillars};
use xuanji_time::PartialDateTime;

use crate::error::DivinationError;

/// Hour assumed when the birth hour is unknown.
pub const DEFAULT_BIRTH_HOUR: u32 = 12;
/// Minute assumed when the birth minute is unknown.
pub const DEFAULT_BIRTH_MINUTE: u32 = 0;

/// One pillar as rendered in a chart. `element` is the stem's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub heavenly_stem: Stem,
    pub earthly_branch: Branch,
    pub element: Element,
}

impl From<GanZhi> for Pillar {
    fn from(gz: GanZhi) -> Self {
        Self {
            heavenly_stem: gz.stem,
            earthly_branch: gz.branch,
            element: gz.stem.element(),
        }
    }
}

/// A complete four-pillar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Element of the day stem.
    pub day_master: Element,
    /// One count per stem and per branch: always sums to 8.
    pub element_balance: ElementTally,
}

impl BaziChart {
    pub fn from_pillars(p: &FourPillars) -> Self {
        let element_balance = p
            .stems()
            .iter()
            .map(|s| s.element())
            .chain(p.branches().iter().map(|b| b.element()))
            .collect();
        Self {
            year: p.year.into(),
            month: p.month.into(),
            day: p.day.into(),
            hour: p.hour.into(),
            day_master: p.day.stem.element(),
            element_balance,
        }
    }

    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Compute a chart from birth fields.
///
/// Returns `Ok(None)` when year, month or day is absent: a chart is never
/// built from "now". Hour and minute default to 12:00.
pub fn compute_bazi(
    birth: PartialDateTime,
    config: &PillarConfig,
) -> Result<Option<BaziChart>, DivinationError> {
    let Some(dt) = birth.with_default_time(DEFAULT_BIRTH_HOUR, DEFAULT_BIRTH_MINUTE) else {
        debug!(?birth, "bazi skipped: incomplete birth date");
        return Ok(None);
    };
    let chart = BaziChart::from_pillars(&four_pillars(&dt, config)?);
    debug!(
        %dt,
        day_master = chart.day_master.name(),
        "bazi chart"
    );
    Ok(Some(chart))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(year: i32, month: u32, day: u32, hour: Option<u32>) -> BaziChart {
        let birth = PartialDateTime {
            hour,
            ..PartialDateTime::date(year, month, day)
        };
        compute_bazi(birth, &PillarConfig::default())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn missing_year_is_none() {
        let birth = PartialDateTime {
            month: Some(6),
            day: Some(15),
            ..Default::default()
        };
        assert_eq!(compute_bazi(birth, &PillarConfig::default()).unwrap(), None);
    }

    #[test]
    fn missing_day_is_none() {
        let birth = PartialDateTime {
            year: Some(1990),
            month: Some(6),
            ..Default::default()
        };
        assert_eq!(compute_bazi(birth, &PillarConfig::default()).unwrap(), None);
    }

    #[test]
    fn defaults_to_noon() {
        let c = chart(2000, 1, 1, None);
        assert_eq!(c.hour.earthly_branch, Branch::Wu);
        assert_eq!(c.hour.heavenly_stem, Stem::Wu);
    }

    #[test]
    fn millennium_chart() {
        let c = chart(2000, 1, 1, Some(12));
        // 己卯 丙子 戊午 戊午
        assert_eq!(c.year.heavenly_stem, Stem::Ji);
        assert_eq!(c.month.earthly_branch, Branch::Zi);
        assert_eq!(c.day.heavenly_stem, Stem::Wu);
        assert_eq!(c.day_master, Element::Earth);
        // stems: earth fire earth earth; branches: wood water fire fire
        let b = c.element_balance;
        assert_eq!((b.wood, b.fire, b.earth, b.metal, b.water), (1, 3, 3, 0, 1));
    }

    #[test]
    fn balance_always_sums_to_eight() {
        for (y, m, d) in [(1901, 3, 1), (1955, 7, 19), (1999, 12, 31), (2099, 6, 6)] {
            for h in [0, 5, 11, 17, 23] {
                let c = chart(y, m, d, Some(h));
                assert_eq!(c.element_balance.total(), 8);
                assert_eq!(c.day_master, c.day.heavenly_stem.element());
            }
        }
    }

    #[test]
    fn pillar_element_is_stem_element() {
        let c = chart(1988, 8, 8, Some(8));
        for p in c.pillars() {
            assert_eq!(p.element, p.heavenly_stem.element());
        }
    }

    #[test]
    fn out_of_range_propagates() {
        let err = compute_bazi(PartialDateTime::date(1850, 1, 1), &PillarConfig::default())
            .unwrap_err();
        assert!(matches!(err, DivinationError::CalendricalRange(_)));
    }

    #[test]
    fn invalid_date_is_invalid_input() {
        let err = compute_bazi(PartialDateTime::date(2023, 2, 30), &PillarConfig::default())
            .unwrap_err();
        assert!(matches!(err, DivinationError::InvalidInput(_)));
    }

    #[test]
    fn json_shape() {
        let v = serde_json::to_value(chart(2000, 1, 1, Some(12))).unwrap();
        assert_eq!(v["year"]["heavenlyStem"], "己");
        assert_eq!(v["year"]["earthlyBranch"], "卯");
        assert_eq!(v["year"]["element"], "earth");
        assert_eq!(v["dayMaster"], "earth");
        assert_eq!(v["elementBalance"]["fire"], 3);
    }
}
