//! Sexagenary (gan-zhi) cycle: the 60 stem/branch pairs.
//!
//! Pair `n` (0-based) is stem `n mod 10` with branch `n mod 12`; only
//! pairs of equal parity exist, which is why the cycle has 60 and not 120
//! members. The year epoch is CE 1984 = 甲子 (index 0).

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Reference epoch: CE 1984 = 甲子 (index 0).
pub const GANZHI_EPOCH_YEAR: i32 = 1984;

/// Offset such that `(JDN + DAY_GANZHI_OFFSET) mod 60` is the day index.
///
/// 2000-01-01 (JDN 2451545) is 戊午, index 54.
pub const DAY_GANZHI_OFFSET: i64 = 49;

/// One stem/branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanZhi {
    /// Pair at `index` modulo 60 (negative indices wrap).
    pub const fn from_index(index: i64) -> GanZhi {
        let i = index.rem_euclid(60);
        GanZhi {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Build from a stem and branch, if they share parity.
    pub fn from_parts(stem: Stem, branch: Branch) -> Option<GanZhi> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        Some(GanZhi { stem, branch })
    }

    /// 0-based position in the cycle (甲子=0 .. 癸亥=59).
    pub fn index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        // i = s + 10k with 10k = b - s (mod 12), i.e. k = 5 * (b - s) / 2 (mod 6)
        let k = (5 * (b - s) / 2).rem_euclid(6);
        (s + 10 * k) as u8
    }

    /// 1-based order in the cycle (1..=60).
    pub fn order(self) -> u8 {
        self.index() + 1
    }

    /// The pair `n` steps later (negative steps go back).
    pub fn offset(self, n: i64) -> GanZhi {
        Self::from_index(self.index() as i64 + n)
    }

    /// Two-character Chinese name, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Parse a two-character name such as "丙寅".
    pub fn from_name(name: &str) -> Option<GanZhi> {
        let mut chars = name.chars();
        let s = chars.next()?;
        let b = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let stem = Stem::from_name(s.encode_utf8(&mut [0; 4]))?;
        let branch = Branch::from_name(b.encode_utf8(&mut [0; 4]))?;
        Self::from_parts(stem, branch)
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// Gan-zhi of a (solar-boundary-adjusted) CE year.
pub fn year_ganzhi(ce_year: i32) -> GanZhi {
    GanZhi::from_index((ce_year - GANZHI_EPOCH_YEAR) as i64)
}

/// Gan-zhi of a civil day given its Julian Day Number.
pub fn day_ganzhi(jdn: i64) -> GanZhi {
    GanZhi::from_index(jdn + DAY_GANZHI_OFFSET)
}

/// Gan-zhi of the `month_offset`-th solar month (0 = 寅 month) of a year
/// whose year stem is `year_stem`.
///
/// The 寅 month stem is fixed by the year stem: 甲己 years start 丙寅,
/// 乙庚 戊寅, 丙辛 庚寅, 丁壬 壬寅, 戊癸 甲寅.
pub fn month_ganzhi(year_stem: Stem, month_offset: u8) -> GanZhi {
    let stem = Stem::from_index(year_stem.index() as i64 * 2 + 2 + month_offset as i64);
    let branch = Branch::from_index(2 + month_offset as i64);
    GanZhi { stem, branch }
}

/// Gan-zhi of the two-hour slot `branch` on a day whose stem is `day_stem`.
///
/// 甲己 days start 甲子, 乙庚 丙子, 丙辛 戊子, 丁壬 庚子, 戊癸 壬子.
pub fn hour_ganzhi(day_stem: Stem, branch: Branch) -> GanZhi {
    let stem = Stem::from_index(day_stem.index() as i64 * 2 + branch.index() as i64);
    GanZhi { stem, branch }
}
