//! The eight trigrams (ba gua) in Early Heaven numbering.
//!
//! Numbering 乾1 兑2 离3 震4 巽5 坎6 艮7 坤8 is the traditional
//! trigram-number correspondence used to cast a hexagram from numbers;
//! the order of [`ALL_TRIGRAMS`] is therefore load-bearing.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// One of the eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    #[serde(rename = "乾")]
    Qian,
    #[serde(rename = "兑")]
    Dui,
    #[serde(rename = "离")]
    Li,
    #[serde(rename = "震")]
    Zhen,
    #[serde(rename = "巽")]
    Xun,
    #[serde(rename = "坎")]
    Kan,
    #[serde(rename = "艮")]
    Gen,
    #[serde(rename = "坤")]
    Kun,
}

/// All eight trigrams in number order (index 0 = 乾 = number 1).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

/// Line pattern of one trigram, listed top to bottom (`true` = solid).
pub type TrigramLines = [bool; 3];

impl Trigram {
    /// Trigram for number `n` in 1..=8.
    pub fn from_number(n: u8) -> Option<Trigram> {
        match n {
            1..=8 => Some(ALL_TRIGRAMS[n as usize - 1]),
            _ => None,
        }
    }

    /// Trigram `cyc8(n)`: any integer reduced onto the 1..=8 numbering, so
    /// 9 is 乾 and 0 is 坤.
    pub const fn from_cycle(n: i64) -> Trigram {
        ALL_TRIGRAMS[(n.rem_euclid(8) as usize + 7) % 8]
    }

    /// Trigram number (乾=1 .. 坤=8).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Natural image: heaven, lake, fire, thunder, wind, water, mountain, earth.
    pub const fn nature(self) -> &'static str {
        match self {
            Self::Qian => "heaven",
            Self::Dui => "lake",
            Self::Li => "fire",
            Self::Zhen => "thunder",
            Self::Xun => "wind",
            Self::Kan => "water",
            Self::Gen => "mountain",
            Self::Kun => "earth",
        }
    }

    /// Chinese natural image (天泽火雷风水山地).
    pub const fn nature_chinese(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Dui => "泽",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "风",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
        }
    }

    /// Lines top to bottom; `true` is a solid (yang) line.
    pub const fn lines(self) -> TrigramLines {
        match self {
            Self::Qian => [true, true, true],
            Self::Dui => [false, true, true],
            Self::Li => [true, false, true],
            Self::Zhen => [false, false, true],
            Self::Xun => [true, true, false],
            Self::Kan => [false, true, false],
            Self::Gen => [true, false, false],
            Self::Kun => [false, false, false],
        }
    }

    /// Lines bottom to top, the order in which hexagram lines are numbered.
    pub const fn lines_bottom_up(self) -> TrigramLines {
        let [top, mid, bottom] = self.lines();
        [bottom, mid, top]
    }

    /// Element: 乾兑 metal, 离 fire, 震巽 wood, 坎 water, 艮坤 earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }

    /// Inverse of [`lines`](Self::lines).
    pub fn from_lines(lines: TrigramLines) -> Trigram {
        ALL_TRIGRAMS
            .into_iter()
            .find(|t| t.lines() == lines)
            .unwrap_or(Trigram::Kun)
    }

    /// Look up by Chinese character.
    pub fn from_name(name: &str) -> Option<Trigram> {
        ALL_TRIGRAMS.into_iter().find(|t| t.name() == name)
    }

    /// Split a two-character hexagram name (upper then lower) into trigrams.
    pub fn split_pair(name: &str) -> Option<(Trigram, Trigram)> {
        let mut chars = name.chars();
        let upper = chars.next()?;
        let lower = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let upper = Self::from_name(upper.encode_utf8(&mut [0; 4]))?;
        let lower = Self::from_name(lower.encode_utf8(&mut [0; 4]))?;
        Some((upper, lower))
    }
}

/// The six lines of a hexagram, bottom (line 1) to top (line 6).
pub fn hexagram_lines(upper: Trigram, lower: Trigram) -> [bool; 6] {
    let [l1, l2, l3] = lower.lines_bottom_up();
    let [l4, l5, l6] = upper.lines_bottom_up();
    [l1, l2, l3, l4, l5, l6]
}
