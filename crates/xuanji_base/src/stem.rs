//! Heavenly stems (tian gan), the 10-term cycle.
//!
//! Order is load-bearing: index 0 = 甲 is the start of every sexagenary
//! count, and element/polarity follow from the index.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All 10 stems in order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// Stem at `index` modulo 10 (negative indices wrap).
    pub const fn from_index(index: i64) -> Stem {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self as usize]
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        STEM_PINYIN[self as usize]
    }

    /// Element: 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Yang stems sit at even indices.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Look up by Chinese character or pinyin (case-insensitive).
    pub fn from_name(name: &str) -> Option<Stem> {
        ALL_STEMS
            .into_iter()
            .find(|s| s.name() == name || s.pinyin().eq_ignore_ascii_case(name))
    }
}
