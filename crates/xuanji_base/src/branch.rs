//! Earthly branches (di zhi), the 12-term cycle.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// The 12 earthly branches, starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Branch {
    /// Branch at `index` modulo 12 (negative indices wrap).
    pub const fn from_index(index: i64) -> Branch {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self as usize]
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self as usize]
    }

    /// Element: 寅卯 wood, 巳午 fire, 辰戌丑未 earth, 申酉 metal, 子亥 water.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Zi | Self::Hai => Element::Water,
        }
    }

    /// Branch of the two-hour slot containing `hour` (23:00-00:59 is 子).
    pub const fn from_hour(hour: u32) -> Branch {
        Self::from_index(((hour as i64 + 1) / 2) % 12)
    }

    /// Look up by Chinese character or pinyin (case-insensitive).
    pub fn from_name(name: &str) -> Option<Branch> {
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.name() == name || b.pinyin().eq_ignore_ascii_case(name))
    }
}
