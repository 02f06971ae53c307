//! Qimen Dunjia symbol tables: nine palaces, eight gates, nine stars,
//! eight directions.
//!
//! Palaces are listed in Luoshu number order (坎1 .. 离9), so
//! `ALL_PALACES[i]` is the palace numbered `i + 1`. Gates run clockwise
//! from 休门 in the north; stars follow the palace of their home seat.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// One of the nine Luoshu palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palace {
    #[serde(rename = "坎宫")]
    Kan,
    #[serde(rename = "坤宫")]
    Kun,
    #[serde(rename = "震宫")]
    Zhen,
    #[serde(rename = "巽宫")]
    Xun,
    #[serde(rename = "中宫")]
    Center,
    #[serde(rename = "乾宫")]
    Qian,
    #[serde(rename = "兑宫")]
    Dui,
    #[serde(rename = "艮宫")]
    Gen,
    #[serde(rename = "离宫")]
    Li,
}

/// Palaces in Luoshu order (index 0 = 坎 = 1).
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Center,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

const PALACE_NAMES: [&str; 9] = [
    "坎宫", "坤宫", "震宫", "巽宫", "中宫", "乾宫", "兑宫", "艮宫", "离宫",
];

/// Palaces laid out as the 3x3 board, top row first (south up).
pub const PALACE_GRID: [[Palace; 3]; 3] = [
    [Palace::Xun, Palace::Li, Palace::Kun],
    [Palace::Zhen, Palace::Center, Palace::Dui],
    [Palace::Gen, Palace::Kan, Palace::Qian],
];

impl Palace {
    /// Palace at `index` modulo 9.
    pub const fn from_index(index: i64) -> Palace {
        ALL_PALACES[index.rem_euclid(9) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Luoshu number (1..=9).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Two-character name, e.g. "坎宫".
    pub const fn name(self) -> &'static str {
        PALACE_NAMES[self as usize]
    }

    /// (row, column) on [`PALACE_GRID`].
    pub fn grid_position(self) -> (usize, usize) {
        for (r, row) in PALACE_GRID.iter().enumerate() {
            for (c, p) in row.iter().enumerate() {
                if *p == self {
                    return (r, c);
                }
            }
        }
        (1, 1)
    }

    /// Compass direction of the palace; `None` for the center.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Kan => Some(Direction::North),
            Self::Gen => Some(Direction::NorthEast),
            Self::Zhen => Some(Direction::East),
            Self::Xun => Some(Direction::SouthEast),
            Self::Li => Some(Direction::South),
            Self::Kun => Some(Direction::SouthWest),
            Self::Dui => Some(Direction::West),
            Self::Qian => Some(Direction::NorthWest),
            Self::Center => None,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Kan => Element::Water,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Qian | Self::Dui => Element::Metal,
            Self::Kun | Self::Gen | Self::Center => Element::Earth,
        }
    }

    pub fn from_name(name: &str) -> Option<Palace> {
        ALL_PALACES.into_iter().find(|p| p.name() == name)
    }
}

/// One of the eight gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    #[serde(rename = "休门")]
    Xiu,
    #[serde(rename = "生门")]
    Sheng,
    #[serde(rename = "伤门")]
    Shang,
    #[serde(rename = "杜门")]
    Du,
    #[serde(rename = "景门")]
    Jing,
    #[serde(rename = "死门")]
    Si,
    #[serde(rename = "惊门")]
    JingFear,
    #[serde(rename = "开门")]
    Kai,
}

pub const ALL_GATES: [Gate; 8] = [
    Gate::Xiu,
    Gate::Sheng,
    Gate::Shang,
    Gate::Du,
    Gate::Jing,
    Gate::Si,
    Gate::JingFear,
    Gate::Kai,
];

const GATE_NAMES: [&str; 8] = [
    "休门", "生门", "伤门", "杜门", "景门", "死门", "惊门", "开门",
];

impl Gate {
    pub const fn from_index(index: i64) -> Gate {
        ALL_GATES[index.rem_euclid(8) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        GATE_NAMES[self as usize]
    }

    /// 开休生 are the three auspicious gates; 死惊伤 the three adverse ones.
    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Kai | Self::Xiu | Self::Sheng)
    }

    pub fn from_name(name: &str) -> Option<Gate> {
        ALL_GATES.into_iter().find(|g| g.name() == name)
    }
}

/// One of the nine stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    #[serde(rename = "天蓬")]
    Peng,
    #[serde(rename = "天芮")]
    Rui,
    #[serde(rename = "天冲")]
    Chong,
    #[serde(rename = "天辅")]
    Fu,
    #[serde(rename = "天禽")]
    Qin,
    #[serde(rename = "天心")]
    Xin,
    #[serde(rename = "天柱")]
    Zhu,
    #[serde(rename = "天任")]
    Ren,
    #[serde(rename = "天英")]
    Ying,
}

/// Stars in home-palace order, so `ALL_STARS[i]` sits in `ALL_PALACES[i]`.
pub const ALL_STARS: [Star; 9] = [
    Star::Peng,
    Star::Rui,
    Star::Chong,
    Star::Fu,
    Star::Qin,
    Star::Xin,
    Star::Zhu,
    Star::Ren,
    Star::Ying,
];

const STAR_NAMES: [&str; 9] = [
    "天蓬", "天芮", "天冲", "天辅", "天禽", "天心", "天柱", "天任", "天英",
];

impl Star {
    pub const fn from_index(index: i64) -> Star {
        ALL_STARS[index.rem_euclid(9) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        STAR_NAMES[self as usize]
    }

    /// Palace the star occupies in the unrotated (fu yin) board.
    pub const fn home_palace(self) -> Palace {
        ALL_PALACES[self as usize]
    }

    pub fn from_name(name: &str) -> Option<Star> {
        ALL_STARS.into_iter().find(|s| s.name() == name)
    }
}

/// One of the eight compass directions, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "正北")]
    North,
    #[serde(rename = "东北")]
    NorthEast,
    #[serde(rename = "正东")]
    East,
    #[serde(rename = "东南")]
    SouthEast,
    #[serde(rename = "正南")]
    South,
    #[serde(rename = "西南")]
    SouthWest,
    #[serde(rename = "正西")]
    West,
    #[serde(rename = "西北")]
    NorthWest,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

const DIRECTION_NAMES: [&str; 8] = [
    "正北", "东北", "正东", "东南", "正南", "西南", "正西", "西北",
];

impl Direction {
    pub const fn from_index(index: i64) -> Direction {
        ALL_DIRECTIONS[index.rem_euclid(8) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        DIRECTION_NAMES[self as usize]
    }

    /// Compass bearing of the direction's center, degrees clockwise from north.
    pub const fn bearing_deg(self) -> u16 {
        self as u16 * 45
    }

    pub fn from_name(name: &str) -> Option<Direction> {
        ALL_DIRECTIONS.into_iter().find(|d| d.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_and_order() {
        assert_eq!(Palace::from_index(0), Palace::Kan);
        assert_eq!(Palace::from_index(8), Palace::Li);
        assert_eq!(Palace::Center.number(), 5);
        assert_eq!(Gate::from_index(7).name(), "开门");
        assert_eq!(Star::from_index(4).name(), "天禽");
        assert_eq!(Direction::from_index(8), Direction::North);
    }

    #[test]
    fn grid_covers_every_palace_once() {
        let mut seen = [false; 9];
        for row in PALACE_GRID {
            for p in row {
                assert!(!seen[p.index() as usize], "{} twice", p.name());
                seen[p.index() as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(Palace::Center.grid_position(), (1, 1));
        assert_eq!(Palace::Li.grid_position(), (0, 1));
    }

    #[test]
    fn luoshu_rows_sum_to_15() {
        for row in PALACE_GRID {
            let sum: u8 = row.iter().map(|p| p.number()).sum();
            assert_eq!(sum, 15);
        }
    }

    #[test]
    fn outer_palaces_have_directions() {
        for p in ALL_PALACES {
            assert_eq!(p.direction().is_none(), p == Palace::Center);
        }
        assert_eq!(Palace::Kun.direction(), Some(Direction::SouthWest));
    }

    #[test]
    fn star_home_palace() {
        assert_eq!(Star::Peng.home_palace(), Palace::Kan);
        assert_eq!(Star::Ying.home_palace(), Palace::Li);
    }

    #[test]
    fn gate_quality() {
        let good: Vec<_> = ALL_GATES
            .iter()
            .filter(|g| g.is_auspicious())
            .map(|g| g.name())
            .collect();
        assert_eq!(good, vec!["休门", "生门", "开门"]);
    }

    #[test]
    fn names_roundtrip() {
        for g in ALL_GATES {
            assert_eq!(Gate::from_name(g.name()), Some(g));
        }
        for s in ALL_STARS {
            assert_eq!(Star::from_name(s.name()), Some(s));
        }
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::from_name(d.name()), Some(d));
        }
        assert_eq!(Palace::from_name("中宫"), Some(Palace::Center));
    }
}
