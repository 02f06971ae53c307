//! Divination categories and which calculators each one draws on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A question category offered to the querent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// 事业运势
    Career,
    /// 情感婚姻
    Love,
    /// 健康养生
    Health,
    /// 风水布局
    FengShui,
    /// 综合占卜
    #[default]
    General,
}

pub const ALL_CATEGORIES: [Category; 5] = [
    Category::Career,
    Category::Love,
    Category::Health,
    Category::FengShui,
    Category::General,
];

/// Which charts a category needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicability {
    pub needs_hexagram: bool,
    pub needs_qimen: bool,
    pub needs_bazi: bool,
    pub needs_ziwei: bool,
    pub needs_fengshui: bool,
}

const fn needs(hexagram: bool, qimen: bool, bazi: bool, ziwei: bool, fengshui: bool) -> Applicability {
    Applicability {
        needs_hexagram: hexagram,
        needs_qimen: qimen,
        needs_bazi: bazi,
        needs_ziwei: ziwei,
        needs_fengshui: fengshui,
    }
}

// Indexed by Category discriminant.
const APPLICABILITY: [Applicability; 5] = [
    needs(true, true, true, true, false),
    needs(true, false, true, true, false),
    needs(false, false, true, true, false),
    needs(false, false, true, false, true),
    needs(true, true, true, true, true),
];

impl Category {
    /// Chinese title, also the wire value.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Career => "事业运势",
            Self::Love => "情感婚姻",
            Self::Health => "健康养生",
            Self::FengShui => "风水布局",
            Self::General => "综合占卜",
        }
    }

    /// English key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Love => "love",
            Self::Health => "health",
            Self::FengShui => "fengshui",
            Self::General => "general",
        }
    }

    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Career => "Career & Fortune",
            Self::Love => "Love & Marriage",
            Self::Health => "Health & Wellness",
            Self::FengShui => "Feng Shui Layout",
            Self::General => "General Divination",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Career => "Timing of career moves, workplace decisions and investments",
            Self::Love => "Compatibility, the course of a relationship and marriage harmony",
            Self::Health => "Constitutional weak points and seasonal wellness advice",
            Self::FengShui => "Favourable directions and arrangement of living spaces",
            Self::General => "Any question, answered with the best-suited methods",
        }
    }

    pub const fn applicability(self) -> Applicability {
        APPLICABILITY[self as usize]
    }

    /// Parse a Chinese title or English key; anything else is [`General`](Self::General).
    pub fn parse(s: &str) -> Category {
        let s = s.trim();
        ALL_CATEGORIES
            .into_iter()
            .find(|c| c.title() == s || c.key().eq_ignore_ascii_case(s))
            .unwrap_or_default()
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.title())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Category::parse(&s))
    }
}
