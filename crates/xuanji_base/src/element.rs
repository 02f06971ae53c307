//! The five elements (wu xing) and elemental tallies.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating-cycle order (wood feeds fire ...).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Lowercase English key, as used in serialized charts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generating-cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The element this one generates (wood -> fire -> earth -> metal -> water -> wood).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element this one overcomes (wood -> earth -> water -> fire -> metal -> wood).
    pub const fn overcomes(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }

    /// Look up by English key (case-insensitive) or Chinese character.
    pub fn from_name(name: &str) -> Option<Element> {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name) || e.chinese() == name)
    }
}

/// Per-element occurrence counts.
///
/// Serializes as `{"wood": n, "fire": n, "earth": n, "metal": n, "water": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementTally {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl ElementTally {
    /// Increment the bucket for `element`.
    pub fn add(&mut self, element: Element) {
        *self.get_mut(element) += 1;
    }

    /// Count for `element`.
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn get_mut(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Sum over all five buckets.
    pub fn total(&self) -> u32 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// Elements with a zero count, in cycle order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|e| self.get(*e) == 0)
            .collect()
    }

    /// The element with the highest count; ties go to the earlier element.
    pub fn dominant(&self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .fold(Element::Wood, |best, e| {
                if self.get(e) > self.get(best) { e } else { best }
            })
    }
}

impl FromIterator<Element> for ElementTally {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut tally = Self::default();
        for e in iter {
            tally.add(e);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn overcoming_cycle() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
    }

    #[test]
    fn from_name_both_scripts() {
        assert_eq!(Element::from_name("Metal"), Some(Element::Metal));
        assert_eq!(Element::from_name("水"), Some(Element::Water));
        assert_eq!(Element::from_name("aether"), None);
    }

    #[test]
    fn tally_counts() {
        let tally: ElementTally = [Element::Fire, Element::Fire, Element::Water]
            .into_iter()
            .collect();
        assert_eq!(tally.fire, 2);
        assert_eq!(tally.water, 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.dominant(), Element::Fire);
        assert_eq!(
            tally.missing(),
            vec![Element::Wood, Element::Earth, Element::Metal]
        );
    }

    #[test]
    fn tally_serializes_with_lowercase_keys() {
        let tally: ElementTally = [Element::Wood].into_iter().collect();
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(
            json,
            r#"{"wood":1,"fire":0,"earth":0,"metal":0,"water":0}"#
        );
        assert_eq!(serde_json::to_string(&Element::Earth).unwrap(), r#""earth""#);
    }
}
