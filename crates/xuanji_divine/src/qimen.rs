//! Simplified Qimen Dunjia reading from day, hour and minute.

use serde::{Deserialize, Serialize};
use tracing::debug;
use xuanji_base::{Direction, Gate, Palace, Star};
use xuanji_time::{CivilDateTime, Clock, PartialDateTime};

use crate::error::DivinationError;
use crate::input::resolve;

/// Suffix appended to the direction name.
pub const DIRECTION_SUFFIX: &str = "大吉";

/// Palace, gate, star and favourable direction for a moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QimenReading {
    pub palace: Palace,
    pub gate: Gate,
    pub star: Star,
    /// Direction name with [`DIRECTION_SUFFIX`], e.g. "东南大吉".
    pub direction: String,
    pub timing: String,
}

impl QimenReading {
    /// The direction without its suffix.
    pub fn direction_kind(&self) -> Option<Direction> {
        Direction::from_name(self.direction.strip_suffix(DIRECTION_SUFFIX)?)
    }
}

fn timing_advice(gate: Gate) -> String {
    if gate.is_auspicious() {
        format!("{}当值，宜把握时机主动出击", gate.name())
    } else {
        format!("{}当值，宜守不宜攻，静待时机", gate.name())
    }
}

/// Reading for a resolved date-time. Only day, hour and minute take part.
///
/// palace `(d+h+min) mod 9`, gate `(2d+h+min) mod 8`,
/// star `(d+3h+min) mod 9`, direction `(d+h+min) mod 8`.
pub fn qimen_from_time(dt: &CivilDateTime) -> QimenReading {
    let d = dt.day as i64;
    let h = dt.hour as i64;
    let min = dt.minute as i64;

    let gate = Gate::from_index(2 * d + h + min);
    QimenReading {
        palace: Palace::from_index(d + h + min),
        gate,
        star: Star::from_index(d + 3 * h + min),
        direction: format!(
            "{}{}",
            Direction::from_index(d + h + min).name(),
            DIRECTION_SUFFIX
        ),
        timing: timing_advice(gate),
    }
}

/// Compute a reading; absent fields fall back to the clock.
pub fn compute_qimen(
    fields: PartialDateTime,
    clock: &dyn Clock,
) -> Result<QimenReading, DivinationError> {
    let reading = qimen_from_time(&resolve(&fields, clock)?);
    debug!(
        palace = reading.palace.name(),
        gate = reading.gate.name(),
        star = reading.star.name(),
        direction = %reading.direction,
        "qimen reading"
    );
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xuanji_time::FixedClock;

    fn at(day: u32, hour: u32, minute: u32) -> QimenReading {
        qimen_from_time(&CivilDateTime::new(2024, 1, day, hour, minute, 0.0))
    }

    #[test]
    fn known_reading() {
        // d=15 h=10 m=30: palace 55%9=1, gate 70%8=6, star 75%9=3, dir 55%8=7
        let r = at(15, 10, 30);
        assert_eq!(r.palace, Palace::Kun);
        assert_eq!(r.gate, Gate::JingFear);
        assert_eq!(r.star, Star::Fu);
        assert_eq!(r.direction, "西北大吉");
        assert_eq!(r.direction_kind(), Some(Direction::NorthWest));
        assert!(r.timing.contains("惊门"));
    }

    #[test]
    fn zero_sum_hits_first_entries() {
        // d+h+min = 9*8 = 72 -> palace 0, direction 0
        let r = at(13, 0, 59);
        assert_eq!(r.palace, Palace::Kan);
        assert_eq!(r.direction, "正北大吉");
    }

    #[test]
    fn indices_always_in_bounds() {
        for d in 1..=31 {
            for h in 0..24 {
                for m in [0, 1, 17, 30, 59] {
                    let r = at(d, h, m);
                    assert!(r.palace.index() < 9);
                    assert!(r.gate.index() < 8);
                    assert!(r.star.index() < 9);
                    assert!(r.direction_kind().is_some());
                }
            }
        }
    }

    #[test]
    fn out_of_range_minute_rejected() {
        let clock = FixedClock(CivilDateTime::new(2024, 1, 1, 0, 0, 0.0));
        let fields = PartialDateTime {
            day: Some(3),
            minute: Some(60),
            ..Default::default()
        };
        assert!(matches!(
            compute_qimen(fields, &clock),
            Err(DivinationError::InvalidInput(_))
        ));
    }

    #[test]
    fn json_field_names() {
        let v = serde_json::to_value(at(15, 10, 30)).unwrap();
        assert_eq!(v["palace"], "坤宫");
        assert_eq!(v["gate"], "惊门");
        assert_eq!(v["star"], "天辅");
        assert_eq!(v["direction"], "西北大吉");
        assert!(v["timing"].is_string());
    }
}
