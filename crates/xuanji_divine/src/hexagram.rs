//! Plum-blossom (mei hua) hexagram casting.
//!
//! Two seeds pick the upper and lower trigram by `cyc8`, a third sum picks
//! the changing line by `cyc6`. The resulting hexagram is
//!
//! ```text
//! resultUpper = cyc8(lower + 1)  if changing <= 3, else upper
//! resultLower = cyc8(upper + 1)  if changing >  3, else lower
//! ```
//!
//! Trigram numbers follow [`ALL_TRIGRAMS`](xuanji_base::ALL_TRIGRAMS).

use serde::{Deserialize, Serialize};
use tracing::debug;
use xuanji_base::{Trigram, cyclic_number, hexagram_lines};
use xuanji_time::{CivilDateTime, Clock, PartialDateTime};

use crate::error::DivinationError;
use crate::input::resolve;

/// How the hexagram is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexagramMode {
    /// Two positive integers chosen by the querent.
    Number { n1: i64, n2: i64 },
    /// A date-time; absent fields fall back to the clock.
    Time(PartialDateTime),
}

/// A cast hexagram with its transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramReading {
    pub upper: Trigram,
    pub lower: Trigram,
    /// Changing line, 1 (bottom) ..= 6 (top).
    pub changing: u8,
    /// Resulting hexagram as upper then lower trigram name, e.g. "兑乾".
    pub result: String,
    pub interpretation: String,
}

impl HexagramReading {
    /// Resulting hexagram's (upper, lower) trigrams.
    pub fn result_trigrams(&self) -> Option<(Trigram, Trigram)> {
        Trigram::split_pair(&self.result)
    }

    /// Primary hexagram lines, bottom to top.
    pub fn lines(&self) -> [bool; 6] {
        hexagram_lines(self.upper, self.lower)
    }
}

fn interpretation(upper: Trigram, lower: Trigram, changing: u8, result: &str) -> String {
    format!(
        "本卦上{}下{}（{}{}），第{}爻动，变卦为{}",
        upper.name(),
        lower.name(),
        upper.nature_chinese(),
        lower.nature_chinese(),
        changing,
        result
    )
}

/// Assemble a reading from raw upper/lower seeds and a changing-line seed.
fn cast(upper_seed: i64, lower_seed: i64, changing_seed: i64) -> HexagramReading {
    let upper = Trigram::from_cycle(upper_seed);
    let lower = Trigram::from_cycle(lower_seed);
    let changing = cyclic_number(changing_seed, 6) as u8;

    let u = upper.number() as i64;
    let l = lower.number() as i64;
    let result_upper = if changing <= 3 { Trigram::from_cycle(l + 1) } else { upper };
    let result_lower = if changing > 3 { Trigram::from_cycle(u + 1) } else { lower };
    let result = format!("{}{}", result_upper.name(), result_lower.name());

    HexagramReading {
        interpretation: interpretation(upper, lower, changing, &result),
        upper,
        lower,
        changing,
        result,
    }
}

/// Number mode: upper `cyc8(n1)`, lower `cyc8(n2)`, changing `cyc6(n1 + n2)`.
///
/// Any positive `i64` is a valid seed; the sum is taken modulo 6 term by
/// term so it never overflows.
pub fn hexagram_from_numbers(n1: i64, n2: i64) -> Result<HexagramReading, DivinationError> {
    if n1 <= 0 || n2 <= 0 {
        return Err(DivinationError::InvalidInput(format!(
            "hexagram seeds must be positive, got {n1} and {n2}"
        )));
    }
    Ok(cast(n1, n2, n1.rem_euclid(6) + n2.rem_euclid(6)))
}

/// Time mode over a resolved date-time.
///
/// Upper `cyc8(y+m+d+min)`, lower `cyc8(y+m+d+h+min)`, changing
/// `cyc6(y+m+d+h+min)`.
pub fn hexagram_from_time(dt: &CivilDateTime) -> HexagramReading {
    let ymd = dt.year as i64 + dt.month as i64 + dt.day as i64;
    let h = dt.hour as i64;
    let min = dt.minute as i64;
    cast(ymd + min, ymd + h + min, ymd + h + min)
}

/// Cast a hexagram in either mode.
pub fn compute_hexagram(
    mode: HexagramMode,
    clock: &dyn Clock,
) -> Result<HexagramReading, DivinationError> {
    let reading = match mode {
        HexagramMode::Number { n1, n2 } => hexagram_from_numbers(n1, n2)?,
        HexagramMode::Time(fields) => hexagram_from_time(&resolve(&fields, clock)?),
    };
    debug!(
        ?mode,
        upper = reading.upper.name(),
        lower = reading.lower.name(),
        changing = reading.changing,
        result = %reading.result,
        "hexagram cast"
    );
    Ok(reading)
}
