//! High-level functions using the global configuration and the wall
//! clock in the configured zone.

use xuanji_base::{GanZhi, year_ganzhi};
use xuanji_divine::{
    BaziChart, DivinationEngine, DivinationRequest, DivinationResult, HexagramMode,
    HexagramReading, QimenReading, VisualData, compute_bazi, compute_hexagram, compute_qimen,
    hexagram_from_numbers,
};
use xuanji_search::{FourPillars, SolarTermEvent, four_pillars, solar_terms_for_year};
use xuanji_time::{CivilDateTime, Clock, PartialDateTime, SystemClock};

use crate::error::XuanjiError;
use crate::global::config;

fn system_clock() -> Result<SystemClock, XuanjiError> {
    Ok(SystemClock::new(config().calendar.utc_offset_minutes)?)
}

/// Engine over the global calendar settings and an explicit clock.
pub fn engine_with_clock<C: Clock>(clock: C) -> DivinationEngine<C> {
    DivinationEngine::new(clock, config().pillar_config())
}

/// Cast a hexagram from two positive seed numbers.
pub fn hexagram_by_numbers(n1: i64, n2: i64) -> Result<HexagramReading, XuanjiError> {
    Ok(hexagram_from_numbers(n1, n2)?)
}

/// Cast a hexagram from time fields; missing ones are taken from now.
pub fn hexagram_at(fields: PartialDateTime) -> Result<HexagramReading, XuanjiError> {
    Ok(compute_hexagram(HexagramMode::Time(fields), &system_clock()?)?)
}

/// Qimen reading for time fields; missing ones are taken from now.
pub fn qimen_at(fields: PartialDateTime) -> Result<QimenReading, XuanjiError> {
    Ok(compute_qimen(fields, &system_clock()?)?)
}

/// Bazi chart; `None` unless year, month and day are known.
pub fn bazi_for(birth: PartialDateTime) -> Result<Option<BaziChart>, XuanjiError> {
    Ok(compute_bazi(birth, &config().pillar_config())?)
}

/// Four pillars of a local civil date-time.
pub fn pillars_at(datetime: &CivilDateTime) -> Result<FourPillars, XuanjiError> {
    Ok(four_pillars(datetime, &config().pillar_config())?)
}

/// The 24 solar terms of a civil year.
pub fn solar_terms(year: i32) -> Result<Vec<SolarTermEvent>, XuanjiError> {
    Ok(solar_terms_for_year(year)?)
}

/// Local civil date of the lunar New Year in the configured zone.
pub fn lunar_new_year(year: i32) -> Result<CivilDateTime, XuanjiError> {
    Ok(xuanji_search::lunar_new_year(
        year,
        config().calendar.utc_offset_minutes,
    )?)
}

/// Sexagenary name of a year (1984 = 甲子).
pub fn year_name(year: i32) -> GanZhi {
    year_ganzhi(year)
}

/// Compute the charts a request's category needs.
pub fn divine(request: &DivinationRequest) -> Result<VisualData, XuanjiError> {
    divine_with_clock(request, system_clock()?)
}

pub fn divine_with_clock<C: Clock>(
    request: &DivinationRequest,
    clock: C,
) -> Result<VisualData, XuanjiError> {
    Ok(engine_with_clock(clock).visual_data(request)?)
}

/// Parse a request from JSON and compute its charts.
pub fn divine_json(request_json: &str) -> Result<VisualData, XuanjiError> {
    let request: DivinationRequest = serde_json::from_str(request_json)?;
    divine(&request)
}

/// Compute charts and merge them with the interpreter's raw reply.
pub fn interpret(
    request: &DivinationRequest,
    reply_text: &str,
) -> Result<DivinationResult, XuanjiError> {
    Ok(engine_with_clock(system_clock()?).interpret(request, reply_text)?)
}
