//! Convenience facade for the xuanji divination engine.
//!
//! Provides a global configuration and high-level functions that pick up
//! the configured zone and calendar conventions, so callers never build a
//! [`DivinationEngine`] or a clock by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use xuanji_rs::*;
//!
//! init(XuanjiConfig::load("xuanji.toml")?.apply_env()?)?;
//!
//! let birth = parse_birth("1990-05-17 14:30")?;
//! let chart = bazi_for(birth)?.expect("full date");
//! println!("day master: {}", chart.day_master.chinese());
//! ```

pub mod birth;
pub mod convenience;
pub mod error;
pub mod global;

pub use birth::{birth_from_form, parse_birth};
pub use convenience::{
    bazi_for, divine, divine_json, divine_with_clock, engine_with_clock, hexagram_at,
    hexagram_by_numbers, interpret, lunar_new_year, pillars_at, qimen_at, solar_terms, year_name,
};
pub use error::XuanjiError;
pub use global::{config, init, is_initialized};

// Re-export the types the convenience functions take and return.
pub use xuanji_base::{Element, GanZhi, Trigram};
pub use xuanji_config::{CalendarConfig, ConfigError, LoggingConfig, XuanjiConfig};
pub use xuanji_divine::{
    BaziChart, BirthData, Category, DivinationEngine, DivinationError, DivinationRequest,
    DivinationResult, DivineData, DivineMethod, Gender, HexagramReading, Pillar, QimenReading,
    VisualData,
};
pub use xuanji_search::{FourPillars, PillarConfig, SolarTerm, SolarTermEvent, YearBoundary};
pub use xuanji_time::{CivilDateTime, Clock, FixedClock, PartialDateTime, SystemClock};
