//! The divination engine: hexagram, qimen and bazi calculators plus the
//! request and reply schema around them.
//!
//! Each calculator is a pure function of its inputs and an injected
//! [`Clock`](xuanji_time::Clock); none depends on another.

pub mod bazi;
pub mod category;
pub mod engine;
pub mod error;
pub mod hexagram;
mod input;
pub mod qimen;
pub mod request;
pub mod response;
pub mod visual;

pub use bazi::{BaziChart, DEFAULT_BIRTH_HOUR, DEFAULT_BIRTH_MINUTE, Pillar, compute_bazi};
pub use category::{ALL_CATEGORIES, Applicability, Category};
pub use engine::DivinationEngine;
pub use error::DivinationError;
pub use hexagram::{
    HexagramMode, HexagramReading, compute_hexagram, hexagram_from_numbers, hexagram_from_time,
};
pub use qimen::{DIRECTION_SUFFIX, QimenReading, compute_qimen, qimen_from_time};
pub use request::{BirthData, DivinationRequest, DivineData, DivineMethod, Gender};
pub use response::{DivinationResult, extract_json_object, parse_llm_reply};
pub use visual::VisualData;
