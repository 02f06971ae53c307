//! Symbol tables and astronomical primitives for Chinese metaphysics.
//!
//! This crate provides:
//! - The five elements, ten heavenly stems, twelve earthly branches
//! - The sexagenary (gan-zhi) cycle and its year/month/day/hour rules
//! - The eight trigrams with line patterns
//! - Qimen Dunjia palace, gate, star and direction tables
//! - Apparent solar longitude (Meeus ch. 25) and new moons (Meeus ch. 49)
//!
//! Everything here is a pure function of its inputs.

pub mod branch;
pub mod element;
pub mod ganzhi;
pub mod lunation;
pub mod qimen;
pub mod solar;
pub mod stem;
pub mod trigram;
pub mod util;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, ElementTally};
pub use ganzhi::{
    DAY_GANZHI_OFFSET, GANZHI_EPOCH_YEAR, GanZhi, day_ganzhi, hour_ganzhi, month_ganzhi,
    year_ganzhi,
};
pub use lunation::{
    LUNATION_EPOCH_JDE, SYNODIC_MONTH_DAYS, lunation_number_near, mean_new_moon_jde,
    new_moon_jde, new_moon_on_or_before,
};
pub use qimen::{
    ALL_DIRECTIONS, ALL_GATES, ALL_PALACES, ALL_STARS, Direction, Gate, PALACE_GRID, Palace, Star,
};
pub use solar::{SUN_MEAN_MOTION_DEG_PER_DAY, sun_apparent_longitude_deg, sun_true_longitude_deg};
pub use stem::{ALL_STEMS, Stem};
pub use trigram::{ALL_TRIGRAMS, Trigram, TrigramLines, hexagram_lines};
pub use util::{angle_diff_deg, cyclic_number, normalize_360};
