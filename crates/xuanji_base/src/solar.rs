//! Apparent geocentric longitude of the Sun.
//!
//! Low-precision series from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 25: geometric mean longitude plus equation of center, then
//! aberration and nutation in longitude. Accuracy is about 0.01 deg,
//! i.e. roughly a quarter hour of solar motion, across 1900-2100.

use xuanji_time::{DAYS_PER_CENTURY, J2000_JD};

use crate::util::normalize_360;

/// Mean motion of the Sun in degrees per day.
pub const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 360.0 / 365.242_189;

/// Geometric mean longitude, degrees [0, 360).
fn mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Mean anomaly, degrees [0, 360).
fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t)
}

/// Equation of center, degrees.
fn equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// True geometric longitude (mean equinox of date), degrees [0, 360).
pub fn sun_true_longitude_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / DAYS_PER_CENTURY;
    let m = mean_anomaly_deg(t);
    normalize_360(mean_longitude_deg(t) + equation_of_center_deg(t, m))
}

/// Apparent longitude (true equinox of date, aberration applied), degrees [0, 360).
///
/// `jd_tt` is a Julian Date in Terrestrial Time.
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / DAYS_PER_CENTURY;
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_360(sun_true_longitude_deg(jd_tt) - 0.005_69 - 0.004_78 * omega.sin())
}
