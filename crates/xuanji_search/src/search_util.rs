//! Shared numeric helpers for boundary search.

use xuanji_base::{angle_diff_deg, sun_apparent_longitude_deg};
use xuanji_time::{jd_tt_to_ut, jd_ut_to_tt};

use crate::error::SearchError;

/// Convergence tolerance in days (~9 ms).
pub(crate) const CONVERGENCE_DAYS: f64 = 1e-7;

/// Iteration cap for bisection; a 10-day bracket halved 60 times is far below tolerance.
pub(crate) const MAX_ITERATIONS: u32 = 60;

/// Bisect `f` for a sign change between `t_a` and `t_b`.
///
/// `f` must be continuous on the bracket with `f(t_a)` and `f(t_b)` of
/// opposite sign (or zero).
pub(crate) fn bisect<F>(mut t_a: f64, mut t_b: f64, f: F) -> Result<f64, SearchError>
where
    F: Fn(f64) -> f64,
{
    let mut f_a = f(t_a);
    let f_b = f(t_b);
    if f_a * f_b > 0.0 {
        return Err(SearchError::NoConvergence("root not bracketed"));
    }
    for _ in 0..MAX_ITERATIONS {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(t_mid);
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if (t_b - t_a).abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Ok(0.5 * (t_a + t_b))
}

/// Apparent solar longitude at a UT instant.
pub(crate) fn sun_longitude_at_ut(jd_ut: f64) -> f64 {
    sun_apparent_longitude_deg(jd_ut_to_tt(jd_ut))
}

/// UT instant within `half_window` days of `estimate` at which the Sun
/// reaches apparent longitude `target_deg`.
pub(crate) fn find_sun_longitude(
    target_deg: f64,
    estimate_jd_ut: f64,
    half_window: f64,
) -> Result<f64, SearchError> {
    bisect(
        estimate_jd_ut - half_window,
        estimate_jd_ut + half_window,
        |t| angle_diff_deg(sun_longitude_at_ut(t), target_deg),
    )
}

/// UT instant of a new moon given its TT JDE.
pub(crate) fn new_moon_ut(k: i64) -> f64 {
    jd_tt_to_ut(xuanji_base::new_moon_jde(k))
}

/// Civil Julian Day Number containing the UT instant `jd_ut` in a zone
/// `utc_offset_minutes` east of UTC.
pub fn local_jdn(jd_ut: f64, utc_offset_minutes: i32) -> i64 {
    (jd_ut + 0.5 + utc_offset_minutes as f64 / 1440.0).floor() as i64
}
