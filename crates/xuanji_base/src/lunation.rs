//! Mean and true new moon instants.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 49. Lunation
//! number `k = 0` is the new moon of 2000-01-06. Results are JDE (TT) and
//! are good to a few minutes over 1900-2100, enough to fix the civil date
//! of each lunar month start.

/// JDE of the mean new moon with `k = 0`.
pub const LUNATION_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

// Periodic terms for the new moon: (coefficient, power of E, [M', M, F, Omega] multipliers).
const NEW_MOON_TERMS: [(f64, i32, [f64; 4]); 25] = [
    (-0.407_20, 0, [1.0, 0.0, 0.0, 0.0]),
    (0.172_41, 1, [0.0, 1.0, 0.0, 0.0]),
    (0.016_08, 0, [2.0, 0.0, 0.0, 0.0]),
    (0.010_39, 0, [0.0, 0.0, 2.0, 0.0]),
    (0.007_39, 1, [1.0, -1.0, 0.0, 0.0]),
    (-0.005_14, 1, [1.0, 1.0, 0.0, 0.0]),
    (0.002_08, 2, [0.0, 2.0, 0.0, 0.0]),
    (-0.001_11, 0, [1.0, 0.0, -2.0, 0.0]),
    (-0.000_57, 0, [1.0, 0.0, 2.0, 0.0]),
    (0.000_56, 1, [2.0, 1.0, 0.0, 0.0]),
    (-0.000_42, 0, [3.0, 0.0, 0.0, 0.0]),
    (0.000_42, 1, [0.0, 1.0, 2.0, 0.0]),
    (0.000_38, 1, [0.0, 1.0, -2.0, 0.0]),
    (-0.000_24, 1, [2.0, -1.0, 0.0, 0.0]),
    (-0.000_17, 0, [0.0, 0.0, 0.0, 1.0]),
    (-0.000_07, 0, [1.0, 2.0, 0.0, 0.0]),
    (0.000_04, 0, [2.0, 0.0, -2.0, 0.0]),
    (0.000_04, 0, [0.0, 3.0, 0.0, 0.0]),
    (0.000_03, 0, [1.0, 1.0, -2.0, 0.0]),
    (0.000_03, 0, [2.0, 0.0, 2.0, 0.0]),
    (-0.000_03, 0, [1.0, 1.0, 2.0, 0.0]),
    (0.000_03, 0, [1.0, -1.0, 2.0, 0.0]),
    (-0.000_02, 0, [1.0, -1.0, -2.0, 0.0]),
    (-0.000_02, 0, [3.0, 1.0, 0.0, 0.0]),
    (0.000_02, 0, [4.0, 0.0, 0.0, 0.0]),
];

// Planetary arguments A1..A14: (constant, rate per lunation, coefficient).
const PLANETARY_TERMS: [(f64, f64, f64); 13] = [
    (251.88, 0.016_321, 0.000_165),
    (251.83, 26.651_886, 0.000_164),
    (349.42, 36.412_478, 0.000_126),
    (84.66, 18.206_239, 0.000_110),
    (141.74, 53.303_771, 0.000_062),
    (207.14, 2.453_732, 0.000_060),
    (154.84, 7.306_860, 0.000_056),
    (34.52, 27.261_239, 0.000_047),
    (207.19, 0.121_824, 0.000_042),
    (291.34, 1.844_379, 0.000_040),
    (161.72, 24.198_154, 0.000_037),
    (239.56, 25.513_099, 0.000_035),
    (331.55, 3.592_518, 0.000_023),
];

/// JDE of the mean new moon for lunation `k`.
pub fn mean_new_moon_jde(k: f64) -> f64 {
    let t = k / 1_236.85;
    LUNATION_EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t * t
        - 0.000_000_150 * t * t * t
        + 0.000_000_000_73 * t * t * t * t
}

/// JDE (TT) of the true new moon for integer lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1_236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = 2.553_4 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.564_3 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.710_8 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let omega = 124.774_6 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let args = [mp, m, f, omega];
    let periodic: f64 = NEW_MOON_TERMS
        .iter()
        .map(|(coef, e_pow, mult)| {
            let angle: f64 = mult.iter().zip(args).map(|(n, a)| n * a).sum();
            coef * e.powi(*e_pow) * angle.to_radians().sin()
        })
        .sum();

    let a1 = 299.77 + 0.107_408 * k - 0.009_173 * t2;
    let planetary: f64 = 0.000_325 * a1.to_radians().sin()
        + PLANETARY_TERMS
            .iter()
            .map(|(c0, rate, coef)| coef * (c0 + rate * k).to_radians().sin())
            .sum::<f64>();

    mean_new_moon_jde(k) + periodic + planetary
}

/// Lunation number whose mean new moon lies nearest to `jd`.
pub fn lunation_number_near(jd: f64) -> i64 {
    ((jd - LUNATION_EPOCH_JDE) / SYNODIC_MONTH_DAYS).round() as i64
}

/// JDE of the last true new moon at or before `jd_tt`.
pub fn new_moon_on_or_before(jd_tt: f64) -> f64 {
    let mut k = lunation_number_near(jd_tt);
    while new_moon_jde(k) > jd_tt {
        k -= 1;
    }
    while new_moon_jde(k + 1) <= jd_tt {
        k += 1;
    }
    new_moon_jde(k)
}
