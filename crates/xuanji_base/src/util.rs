//! Small numeric helpers shared across the calculators.

/// Map `n` onto the 1-based cycle `1..=modulus`.
///
/// `cyclic_number(n, m) = ((n - 1) mod m) + 1` with Euclidean remainder,
/// so a multiple of `m` maps to `m` and zero maps to `m`. Total over
/// `i64`: the remainder is taken before any offset is applied.
pub fn cyclic_number(n: i64, modulus: i64) -> i64 {
    (n.rem_euclid(modulus) + modulus - 1) % modulus + 1
}

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed difference `a - b` folded into (-180, 180].
pub fn angle_diff_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}
