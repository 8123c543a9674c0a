//! # Mooring Line Geometry
//!
//! Static length rules used when the line length is not supplied by the
//! user. Each mooring shape implies a different geometry at the anchor.
//!
//! ## Notation
//!
//! - `h` = Water depth (m)
//! - `T` = Line design load (N)
//! - `w` = Submerged (wet) weight per unit length (N/m)
//! - `s` = Seabed margin, line length resting on the seabed (m)
//! - `m` = Wave margin, clearance kept below the platform (m)
//!
//! ## References
//!
//! - Ma, Luo, Kwan, Wu: Mooring System Engineering for Offshore Structures,
//!   Eq. 5.15 (catenary length)

use crate::errors::{MooringError, MooringResult};

/// Submerged weight per unit length of a line with nominal diameter `d`.
///
/// # Formula
/// - w = (μ·d² − ρ·π/4·(k·d)²)·g
///
/// where μ is mass per length per diameter² and k is the ratio of
/// volume-equivalent diameter to nominal diameter.
#[inline]
pub fn wet_weight_per_length(
    mass_d2: f64,
    dvol_dnom: f64,
    diameter_m: f64,
    seawater_density: f64,
    gravity: f64,
) -> f64 {
    let mass_per_m = mass_d2 * diameter_m * diameter_m;
    let d_vol = dvol_dnom * diameter_m;
    let displaced_per_m = std::f64::consts::FRAC_PI_4 * d_vol * d_vol * seawater_density;
    (mass_per_m - displaced_per_m) * gravity
}

/// Catenary line length to the touchdown point plus the seabed margin.
///
/// ```text
///   ──┐ fairlead
///     ╲
///      ╲  h
///       ╲_______ s _____⚓
/// ```
///
/// # Formula (Eq. 5.15)
/// - L = s + h·√(2·T/(w·h) − 1)
///
/// # Errors
/// `MathError` when `w ≤ 0` (buoyant line) or the radicand is negative
/// (the load is too small to lift the line off the seabed at this depth).
pub fn catenary_length(
    design_load_n: f64,
    wet_weight_n_per_m: f64,
    depth_m: f64,
    seabed_margin_m: f64,
) -> MooringResult<f64> {
    if wet_weight_n_per_m <= 0.0 {
        return Err(MooringError::math(
            "catenary length",
            format!(
                "wet weight {:.3} N/m is not positive; a catenary needs a line that sinks",
                wet_weight_n_per_m
            ),
        ));
    }
    let radicand = 2.0 * (design_load_n / (wet_weight_n_per_m * depth_m)) - 1.0;
    if radicand < 0.0 {
        return Err(MooringError::math(
            "catenary length",
            format!(
                "2·T/(w·h) − 1 = {:.4} is negative (T = {:.1} N, w = {:.3} N/m, h = {:.1} m); \
                 design load is insufficient for this depth",
                radicand, design_load_n, wet_weight_n_per_m, depth_m
            ),
        ));
    }
    Ok(seabed_margin_m + depth_m * radicand.sqrt())
}

/// Taut line at a 45° hang-off angle straight to the seabed.
///
/// # Formula
/// - L = √2·h
#[inline]
pub fn taut_length(depth_m: f64) -> f64 {
    std::f64::consts::SQRT_2 * depth_m
}

/// Upper (synthetic) segment of a semi-taut line.
///
/// # Formula
/// - L = √2·h − s
#[inline]
pub fn semi_taut_upper_length(depth_m: f64, seabed_margin_m: f64) -> f64 {
    taut_length(depth_m) - seabed_margin_m
}

/// Lower (chain) segment of a semi-taut line, growing with design load.
///
/// # Formula
/// - L = L₀ + k·T, with T in kN
#[inline]
pub fn semi_taut_lower_length(base_length_m: f64, length_per_kn: f64, design_load_kn: f64) -> f64 {
    base_length_m + length_per_kn * design_load_kn
}

/// Vertical tendon of a tension-leg mooring.
///
/// # Formula
/// - L = h − m
#[inline]
pub fn tension_length(depth_m: f64, wave_margin_m: f64) -> f64 {
    depth_m - wave_margin_m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_wet_weight() {
        // 100 mm R4 chain: (21.9e3·0.01 − 1025·π/4·0.189²)·9.81
        let w = wet_weight_per_length(21.9e3, 1.89, 0.1, 1025.0, 9.81);
        let expected = (219.0 - 1025.0 * std::f64::consts::FRAC_PI_4 * 0.189 * 0.189) * 9.81;
        assert!((w - expected).abs() < 1e-9);
        assert!(w > 0.0);
    }

    #[test]
    fn test_catenary_length() {
        // 2·T/(w·h) − 1 = 2·100000/(100·100) − 1 = 19
        let length = catenary_length(100_000.0, 100.0, 100.0, 15.0).unwrap();
        assert!((length - (15.0 + 100.0 * 19.0_f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn test_catenary_insufficient_load() {
        // 2·1000/(100·100) − 1 < 0
        let err = catenary_length(1000.0, 100.0, 100.0, 15.0).unwrap_err();
        assert_eq!(err.error_code(), "MATH_ERROR");
    }

    #[test]
    fn test_catenary_buoyant_line() {
        assert!(catenary_length(1e6, -5.0, 100.0, 15.0).is_err());
    }

    #[test]
    fn test_straight_line_rules() {
        assert!((taut_length(100.0) - 141.421356).abs() < 1e-5);
        assert!((semi_taut_upper_length(100.0, 15.0) - 126.421356).abs() < 1e-5);
        assert_eq!(semi_taut_lower_length(15.0, 0.01, 500.0), 20.0);
        assert_eq!(tension_length(100.0, 15.0), 85.0);
    }
}
