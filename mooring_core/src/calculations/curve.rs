//! # Curve Inversion
//!
//! Finds the diameter at which a cubic breaking-load curve reaches a target:
//!
//! ```text
//! c3·d³ + c2·d² + c1·d + (c0 − target) = 0
//! ```
//!
//! Roots are filtered to the valid domain of the curve:
//!
//! | bounds given | accepted roots |
//! |---|---|
//! | min and max | `min ≤ d ≤ max` |
//! | min only | `d ≥ min` |
//! | max only | `d ≤ max` |
//! | none | `d > 0` |
//!
//! The smallest surviving root is returned. If more than one survives, an
//! [`DesignWarning::AmbiguousRoot`] is recorded.
//!
//! ## Example
//!
//! ```rust
//! use mooring_core::calculations::invert;
//! use mooring_core::warnings::Warnings;
//!
//! let mut warnings = Warnings::new();
//! // 308e6·d² = 3.08e6  →  d = 0.1
//! let d = invert(3.08e6, 0.0, 0.0, 308e6, 0.0, Some(0.01), Some(0.275), &mut warnings).unwrap();
//! assert!((d - 0.1).abs() < 1e-9);
//! ```

use crate::equations::Cubic;
use crate::errors::{MooringError, MooringResult};
use crate::materials::line_props::MblCurve;
use crate::warnings::{DesignWarning, Warnings};

/// Smallest root of `curve(x) = target` within the given bounds.
#[allow(clippy::too_many_arguments)]
pub fn invert(
    target: f64,
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
    domain_min: Option<f64>,
    domain_max: Option<f64>,
    warnings: &mut Warnings,
) -> MooringResult<f64> {
    invert_curve(
        target,
        &MblCurve {
            curve: Cubic::new(c0, c1, c2, c3),
            d_min: domain_min,
            d_max: domain_max,
        },
        warnings,
    )
}

/// [`invert`] on a provider-supplied curve.
pub fn invert_curve(target: f64, curve: &MblCurve, warnings: &mut Warnings) -> MooringResult<f64> {
    if !target.is_finite() {
        return Err(MooringError::invalid_input(
            "target",
            target.to_string(),
            "Target breaking load must be a finite number",
        ));
    }
    if let (Some(min), Some(max)) = (curve.d_min, curve.d_max) {
        if min > max {
            return Err(MooringError::invalid_input(
                "domain",
                format!("[{}, {}]", min, max),
                "Lower bound exceeds upper bound",
            ));
        }
    }

    let candidates = candidate_roots(target, curve);
    let Some(&chosen) = candidates.first() else {
        // With no bounds at all only positive roots are kept
        let lower = match (curve.d_min, curve.d_max) {
            (None, None) => Some(0.0),
            (min, _) => min,
        };
        return Err(MooringError::out_of_domain(
            "target breaking load (N)",
            target,
            lower,
            curve.d_max,
            "no diameter in this range (m) reaches the target on the breaking-load curve",
        ));
    };

    if candidates.len() > 1 {
        warnings.push(DesignWarning::AmbiguousRoot {
            target,
            candidates: candidates.clone(),
            chosen,
        });
    }
    Ok(chosen)
}

/// All roots of `curve(x) = target` inside the domain, ascending.
pub fn candidate_roots(target: f64, curve: &MblCurve) -> Vec<f64> {
    curve
        .curve
        .shifted(target)
        .real_roots()
        .into_iter()
        .filter(|&x| match (curve.d_min, curve.d_max) {
            (Some(min), Some(max)) => x >= min && x <= max,
            (Some(min), None) => x >= min,
            (None, Some(max)) => x <= max,
            (None, None) => x > 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{LineMaterial, PropertyDatabase};
    use crate::providers::LinePropertyProvider;

    fn chain() -> MblCurve {
        MblCurve {
            curve: Cubic::new(0.0, 9.11e2, 1.21e9, -2.19e9),
            d_min: Some(0.01),
            d_max: Some(0.2),
        }
    }

    #[test]
    fn test_quadratic_curve() {
        let mut w = Warnings::new();
        let d = invert(3.08e6, 0.0, 0.0, 308e6, 0.0, Some(0.01), Some(0.275), &mut w).unwrap();
        assert!((d - 0.1).abs() < 1e-9);
        assert!(w.is_empty());
    }

    #[test]
    fn test_chain_picks_in_range_root() {
        // The chain cubic has three real roots for this target; only one in range
        let mut w = Warnings::new();
        let d = invert_curve(9.86e6, &chain(), &mut w).unwrap();
        assert!((0.01..=0.2).contains(&d));
        assert!((chain().curve.eval(d) - 9.86e6).abs() / 9.86e6 < 1e-9);
        assert!(w.is_empty());
    }

    #[test]
    fn test_round_trip_every_material() {
        let db = PropertyDatabase::builtin().unwrap();
        for material in LineMaterial::ALL {
            let curve = db.line_properties(material).unwrap();
            let (lo, hi) = (curve.d_min.unwrap(), curve.d_max.unwrap());
            for i in 1..10 {
                let d_true = lo + (hi - lo) * i as f64 / 10.0;
                let target = curve.curve.eval(d_true);
                let mut w = Warnings::new();
                let d = invert_curve(target, &curve, &mut w).unwrap();
                let rel = (curve.curve.eval(d) - target).abs() / target.abs();
                assert!(rel < 1e-9, "{} at {}: rel error {}", material, d_true, rel);
                assert!(d >= lo && d <= hi);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let mut w = Warnings::new();
        let a = invert_curve(5.0e6, &chain(), &mut w).unwrap();
        let b = invert_curve(5.0e6, &chain(), &mut w).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_root_in_domain() {
        let mut w = Warnings::new();
        // Chain curve peaks near 31 MN at d = 0.2
        let err = invert_curve(1.0e8, &chain(), &mut w).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
        let text = err.to_string();
        assert!(text.contains("100000000"));
        assert!(text.contains("[0.01, 0.2]"));
    }

    #[test]
    fn test_upper_bound_only_reports_open_lower_end() {
        let mut w = Warnings::new();
        // x = 4 lies above the upper bound of 1
        let err = invert(4.0, 0.0, 1.0, 0.0, 0.0, None, Some(1.0), &mut w).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
        assert!(err.to_string().contains("[-inf, 1]"));

        let err = invert(-4.0, 0.0, 1.0, 0.0, 0.0, None, None, &mut w).unwrap_err();
        assert!(err.to_string().contains("[0, inf]"));
    }

    #[test]
    fn test_unbounded_domain_keeps_positive_roots() {
        let mut w = Warnings::new();
        // x² = 4 → roots ±2, only +2 survives
        let d = invert(4.0, 0.0, 0.0, 1.0, 0.0, None, None, &mut w).unwrap();
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_one_sided_bounds() {
        let mut w = Warnings::new();
        // x² = 4 with only an upper bound keeps −2 as well; smallest wins
        let d = invert(4.0, 0.0, 0.0, 1.0, 0.0, None, Some(3.0), &mut w).unwrap();
        assert!((d + 2.0).abs() < 1e-12);
        assert_eq!(w.len(), 1);

        let d = invert(4.0, 0.0, 0.0, 1.0, 0.0, Some(-1.0), None, &mut w).unwrap();
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ambiguous_root_warns_and_takes_smallest() {
        let mut w = Warnings::new();
        // (x-1)(x-2)(x-3) = 0 with target 0 in [0, 5]
        let d = invert(0.0, -6.0, 11.0, -6.0, 1.0, Some(0.0), Some(5.0), &mut w).unwrap();
        assert!((d - 1.0).abs() < 1e-9);
        match w.iter().next() {
            Some(DesignWarning::AmbiguousRoot { candidates, chosen, .. }) => {
                assert_eq!(candidates.len(), 3);
                assert_eq!(*chosen, d);
            }
            other => panic!("expected AmbiguousRoot, got {:?}", other),
        }
    }

    #[test]
    fn test_constant_curve_fails() {
        let mut w = Warnings::new();
        assert!(invert(1.0, 5.0, 0.0, 0.0, 0.0, None, None, &mut w).is_err());
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let mut w = Warnings::new();
        let err = invert_curve(f64::NAN, &chain(), &mut w).unwrap_err();
        assert!(err.is_input_error());
    }
}
