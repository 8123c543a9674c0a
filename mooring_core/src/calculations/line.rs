//! # Line Sizing
//!
//! Resolves a line's diameter, breaking load, cost per length and wet weight
//! from either a design load or a diameter.
//!
//! ## Load path
//!
//! 1. MBL target = design load × fos
//! 2. MBL curve and valid range from the property provider
//! 3. Smallest diameter reaching the target ([`invert_curve`])
//! 4. Cost and wet weight at that diameter
//!
//! ## Diameter path
//!
//! Properties come straight from the provider (diameter passed in mm); the
//! design load is then `MBL / fos`.
//!
//! ## Example
//!
//! ```rust
//! use mooring_core::calculations::line::{size_line, LineSizingInput};
//! use mooring_core::materials::{LineMaterial, PropertyDatabase};
//! use mooring_core::warnings::Warnings;
//!
//! let db = PropertyDatabase::builtin().unwrap();
//! let input = LineSizingInput::from_load(LineMaterial::Polyester, 1.54e6, 2.0);
//! let sized = size_line(&input, db, &mut Warnings::new()).unwrap();
//! // 308e6·d² = 3.08e6
//! assert!((sized.diameter_m - 0.1).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::curve::invert_curve;
use crate::equations::{catenary_length, semi_taut_lower_length, semi_taut_upper_length, taut_length, tension_length};
use crate::errors::{MooringError, MooringResult};
use crate::materials::LineMaterial;
use crate::providers::LinePropertyProvider;
use crate::system::DesignRules;
use crate::units::{Kilonewtons, Meters, Millimeters, Newtons};
use crate::warnings::{DesignWarning, Warnings};

/// Input parameters for sizing one line.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "chain",
///   "design_load_n": 500000.0,
///   "diameter_m": null,
///   "fos": 2.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSizingInput {
    pub material: LineMaterial,

    /// Design load in newtons
    #[serde(default)]
    pub design_load_n: Option<f64>,

    /// Nominal diameter in meters; takes precedence over the load
    #[serde(default)]
    pub diameter_m: Option<f64>,

    /// Factor of safety applied to the design load
    pub fos: f64,
}

impl LineSizingInput {
    pub fn from_load(material: LineMaterial, design_load_n: f64, fos: f64) -> Self {
        LineSizingInput {
            material,
            design_load_n: Some(design_load_n),
            diameter_m: None,
            fos,
        }
    }

    pub fn from_diameter(material: LineMaterial, diameter_m: f64, fos: f64) -> Self {
        LineSizingInput {
            material,
            design_load_n: None,
            diameter_m: Some(diameter_m),
            fos,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> MooringResult<()> {
        if !(self.fos.is_finite() && self.fos > 0.0) {
            return Err(MooringError::invalid_input(
                "fos",
                self.fos.to_string(),
                "Factor of safety must be positive",
            ));
        }
        if let Some(load) = self.design_load_n {
            if !(load.is_finite() && load >= 0.0) {
                return Err(MooringError::invalid_input(
                    "design_load",
                    load.to_string(),
                    "Design load cannot be negative",
                ));
            }
        }
        if let Some(d) = self.diameter_m {
            if !(d.is_finite() && d > 0.0) {
                return Err(MooringError::invalid_input(
                    "diameter",
                    d.to_string(),
                    "Diameter must be positive",
                ));
            }
        }
        if self.design_load_n.is_none() && self.diameter_m.is_none() {
            return Err(MooringError::invalid_input(
                "design_load / diameter",
                "none",
                "A line needs either a design load or a diameter",
            ));
        }
        Ok(())
    }
}

/// A fully sized line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSizingResult {
    pub material: LineMaterial,
    /// Nominal diameter (m)
    pub diameter_m: f64,
    /// Minimum breaking load at the diameter (N)
    pub mbl_n: f64,
    /// Design load: the given load, or MBL / fos on the diameter path (N)
    pub design_load_n: f64,
    pub fos: f64,
    /// 2024 $/m
    pub cost_per_m: f64,
    /// N/m
    pub wet_weight_n_per_m: f64,
}

/// Size a line from a design load or a diameter.
pub fn size_line<P>(input: &LineSizingInput, provider: &P, warnings: &mut Warnings) -> MooringResult<LineSizingResult>
where
    P: LinePropertyProvider + ?Sized,
{
    input.validate()?;
    let material = input.material;

    let (diameter_m, design_load) = match (input.diameter_m, input.design_load_n) {
        (Some(d), load) => {
            if load.is_some() {
                warnings.push(DesignWarning::IgnoredInput {
                    field: "design_load".to_string(),
                    reason: "a diameter was also given and takes precedence".to_string(),
                });
            }
            (d, None)
        }
        (None, Some(load)) => {
            let curve = provider.line_properties(material)?;
            let target = load * input.fos;
            let d = invert_curve(target, &curve, warnings)?;
            tracing::info!(
                "Sized {} line: {:.1} mm for MBL {:.1} kN (fos {})",
                material,
                d * 1000.0,
                Kilonewtons::from(Newtons(target)).0,
                input.fos
            );
            (d, Some(load))
        }
        (None, None) => return Err(MooringError::missing_field("design_load")),
    };

    let props = provider.cost_and_props(Millimeters::from(Meters(diameter_m)), material)?;
    let design_load_n = design_load.unwrap_or(props.mbl_n / input.fos);

    Ok(LineSizingResult {
        material,
        diameter_m,
        mbl_n: props.mbl_n,
        design_load_n,
        fos: input.fos,
        cost_per_m: props.cost_per_m,
        wet_weight_n_per_m: props.wet_weight_n_per_m,
    })
}

// ============================================================================
// Shape geometry
// ============================================================================

/// The part a line plays in a shape-level design; selects its length rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineSegment {
    Catenary,
    /// Synthetic upper part of a semi-taut line
    SemiTautUpper,
    /// Chain lower part of a semi-taut line
    SemiTautLower,
    Taut,
    Tension,
}

impl LineSegment {
    /// Length of one line of this segment.
    ///
    /// `design_load_n` and `wet_weight_n_per_m` are only used by the
    /// catenary and semi-taut lower rules.
    pub fn length(
        &self,
        rules: &DesignRules,
        depth_m: f64,
        design_load_n: f64,
        wet_weight_n_per_m: f64,
    ) -> MooringResult<f64> {
        let length = match self {
            LineSegment::Catenary => {
                catenary_length(design_load_n, wet_weight_n_per_m, depth_m, rules.seabed_margin_m)?
            }
            LineSegment::SemiTautUpper => semi_taut_upper_length(depth_m, rules.seabed_margin_m),
            LineSegment::SemiTautLower => semi_taut_lower_length(
                rules.semi_taut_chain_base_m,
                rules.semi_taut_chain_m_per_kn,
                Kilonewtons::from(Newtons(design_load_n)).0,
            ),
            LineSegment::Taut => taut_length(depth_m),
            LineSegment::Tension => tension_length(depth_m, rules.wave_margin_m),
        };

        if length <= 0.0 {
            return Err(MooringError::invalid_input(
                "depth_m",
                depth_m.to_string(),
                format!(
                    "Water depth too shallow for a {} line (length {:.2} m)",
                    self.display_name(),
                    length
                ),
            ));
        }
        Ok(length)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LineSegment::Catenary => "catenary",
            LineSegment::SemiTautUpper => "semi-taut upper",
            LineSegment::SemiTautLower => "semi-taut lower",
            LineSegment::Taut => "taut",
            LineSegment::Tension => "tension",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PropertyDatabase;

    fn db() -> &'static PropertyDatabase {
        PropertyDatabase::builtin().unwrap()
    }

    #[test]
    fn test_size_from_load() {
        let mut w = Warnings::new();
        let input = LineSizingInput::from_load(LineMaterial::Chain, 500_000.0, 2.0);
        let sized = size_line(&input, db(), &mut w).unwrap();

        assert!((sized.mbl_n - 1.0e6).abs() / 1.0e6 < 1e-9);
        assert!(sized.diameter_m > 0.01 && sized.diameter_m < 0.2);
        assert_eq!(sized.design_load_n, 500_000.0);
        assert!(sized.cost_per_m > 0.0);
        assert!(w.is_empty());
    }

    #[test]
    fn test_size_from_diameter_back_calculates_load() {
        let mut w = Warnings::new();
        let input = LineSizingInput::from_diameter(LineMaterial::Polyester, 0.1, 2.0);
        let sized = size_line(&input, db(), &mut w).unwrap();

        assert!((sized.mbl_n - 3.08e6).abs() < 1e-3);
        assert!((sized.design_load_n - 1.54e6).abs() < 1e-3);
        assert!((sized.cost_per_m - 146.26).abs() < 1e-6);
    }

    #[test]
    fn test_diameter_wins_over_load() {
        let mut w = Warnings::new();
        let input = LineSizingInput {
            material: LineMaterial::Polyester,
            design_load_n: Some(1.0),
            diameter_m: Some(0.1),
            fos: 1.0,
        };
        let sized = size_line(&input, db(), &mut w).unwrap();
        assert_eq!(sized.diameter_m, 0.1);
        assert!(matches!(w.iter().next(), Some(DesignWarning::IgnoredInput { .. })));
    }

    #[test]
    fn test_missing_load_and_diameter() {
        let input = LineSizingInput {
            material: LineMaterial::Chain,
            design_load_n: None,
            diameter_m: None,
            fos: 2.0,
        };
        let err = size_line(&input, db(), &mut Warnings::new()).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_bad_numbers_rejected() {
        let mut w = Warnings::new();
        for input in [
            LineSizingInput::from_load(LineMaterial::Chain, -5.0, 2.0),
            LineSizingInput::from_load(LineMaterial::Chain, f64::INFINITY, 2.0),
            LineSizingInput::from_load(LineMaterial::Chain, 5.0e5, 0.0),
            LineSizingInput::from_diameter(LineMaterial::Chain, -0.1, 2.0),
        ] {
            assert!(size_line(&input, db(), &mut w).unwrap_err().is_input_error());
        }
    }

    #[test]
    fn test_diameter_outside_curve() {
        let input = LineSizingInput::from_diameter(LineMaterial::Chain, 0.25, 1.0);
        let err = size_line(&input, db(), &mut Warnings::new()).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_load_too_large_for_material() {
        let input = LineSizingInput::from_load(LineMaterial::Chain, 50.0e6, 2.0);
        let err = size_line(&input, db(), &mut Warnings::new()).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_segment_lengths() {
        let rules = DesignRules::default();
        let taut = LineSegment::Taut.length(&rules, 100.0, 0.0, 0.0).unwrap();
        assert!((taut - 141.421356).abs() < 1e-5);

        let upper = LineSegment::SemiTautUpper.length(&rules, 100.0, 0.0, 0.0).unwrap();
        assert!((upper - 126.421356).abs() < 1e-5);

        // 15 m + 0.01 m/kN × 500 kN
        let lower = LineSegment::SemiTautLower.length(&rules, 100.0, 500_000.0, 0.0).unwrap();
        assert!((lower - 20.0).abs() < 1e-9);

        let tension = LineSegment::Tension.length(&rules, 100.0, 0.0, 0.0).unwrap();
        assert_eq!(tension, 85.0);
    }

    #[test]
    fn test_tension_too_shallow() {
        let rules = DesignRules::default();
        let err = LineSegment::Tension.length(&rules, 10.0, 0.0, 0.0).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_catenary_uses_rules_margin() {
        let rules = DesignRules {
            seabed_margin_m: 40.0,
            ..DesignRules::default()
        };
        let length = LineSegment::Catenary.length(&rules, 100.0, 100_000.0, 100.0).unwrap();
        assert!((length - (40.0 + 100.0 * 19.0_f64.sqrt())).abs() < 1e-9);

        let err = LineSegment::Catenary.length(&rules, 100.0, 1000.0, 100.0).unwrap_err();
        assert_eq!(err.error_code(), "MATH_ERROR");
    }
}
