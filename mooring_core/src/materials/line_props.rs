//! Mooring Line Properties
//!
//! Per-material empirical curves, all functions of nominal diameter d (m):
//!
//! - Minimum breaking load: MBL(d) = mbl.c0 + mbl.c1·d + mbl.c2·d² + mbl.c3·d³ (N)
//! - Cost per length: cost.c0 + cost.c1·d + ... ($/m)
//! - Wet weight from `mass_d2` and `dvol_dnom` (see [`wet_weight_per_length`])
//!
//! The MBL curve is only trusted inside `[d_min, d_max]`.

use serde::{Deserialize, Serialize};

use crate::equations::{wet_weight_per_length, Cubic};
use crate::errors::{MooringError, MooringResult};
use crate::materials::database::EnvironmentProps;
use crate::materials::LineMaterial;

/// Slack allowed at the range ends for diameters that went through a mm round trip (m)
const RANGE_SLACK_M: f64 = 1e-12;

/// One `[lines.<material>]` table of the property database.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineProperties {
    /// MBL curve in N, diameter in m
    pub mbl: Cubic,
    /// Smallest diameter the MBL curve is valid for (m)
    pub d_min: f64,
    /// Largest diameter the MBL curve is valid for (m)
    pub d_max: f64,
    /// Mass per length per diameter² (kg/m/m²)
    pub mass_d2: f64,
    /// Volume-equivalent diameter / nominal diameter
    pub dvol_dnom: f64,
    /// Cost per length curve in $/m, diameter in m
    pub cost: Cubic,
}

impl LineProperties {
    /// Check the table is self-consistent
    pub fn validate(&self, material: LineMaterial) -> MooringResult<()> {
        let field = |name: &str| format!("lines.{}.{}", material.code(), name);
        if !(self.d_min >= 0.0 && self.d_max > self.d_min) {
            return Err(MooringError::invalid_input(
                field("d_max"),
                format!("[{}, {}]", self.d_min, self.d_max),
                "Diameter range must satisfy 0 <= d_min < d_max",
            ));
        }
        if self.mbl.degree() == 0 {
            return Err(MooringError::invalid_input(
                field("mbl"),
                format!("{:?}", self.mbl),
                "MBL curve must depend on diameter",
            ));
        }
        if self.mass_d2 <= 0.0 || self.dvol_dnom <= 0.0 {
            return Err(MooringError::invalid_input(
                field("mass_d2"),
                format!("{} / {}", self.mass_d2, self.dvol_dnom),
                "Mass and volumetric diameter ratio must be positive",
            ));
        }
        Ok(())
    }

    /// Breaking load at a diameter, rejecting diameters outside the curve range.
    pub fn mbl_at(&self, material: LineMaterial, diameter_m: f64) -> MooringResult<f64> {
        if !(diameter_m >= self.d_min - RANGE_SLACK_M && diameter_m <= self.d_max + RANGE_SLACK_M) {
            return Err(MooringError::out_of_domain(
                format!("{} diameter (m)", material),
                diameter_m,
                Some(self.d_min),
                Some(self.d_max),
                "MBL curve is not valid at this diameter",
            ));
        }
        Ok(self.mbl.eval(diameter_m))
    }

    /// Full sized-line properties at a diameter
    pub fn props_at(
        &self,
        material: LineMaterial,
        diameter_m: f64,
        env: &EnvironmentProps,
    ) -> MooringResult<LineCostProps> {
        let mbl_n = self.mbl_at(material, diameter_m)?;
        Ok(LineCostProps {
            material,
            input_diameter_m: diameter_m,
            mbl_n,
            cost_per_m: self.cost.eval(diameter_m),
            wet_weight_n_per_m: wet_weight_per_length(
                self.mass_d2,
                self.dvol_dnom,
                diameter_m,
                env.seawater_density,
                env.gravity,
            ),
        })
    }
}

/// MBL curve and its valid range, as handed to the curve inverter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MblCurve {
    pub curve: Cubic,
    pub d_min: Option<f64>,
    pub d_max: Option<f64>,
}

impl From<&LineProperties> for MblCurve {
    fn from(props: &LineProperties) -> Self {
        MblCurve {
            curve: props.mbl,
            d_min: Some(props.d_min),
            d_max: Some(props.d_max),
        }
    }
}

/// Properties of a line of known diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineCostProps {
    pub material: LineMaterial,
    /// Nominal diameter (m)
    pub input_diameter_m: f64,
    /// Minimum breaking load (N)
    pub mbl_n: f64,
    /// Cost per meter of line (2024 $/m)
    pub cost_per_m: f64,
    /// Submerged weight per meter (N/m)
    pub wet_weight_n_per_m: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyester() -> LineProperties {
        LineProperties {
            mbl: Cubic::new(0.0, 0.0, 308e6, 0.0),
            d_min: 0.01,
            d_max: 0.275,
            mass_d2: 679.0,
            dvol_dnom: 0.86,
            cost: Cubic::new(232.51, -1905.6, 10431.0, 0.0),
        }
    }

    #[test]
    fn test_mbl_at() {
        let mbl = polyester().mbl_at(LineMaterial::Polyester, 0.1).unwrap();
        assert!((mbl - 3.08e6).abs() < 1e-6);
    }

    #[test]
    fn test_mbl_out_of_range() {
        let err = polyester().mbl_at(LineMaterial::Polyester, 0.3).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_props_at() {
        let env = EnvironmentProps::default();
        let props = polyester().props_at(LineMaterial::Polyester, 0.1, &env).unwrap();
        // 232.51 − 190.56 + 104.31
        assert!((props.cost_per_m - 146.26).abs() < 1e-6);
        assert!(props.wet_weight_n_per_m > 0.0);
        assert_eq!(props.input_diameter_m, 0.1);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut props = polyester();
        props.d_max = 0.0;
        assert!(props.validate(LineMaterial::Polyester).is_err());
        assert!(polyester().validate(LineMaterial::Polyester).is_ok());
    }
}
