//! Anchor, Connection and Buoy Properties
//!
//! Coefficient tables for the point components of a mooring system. Values
//! in the embedded database are literature placeholders in 2024 US dollars.
//!
//! Anchor sizing uses one of two methods:
//!
//! - **gravity**: deadweight resisting the larger of the factored vertical
//!   and horizontal loads, M = max(f_v·F_z, f_h·F_x) / g
//! - **efficiency**: embedded anchors rated by holding capacity per unit
//!   weight for each soil, M = SF·√(F_x² + F_z²) / (η_soil·g)

use serde::{Deserialize, Serialize};

use crate::equations::Cubic;
use crate::errors::{MooringError, MooringResult};
use crate::materials::{AnchorKind, SoilType};

/// Optional value per soil type, as a TOML table keyed by soil keyword.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PerSoil {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_clay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_clay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_clay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sand: Option<f64>,
}

impl PerSoil {
    pub fn get(&self, soil: SoilType) -> Option<f64> {
        match soil {
            SoilType::SoftClay => self.soft_clay,
            SoilType::MediumClay => self.medium_clay,
            SoilType::HardClay => self.hard_clay,
            SoilType::Sand => self.sand,
        }
    }
}

/// How an anchor's mass follows from its loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum AnchorSizing {
    /// Deadweight anchor
    Gravity {
        /// Factor on vertical load (API practice: 2.0)
        vertical_factor: f64,
        /// Factor on horizontal load (API practice: 1.65)
        horizontal_factor: f64,
    },
    /// Embedded anchor rated by capacity-to-weight ratio
    Efficiency {
        safety_factor: f64,
        /// Holding capacity / anchor weight; absent soils are unsupported
        capacity_ratio: PerSoil,
    },
}

/// One `[anchors.<kind>]` table of the property database.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorCostProps {
    pub sizing: AnchorSizing,
    /// Fabrication cost ($/kg)
    pub material_cost_per_kg: f64,
    /// Plate cost ($/m²), plate anchors only
    #[serde(default)]
    pub cost_per_m2: f64,
    /// Plate mass per fluke area (kg/m²), plate anchors only
    #[serde(default)]
    pub areal_mass_kg_per_m2: Option<f64>,
    /// Installation cost as a fraction of material cost, before soil factor
    pub install_fraction: f64,
    /// Decommissioning cost as a fraction of material cost
    pub decommission_fraction: f64,
}

impl AnchorCostProps {
    /// Anchor mass (kg) and plate area (m²) resisting loads `fx`, `fz` (N).
    pub fn mass_for(
        &self,
        kind: AnchorKind,
        fx_n: f64,
        fz_n: f64,
        soil: SoilType,
        gravity: f64,
    ) -> MooringResult<(f64, f64)> {
        let mass_kg = match self.sizing {
            AnchorSizing::Gravity {
                vertical_factor,
                horizontal_factor,
            } => (vertical_factor * fz_n).max(horizontal_factor * fx_n) / gravity,
            AnchorSizing::Efficiency {
                safety_factor,
                capacity_ratio,
            } => {
                let ratio = capacity_ratio.get(soil).ok_or_else(|| {
                    MooringError::provider(
                        "geotechnical",
                        format!("{} anchors are not supported in {}", kind, soil),
                    )
                })?;
                if ratio <= 0.0 {
                    return Err(MooringError::provider(
                        "geotechnical",
                        format!("capacity ratio for {} in {} must be positive", kind, soil),
                    ));
                }
                safety_factor * fx_n.hypot(fz_n) / (ratio * gravity)
            }
        };
        Ok((mass_kg, self.area_for(mass_kg)))
    }

    /// Fluke area implied by a plate anchor's mass; zero for other kinds.
    pub fn area_for(&self, mass_kg: f64) -> f64 {
        match self.areal_mass_kg_per_m2 {
            Some(areal) if areal > 0.0 => mass_kg / areal,
            _ => 0.0,
        }
    }

    /// Material + installation + decommissioning cost of one anchor.
    pub fn cost_for(&self, mass_kg: f64, area_m2: f64, soil_install_factor: f64) -> f64 {
        let material = self.material_cost_per_kg * mass_kg + self.cost_per_m2 * area_m2;
        let install = material * self.install_fraction * soil_install_factor;
        let decommission = material * self.decommission_fraction;
        material + install + decommission
    }
}

/// `[connection]` table: unit cost of a connection vs. design load (N)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionCostProps {
    pub cost: Cubic,
}

/// `[buoy]` table: unit cost of a buoy vs. displaced volume (m³)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuoyCostProps {
    pub cost: Cubic,
}
