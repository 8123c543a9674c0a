//! Property Database
//!
//! The immutable coefficient tables behind both provider traits. A database
//! is parsed from TOML once and then only read; the default tables are
//! embedded in the binary and parsed lazily on first use.
//!
//! ## Example
//!
//! ```rust
//! use mooring_core::materials::{LineMaterial, PropertyDatabase};
//! use mooring_core::providers::LinePropertyProvider;
//!
//! let db = PropertyDatabase::builtin().unwrap();
//! let curve = db.line_properties(LineMaterial::Chain).unwrap();
//! assert_eq!(curve.d_max, Some(0.2));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{MooringError, MooringResult};
use crate::materials::line_props::MblCurve;
use crate::materials::point_props::PerSoil;
use crate::materials::{
    AnchorCostProps, AnchorKind, BuoyCostProps, ConnectionCostProps, LineCostProps, LineMaterial,
    LineProperties, SoilType,
};
use crate::providers::{AnchorMass, GeotechnicalProvider, LinePropertyProvider};
use crate::units::{CubicMeters, Kilograms, Kilonewtons, Meters, Millimeters, Newtons, SquareMeters};

const BUILTIN_TOML: &str = include_str!("../../assets/properties.toml");

static BUILTIN: Lazy<MooringResult<PropertyDatabase>> =
    Lazy::new(|| PropertyDatabase::from_toml_str(BUILTIN_TOML));

/// Physical constants of the site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentProps {
    /// kg/m³
    pub seawater_density: f64,
    /// m/s²
    pub gravity: f64,
}

impl Default for EnvironmentProps {
    fn default() -> Self {
        EnvironmentProps {
            seawater_density: 1025.0,
            gravity: 9.81,
        }
    }
}

/// Coefficient tables for lines, anchors, connections and buoys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDatabase {
    #[serde(default)]
    pub environment: EnvironmentProps,
    /// Keyed by [`LineMaterial::code`]
    pub lines: BTreeMap<String, LineProperties>,
    /// Keyed by [`AnchorKind::provider_key`]
    pub anchors: BTreeMap<String, AnchorCostProps>,
    /// Installation cost multiplier per soil (1.0 when absent)
    #[serde(default)]
    pub soil_install_factor: PerSoil,
    pub connection: ConnectionCostProps,
    pub buoy: BuoyCostProps,
}

impl PropertyDatabase {
    /// The embedded default database.
    pub fn builtin() -> MooringResult<&'static PropertyDatabase> {
        (*BUILTIN).as_ref().map_err(Clone::clone)
    }

    /// Parse and validate a database from TOML text.
    pub fn from_toml_str(src: &str) -> MooringResult<Self> {
        let db: PropertyDatabase = toml::from_str(src).map_err(|e| {
            MooringError::serialization(format!("Invalid property database: {}", e))
        })?;
        db.validate()?;
        Ok(db)
    }

    /// Load a user-supplied database file.
    pub fn load(path: &Path) -> MooringResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MooringError::file_error("read property database", path.display().to_string(), e.to_string())
        })?;
        let db = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded property database from {}", path.display());
        Ok(db)
    }

    /// Check every table for internal consistency.
    pub fn validate(&self) -> MooringResult<()> {
        if self.environment.seawater_density <= 0.0 || self.environment.gravity <= 0.0 {
            return Err(MooringError::invalid_input(
                "environment",
                format!("{:?}", self.environment),
                "Seawater density and gravity must be positive",
            ));
        }
        for (key, props) in &self.lines {
            let material = LineMaterial::from_str_flexible(key)?;
            props.validate(material)?;
        }
        for key in self.anchors.keys() {
            AnchorKind::from_str_flexible(key)?;
        }
        Ok(())
    }

    fn line(&self, material: LineMaterial) -> MooringResult<&LineProperties> {
        self.lines
            .get(material.code())
            .ok_or_else(|| MooringError::unknown("line material", material.code()))
    }

    fn anchor(&self, kind: AnchorKind) -> MooringResult<&AnchorCostProps> {
        self.anchors.get(kind.provider_key()).ok_or_else(|| {
            MooringError::provider(
                "geotechnical",
                format!("no cost data for '{}' anchors", kind.provider_key()),
            )
        })
    }
}

impl LinePropertyProvider for PropertyDatabase {
    fn line_properties(&self, material: LineMaterial) -> MooringResult<MblCurve> {
        self.line(material).map(MblCurve::from)
    }

    fn cost_and_props(&self, diameter: Millimeters, material: LineMaterial) -> MooringResult<LineCostProps> {
        let d: Meters = diameter.into();
        tracing::debug!("Line properties for {} at {:.1} mm", material, diameter.0);
        self.line(material)?.props_at(material, d.0, &self.environment)
    }
}

impl GeotechnicalProvider for PropertyDatabase {
    fn anchor_mass(&self, fx: Newtons, fz: Newtons, kind: AnchorKind, soil: SoilType) -> MooringResult<AnchorMass> {
        tracing::debug!("Sizing {} anchor in {} for Fx = {:.1} N, Fz = {:.1} N", kind, soil, fx.0, fz.0);
        let (mass, area) = self
            .anchor(kind)?
            .mass_for(kind, fx.0, fz.0, soil, self.environment.gravity)?;
        Ok(AnchorMass {
            mass: Kilograms(mass),
            area: SquareMeters(area),
        })
    }

    fn anchor_cost(&self, kind: AnchorKind, mass: Kilograms, area: SquareMeters, soil: SoilType) -> MooringResult<f64> {
        let factor = self.soil_install_factor.get(soil).unwrap_or(1.0);
        Ok(self.anchor(kind)?.cost_for(mass.0, area.0, factor))
    }

    fn connection_cost(&self, design_load: Newtons) -> MooringResult<f64> {
        Ok(self.connection.cost.eval(design_load.0))
    }

    fn buoy_cost(&self, buoyancy: Kilonewtons) -> MooringResult<f64> {
        let volume = CubicMeters::displaced_by(
            buoyancy,
            self.environment.seawater_density,
            self.environment.gravity,
        );
        Ok(self.buoy.cost.eval(volume.0))
    }
}
