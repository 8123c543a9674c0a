//! # Design Inputs
//!
//! A mooring design can be described at three levels of detail:
//!
//! | tier | given | derived |
//! |---|---|---|
//! | shape level | shape, depth, design load, soil | lines, lengths, anchors |
//! | line table | lines (diameter, length), soil | design loads, anchors |
//! | full detail | lines and anchors (mass, kind) | design loads |
//!
//! plus the built-in reference design, which takes no input at all. Every
//! tier also accepts a buoy table and an inflation scale.
//!
//! Forces are in kN throughout these types.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "tier": "shape_level",
//!   "shape": "catenary",
//!   "depth_m": 100.0,
//!   "design_load_kn": 500.0,
//!   "soil": "sand",
//!   "buoys": [{ "count": 3, "buoyancy_kn": 50.0 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MooringError, MooringResult};
use crate::materials::{AnchorKind, LineMaterial, SoilType};
use crate::system::{check_anchor_direction, LoadDirection, MooringShape};

fn default_inflation() -> f64 {
    1.0
}

/// One buoy group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuoyRow {
    pub count: u32,
    /// Net buoyancy of one buoy (kN)
    pub buoyancy_kn: f64,
}

/// Shape-level design: everything but the shape, depth, load and soil is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLevelInput {
    pub shape: MooringShape,
    pub depth_m: f64,
    /// Design load of each line (kN)
    pub design_load_kn: f64,
    pub soil: SoilType,
    #[serde(default)]
    pub buoys: Vec<BuoyRow>,
    #[serde(default = "default_inflation")]
    pub inflation_scale: f64,
}

/// One row of a line table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineRow {
    pub count: u32,
    pub material: LineMaterial,
    pub diameter_m: f64,
    /// Factor of safety; the design rules' table default when absent
    #[serde(default)]
    pub fos: Option<f64>,
    pub length_m: f64,
    #[serde(default)]
    pub anchor_load_direction: LoadDirection,
    #[serde(default)]
    pub anchors_per_line: u32,
    #[serde(default)]
    pub connections_per_line: u32,
}

/// Line-table design: anchors are inferred from each row's load direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTableInput {
    /// Informational; lengths are given per row
    pub depth_m: f64,
    pub soil: SoilType,
    pub lines: Vec<LineRow>,
    #[serde(default)]
    pub buoys: Vec<BuoyRow>,
    #[serde(default = "default_inflation")]
    pub inflation_scale: f64,
}

/// One row of an anchor table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorRow {
    pub count: u32,
    pub kind: AnchorKind,
    pub mass_kg: f64,
    /// Fluke area (m²), VLA only
    #[serde(default)]
    pub area_m2: Option<f64>,
    pub soil: SoilType,
}

/// Full-detail design: lines and anchors are both tabulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullDetailInput {
    pub depth_m: f64,
    #[serde(default)]
    pub lines: Vec<LineRow>,
    #[serde(default)]
    pub anchors: Vec<AnchorRow>,
    #[serde(default)]
    pub buoys: Vec<BuoyRow>,
    #[serde(default = "default_inflation")]
    pub inflation_scale: f64,
}

/// A design at any tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum DesignInput {
    Reference,
    ShapeLevel(ShapeLevelInput),
    LineTable(LineTableInput),
    FullDetail(FullDetailInput),
}

impl DesignInput {
    pub fn tier_name(&self) -> &'static str {
        match self {
            DesignInput::Reference => "reference",
            DesignInput::ShapeLevel(_) => "shape_level",
            DesignInput::LineTable(_) => "line_table",
            DesignInput::FullDetail(_) => "full_detail",
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

fn positive(field: impl Into<String>, value: f64, reason: &str) -> MooringResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(MooringError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

pub(crate) fn validate_site(depth_m: f64, inflation_scale: f64) -> MooringResult<()> {
    positive("depth_m", depth_m, "Water depth must be positive")?;
    positive("inflation_scale", inflation_scale, "Inflation scale must be positive")
}

impl BuoyRow {
    pub fn validate(&self, index: usize) -> MooringResult<()> {
        if self.count == 0 {
            return Err(MooringError::invalid_input(
                format!("buoys[{}].count", index),
                "0",
                "Buoy count must be positive",
            ));
        }
        if !(self.buoyancy_kn.is_finite() && self.buoyancy_kn >= 0.0) {
            return Err(MooringError::invalid_input(
                format!("buoys[{}].buoyancy_kn", index),
                self.buoyancy_kn.to_string(),
                "Buoyancy cannot be negative",
            ));
        }
        Ok(())
    }
}

impl LineRow {
    pub fn validate(&self, index: usize) -> MooringResult<()> {
        if self.count == 0 {
            return Err(MooringError::invalid_input(
                format!("lines[{}].count", index),
                "0",
                "Line count must be positive",
            ));
        }
        positive(
            format!("lines[{}].diameter_m", index),
            self.diameter_m,
            "Diameter must be positive",
        )?;
        positive(
            format!("lines[{}].length_m", index),
            self.length_m,
            "Length must be positive",
        )?;
        if let Some(fos) = self.fos {
            positive(format!("lines[{}].fos", index), fos, "Factor of safety must be positive")?;
        }
        check_anchor_direction(index, self.anchors_per_line, self.anchor_load_direction)
    }
}

impl AnchorRow {
    pub fn validate(&self, index: usize) -> MooringResult<()> {
        if self.count == 0 {
            return Err(MooringError::invalid_input(
                format!("anchors[{}].count", index),
                "0",
                "Anchor count must be positive",
            ));
        }
        positive(
            format!("anchors[{}].mass_kg", index),
            self.mass_kg,
            "Anchor mass must be positive",
        )
    }
}

impl ShapeLevelInput {
    pub fn validate(&self) -> MooringResult<()> {
        validate_site(self.depth_m, self.inflation_scale)?;
        positive("design_load_kn", self.design_load_kn, "Design load must be positive")?;
        for (i, buoy) in self.buoys.iter().enumerate() {
            buoy.validate(i)?;
        }
        Ok(())
    }
}

impl LineTableInput {
    pub fn validate(&self) -> MooringResult<()> {
        validate_site(self.depth_m, self.inflation_scale)?;
        if self.lines.is_empty() {
            return Err(MooringError::invalid_input(
                "lines",
                "[]",
                "At least one line is required for a line-table design",
            ));
        }
        for (i, line) in self.lines.iter().enumerate() {
            line.validate(i)?;
        }
        for (i, buoy) in self.buoys.iter().enumerate() {
            buoy.validate(i)?;
        }
        Ok(())
    }
}

impl FullDetailInput {
    pub fn validate(&self) -> MooringResult<()> {
        validate_site(self.depth_m, self.inflation_scale)?;
        for (i, line) in self.lines.iter().enumerate() {
            line.validate(i)?;
        }
        for (i, anchor) in self.anchors.iter().enumerate() {
            anchor.validate(i)?;
        }
        for (i, buoy) in self.buoys.iter().enumerate() {
            buoy.validate(i)?;
        }
        Ok(())
    }
}
