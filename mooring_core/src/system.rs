//! # Mooring System Data Structures
//!
//! The `System` struct holds one fully derived mooring design: typed records
//! for every line, anchor, connection and buoy group, plus the depth,
//! inflation scale and the design rules that produced them.
//!
//! ## Structure
//!
//! ```text
//! System
//! ├── depth_m, inflation_scale
//! ├── rules: DesignRules (margins, default safety factors)
//! ├── tier: which entry point built the design
//! ├── lines: Vec<LineSpec>
//! ├── anchors: Vec<AnchorSpec>        (one per line group with anchors)
//! ├── connections: Vec<ConnectionSpec> (one per line group with connections)
//! ├── buoys: Vec<BuoySpec>
//! └── warnings: Warnings
//! ```
//!
//! Systems are only populated by the `set_params_*` entry points in
//! [`assembler`](crate::assembler); each call discards everything the
//! previous call derived.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MooringError, MooringResult};
use crate::materials::{AnchorKind, LineMaterial, SoilType};
use crate::warnings::Warnings;

// ============================================================================
// Keywords
// ============================================================================

/// Mooring line geometry class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MooringShape {
    /// Chain hanging in a catenary with a length resting on the seabed
    Catenary,
    /// Synthetic upper segment over a chain lower segment
    SemiTaut,
    /// Straight synthetic line at a 45° hang-off
    Taut,
    /// Vertical tendons (tension-leg platform)
    Tension,
}

impl MooringShape {
    pub const ALL: [MooringShape; 4] = [
        MooringShape::Catenary,
        MooringShape::SemiTaut,
        MooringShape::Taut,
        MooringShape::Tension,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MooringShape::Catenary => "catenary",
            MooringShape::SemiTaut => "semi-taut",
            MooringShape::Taut => "taut",
            MooringShape::Tension => "tension",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> MooringResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "catenary" => Ok(MooringShape::Catenary),
            "semi-taut" | "semitaut" => Ok(MooringShape::SemiTaut),
            "taut" => Ok(MooringShape::Taut),
            "tension" | "tlp" | "tension-leg" => Ok(MooringShape::Tension),
            _ => Err(MooringError::invalid_input(
                "shape",
                s,
                "Line shape is not supported (catenary, semi-taut, taut, tension)",
            )),
        }
    }
}

impl std::fmt::Display for MooringShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Direction of the line load at the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadDirection {
    /// Line carries no anchor
    #[default]
    None,
    /// Purely horizontal pull (catenary)
    Horizontal,
    /// 45° pull, horizontal and vertical components (taut)
    Both,
    /// Purely vertical pull (tension leg)
    Vertical,
}

impl LoadDirection {
    pub const ALL: [LoadDirection; 4] = [
        LoadDirection::None,
        LoadDirection::Horizontal,
        LoadDirection::Both,
        LoadDirection::Vertical,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LoadDirection::None => "none",
            LoadDirection::Horizontal => "horizontal",
            LoadDirection::Both => "both",
            LoadDirection::Vertical => "vertical",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> MooringResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(LoadDirection::None),
            "horizontal" | "h" => Ok(LoadDirection::Horizontal),
            "both" | "angled" => Ok(LoadDirection::Both),
            "vertical" | "v" => Ok(LoadDirection::Vertical),
            _ => Err(MooringError::invalid_input(
                "anchor_load_direction",
                s,
                "Expected one of: none, horizontal, both, vertical",
            )),
        }
    }
}

impl std::fmt::Display for LoadDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which entry point derived a System
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignTier {
    /// Built-in reference design, no user input
    Reference,
    /// Shape, depth, design load and soil only
    ShapeLevel,
    /// Explicit line table, anchors inferred
    LineTable,
    /// Explicit line and anchor tables
    FullDetail,
}

impl DesignTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignTier::Reference => "reference design",
            DesignTier::ShapeLevel => "mooring library (shape level)",
            DesignTier::LineTable => "line data",
            DesignTier::FullDetail => "full mooring data",
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Geometry margins and default safety factors used during derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignRules {
    /// Line length left resting on the seabed (m)
    pub seabed_margin_m: f64,
    /// Clearance kept below the platform for tension tendons (m)
    pub wave_margin_m: f64,
    /// Chain length of a semi-taut lower segment at zero load (m)
    pub semi_taut_chain_base_m: f64,
    /// Additional semi-taut chain length per kN of design load (m/kN)
    pub semi_taut_chain_m_per_kn: f64,
    /// Factor of safety for shape-level designs
    pub shape_level_fos: f64,
    /// Factor of safety for table rows that omit one
    pub table_fos: f64,
}

impl DesignRules {
    /// Parse rules from TOML; absent keys keep their defaults.
    pub fn from_toml_str(src: &str) -> MooringResult<Self> {
        let rules: DesignRules = toml::from_str(src)
            .map_err(|e| MooringError::serialization(format!("Invalid design rules: {}", e)))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn load(path: &Path) -> MooringResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MooringError::file_error("read design rules", path.display().to_string(), e.to_string())
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> MooringResult<()> {
        for (field, value) in [
            ("shape_level_fos", self.shape_level_fos),
            ("table_fos", self.table_fos),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MooringError::invalid_input(field, value.to_string(), "Factor of safety must be positive"));
            }
        }
        for (field, value) in [
            ("seabed_margin_m", self.seabed_margin_m),
            ("wave_margin_m", self.wave_margin_m),
            ("semi_taut_chain_base_m", self.semi_taut_chain_base_m),
            ("semi_taut_chain_m_per_kn", self.semi_taut_chain_m_per_kn),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(MooringError::invalid_input(field, value.to_string(), "Margins and lengths cannot be negative"));
            }
        }
        Ok(())
    }
}

impl Default for DesignRules {
    fn default() -> Self {
        DesignRules {
            seabed_margin_m: 15.0,
            wave_margin_m: 15.0,
            semi_taut_chain_base_m: 15.0,
            semi_taut_chain_m_per_kn: 0.01,
            shape_level_fos: 2.0,
            table_fos: 1.0,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// One line group: `count` identical lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    /// Ordinal id within the system
    pub id: usize,
    pub count: u32,
    pub material: LineMaterial,
    /// Nominal diameter (m)
    pub diameter_m: f64,
    /// Length of each line (m)
    pub length_m: f64,
    pub shape: Option<MooringShape>,
    /// Design load (N)
    pub design_load_n: f64,
    pub fos: f64,
    pub anchors_per_line: u32,
    pub anchor_load_direction: LoadDirection,
    pub connections_per_line: u32,
    /// Minimum breaking load at `diameter_m` (N)
    pub mbl_n: f64,
    /// 2024 $/m
    pub cost_per_m: f64,
    /// Submerged weight (N/m)
    pub wet_weight_n_per_m: f64,
}

impl LineSpec {
    /// Inflation-adjusted cost of the whole group
    pub fn group_cost(&self, inflation_scale: f64) -> f64 {
        inflation_scale * self.count as f64 * self.length_m * self.cost_per_m
    }

    /// Direction `none` cannot carry anchors.
    pub fn check_anchor_direction(&self) -> MooringResult<()> {
        check_anchor_direction(self.id, self.anchors_per_line, self.anchor_load_direction)
    }
}

/// Reject a line group that has anchors but no anchor load direction.
pub(crate) fn check_anchor_direction(id: usize, anchors_per_line: u32, direction: LoadDirection) -> MooringResult<()> {
    if anchors_per_line > 0 && direction == LoadDirection::None {
        return Err(MooringError::invalid_input(
            format!("lines[{}].anchor_load_direction", id),
            "none",
            format!(
                "Anchor direction cannot be 'none' when anchors per line is {} (line {})",
                anchors_per_line,
                id + 1
            ),
        ));
    }
    Ok(())
}

/// One anchor group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorSpec {
    pub id: usize,
    pub count: u32,
    pub kind: AnchorKind,
    /// kg
    pub mass_kg: f64,
    /// Fluke area (m²), plate anchors only
    pub area_m2: f64,
    pub soil: SoilType,
    /// 2024 $ per anchor
    pub unit_cost: f64,
    /// Line group this anchor serves, when derived from a line table
    pub line_id: Option<usize>,
    pub load_direction: Option<LoadDirection>,
}

impl AnchorSpec {
    pub fn group_cost(&self, inflation_scale: f64) -> f64 {
        inflation_scale * self.count as f64 * self.unit_cost
    }
}

/// Connection hardware of one line group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSpec {
    pub id: usize,
    pub line_id: usize,
    pub count: u32,
    /// N
    pub design_load_n: f64,
    /// 2024 $ per connection
    pub unit_cost: f64,
}

impl ConnectionSpec {
    pub fn group_cost(&self, inflation_scale: f64) -> f64 {
        inflation_scale * self.count as f64 * self.unit_cost
    }
}

/// One buoy group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoySpec {
    pub id: usize,
    pub count: u32,
    /// kN
    pub buoyancy_kn: f64,
    /// 2024 $ per buoy
    pub unit_cost: f64,
}

impl BuoySpec {
    pub fn group_cost(&self, inflation_scale: f64) -> f64 {
        inflation_scale * self.count as f64 * self.unit_cost
    }
}

// ============================================================================
// System
// ============================================================================

/// A derived mooring system design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    /// Water depth (m)
    pub depth_m: f64,
    /// Multiplier from 2024 $ to the reporting year
    pub inflation_scale: f64,
    pub rules: DesignRules,
    pub tier: Option<DesignTier>,
    pub lines: Vec<LineSpec>,
    pub anchors: Vec<AnchorSpec>,
    pub connections: Vec<ConnectionSpec>,
    pub buoys: Vec<BuoySpec>,
    pub warnings: Warnings,
}

impl System {
    /// Empty system using `rules` for every later derivation.
    pub fn new(rules: DesignRules) -> Self {
        System {
            depth_m: 0.0,
            inflation_scale: 1.0,
            rules,
            tier: None,
            lines: Vec::new(),
            anchors: Vec::new(),
            connections: Vec::new(),
            buoys: Vec::new(),
            warnings: Warnings::new(),
        }
    }

    /// Discard every derived collection, keeping the rules.
    pub fn reset(&mut self) {
        *self = System::new(self.rules);
    }

    pub fn is_derived(&self) -> bool {
        self.tier.is_some()
    }
}

impl Default for System {
    fn default() -> Self {
        System::new(DesignRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_parsing() {
        assert_eq!(MooringShape::from_str_flexible("Semi Taut").unwrap(), MooringShape::SemiTaut);
        assert_eq!(MooringShape::from_str_flexible("catenary").unwrap(), MooringShape::Catenary);
        let err = MooringShape::from_str_flexible("spread").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_direction_parsing_and_default() {
        assert_eq!(LoadDirection::default(), LoadDirection::None);
        assert_eq!(LoadDirection::from_str_flexible("Vertical").unwrap(), LoadDirection::Vertical);
        assert!(LoadDirection::from_str_flexible("sideways").is_err());
    }

    #[test]
    fn test_keyword_serialization() {
        assert_eq!(serde_json::to_string(&MooringShape::SemiTaut).unwrap(), "\"semi-taut\"");
        assert_eq!(serde_json::to_string(&LoadDirection::Both).unwrap(), "\"both\"");
    }

    #[test]
    fn test_rules_partial_deserialization() {
        let rules: DesignRules = serde_json::from_str(r#"{ "seabed_margin_m": 20.0 }"#).unwrap();
        assert_eq!(rules.seabed_margin_m, 20.0);
        assert_eq!(rules.wave_margin_m, 15.0);
        assert_eq!(rules.shape_level_fos, 2.0);
    }

    #[test]
    fn test_rules_from_toml() {
        let rules = DesignRules::from_toml_str("wave_margin_m = 25.0\ntable_fos = 1.5").unwrap();
        assert_eq!(rules.wave_margin_m, 25.0);
        assert_eq!(rules.table_fos, 1.5);
        assert_eq!(rules.seabed_margin_m, 15.0);

        assert!(DesignRules::from_toml_str("table_fos = 0.0").is_err());
        assert!(DesignRules::from_toml_str("table_fos = \"high\"").is_err());
    }

    #[test]
    fn test_anchor_direction_contradiction() {
        assert!(check_anchor_direction(0, 3, LoadDirection::None).is_err());
        assert!(check_anchor_direction(0, 0, LoadDirection::None).is_ok());
        assert!(check_anchor_direction(0, 1, LoadDirection::Horizontal).is_ok());
    }

    #[test]
    fn test_group_costs() {
        let buoy = BuoySpec {
            id: 0,
            count: 4,
            buoyancy_kn: 50.0,
            unit_cost: 1000.0,
        };
        assert_eq!(buoy.group_cost(1.1), 4400.0);
    }

    #[test]
    fn test_reset_keeps_rules() {
        let rules = DesignRules {
            seabed_margin_m: 30.0,
            ..DesignRules::default()
        };
        let mut system = System::new(rules);
        system.depth_m = 100.0;
        system.tier = Some(DesignTier::ShapeLevel);
        system.reset();
        assert_eq!(system.rules.seabed_margin_m, 30.0);
        assert_eq!(system.depth_m, 0.0);
        assert!(!system.is_derived());
    }
}
