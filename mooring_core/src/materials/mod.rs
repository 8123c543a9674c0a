//! # Materials Database
//!
//! Keyword enums for line materials, anchor kinds and soil types, plus the
//! property tables that price them.
//!
//! ## Material Types
//!
//! - **Lines**: chain, polyester, nylon, wire, hmpe
//! - **Anchors**: drag-embedment, gravity, VLA, SEPLA, suction, driven
//! - **Soils**: soft clay, medium clay, hard clay, sand
//!
//! ## Example
//!
//! ```rust
//! use mooring_core::materials::{LineMaterial, SoilType, AnchorKind};
//!
//! let mat = LineMaterial::from_str_flexible("Polyester").unwrap();
//! assert_eq!(mat, LineMaterial::Polyester);
//!
//! let soil = SoilType::from_str_flexible("soft clay").unwrap();
//! assert_eq!(soil, SoilType::SoftClay);
//!
//! assert_eq!(AnchorKind::from_str_flexible("vla").unwrap(), AnchorKind::Vla);
//! ```

pub mod database;
pub mod line_props;
pub mod point_props;

pub use database::{EnvironmentProps, PropertyDatabase};
pub use line_props::{LineCostProps, LineProperties};
pub use point_props::{AnchorCostProps, AnchorSizing, BuoyCostProps, ConnectionCostProps};

use serde::{Deserialize, Serialize};

use crate::errors::{MooringError, MooringResult};

// ============================================================================
// Line Materials
// ============================================================================

/// Mooring line material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMaterial {
    /// R4 studless chain
    Chain,
    /// Polyester rope
    Polyester,
    /// Nylon rope
    Nylon,
    /// Steel wire rope
    Wire,
    /// High-modulus polyethylene rope
    Hmpe,
}

impl LineMaterial {
    /// All line materials
    pub const ALL: [LineMaterial; 5] = [
        LineMaterial::Chain,
        LineMaterial::Polyester,
        LineMaterial::Nylon,
        LineMaterial::Wire,
        LineMaterial::Hmpe,
    ];

    /// Keyword used in input tables and the property database
    pub fn code(&self) -> &'static str {
        match self {
            LineMaterial::Chain => "chain",
            LineMaterial::Polyester => "polyester",
            LineMaterial::Nylon => "nylon",
            LineMaterial::Wire => "wire",
            LineMaterial::Hmpe => "hmpe",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> MooringResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "chain" | "studless-chain" | "r4-chain" => Ok(LineMaterial::Chain),
            "polyester" | "poly" => Ok(LineMaterial::Polyester),
            "nylon" => Ok(LineMaterial::Nylon),
            "wire" | "wire-rope" | "steel-wire" => Ok(LineMaterial::Wire),
            "hmpe" | "dyneema" => Ok(LineMaterial::Hmpe),
            _ => Err(MooringError::unknown("line material", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LineMaterial::Chain => "Chain",
            LineMaterial::Polyester => "Polyester",
            LineMaterial::Nylon => "Nylon",
            LineMaterial::Wire => "Wire rope",
            LineMaterial::Hmpe => "HMPE",
        }
    }
}

impl std::fmt::Display for LineMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Anchor Kinds
// ============================================================================

/// Anchor type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnchorKind {
    /// Drag embedment anchor
    #[serde(rename = "drag-embedment")]
    DragEmbedment,
    /// Gravity (deadweight) anchor
    #[serde(rename = "gravity")]
    Gravity,
    /// Vertically loaded plate anchor
    #[serde(rename = "VLA")]
    Vla,
    /// Suction embedded plate anchor
    #[serde(rename = "SEPLA")]
    Sepla,
    /// Suction pile
    #[serde(rename = "suction")]
    Suction,
    /// Driven pile
    #[serde(rename = "driven")]
    Driven,
}

impl AnchorKind {
    /// All anchor kinds
    pub const ALL: [AnchorKind; 6] = [
        AnchorKind::DragEmbedment,
        AnchorKind::Gravity,
        AnchorKind::Vla,
        AnchorKind::Sepla,
        AnchorKind::Suction,
        AnchorKind::Driven,
    ];

    /// Key of this kind's entry in the property database
    pub fn provider_key(&self) -> &'static str {
        match self {
            AnchorKind::DragEmbedment => "drag-embedment",
            AnchorKind::Gravity => "gravity",
            AnchorKind::Vla => "VLA",
            AnchorKind::Sepla => "SEPLA",
            AnchorKind::Suction => "suction",
            AnchorKind::Driven => "driven",
        }
    }

    /// Plate anchors are priced on area as well as mass
    pub fn uses_area(&self) -> bool {
        matches!(self, AnchorKind::Vla)
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> MooringResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "drag-embedment" | "drag" | "dea" => Ok(AnchorKind::DragEmbedment),
            "gravity" | "deadweight" => Ok(AnchorKind::Gravity),
            "vla" => Ok(AnchorKind::Vla),
            "sepla" => Ok(AnchorKind::Sepla),
            "suction" | "suction-pile" => Ok(AnchorKind::Suction),
            "driven" | "driven-pile" | "pile" => Ok(AnchorKind::Driven),
            _ => Err(MooringError::unknown("anchor kind", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AnchorKind::DragEmbedment => "Drag embedment",
            AnchorKind::Gravity => "Gravity",
            AnchorKind::Vla => "Vertically loaded plate (VLA)",
            AnchorKind::Sepla => "Suction embedded plate (SEPLA)",
            AnchorKind::Suction => "Suction pile",
            AnchorKind::Driven => "Driven pile",
        }
    }
}

impl std::fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_key())
    }
}

// ============================================================================
// Soil Types
// ============================================================================

/// Seabed soil classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoilType {
    SoftClay,
    MediumClay,
    HardClay,
    Sand,
}

impl SoilType {
    /// All soil types
    pub const ALL: [SoilType; 4] = [
        SoilType::SoftClay,
        SoilType::MediumClay,
        SoilType::HardClay,
        SoilType::Sand,
    ];

    /// Keyword used in the property database
    pub fn code(&self) -> &'static str {
        match self {
            SoilType::SoftClay => "soft-clay",
            SoilType::MediumClay => "medium-clay",
            SoilType::HardClay => "hard-clay",
            SoilType::Sand => "sand",
        }
    }

    /// Parse from common string representations ("soft clay", "soft_clay", ...)
    pub fn from_str_flexible(s: &str) -> MooringResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "soft-clay" => Ok(SoilType::SoftClay),
            "medium-clay" => Ok(SoilType::MediumClay),
            "hard-clay" | "stiff-clay" => Ok(SoilType::HardClay),
            "sand" => Ok(SoilType::Sand),
            _ => Err(MooringError::unknown("soil type", s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::SoftClay => "soft clay",
            SoilType::MediumClay => "medium clay",
            SoilType::HardClay => "hard clay",
            SoilType::Sand => "sand",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
