//! # Unit Types
//!
//! Type-safe wrappers for the units that cross the engine's boundaries.
//! These are plain f64 newtypes that serialize as bare numbers.
//!
//! ## SI Units
//!
//! - Length: meters (m), millimeters (mm, property provider input only)
//! - Force: newtons (N, internal), kilonewtons (kN, user-facing)
//! - Mass: kilograms (kg)
//! - Area: square meters (m², plate anchors)
//! - Volume: cubic meters (m³, buoy displacement)
//!
//! ## Example
//!
//! ```rust
//! use mooring_core::units::{Kilonewtons, Meters, Millimeters, Newtons};
//!
//! let load: Newtons = Kilonewtons(500.0).into();
//! assert_eq!(load.0, 500_000.0);
//!
//! let d: Millimeters = Meters(0.085).into();
//! assert!((d.0 - 85.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Mass, Area, Volume
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl CubicMeters {
    /// Volume of seawater displaced to produce `buoyancy`.
    ///
    /// V = B / (ρ·g)
    pub fn displaced_by(buoyancy: Kilonewtons, seawater_density: f64, gravity: f64) -> Self {
        let n: Newtons = buoyancy.into();
        CubicMeters(n.0 / (seawater_density * gravity))
    }
}
