//! # Provider Interfaces
//!
//! The engine prices components through two collaborators:
//!
//! - [`LinePropertyProvider`] - MBL curves and per-diameter line properties
//! - [`GeotechnicalProvider`] - anchor sizing/cost, connection and buoy cost
//!
//! Calls are synchronous and are never retried; any error a provider returns
//! is propagated unchanged and ends the evaluation.
//! [`PropertyDatabase`](crate::materials::PropertyDatabase) implements both.

use serde::{Deserialize, Serialize};

use crate::errors::MooringResult;
use crate::materials::line_props::MblCurve;
use crate::materials::{AnchorKind, LineCostProps, LineMaterial, SoilType};
use crate::units::{Kilograms, Kilonewtons, Millimeters, Newtons, SquareMeters};

/// Line material properties.
pub trait LinePropertyProvider {
    /// MBL polynomial and valid diameter range for a material
    fn line_properties(&self, material: LineMaterial) -> MooringResult<MblCurve>;

    /// Breaking load, cost per length and wet weight at a nominal diameter
    fn cost_and_props(&self, diameter: Millimeters, material: LineMaterial) -> MooringResult<LineCostProps>;
}

/// Anchor mass and plate area returned by anchor sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorMass {
    pub mass: Kilograms,
    /// Fluke area; zero unless the kind is a plate anchor
    pub area: SquareMeters,
}

/// Geotechnical sizing and point-component costing.
pub trait GeotechnicalProvider {
    /// Size an anchor of `kind` for horizontal load `fx` and vertical load `fz`
    fn anchor_mass(&self, fx: Newtons, fz: Newtons, kind: AnchorKind, soil: SoilType) -> MooringResult<AnchorMass>;

    /// Unit cost of an anchor of known mass (and area, for plate anchors)
    fn anchor_cost(&self, kind: AnchorKind, mass: Kilograms, area: SquareMeters, soil: SoilType) -> MooringResult<f64>;

    /// Unit cost of one connection sized for `design_load`
    fn connection_cost(&self, design_load: Newtons) -> MooringResult<f64>;

    /// Unit cost of one buoy providing `buoyancy`
    fn buoy_cost(&self, buoyancy: Kilonewtons) -> MooringResult<f64>;
}

/// Everything the design assembler needs.
pub trait CostProvider: LinePropertyProvider + GeotechnicalProvider {}

impl<T: LinePropertyProvider + GeotechnicalProvider + ?Sized> CostProvider for T {}
