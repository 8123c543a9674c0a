//! # Anchor Selection
//!
//! Chooses an anchor kind when none is given, sizes it and prices it through
//! the geotechnical provider. Two input modes are accepted:
//!
//! - **(a) load-driven**: design load and load direction, no mass. The kind
//!   defaults from the direction, the load is split into horizontal and
//!   vertical components, and the provider sizes the anchor.
//! - **(b) mass-driven**: mass (and fluke area for VLA), no load or
//!   direction. The kind is required; only the cost lookup runs.
//!
//! ## Load decomposition
//!
//! | direction | F_x | F_z | default kind |
//! |---|---|---|---|
//! | horizontal | T | 0 | drag-embedment |
//! | both (45°) | T·√2 | T·√2 | gravity |
//! | vertical | 0 | T | gravity |
//! | none | T | T | gravity (warning) |
//!
//! A drag-embedment anchor with `both` or `vertical` loading is allowed but
//! raises [`DesignWarning::DiscouragedAnchor`].

use serde::{Deserialize, Serialize};

use crate::errors::{MooringError, MooringResult};
use crate::materials::{AnchorKind, SoilType};
use crate::providers::GeotechnicalProvider;
use crate::system::LoadDirection;
use crate::units::{Kilograms, Newtons, SquareMeters};
use crate::warnings::{DesignWarning, Warnings};

/// How a line load at the anchor is split and which kind resists it.
#[derive(Debug, Clone, Copy)]
struct DirectionRule {
    direction: LoadDirection,
    /// F_x = load × horizontal
    horizontal: f64,
    /// F_z = load × vertical
    vertical: f64,
    default_kind: AnchorKind,
    /// Drag anchors cannot take uplift
    discourages_drag: bool,
    /// No physical decomposition exists; the fallback loads both axes
    fallback: bool,
}

const DIRECTION_RULES: [DirectionRule; 4] = [
    DirectionRule {
        direction: LoadDirection::Horizontal,
        horizontal: 1.0,
        vertical: 0.0,
        default_kind: AnchorKind::DragEmbedment,
        discourages_drag: false,
        fallback: false,
    },
    DirectionRule {
        direction: LoadDirection::Both,
        horizontal: std::f64::consts::SQRT_2,
        vertical: std::f64::consts::SQRT_2,
        default_kind: AnchorKind::Gravity,
        discourages_drag: true,
        fallback: false,
    },
    DirectionRule {
        direction: LoadDirection::Vertical,
        horizontal: 0.0,
        vertical: 1.0,
        default_kind: AnchorKind::Gravity,
        discourages_drag: true,
        fallback: false,
    },
    DirectionRule {
        direction: LoadDirection::None,
        horizontal: 1.0,
        vertical: 1.0,
        default_kind: AnchorKind::Gravity,
        discourages_drag: false,
        fallback: true,
    },
];

fn rule_for(direction: LoadDirection) -> DirectionRule {
    DIRECTION_RULES
        .iter()
        .copied()
        .find(|r| r.direction == direction)
        .unwrap_or(DIRECTION_RULES[3])
}

/// Input parameters for one anchor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "soil": "sand",
///   "kind": null,
///   "design_load_n": 500000.0,
///   "load_direction": "horizontal"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorInput {
    pub soil: SoilType,

    /// Inferred from the load direction when absent (mode a only)
    #[serde(default)]
    pub kind: Option<AnchorKind>,

    /// Line design load at the anchor (N)
    #[serde(default)]
    pub design_load_n: Option<f64>,

    #[serde(default)]
    pub load_direction: Option<LoadDirection>,

    /// Known anchor mass (kg)
    #[serde(default)]
    pub mass_kg: Option<f64>,

    /// Known fluke area (m²), required for VLA in mode b
    #[serde(default)]
    pub area_m2: Option<f64>,
}

impl AnchorInput {
    /// Mode (a) input
    pub fn from_load(soil: SoilType, kind: Option<AnchorKind>, design_load_n: f64, direction: LoadDirection) -> Self {
        AnchorInput {
            soil,
            kind,
            design_load_n: Some(design_load_n),
            load_direction: Some(direction),
            mass_kg: None,
            area_m2: None,
        }
    }

    /// Mode (b) input
    pub fn from_mass(soil: SoilType, kind: AnchorKind, mass_kg: f64, area_m2: Option<f64>) -> Self {
        AnchorInput {
            soil,
            kind: Some(kind),
            design_load_n: None,
            load_direction: None,
            mass_kg: Some(mass_kg),
            area_m2,
        }
    }
}

/// A sized and priced anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorResult {
    pub kind: AnchorKind,
    pub soil: SoilType,
    /// kg
    pub mass_kg: f64,
    /// m², zero unless the kind is a plate anchor
    pub area_m2: f64,
    /// 2024 $ per anchor
    pub unit_cost: f64,
    /// Horizontal load used for sizing (N); zero in mode b
    pub fx_n: f64,
    /// Vertical load used for sizing (N); zero in mode b
    pub fz_n: f64,
}

/// Select, size and price one anchor.
pub fn select_anchor<P>(input: &AnchorInput, provider: &P, warnings: &mut Warnings) -> MooringResult<AnchorResult>
where
    P: GeotechnicalProvider + ?Sized,
{
    match (input.design_load_n, input.load_direction, input.mass_kg) {
        (Some(load), Some(direction), None) => size_from_load(input, load, direction, provider, warnings),
        (None, None, Some(mass)) => price_from_mass(input, mass, provider),
        _ => Err(MooringError::invalid_input(
            "anchor",
            describe_inputs(input),
            "invalid input combination: give a load with a direction, or a mass",
        )),
    }
}

fn size_from_load<P>(
    input: &AnchorInput,
    load: f64,
    direction: LoadDirection,
    provider: &P,
    warnings: &mut Warnings,
) -> MooringResult<AnchorResult>
where
    P: GeotechnicalProvider + ?Sized,
{
    if !(load.is_finite() && load >= 0.0) {
        return Err(MooringError::invalid_input(
            "design_load",
            load.to_string(),
            "Anchor design load cannot be negative",
        ));
    }

    let rule = rule_for(direction);
    let kind = match input.kind {
        Some(kind) => kind,
        None => {
            tracing::info!(
                "Anchor kind inferred from {} loading: {}",
                direction,
                rule.default_kind
            );
            rule.default_kind
        }
    };

    if rule.fallback {
        warnings.push(DesignWarning::UnrecognizedLoadDirection {
            direction,
            fallback: kind,
        });
    }
    if rule.discourages_drag && kind == AnchorKind::DragEmbedment {
        warnings.push(DesignWarning::DiscouragedAnchor { kind, direction });
    }
    if input.area_m2.is_some() {
        warnings.push(DesignWarning::IgnoredInput {
            field: "area".to_string(),
            reason: "fluke area is derived when sizing from load".to_string(),
        });
    }

    let fx = load * rule.horizontal;
    let fz = load * rule.vertical;
    let sized = provider.anchor_mass(Newtons(fx), Newtons(fz), kind, input.soil)?;
    let unit_cost = provider.anchor_cost(kind, sized.mass, sized.area, input.soil)?;
    tracing::info!(
        "Anchor {} in {}: {:.0} kg, ${:.0} each",
        kind,
        input.soil,
        sized.mass.0,
        unit_cost
    );

    Ok(AnchorResult {
        kind,
        soil: input.soil,
        mass_kg: sized.mass.0,
        area_m2: sized.area.0,
        unit_cost,
        fx_n: fx,
        fz_n: fz,
    })
}

fn price_from_mass<P>(input: &AnchorInput, mass: f64, provider: &P) -> MooringResult<AnchorResult>
where
    P: GeotechnicalProvider + ?Sized,
{
    let kind = input.kind.ok_or_else(|| MooringError::missing_field("anchor kind"))?;
    if !(mass.is_finite() && mass > 0.0) {
        return Err(MooringError::invalid_input(
            "mass",
            mass.to_string(),
            "Anchor mass must be positive",
        ));
    }

    let area = match (kind.uses_area(), input.area_m2) {
        (true, None) => return Err(MooringError::missing_field("anchor area")),
        (true, Some(area)) if !(area.is_finite() && area > 0.0) => {
            return Err(MooringError::invalid_input(
                "area",
                area.to_string(),
                "VLA fluke area must be positive",
            ));
        }
        (true, Some(area)) => area,
        (false, _) => 0.0,
    };

    let unit_cost = provider.anchor_cost(kind, Kilograms(mass), SquareMeters(area), input.soil)?;
    Ok(AnchorResult {
        kind,
        soil: input.soil,
        mass_kg: mass,
        area_m2: area,
        unit_cost,
        fx_n: 0.0,
        fz_n: 0.0,
    })
}

fn describe_inputs(input: &AnchorInput) -> String {
    let mut given = Vec::new();
    if input.design_load_n.is_some() {
        given.push("load");
    }
    if input.load_direction.is_some() {
        given.push("direction");
    }
    if input.mass_kg.is_some() {
        given.push("mass");
    }
    if given.is_empty() {
        "nothing".to_string()
    } else {
        given.join(" + ")
    }
}
