//! # Design Assembler
//!
//! Turns a [`DesignInput`] into a fully priced [`System`]. Each tier has its
//! own entry point; all of them discard whatever the System held before,
//! validate the input, and then fill in lines, anchors, connections and
//! buoys through the component calculations.
//!
//! ## Shape-level line groups
//!
//! | shape | lines | anchors/line | direction | connections/line |
//! |---|---|---|---|---|
//! | catenary | chain ×3 | 1 | horizontal | 2 |
//! | semi-taut | polyester ×3 | 0 | none | 1 |
//! |           | chain ×3 | 1 | horizontal | 2 |
//! | taut | polyester ×3 | 1 | both | 2 |
//! | tension | hmpe ×8 | 1 | vertical | 2 |
//!
//! ## Example
//!
//! ```rust
//! use mooring_core::inputs::ShapeLevelInput;
//! use mooring_core::materials::{PropertyDatabase, SoilType};
//! use mooring_core::system::{MooringShape, System};
//!
//! let db = PropertyDatabase::builtin().unwrap();
//! let mut system = System::default();
//! system
//!     .set_params_shape_level(db, &ShapeLevelInput {
//!         shape: MooringShape::Catenary,
//!         depth_m: 100.0,
//!         design_load_kn: 500.0,
//!         soil: SoilType::Sand,
//!         buoys: vec![],
//!         inflation_scale: 1.0,
//!     })
//!     .unwrap();
//! let report = system.calc_cost().unwrap();
//! assert!(report.total() > 0.0);
//! ```

use crate::calculations::anchor::{select_anchor, AnchorInput};
use crate::calculations::hardware::{buoy_cost, connection_cost};
use crate::calculations::line::{size_line, LineSegment, LineSizingInput, LineSizingResult};
use crate::errors::{MooringError, MooringResult};
use crate::inputs::{
    validate_site, AnchorRow, BuoyRow, DesignInput, FullDetailInput, LineRow, LineTableInput, ShapeLevelInput,
};
use crate::materials::{LineMaterial, SoilType};
use crate::providers::CostProvider;
use crate::report::CostReport;
use crate::system::{
    AnchorSpec, BuoySpec, ConnectionSpec, DesignTier, LineSpec, LoadDirection, MooringShape, System,
};
use crate::units::{Kilonewtons, Newtons};

/// A hard-coded line group of a shape-level design.
#[derive(Debug, Clone, Copy)]
struct LineGroup {
    material: LineMaterial,
    count: u32,
    anchors_per_line: u32,
    direction: LoadDirection,
    connections_per_line: u32,
    segment: LineSegment,
}

const CATENARY: [LineGroup; 1] = [LineGroup {
    material: LineMaterial::Chain,
    count: 3,
    anchors_per_line: 1,
    direction: LoadDirection::Horizontal,
    connections_per_line: 2,
    segment: LineSegment::Catenary,
}];

const SEMI_TAUT: [LineGroup; 2] = [
    LineGroup {
        material: LineMaterial::Polyester,
        count: 3,
        anchors_per_line: 0,
        direction: LoadDirection::None,
        connections_per_line: 1,
        segment: LineSegment::SemiTautUpper,
    },
    LineGroup {
        material: LineMaterial::Chain,
        count: 3,
        anchors_per_line: 1,
        direction: LoadDirection::Horizontal,
        connections_per_line: 2,
        segment: LineSegment::SemiTautLower,
    },
];

const TAUT: [LineGroup; 1] = [LineGroup {
    material: LineMaterial::Polyester,
    count: 3,
    anchors_per_line: 1,
    direction: LoadDirection::Both,
    connections_per_line: 2,
    segment: LineSegment::Taut,
}];

const TENSION: [LineGroup; 1] = [LineGroup {
    material: LineMaterial::Hmpe,
    count: 8,
    anchors_per_line: 1,
    direction: LoadDirection::Vertical,
    connections_per_line: 2,
    segment: LineSegment::Tension,
}];

/// Reference design: three catenary chains in 200 m of soft clay.
const REFERENCE: [LineGroup; 1] = [LineGroup {
    material: LineMaterial::Chain,
    count: 3,
    anchors_per_line: 3,
    direction: LoadDirection::Horizontal,
    connections_per_line: 2,
    segment: LineSegment::Catenary,
}];
const REFERENCE_DEPTH_M: f64 = 200.0;
const REFERENCE_LOAD_KN: f64 = 10_000.0;
const REFERENCE_SOIL: SoilType = SoilType::SoftClay;

fn shape_groups(shape: MooringShape) -> &'static [LineGroup] {
    match shape {
        MooringShape::Catenary => &CATENARY,
        MooringShape::SemiTaut => &SEMI_TAUT,
        MooringShape::Taut => &TAUT,
        MooringShape::Tension => &TENSION,
    }
}

impl System {
    /// Derive and price a design at whichever tier `input` describes.
    pub fn set_params<P>(&mut self, provider: &P, input: &DesignInput) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        match input {
            DesignInput::Reference => self.set_params_reference(provider),
            DesignInput::ShapeLevel(i) => self.set_params_shape_level(provider, i),
            DesignInput::LineTable(i) => self.set_params_line_table(provider, i),
            DesignInput::FullDetail(i) => self.set_params_full_detail(provider, i),
        }
    }

    /// Built-in reference design.
    pub fn set_params_reference<P>(&mut self, provider: &P) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        self.rebuild(DesignTier::Reference, REFERENCE_DEPTH_M, 1.0, |next| {
            next.add_shape_groups(
                provider,
                &REFERENCE,
                MooringShape::Catenary,
                REFERENCE_LOAD_KN,
                REFERENCE_SOIL,
            )
        })
    }

    /// Shape-level design: line groups, lengths and anchors are all assumed.
    pub fn set_params_shape_level<P>(&mut self, provider: &P, input: &ShapeLevelInput) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        self.reset();
        input.validate()?;
        self.rebuild(DesignTier::ShapeLevel, input.depth_m, input.inflation_scale, |next| {
            next.add_shape_groups(
                provider,
                shape_groups(input.shape),
                input.shape,
                input.design_load_kn,
                input.soil,
            )?;
            next.add_buoys(provider, &input.buoys)
        })
    }

    /// Line-table design: design loads are back-calculated and anchors inferred.
    pub fn set_params_line_table<P>(&mut self, provider: &P, input: &LineTableInput) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        self.reset();
        input.validate()?;
        self.rebuild(DesignTier::LineTable, input.depth_m, input.inflation_scale, |next| {
            for row in &input.lines {
                next.add_line_row(provider, row, Some(input.soil))?;
            }
            next.add_buoys(provider, &input.buoys)
        })
    }

    /// Full-detail design: anchors come from the anchor table, not the lines.
    pub fn set_params_full_detail<P>(&mut self, provider: &P, input: &FullDetailInput) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        self.reset();
        input.validate()?;
        self.rebuild(DesignTier::FullDetail, input.depth_m, input.inflation_scale, |next| {
            for row in &input.lines {
                next.add_line_row(provider, row, None)?;
            }
            for row in &input.anchors {
                next.add_anchor_row(provider, row)?;
            }
            next.add_buoys(provider, &input.buoys)
        })
    }

    /// Price the derived design.
    pub fn calc_cost(&self) -> MooringResult<CostReport> {
        if !self.is_derived() {
            return Err(MooringError::missing_field("design (call a set_params entry point first)"));
        }
        let report = CostReport::new(self);
        tracing::info!("Total mooring cost: ${:.2}", report.total());
        Ok(report)
    }

    // ------------------------------------------------------------------------

    /// Build into a fresh System and swap it in on success. On failure the
    /// System is left empty.
    fn rebuild<F>(&mut self, tier: DesignTier, depth_m: f64, inflation_scale: f64, build: F) -> MooringResult<()>
    where
        F: FnOnce(&mut System) -> MooringResult<()>,
    {
        self.reset();
        validate_site(depth_m, inflation_scale)?;

        let mut next = System::new(self.rules);
        next.depth_m = depth_m;
        next.inflation_scale = inflation_scale;
        next.tier = Some(tier);
        build(&mut next)?;

        tracing::info!(
            "{}: {} line groups, {} anchor groups, {} connection groups, {} buoy groups",
            tier.display_name(),
            next.lines.len(),
            next.anchors.len(),
            next.connections.len(),
            next.buoys.len()
        );
        *self = next;
        Ok(())
    }

    fn add_shape_groups<P>(
        &mut self,
        provider: &P,
        groups: &[LineGroup],
        shape: MooringShape,
        design_load_kn: f64,
        soil: SoilType,
    ) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        let design_load = Newtons::from(Kilonewtons(design_load_kn));
        for group in groups {
            let input = LineSizingInput::from_load(group.material, design_load.0, self.rules.shape_level_fos);
            let sized = size_line(&input, provider, &mut self.warnings)?;
            let length_m = group.segment.length(
                &self.rules,
                self.depth_m,
                sized.design_load_n,
                sized.wet_weight_n_per_m,
            )?;
            self.add_line_group(
                provider,
                &sized,
                LineGroupLayout {
                    count: group.count,
                    length_m,
                    shape: Some(shape),
                    anchors_per_line: group.anchors_per_line,
                    direction: group.direction,
                    connections_per_line: group.connections_per_line,
                },
                Some(soil),
            )?;
        }
        Ok(())
    }

    fn add_line_row<P>(&mut self, provider: &P, row: &LineRow, soil: Option<SoilType>) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        let fos = row.fos.unwrap_or(self.rules.table_fos);
        let input = LineSizingInput::from_diameter(row.material, row.diameter_m, fos);
        let sized = size_line(&input, provider, &mut self.warnings)?;
        self.add_line_group(
            provider,
            &sized,
            LineGroupLayout {
                count: row.count,
                length_m: row.length_m,
                shape: None,
                anchors_per_line: row.anchors_per_line,
                direction: row.anchor_load_direction,
                connections_per_line: row.connections_per_line,
            },
            soil,
        )
    }

    /// Record one line group plus the anchors and connections it implies.
    /// Anchors are only derived when `soil` is given.
    fn add_line_group<P>(
        &mut self,
        provider: &P,
        sized: &LineSizingResult,
        layout: LineGroupLayout,
        soil: Option<SoilType>,
    ) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        let line = LineSpec {
            id: self.lines.len(),
            count: layout.count,
            material: sized.material,
            diameter_m: sized.diameter_m,
            length_m: layout.length_m,
            shape: layout.shape,
            design_load_n: sized.design_load_n,
            fos: sized.fos,
            anchors_per_line: layout.anchors_per_line,
            anchor_load_direction: layout.direction,
            connections_per_line: layout.connections_per_line,
            mbl_n: sized.mbl_n,
            cost_per_m: sized.cost_per_m,
            wet_weight_n_per_m: sized.wet_weight_n_per_m,
        };
        line.check_anchor_direction()?;

        match soil {
            Some(soil) if line.anchors_per_line > 0 => {
                let count = per_line_total(line.anchors_per_line, line.count, "anchors_per_line")?;
                let input = AnchorInput::from_load(soil, None, line.design_load_n, line.anchor_load_direction);
                let anchor = select_anchor(&input, provider, &mut self.warnings)?;
                self.anchors.push(AnchorSpec {
                    id: self.anchors.len(),
                    count,
                    kind: anchor.kind,
                    mass_kg: anchor.mass_kg,
                    area_m2: anchor.area_m2,
                    soil,
                    unit_cost: anchor.unit_cost,
                    line_id: Some(line.id),
                    load_direction: Some(line.anchor_load_direction),
                });
            }
            _ => {}
        }

        if line.connections_per_line > 0 {
            let count = per_line_total(line.connections_per_line, line.count, "connections_per_line")?;
            let unit_cost = connection_cost(provider, Newtons(line.design_load_n))?;
            self.connections.push(ConnectionSpec {
                id: self.connections.len(),
                line_id: line.id,
                count,
                design_load_n: line.design_load_n,
                unit_cost,
            });
        }

        self.lines.push(line);
        Ok(())
    }

    fn add_anchor_row<P>(&mut self, provider: &P, row: &AnchorRow) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        let input = AnchorInput::from_mass(row.soil, row.kind, row.mass_kg, row.area_m2);
        let anchor = select_anchor(&input, provider, &mut self.warnings)?;
        self.anchors.push(AnchorSpec {
            id: self.anchors.len(),
            count: row.count,
            kind: anchor.kind,
            mass_kg: anchor.mass_kg,
            area_m2: anchor.area_m2,
            soil: row.soil,
            unit_cost: anchor.unit_cost,
            line_id: None,
            load_direction: None,
        });
        Ok(())
    }

    fn add_buoys<P>(&mut self, provider: &P, rows: &[BuoyRow]) -> MooringResult<()>
    where
        P: CostProvider + ?Sized,
    {
        for row in rows {
            let unit_cost = buoy_cost(provider, Kilonewtons(row.buoyancy_kn))?;
            self.buoys.push(BuoySpec {
                id: self.buoys.len(),
                count: row.count,
                buoyancy_kn: row.buoyancy_kn,
                unit_cost,
            });
        }
        Ok(())
    }
}

/// Hardware count for a whole line group; overflow is an input error.
fn per_line_total(per_line: u32, lines: u32, field: &str) -> MooringResult<u32> {
    per_line.checked_mul(lines).ok_or_else(|| {
        MooringError::invalid_input(
            field,
            per_line.to_string(),
            format!("{} per line across {} lines overflows the group count", per_line, lines),
        )
    })
}

/// Count, length and hardware of a line group.
#[derive(Debug, Clone, Copy)]
struct LineGroupLayout {
    count: u32,
    length_m: f64,
    shape: Option<MooringShape>,
    anchors_per_line: u32,
    direction: LoadDirection,
    connections_per_line: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{AnchorKind, PropertyDatabase};
    use crate::providers::{AnchorMass, GeotechnicalProvider, LinePropertyProvider};
    use crate::system::DesignRules;
    use crate::units::{Kilograms, Millimeters, SquareMeters};

    fn db() -> &'static PropertyDatabase {
        PropertyDatabase::builtin().unwrap()
    }

    fn shape_input(shape: MooringShape, depth_m: f64, design_load_kn: f64, soil: SoilType) -> ShapeLevelInput {
        ShapeLevelInput {
            shape,
            depth_m,
            design_load_kn,
            soil,
            buoys: vec![],
            inflation_scale: 1.0,
        }
    }

    fn chain_row() -> LineRow {
        LineRow {
            count: 3,
            material: LineMaterial::Chain,
            diameter_m: 0.1,
            fos: Some(2.0),
            length_m: 600.0,
            anchor_load_direction: LoadDirection::Horizontal,
            anchors_per_line: 1,
            connections_per_line: 2,
        }
    }

    #[test]
    fn test_shape_level_catenary() {
        let mut system = System::default();
        system
            .set_params_shape_level(db(), &shape_input(MooringShape::Catenary, 100.0, 500.0, SoilType::Sand))
            .unwrap();

        assert_eq!(system.lines.len(), 1);
        let line = &system.lines[0];
        assert_eq!(line.material, LineMaterial::Chain);
        assert_eq!(line.count, 3);
        assert!(line.length_m > 15.0);
        assert!((line.mbl_n - 1.0e6).abs() / 1.0e6 < 1e-6);

        assert_eq!(system.anchors.len(), 1);
        let anchor = &system.anchors[0];
        assert_eq!(anchor.kind, AnchorKind::DragEmbedment);
        assert_eq!(anchor.load_direction, Some(LoadDirection::Horizontal));
        assert_eq!(anchor.count, 3);
        assert_eq!(anchor.line_id, Some(0));

        assert_eq!(system.connections.len(), 1);
        assert_eq!(system.connections[0].count, 6);

        let report = system.calc_cost().unwrap();
        assert!(report.total() > 0.0);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_shape_level_semi_taut() {
        let mut system = System::default();
        system
            .set_params_shape_level(db(), &shape_input(MooringShape::SemiTaut, 300.0, 2000.0, SoilType::SoftClay))
            .unwrap();

        let materials: Vec<_> = system.lines.iter().map(|l| l.material).collect();
        assert_eq!(materials, vec![LineMaterial::Polyester, LineMaterial::Chain]);

        assert_eq!(system.anchors.len(), 1);
        assert_eq!(system.anchors[0].line_id, Some(1));

        // √2·300 − 15 and 15 + 0.01·2000
        assert!((system.lines[0].length_m - (std::f64::consts::SQRT_2 * 300.0 - 15.0)).abs() < 1e-9);
        assert!((system.lines[1].length_m - 35.0).abs() < 1e-9);
        assert_eq!(system.connections.len(), 2);
    }

    #[test]
    fn test_shape_level_taut_and_tension_anchor_kinds() {
        let mut system = System::default();
        system
            .set_params_shape_level(db(), &shape_input(MooringShape::Taut, 500.0, 1000.0, SoilType::HardClay))
            .unwrap();
        assert_eq!(system.anchors[0].kind, AnchorKind::Gravity);

        system
            .set_params_shape_level(db(), &shape_input(MooringShape::Tension, 500.0, 1000.0, SoilType::HardClay))
            .unwrap();
        assert_eq!(system.lines.len(), 1);
        assert_eq!(system.lines[0].material, LineMaterial::Hmpe);
        assert_eq!(system.lines[0].count, 8);
        assert_eq!(system.lines[0].length_m, 485.0);
        assert_eq!(system.anchors[0].kind, AnchorKind::Gravity);
        assert_eq!(system.anchors[0].count, 8);
    }

    #[test]
    fn test_shape_level_tension_too_shallow() {
        let mut system = System::default();
        let err = system
            .set_params_shape_level(db(), &shape_input(MooringShape::Tension, 10.0, 1000.0, SoilType::Sand))
            .unwrap_err();
        assert!(err.is_input_error());
        assert!(!system.is_derived());
    }

    #[test]
    fn test_shape_level_catenary_insufficient_load() {
        let mut system = System::default();
        // Very deep water and a tiny load cannot lift a chain off the seabed
        let err = system
            .set_params_shape_level(db(), &shape_input(MooringShape::Catenary, 3000.0, 1.0, SoilType::Sand))
            .unwrap_err();
        assert!(matches!(
            err.error_code(),
            "MATH_ERROR" | "OUT_OF_DOMAIN"
        ));
    }

    #[test]
    fn test_line_table_back_calculates_load() {
        let mut system = System::default();
        let input = LineTableInput {
            depth_m: 200.0,
            soil: SoilType::MediumClay,
            lines: vec![chain_row()],
            buoys: vec![BuoyRow {
                count: 3,
                buoyancy_kn: 50.0,
            }],
            inflation_scale: 1.0,
        };
        system.set_params_line_table(db(), &input).unwrap();

        let line = &system.lines[0];
        assert!((line.design_load_n - line.mbl_n / 2.0).abs() < 1e-6);
        assert_eq!(line.length_m, 600.0);
        assert_eq!(system.anchors[0].kind, AnchorKind::DragEmbedment);
        assert_eq!(system.buoys.len(), 1);
        assert_eq!(system.tier, Some(DesignTier::LineTable));
    }

    #[test]
    fn test_line_table_default_fos() {
        let mut system = System::default();
        let input = LineTableInput {
            depth_m: 200.0,
            soil: SoilType::Sand,
            lines: vec![LineRow { fos: None, ..chain_row() }],
            buoys: vec![],
            inflation_scale: 1.0,
        };
        system.set_params_line_table(db(), &input).unwrap();
        assert_eq!(system.lines[0].fos, DesignRules::default().table_fos);
        assert!((system.lines[0].design_load_n - system.lines[0].mbl_n).abs() < 1e-6);
    }

    #[test]
    fn test_line_table_count_overflow() {
        let mut system = System::default();
        let input = LineTableInput {
            depth_m: 200.0,
            soil: SoilType::Sand,
            lines: vec![LineRow {
                count: 100_000,
                anchors_per_line: 100_000,
                ..chain_row()
            }],
            buoys: vec![],
            inflation_scale: 1.0,
        };
        let err = system.set_params_line_table(db(), &input).unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("anchors_per_line"));
        assert!(system.tier.is_none());

        let input = LineTableInput {
            lines: vec![LineRow {
                count: 100_000,
                connections_per_line: 100_000,
                ..chain_row()
            }],
            ..input
        };
        let err = system.set_params_line_table(db(), &input).unwrap_err();
        assert!(err.to_string().contains("connections_per_line"));
    }

    #[test]
    fn test_line_table_vertical_infers_gravity() {
        let mut system = System::default();
        let input = LineTableInput {
            depth_m: 200.0,
            soil: SoilType::SoftClay,
            lines: vec![LineRow {
                anchor_load_direction: LoadDirection::Vertical,
                ..chain_row()
            }],
            buoys: vec![],
            inflation_scale: 1.0,
        };
        system.set_params_line_table(db(), &input).unwrap();
        assert_eq!(system.anchors[0].kind, AnchorKind::Gravity);
        assert!(system.warnings.is_empty());
    }

    #[test]
    fn test_full_detail_none_direction_with_anchors_fails() {
        let mut system = System::default();
        let input = FullDetailInput {
            depth_m: 200.0,
            lines: vec![LineRow {
                anchor_load_direction: LoadDirection::None,
                anchors_per_line: 3,
                ..chain_row()
            }],
            anchors: vec![],
            buoys: vec![],
            inflation_scale: 1.0,
        };
        let err = system.set_params_full_detail(db(), &input).unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_full_detail_prices_anchor_table() {
        let mut system = System::default();
        let input = FullDetailInput {
            depth_m: 200.0,
            lines: vec![chain_row()],
            anchors: vec![
                AnchorRow {
                    count: 3,
                    kind: AnchorKind::Gravity,
                    mass_kg: 10_000.0,
                    area_m2: None,
                    soil: SoilType::SoftClay,
                },
                AnchorRow {
                    count: 1,
                    kind: AnchorKind::Vla,
                    mass_kg: 5_000.0,
                    area_m2: Some(10.0),
                    soil: SoilType::MediumClay,
                },
            ],
            buoys: vec![],
            inflation_scale: 1.0,
        };
        system.set_params_full_detail(db(), &input).unwrap();

        // Anchors come only from the table, never from the lines
        assert_eq!(system.anchors.len(), 2);
        assert!(system.anchors.iter().all(|a| a.line_id.is_none()));
        assert!((system.anchors[0].unit_cost - 6273.0 * 1.55).abs() < 1e-6);
        assert_eq!(system.anchors[1].area_m2, 10.0);
    }

    #[test]
    fn test_cost_aggregation_matches_records() {
        let mut system = System::default();
        let input = LineTableInput {
            depth_m: 200.0,
            soil: SoilType::Sand,
            lines: vec![chain_row()],
            buoys: vec![BuoyRow {
                count: 4,
                buoyancy_kn: 100.0,
            }],
            inflation_scale: 1.25,
        };
        system.set_params_line_table(db(), &input).unwrap();
        let report = system.calc_cost().unwrap();

        let infl = 1.25;
        let line: f64 = system
            .lines
            .iter()
            .map(|l| infl * l.count as f64 * l.length_m * l.cost_per_m)
            .sum();
        let anchor: f64 = system.anchors.iter().map(|a| infl * a.count as f64 * a.unit_cost).sum();
        let connection: f64 = system
            .connections
            .iter()
            .map(|c| infl * c.count as f64 * c.unit_cost)
            .sum();
        let buoy: f64 = system.buoys.iter().map(|b| infl * b.count as f64 * b.unit_cost).sum();

        let b = report.breakdown;
        assert!((b.line - line).abs() < 1e-6);
        assert!((b.anchor - anchor).abs() < 1e-6);
        assert!((b.connection - connection).abs() < 1e-6);
        assert!((b.buoy - buoy).abs() < 1e-6);
        assert!((b.total - (line + anchor + connection + buoy)).abs() < 1e-6);
    }

    #[test]
    fn test_reference_design() {
        let mut system = System::default();
        system.set_params_reference(db()).unwrap();
        assert_eq!(system.depth_m, 200.0);
        assert_eq!(system.lines[0].material, LineMaterial::Chain);
        assert_eq!(system.anchors[0].count, 9);
        assert_eq!(system.anchors[0].soil, SoilType::SoftClay);
        assert!(system.calc_cost().unwrap().total() > 0.0);
    }

    #[test]
    fn test_second_entry_point_discards_previous_design() {
        let mut system = System::default();
        system.set_params_reference(db()).unwrap();
        let input = FullDetailInput {
            depth_m: 50.0,
            lines: vec![],
            anchors: vec![],
            buoys: vec![BuoyRow {
                count: 1,
                buoyancy_kn: 10.0,
            }],
            inflation_scale: 1.0,
        };
        system.set_params_full_detail(db(), &input).unwrap();
        assert!(system.lines.is_empty());
        assert!(system.anchors.is_empty());
        assert!(system.connections.is_empty());
        assert_eq!(system.buoys.len(), 1);
        assert_eq!(system.depth_m, 50.0);
    }

    #[test]
    fn test_calc_cost_requires_design() {
        assert!(System::default().calc_cost().is_err());
    }

    #[test]
    fn test_invalid_site() {
        let mut system = System::default();
        let mut input = shape_input(MooringShape::Taut, -5.0, 100.0, SoilType::Sand);
        assert!(system.set_params_shape_level(db(), &input).unwrap_err().is_input_error());
        input.depth_m = 100.0;
        input.inflation_scale = 0.0;
        assert!(system.set_params_shape_level(db(), &input).unwrap_err().is_input_error());
    }

    /// Provider that records no state and fails every anchor lookup.
    struct FailingGeotech;

    impl LinePropertyProvider for FailingGeotech {
        fn line_properties(&self, material: LineMaterial) -> MooringResult<crate::materials::line_props::MblCurve> {
            db().line_properties(material)
        }

        fn cost_and_props(
            &self,
            diameter: Millimeters,
            material: LineMaterial,
        ) -> MooringResult<crate::materials::LineCostProps> {
            db().cost_and_props(diameter, material)
        }
    }

    impl GeotechnicalProvider for FailingGeotech {
        fn anchor_mass(&self, _: Newtons, _: Newtons, _: AnchorKind, _: SoilType) -> MooringResult<AnchorMass> {
            Err(MooringError::provider("geotechnical", "service unavailable"))
        }

        fn anchor_cost(&self, _: AnchorKind, _: Kilograms, _: SquareMeters, _: SoilType) -> MooringResult<f64> {
            Err(MooringError::provider("geotechnical", "service unavailable"))
        }

        fn connection_cost(&self, design_load: Newtons) -> MooringResult<f64> {
            db().connection_cost(design_load)
        }

        fn buoy_cost(&self, buoyancy: Kilonewtons) -> MooringResult<f64> {
            db().buoy_cost(buoyancy)
        }
    }

    #[test]
    fn test_provider_failure_aborts_evaluation() {
        let mut system = System::default();
        let err = system
            .set_params_shape_level(
                &FailingGeotech,
                &shape_input(MooringShape::Catenary, 100.0, 500.0, SoilType::Sand),
            )
            .unwrap_err();
        assert_eq!(
            err,
            MooringError::provider("geotechnical", "service unavailable")
        );
        assert!(system.lines.is_empty());
    }
}
