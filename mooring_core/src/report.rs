//! # Cost Report
//!
//! The priced result of one design evaluation: the derived [`System`], a
//! cost breakdown per category and the warnings raised along the way.
//!
//! ```text
//! CostReport
//! ├── meta: ReportMetadata (schema version, id, timestamp)
//! ├── breakdown: CostBreakdown (line, anchor, connection, buoy, total)
//! ├── system: System
//! └── warnings: Warnings
//! ```
//!
//! All amounts are 2024 US dollars multiplied by the system's inflation scale.
//! `Display` renders the plain-text report printed by the CLI.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::system::System;
use crate::warnings::Warnings;

/// Current schema version for design and report files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Cost category of a mooring component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Anchor,
    Line,
    Buoy,
    Connection,
}

impl CostCategory {
    /// Report order
    pub const ALL: [CostCategory; 4] = [
        CostCategory::Anchor,
        CostCategory::Line,
        CostCategory::Buoy,
        CostCategory::Connection,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CostCategory::Anchor => "Anchor",
            CostCategory::Line => "Line",
            CostCategory::Buoy => "Buoy",
            CostCategory::Connection => "Connection",
        }
    }
}

/// Inflation-adjusted cost per category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub line: f64,
    pub anchor: f64,
    pub connection: f64,
    pub buoy: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Sum every record of `system` as inflation × count × unit cost
    /// (× length for lines).
    pub fn of(system: &System) -> Self {
        let infl = system.inflation_scale;
        let line = system.lines.iter().map(|l| l.group_cost(infl)).sum();
        let anchor = system.anchors.iter().map(|a| a.group_cost(infl)).sum();
        let connection = system.connections.iter().map(|c| c.group_cost(infl)).sum();
        let buoy = system.buoys.iter().map(|b| b.group_cost(infl)).sum();
        CostBreakdown {
            line,
            anchor,
            connection,
            buoy,
            total: line + anchor + connection + buoy,
        }
    }

    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Anchor => self.anchor,
            CostCategory::Line => self.line,
            CostCategory::Buoy => self.buoy,
            CostCategory::Connection => self.connection,
        }
    }

    /// Percentage of the total; 0 when the total is 0.
    pub fn share(&self, category: CostCategory) -> f64 {
        if self.total == 0.0 {
            0.0
        } else {
            100.0 * self.get(category) / self.total
        }
    }
}

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub id: Uuid,
    pub generated: DateTime<Utc>,
}

/// Priced mooring design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    pub meta: ReportMetadata,
    pub breakdown: CostBreakdown,
    pub system: System,
    pub warnings: Warnings,
}

impl CostReport {
    pub fn new(system: &System) -> Self {
        CostReport {
            meta: ReportMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                generated: Utc::now(),
            },
            breakdown: CostBreakdown::of(system),
            system: system.clone(),
            warnings: system.warnings.clone(),
        }
    }

    pub fn total(&self) -> f64 {
        self.breakdown.total
    }
}

impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let system = &self.system;
        let infl = system.inflation_scale;

        writeln!(f, "--------- Cost Report (2024$) ---------")?;
        if let Some(tier) = system.tier {
            writeln!(f, "Design          : {}", tier.display_name())?;
        }
        writeln!(f, "Water depth     : {:.1} m", system.depth_m)?;
        if infl != 1.0 {
            writeln!(f, "Inflation scale : {:.3}", infl)?;
        }

        if !system.lines.is_empty() {
            writeln!(f)?;
            writeln!(f, "Lines:")?;
            for line in &system.lines {
                writeln!(
                    f,
                    "  {} x {} {:.1} mm, {:.1} m, MBL {:.0} kN, load {:.0} kN : $ {:.2}",
                    line.count,
                    line.material.display_name(),
                    line.diameter_m * 1000.0,
                    line.length_m,
                    line.mbl_n / 1000.0,
                    line.design_load_n / 1000.0,
                    line.group_cost(infl)
                )?;
            }
        }
        if !system.anchors.is_empty() {
            writeln!(f)?;
            writeln!(f, "Anchors:")?;
            for anchor in &system.anchors {
                write!(
                    f,
                    "  {} x {} in {}, {:.0} kg",
                    anchor.count,
                    anchor.kind.display_name(),
                    anchor.soil,
                    anchor.mass_kg
                )?;
                if anchor.kind.uses_area() {
                    write!(f, ", {:.2} m2", anchor.area_m2)?;
                }
                writeln!(f, " : $ {:.2}", anchor.group_cost(infl))?;
            }
        }
        if !system.buoys.is_empty() {
            writeln!(f)?;
            writeln!(f, "Buoys:")?;
            for buoy in &system.buoys {
                writeln!(
                    f,
                    "  {} x {:.1} kN : $ {:.2}",
                    buoy.count,
                    buoy.buoyancy_kn,
                    buoy.group_cost(infl)
                )?;
            }
        }

        writeln!(f)?;
        for category in CostCategory::ALL {
            let label = format!("{} cost", category.display_name());
            writeln!(
                f,
                "{:<16}: $ {:.2}  |  {:.1}%",
                label,
                self.breakdown.get(category),
                self.breakdown.share(category)
            )?;
        }
        let total_share = if self.breakdown.total == 0.0 { 0.0 } else { 100.0 };
        writeln!(
            f,
            "{:<16}: $ {:.2}  |  {:.1}%",
            "Total cost", self.breakdown.total, total_share
        )?;

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  - {}", warning)?;
            }
        }
        Ok(())
    }
}
