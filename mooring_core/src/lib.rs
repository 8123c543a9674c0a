//! # mooring_core - Mooring System Cost Estimation Engine
//!
//! `mooring_core` derives a complete, physically consistent mooring design
//! (line material, diameter and length, anchor kind and mass, connection and
//! buoy counts) from a sparse description and prices it with empirical cost
//! curves. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Explicit configuration**: coefficient tables live in an immutable
//!   [`PropertyDatabase`] passed to every evaluation
//! - **Pluggable providers**: line properties and geotechnical sizing sit
//!   behind the [`providers`] traits
//! - **Rich Errors**: structured error types, not strings
//! - **Static approximation**: no load simulation, only empirical curves
//!
//! ## Quick Start
//!
//! ```rust
//! use mooring_core::inputs::DesignInput;
//! use mooring_core::materials::PropertyDatabase;
//! use mooring_core::system::DesignRules;
//!
//! let db = PropertyDatabase::builtin().unwrap();
//! let report = mooring_core::evaluate(db, &DesignInput::Reference, DesignRules::default()).unwrap();
//! println!("{}", report);
//! ```
//!
//! ## Modules
//!
//! - [`system`] - Design records, keywords and design rules
//! - [`inputs`] - The three input tiers
//! - [`assembler`] - Tier entry points and cost aggregation
//! - [`calculations`] - Curve inversion, line sizing, anchor selection, hardware
//! - [`materials`] - Material keywords and the property database
//! - [`providers`] - Line property and geotechnical provider traits
//! - [`report`] - Cost breakdown and text rendering
//! - [`equations`] - Cubic curves and line geometry
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] / [`warnings`] - Fatal errors and non-fatal design warnings
//! - [`file_io`] - Design and report files with atomic saves

pub mod assembler;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod inputs;
pub mod materials;
pub mod providers;
pub mod report;
pub mod system;
pub mod units;
pub mod warnings;

// Re-export commonly used types at crate root for convenience
pub use errors::{MooringError, MooringResult};
pub use file_io::{load_design, save_report, DesignFile};
pub use inputs::DesignInput;
pub use materials::PropertyDatabase;
pub use providers::{CostProvider, GeotechnicalProvider, LinePropertyProvider};
pub use report::{CostBreakdown, CostReport, SCHEMA_VERSION};
pub use system::{DesignRules, System};
pub use warnings::{DesignWarning, Warnings};

/// Derive and price one design in a single call.
pub fn evaluate<P>(provider: &P, input: &DesignInput, rules: DesignRules) -> MooringResult<CostReport>
where
    P: CostProvider + ?Sized,
{
    let mut system = System::new(rules);
    system.set_params(provider, input)?;
    system.calc_cost()
}
