//! # Component Calculations
//!
//! Each component calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function taking the input, a provider and a warning sink, and
//!   returning `MooringResult<*Result>`
//!
//! Providers are passed by reference and never stored; warnings are pushed
//! onto the caller's [`Warnings`](crate::warnings::Warnings).
//!
//! ## Available Calculations
//!
//! - [`curve`] - Smallest valid root of a breaking-load curve
//! - [`line`] - Line diameter, MBL, cost and wet weight; shape lengths
//! - [`anchor`] - Anchor kind inference, sizing and cost
//! - [`hardware`] - Connection and buoy unit costs

pub mod anchor;
pub mod curve;
pub mod hardware;
pub mod line;

pub use anchor::{select_anchor, AnchorInput, AnchorResult};
pub use curve::{invert, invert_curve};
pub use hardware::{buoy_cost, connection_cost};
pub use line::{size_line, LineSegment, LineSizingInput, LineSizingResult};
