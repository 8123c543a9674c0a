//! # Mooring Equations
//!
//! Closed-form relations used by the sizing and costing calculations.
//! Keeping them in one place makes it easy to check each formula against
//! its reference.
//!
//! ## Modules
//!
//! - [`polynomial`] - Empirical cubic curves and their real roots
//! - [`geometry`] - Line length rules per mooring shape, wet weight
//!
//! ## Conventions
//!
//! - **Forces**: newtons unless a name says `_kn`
//! - **Lengths**: meters
//! - **Diameters**: nominal diameter in meters

pub mod geometry;
pub mod polynomial;

pub use geometry::{
    catenary_length,
    semi_taut_lower_length,
    semi_taut_upper_length,
    taut_length,
    tension_length,
    wet_weight_per_length,
};

pub use polynomial::Cubic;
