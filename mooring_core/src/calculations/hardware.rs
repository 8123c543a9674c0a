//! # Connection and Buoy Costing
//!
//! Unit costs of the point hardware on a line. Counts are applied by the
//! design assembler, not here.

use crate::errors::{MooringError, MooringResult};
use crate::providers::GeotechnicalProvider;
use crate::units::{Kilonewtons, Newtons};

/// Unit cost of one connection sized for `design_load`.
pub fn connection_cost<P>(provider: &P, design_load: Newtons) -> MooringResult<f64>
where
    P: GeotechnicalProvider + ?Sized,
{
    if !(design_load.0.is_finite() && design_load.0 >= 0.0) {
        return Err(MooringError::invalid_input(
            "connection design_load",
            design_load.0.to_string(),
            "Connection design load cannot be negative",
        ));
    }
    let cost = provider.connection_cost(design_load)?;
    tracing::debug!("Connection at {:.1} kN: ${:.2}", Kilonewtons::from(design_load).0, cost);
    Ok(cost)
}

/// Unit cost of one buoy providing `buoyancy`.
pub fn buoy_cost<P>(provider: &P, buoyancy: Kilonewtons) -> MooringResult<f64>
where
    P: GeotechnicalProvider + ?Sized,
{
    if !(buoyancy.0.is_finite() && buoyancy.0 >= 0.0) {
        return Err(MooringError::invalid_input(
            "buoyancy",
            buoyancy.0.to_string(),
            "Buoyancy cannot be negative",
        ));
    }
    let cost = provider.buoy_cost(buoyancy)?;
    tracing::debug!("Buoy of {:.1} kN: ${:.2}", buoyancy.0, cost);
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PropertyDatabase;

    #[test]
    fn test_connection_cost() {
        let db = PropertyDatabase::builtin().unwrap();
        // 500 + 1.5e-3 · 2e6
        let cost = connection_cost(db, Newtons(2.0e6)).unwrap();
        assert!((cost - 3500.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let db = PropertyDatabase::builtin().unwrap();
        assert!(connection_cost(db, Newtons(-1.0)).unwrap_err().is_input_error());
        assert!(buoy_cost(db, Kilonewtons(-1.0)).unwrap_err().is_input_error());
    }

    #[test]
    fn test_buoy_cost_grows_with_buoyancy() {
        let db = PropertyDatabase::builtin().unwrap();
        let small = buoy_cost(db, Kilonewtons(10.0)).unwrap();
        let large = buoy_cost(db, Kilonewtons(100.0)).unwrap();
        assert!(large > small);
        // Zero buoyancy still costs the fixed part of the curve
        assert!((buoy_cost(db, Kilonewtons(0.0)).unwrap() - 2702.7).abs() < 1e-9);
    }
}
