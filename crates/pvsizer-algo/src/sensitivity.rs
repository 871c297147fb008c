//! PV cost sweep
//!
//! Re-solves one scenario with the PV price scaled by each multiplier. Every
//! point is an independent solve.

use crate::sizing::solve_sizing;
use pvsizer_core::{
    Euros, KilowattHours, Kilowatts, LpBackend, ScenarioParameters, SizerError, SizerResult,
    SolverConfig, ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub multiplier: f64,
    /// Scaled PV price (€/kWp)
    pub pv_cost_per_kwp: f64,
    pub pv_capacity: Kilowatts,
    pub battery_capacity: KilowattHours,
    pub objective: Euros,
}

/// Solve `params` once per multiplier of its PV cost.
///
/// Stops at the first failing solve.
pub fn pv_cost_sweep(
    params: &ScenarioParameters,
    multipliers: &[f64],
    backend: &dyn LpBackend,
    config: &SolverConfig,
) -> SizerResult<Vec<SweepPoint>> {
    params.validate()?;
    if let Some(&bad) = multipliers.iter().find(|m| !m.is_finite() || **m < 0.0) {
        return Err(SizerError::Validation(ValidationError::InvalidMultiplier(bad)));
    }

    multipliers
        .iter()
        .map(|&multiplier| {
            let scaled = params.with_pv_cost_scaled(multiplier);
            let result = solve_sizing(&scaled, backend, config)?;
            debug!(
                multiplier,
                pv_kwp = result.pv_capacity.value(),
                "sweep point solved"
            );
            Ok(SweepPoint {
                multiplier,
                pv_cost_per_kwp: scaled.pv_cost_per_kwp,
                pv_capacity: result.pv_capacity,
                battery_capacity: result.battery_capacity,
                objective: result.total_cost,
            })
        })
        .collect()
}
