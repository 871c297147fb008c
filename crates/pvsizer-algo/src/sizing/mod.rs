//! PV + battery capacity sizing
//!
//! Finds the cheapest PV array and battery that serve a fixed hourly load on
//! their own.
//!
//! ## Formulation
//!
//! Decision variables:
//! - `pv_capacity` (kWp) and `battery_capacity` (kWh), both non-negative
//! - per step `t`: `pv_production[t]`, `battery_charge[t]`,
//!   `battery_discharge[t]` (non-negative) and `battery_soc[t]`
//!
//! ```text
//! min   pv_cost * pv_capacity + battery_cost * battery_capacity
//! s.t.  0 <= soc[t] <= battery_capacity
//!       soc[0] = 0.5 * battery_capacity
//!       soc[t] = soc[t-1] + eff_in * charge[t] - discharge[t] / eff_out     (t > 0)
//!       pv_production[t] <= capacity_factor[t] * pv_capacity
//!       charge[t], discharge[t] <= battery_capacity / charge_time
//!       pv_production[t] + discharge[t] - charge[t] = load[t]
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use pvsizer_algo::{solve_sizing, ClarabelBackend};
//! use pvsizer_core::{ScenarioParameters, SolverConfig};
//!
//! let params = ScenarioParameters::new(
//!     "flat", vec![10.0; 24], vec![0.3; 24], 2500.0, 1000.0, 0.95, 0.95, 4.0,
//! );
//! let result = solve_sizing(&params, &ClarabelBackend, &SolverConfig::default())?;
//! println!("{}", result.summary());
//! # Ok::<(), pvsizer_core::SizerError>(())
//! ```

pub mod builder;
pub mod solution;
mod solver;

pub use builder::{
    build_problem, ConstraintKind, ConstraintTag, SizingProblem, SizingVariables, StepVariables,
    Transition, INITIAL_SOC_FRACTION,
};
pub use solution::{extract, SizingResult};
pub use solver::solve_sizing;
