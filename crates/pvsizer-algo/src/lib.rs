//! # pvsizer-algo: Sizing Algorithms
//!
//! LP formulation of the stand-alone PV + battery sizing problem, the `good_lp`
//! solver adapters that solve it, and the extraction of certified results.
//!
//! ## Modules
//!
//! - [`sizing`] - model builder, result extraction and the [`solve_sizing`] driver
//! - [`backends`] - [`LpBackend`](pvsizer_core::LpBackend) implementations and the
//!   [`LpSolverKind`] registry
//! - [`sensitivity`] - PV cost sweeps over repeated independent solves
//!
//! ## Solver features
//!
//! Clarabel is always compiled in. HiGHS is available with the `solver-highs`
//! feature.

pub mod backends;
pub mod sensitivity;
pub mod sizing;

pub use backends::{ClarabelBackend, LpSolverKind};
#[cfg(feature = "solver-highs")]
pub use backends::HighsBackend;
pub use sensitivity::{pv_cost_sweep, SweepPoint};
pub use sizing::{build_problem, solve_sizing, SizingProblem, SizingResult};
