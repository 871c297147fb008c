//! # pvsizer-core: Sizing Model Core
//!
//! Data structures shared by every crate of the PV + battery sizing workspace.
//!
//! ## Core Data Structures
//!
//! - [`ScenarioParameters`] - hourly load and PV capacity-factor series plus the
//!   cost, efficiency and charge-time constants of one scenario
//! - [`LpProblem`] - a solver-neutral linear program (variables, constraints,
//!   objective) produced by the model builder
//! - [`LpBackend`] - the narrow "solve this LP" interface external solvers
//!   implement, returning a [`SolveOutcome`]
//! - [`units`] - `Kilowatts`, `KilowattHours` and `Euros` newtypes
//! - [`SizerError`] - unified error type
//!
//! ## Quick Start
//!
//! ```rust
//! use pvsizer_core::ScenarioParameters;
//!
//! let params = ScenarioParameters::new(
//!     "flat",
//!     vec![10.0; 24],
//!     vec![0.3; 24],
//!     2500.0,
//!     1000.0,
//!     0.95,
//!     0.95,
//!     4.0,
//! );
//! params.validate().expect("valid scenario");
//! ```

pub mod error;
pub mod lp;
pub mod scenario;
pub mod solver;
pub mod units;

pub use error::{SizerError, SizerResult, ValidationError};
pub use lp::{Domain, LinearConstraint, LinearExpr, LpProblem, Sense, VarId, VariableDef};
pub use scenario::{ScenarioParameters, TimeIndex};
pub use solver::{
    certify, Assignment, CertificationFailure, LpBackend, SolveOutcome, SolverConfig,
};
pub use units::{Euros, KilowattHours, Kilowatts};
