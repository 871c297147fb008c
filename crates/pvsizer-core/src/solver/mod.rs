//! Solver interface
//!
//! The core only depends on the capability "solve a linear program, return a
//! status and variable values". Concrete backends live in `pvsizer-algo`.

mod backend;
pub mod certify;

pub use backend::{Assignment, LpBackend, SolveOutcome, SolverConfig};
pub use certify::{certify, CertificationFailure};
