//! Certification of solver assignments.
//!
//! A backend's word that a point is optimal is not taken on trust: every
//! variable domain and every constraint is re-evaluated at the reported point.
//! Residuals are scaled by the magnitude of the row so that a 1e-5 tolerance
//! means the same thing for a 0.1 kWh row and a 1000 kWh row.

use crate::lp::{LpProblem, VarId};
use crate::solver::Assignment;
use std::fmt;

/// The worst violation found in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum CertificationFailure {
    /// A variable has no value
    MissingValue { variable: String },
    /// A non-negative variable is below zero beyond tolerance
    DomainViolation { variable: String, value: f64 },
    /// A constraint does not hold within tolerance
    ConstraintViolation {
        constraint: String,
        violation: f64,
        scaled: f64,
    },
}

impl fmt::Display for CertificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificationFailure::MissingValue { variable } => {
                write!(f, "solver reported no value for {variable}")
            }
            CertificationFailure::DomainViolation { variable, value } => {
                write!(f, "{variable} = {value:e} violates its non-negative domain")
            }
            CertificationFailure::ConstraintViolation {
                constraint,
                violation,
                scaled,
            } => write!(
                f,
                "constraint {constraint} violated by {violation:e} (scaled {scaled:e})"
            ),
        }
    }
}

/// Check `assignment` against every domain and constraint of `problem`.
pub fn certify(
    problem: &LpProblem,
    assignment: &Assignment,
    tolerance: f64,
) -> Result<(), CertificationFailure> {
    let value_of = |var: VarId| assignment.get(var);

    for (index, def) in problem.variables().iter().enumerate() {
        let Some(value) = assignment.get(VarId(index)) else {
            return Err(CertificationFailure::MissingValue {
                variable: def.name.clone(),
            });
        };
        if let Some(lower) = def.domain.lower_bound() {
            if value < lower - tolerance * (1.0 + value.abs()) {
                return Err(CertificationFailure::DomainViolation {
                    variable: def.name.clone(),
                    value,
                });
            }
        }
    }

    let mut worst: Option<CertificationFailure> = None;
    let mut worst_scaled = 0.0;
    for constraint in problem.constraints() {
        let Some(violation) = constraint.violation(value_of) else {
            continue;
        };
        let scale = 1.0 + constraint.rhs.abs() + constraint.lhs.magnitude(value_of);
        let scaled = violation / scale;
        if scaled > tolerance && scaled > worst_scaled {
            worst_scaled = scaled;
            worst = Some(CertificationFailure::ConstraintViolation {
                constraint: constraint.name.clone(),
                violation,
                scaled,
            });
        }
    }

    match worst {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}
