//! LP solver backends
//!
//! Each backend implements [`LpBackend`] on top of `good_lp`. A configured time
//! limit is handed to the solver's own setting, and a solver that stops on it
//! reports a "timed out" solver error. An `Optimal` answer is certified against
//! every constraint before it is returned, so an approximate point is reported
//! as a solver error.

mod clarabel;
#[cfg(feature = "solver-highs")]
mod highs;
mod translate;

pub use clarabel::ClarabelBackend;
#[cfg(feature = "solver-highs")]
pub use highs::HighsBackend;

use anyhow::anyhow;
use pvsizer_core::{certify, LpBackend, LpProblem, SolveOutcome, SolverConfig};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LpSolverKind {
    #[default]
    Clarabel,
    #[cfg(feature = "solver-highs")]
    Highs,
}

impl LpSolverKind {
    pub fn available() -> &'static [&'static str] {
        AVAILABLE_LP_SOLVERS
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LpSolverKind::Clarabel => "clarabel",
            #[cfg(feature = "solver-highs")]
            LpSolverKind::Highs => "highs",
        }
    }

    pub fn build_backend(self) -> Arc<dyn LpBackend> {
        match self {
            LpSolverKind::Clarabel => Arc::new(ClarabelBackend),
            #[cfg(feature = "solver-highs")]
            LpSolverKind::Highs => Arc::new(HighsBackend),
        }
    }
}

const AVAILABLE_LP_SOLVERS: &[&str] = &[
    "clarabel",
    #[cfg(feature = "solver-highs")]
    "highs",
];

fn unknown_solver_error(label: &str) -> anyhow::Error {
    anyhow!(
        "unknown lp solver '{}'; supported values: {}",
        label,
        LpSolverKind::available().join(", ")
    )
}

impl FromStr for LpSolverKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.to_ascii_lowercase();
        match normalized.as_str() {
            "clarabel" | "default" => Ok(LpSolverKind::Clarabel),
            "highs" => {
                #[cfg(feature = "solver-highs")]
                {
                    Ok(LpSolverKind::Highs)
                }
                #[cfg(not(feature = "solver-highs"))]
                {
                    Err(unknown_solver_error(&normalized))
                }
            }
            other => Err(unknown_solver_error(other)),
        }
    }
}

/// Run a raw solve, then certify the answer.
pub(crate) fn solve_certified(
    backend: &str,
    problem: &LpProblem,
    config: &SolverConfig,
    raw_solve: fn(&LpProblem, &SolverConfig) -> SolveOutcome,
) -> SolveOutcome {
    let outcome = raw_solve(problem, config);
    if let (SolveOutcome::SolverError(msg), Some(limit)) = (&outcome, config.time_limit) {
        warn!(backend, ?limit, %msg, "solver stopped without an optimum");
    }

    match outcome {
        SolveOutcome::Optimal(assignment) => {
            match certify(problem, &assignment, config.feasibility_tolerance) {
                Ok(()) => {
                    debug!(backend, "solution certified");
                    SolveOutcome::Optimal(assignment)
                }
                Err(failure) => {
                    warn!(backend, %failure, "rejecting uncertified solution");
                    SolveOutcome::SolverError(format!(
                        "{backend}: solution failed certification: {failure}"
                    ))
                }
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvsizer_core::{Assignment, Domain, LinearExpr, Sense};
    use std::time::Duration;

    fn tiny() -> LpProblem {
        let mut lp = LpProblem::new();
        let x = lp.add_variable("x", Domain::NonNegative);
        lp.add_constraint("floor", LinearExpr::var(x), Sense::GreaterEqual, 2.0);
        lp.set_objective(LinearExpr::var(x));
        lp
    }

    #[test]
    fn test_solver_kind_parsing() {
        assert_eq!(
            LpSolverKind::from_str("clarabel").unwrap(),
            LpSolverKind::Clarabel
        );
        assert_eq!(
            LpSolverKind::from_str("CLARABEL").unwrap(),
            LpSolverKind::Clarabel
        );
        assert!(LpSolverKind::from_str("gurobi").is_err());
        assert!(LpSolverKind::available().contains(&"clarabel"));
        assert_eq!(LpSolverKind::default().as_str(), "clarabel");
    }

    #[cfg(not(feature = "solver-highs"))]
    #[test]
    fn test_highs_requires_feature() {
        let err = LpSolverKind::from_str("highs").unwrap_err();
        assert!(err.to_string().contains("supported values: clarabel"));
    }

    #[test]
    fn test_uncertified_point_is_rejected() {
        let outcome = solve_certified("fake", &tiny(), &SolverConfig::default(), |_, _| {
            SolveOutcome::Optimal(Assignment::from_values([1.0]))
        });
        match outcome {
            SolveOutcome::SolverError(msg) => assert!(msg.contains("floor")),
            other => panic!("expected solver error, got {other:?}"),
        }
    }

    #[test]
    fn test_failures_pass_through() {
        let outcome = solve_certified("fake", &tiny(), &SolverConfig::default(), |_, _| {
            SolveOutcome::Infeasible("fake: nope".into())
        });
        assert_eq!(outcome, SolveOutcome::Infeasible("fake: nope".into()));
    }

    #[test]
    fn test_time_limit_reaches_the_solver() {
        let config = SolverConfig::default().with_time_limit(Duration::from_millis(20));
        let outcome = solve_certified("limited", &tiny(), &config, |_, config| {
            assert_eq!(config.time_limit, Some(Duration::from_millis(20)));
            SolveOutcome::Optimal(Assignment::from_values([2.0]))
        });
        assert!(matches!(outcome, SolveOutcome::Optimal(_)));
    }
}
