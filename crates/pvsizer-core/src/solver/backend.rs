use crate::error::SizerError;
use crate::lp::{LpProblem, VarId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration passed to backend solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Scaled residual tolerance used when certifying an assignment
    pub feasibility_tolerance: f64,
    /// Wall-clock limit handed to the solver; `None` means no limit
    pub time_limit: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            feasibility_tolerance: 1e-5,
            time_limit: None,
        }
    }
}

impl SolverConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.feasibility_tolerance = tolerance;
        self
    }
}

/// Values reported by a solver, indexed by [`VarId`].
///
/// A slot is `None` when the backend did not report a usable value for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    values: Vec<Option<f64>>,
}

impl Assignment {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// All variables valued; non-finite values are stored as missing.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.is_finite().then_some(v))
                .collect(),
        }
    }

    pub fn get(&self, var: VarId) -> Option<f64> {
        self.values.get(var.index()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of one solve. Only `Optimal` carries values.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Optimal(Assignment),
    Infeasible(String),
    Unbounded(String),
    SolverError(String),
}

impl SolveOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            SolveOutcome::Optimal(_) => "optimal",
            SolveOutcome::Infeasible(_) => "infeasible",
            SolveOutcome::Unbounded(_) => "unbounded",
            SolveOutcome::SolverError(_) => "solver error",
        }
    }

    /// Convert into the assignment, mapping every failure status to its error.
    pub fn into_assignment(self) -> Result<Assignment, SizerError> {
        match self {
            SolveOutcome::Optimal(assignment) => Ok(assignment),
            SolveOutcome::Infeasible(reason) => Err(SizerError::Infeasible(reason)),
            SolveOutcome::Unbounded(reason) => Err(SizerError::Unbounded(reason)),
            SolveOutcome::SolverError(reason) => Err(SizerError::Solver(reason)),
        }
    }
}

/// Trait for solving linear programs (`solve(Problem) -> outcome`).
///
/// Backends never return partial or approximate answers as `Optimal`.
pub trait LpBackend: Send + Sync {
    /// Unique identifier (e.g., "clarabel", "highs")
    fn id(&self) -> &str;

    fn solve(&self, problem: &LpProblem, config: &SolverConfig) -> SolveOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_drops_non_finite() {
        let assignment = Assignment::from_values([1.0, f64::NAN, f64::INFINITY]);
        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.get(VarId(0)), Some(1.0));
        assert_eq!(assignment.get(VarId(1)), None);
        assert_eq!(assignment.get(VarId(2)), None);
        assert_eq!(assignment.get(VarId(9)), None);
    }

    #[test]
    fn test_outcome_mapping() {
        let err = SolveOutcome::Infeasible("no point".into())
            .into_assignment()
            .unwrap_err();
        assert!(matches!(err, SizerError::Infeasible(ref m) if m == "no point"));

        let err = SolveOutcome::Unbounded("ray".into())
            .into_assignment()
            .unwrap_err();
        assert!(matches!(err, SizerError::Unbounded(_)));

        let err = SolveOutcome::SolverError("crash".into())
            .into_assignment()
            .unwrap_err();
        assert!(matches!(err, SizerError::Solver(_)));

        let ok = SolveOutcome::Optimal(Assignment::from_values([2.0]));
        assert_eq!(ok.status(), "optimal");
        assert!(ok.into_assignment().is_ok());
    }

    #[test]
    fn test_backend_is_object_safe() {
        fn _accepts_backend(_b: &dyn LpBackend) {}
    }
}
