use super::solve_certified;
use super::translate::{into_outcome, timed_out, translate, unbounded};
use clarabel::solver::SolverStatus;
use good_lp::solvers::clarabel::clarabel;
use good_lp::SolverModel;
use pvsizer_core::{LpBackend, LpProblem, SolveOutcome, SolverConfig};

/// Pure-Rust interior-point backend, always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClarabelBackend;

const ID: &str = "clarabel";

fn solve_raw(problem: &LpProblem, config: &SolverConfig) -> SolveOutcome {
    let translated = translate(problem);
    let mut model = translated
        .vars
        .minimise(translated.objective)
        .using(clarabel);
    if let Some(limit) = config.time_limit {
        model.settings().time_limit(limit.as_secs_f64());
    }
    for c in translated.constraints {
        model = model.with(c);
    }

    let result = model.solve();
    if let Ok(solution) = &result {
        if let Some(outcome) = status_outcome(solution.inner().status) {
            return outcome;
        }
    }
    into_outcome(ID, result, &translated.handles)
}

/// Statuses good_lp hands back as a solution although no optimum was reached.
fn status_outcome(status: SolverStatus) -> Option<SolveOutcome> {
    match status {
        SolverStatus::Solved => None,
        SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => Some(unbounded(ID)),
        SolverStatus::AlmostSolved => Some(SolveOutcome::SolverError(format!(
            "{ID}: converged only to reduced accuracy"
        ))),
        SolverStatus::MaxTime => Some(timed_out(ID)),
        other => Some(SolveOutcome::SolverError(format!("{ID}: {other:?}"))),
    }
}

impl LpBackend for ClarabelBackend {
    fn id(&self) -> &str {
        ID
    }

    fn solve(&self, problem: &LpProblem, config: &SolverConfig) -> SolveOutcome {
        solve_certified(ID, problem, config, solve_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvsizer_core::{Domain, LinearExpr, Sense};

    #[test]
    fn test_small_lp() {
        // min x + 2y  s.t.  x + y >= 3,  y >= 1
        let mut lp = LpProblem::new();
        let x = lp.add_variable("x", Domain::NonNegative);
        let y = lp.add_variable("y", Domain::NonNegative);
        lp.add_constraint("sum", LinearExpr::var(x).plus(1.0, y), Sense::GreaterEqual, 3.0);
        lp.add_constraint("y_floor", LinearExpr::var(y), Sense::GreaterEqual, 1.0);
        lp.set_objective(LinearExpr::var(x).plus(2.0, y));

        let assignment = ClarabelBackend
            .solve(&lp, &SolverConfig::default())
            .into_assignment()
            .unwrap();
        assert!((assignment.get(x).unwrap() - 2.0).abs() < 1e-4);
        assert!((assignment.get(y).unwrap() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_infeasible_lp() {
        let mut lp = LpProblem::new();
        let x = lp.add_variable("x", Domain::NonNegative);
        lp.add_constraint("cap", LinearExpr::var(x), Sense::LessEqual, 1.0);
        lp.add_constraint("need", LinearExpr::var(x), Sense::GreaterEqual, 2.0);
        lp.set_objective(LinearExpr::var(x));

        let outcome = ClarabelBackend.solve(&lp, &SolverConfig::default());
        assert!(matches!(outcome, SolveOutcome::Infeasible(_)), "{outcome:?}");
    }

    #[test]
    fn test_unbounded_lp() {
        // min -x  s.t.  x >= 1
        let mut lp = LpProblem::new();
        let x = lp.add_variable("x", Domain::NonNegative);
        lp.add_constraint("floor", LinearExpr::var(x), Sense::GreaterEqual, 1.0);
        lp.set_objective(LinearExpr::new().plus(-1.0, x));

        let outcome = ClarabelBackend.solve(&lp, &SolverConfig::default());
        assert!(matches!(outcome, SolveOutcome::Unbounded(_)), "{outcome:?}");

        // min y  s.t.  y <= 5, y free
        let mut lp = LpProblem::new();
        let y = lp.add_variable("y", Domain::Free);
        lp.add_constraint("ceiling", LinearExpr::var(y), Sense::LessEqual, 5.0);
        lp.set_objective(LinearExpr::var(y));

        let outcome = ClarabelBackend.solve(&lp, &SolverConfig::default());
        assert!(matches!(outcome, SolveOutcome::Unbounded(_)), "{outcome:?}");
    }

    #[test]
    fn test_status_mapping() {
        assert!(status_outcome(SolverStatus::Solved).is_none());
        assert!(matches!(
            status_outcome(SolverStatus::AlmostDualInfeasible),
            Some(SolveOutcome::Unbounded(_))
        ));
        assert!(matches!(
            status_outcome(SolverStatus::AlmostSolved),
            Some(SolveOutcome::SolverError(_))
        ));
        match status_outcome(SolverStatus::MaxTime) {
            Some(SolveOutcome::SolverError(msg)) => assert!(msg.contains("timed out")),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
