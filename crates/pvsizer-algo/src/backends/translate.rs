//! Translation of an [`LpProblem`] into `good_lp` model pieces.

use good_lp::{
    constraint, variable, variables, Constraint, Expression, ProblemVariables, ResolutionError,
    Solution, SolutionStatus, Variable,
};
use pvsizer_core::{Assignment, Domain, LinearExpr, LpProblem, Sense, SolveOutcome};

/// `good_lp` pieces of one problem, ready to be handed to any solver.
pub(crate) struct Translated {
    pub vars: ProblemVariables,
    pub objective: Expression,
    pub constraints: Vec<Constraint>,
    pub handles: Vec<Variable>,
}

pub(crate) fn translate(problem: &LpProblem) -> Translated {
    let mut vars = variables!();

    let handles: Vec<Variable> = problem
        .variables()
        .iter()
        .map(|def| match def.domain {
            Domain::NonNegative => vars.add(variable().min(0.0)),
            Domain::Free => vars.add(variable()),
        })
        .collect();

    let objective = to_expression(problem.objective(), &handles);

    let constraints = problem
        .constraints()
        .iter()
        .map(|c| {
            let lhs = to_expression(&c.lhs, &handles);
            let rhs = c.rhs;
            match c.sense {
                Sense::LessEqual => constraint!(lhs <= rhs),
                Sense::GreaterEqual => constraint!(lhs >= rhs),
                Sense::Equal => constraint!(lhs == rhs),
            }
        })
        .collect();

    Translated {
        vars,
        objective,
        constraints,
        handles,
    }
}

fn to_expression(expr: &LinearExpr, handles: &[Variable]) -> Expression {
    let mut out = Expression::from(expr.constant_term());
    for &(var, coefficient) in expr.terms() {
        out += coefficient * handles[var.index()];
    }
    out
}

/// Map a `good_lp` solve result onto the solver-neutral outcome.
///
/// Only a point the solver reports as optimal becomes [`SolveOutcome::Optimal`];
/// a point returned at a time or gap limit is a solver error.
pub(crate) fn into_outcome<S: Solution>(
    backend: &str,
    result: Result<S, ResolutionError>,
    handles: &[Variable],
) -> SolveOutcome {
    match result {
        Ok(solution) => match solution.status() {
            SolutionStatus::Optimal => SolveOutcome::Optimal(Assignment::from_values(
                handles.iter().map(|&v| solution.value(v)),
            )),
            SolutionStatus::TimeLimit => timed_out(backend),
            SolutionStatus::GapLimit => {
                SolveOutcome::SolverError(format!("{backend}: stopped at a gap limit"))
            }
        },
        Err(ResolutionError::Infeasible) => {
            SolveOutcome::Infeasible(format!("{backend}: no feasible sizing meets the load"))
        }
        Err(ResolutionError::Unbounded) => unbounded(backend),
        Err(ResolutionError::Other(TIME_LIMIT_REACHED)) => timed_out(backend),
        Err(other) => SolveOutcome::SolverError(format!("{backend}: {other:?}")),
    }
}

/// Message good_lp attaches to a Clarabel `MaxTime` status
const TIME_LIMIT_REACHED: &str = "Time limit reached";

pub(crate) fn timed_out(backend: &str) -> SolveOutcome {
    SolveOutcome::SolverError(format!("{backend}: timed out before reaching an optimum"))
}

pub(crate) fn unbounded(backend: &str) -> SolveOutcome {
    SolveOutcome::Unbounded(format!("{backend}: objective is unbounded below"))
}
