use super::solve_certified;
use super::translate::{into_outcome, translate};
use good_lp::solvers::highs::highs;
use good_lp::SolverModel;
use pvsizer_core::{LpBackend, LpProblem, SolveOutcome, SolverConfig};

/// HiGHS simplex backend (native library, `solver-highs` feature).
#[derive(Debug, Clone, Copy, Default)]
pub struct HighsBackend;

const ID: &str = "highs";

fn solve_raw(problem: &LpProblem, config: &SolverConfig) -> SolveOutcome {
    let translated = translate(problem);
    let mut model = translated.vars.minimise(translated.objective).using(highs);
    if let Some(limit) = config.time_limit {
        model = model.set_time_limit(limit.as_secs_f64());
    }
    for c in translated.constraints {
        model = model.with(c);
    }
    into_outcome(ID, model.solve(), &translated.handles)
}

impl LpBackend for HighsBackend {
    fn id(&self) -> &str {
        ID
    }

    fn solve(&self, problem: &LpProblem, config: &SolverConfig) -> SolveOutcome {
        solve_certified(ID, problem, config, solve_raw)
    }
}
