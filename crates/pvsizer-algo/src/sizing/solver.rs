use super::builder::build_problem;
use super::solution::{extract, SizingResult};
use pvsizer_core::{LpBackend, ScenarioParameters, SizerResult, SolveOutcome, SolverConfig};
use tracing::{info, warn};
use web_time::Instant;

/// Build, solve and extract the optimal sizing of one scenario.
///
/// Only a certified `Optimal` outcome yields a [`SizingResult`]; infeasible,
/// unbounded and failed solves are returned as errors carrying the solver
/// diagnostic.
pub fn solve_sizing(
    params: &ScenarioParameters,
    backend: &dyn LpBackend,
    config: &SolverConfig,
) -> SizerResult<SizingResult> {
    let problem = build_problem(params)?;

    info!(
        scenario = %params.name,
        solver = backend.id(),
        variables = problem.num_variables(),
        constraints = problem.num_constraints(),
        "solving sizing LP"
    );

    let start = Instant::now();
    let outcome = backend.solve(problem.lp(), config);
    let elapsed = start.elapsed();

    if !matches!(outcome, SolveOutcome::Optimal(_)) {
        warn!(
            scenario = %params.name,
            status = outcome.status(),
            "sizing LP has no certified optimum"
        );
    }
    let assignment = outcome.into_assignment()?;

    let mut result = extract(
        &problem,
        &assignment,
        backend.id(),
        config.feasibility_tolerance,
    )?;
    result.solve_time = elapsed;

    info!(
        scenario = %params.name,
        pv_kwp = result.pv_capacity.value(),
        battery_kwh = result.battery_capacity.value(),
        total_cost = result.total_cost.value(),
        elapsed_ms = elapsed.as_millis() as u64,
        "sizing solved"
    );

    Ok(result)
}
