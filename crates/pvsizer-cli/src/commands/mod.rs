use anyhow::{Context, Result};
use pvsizer_algo::LpSolverKind;
use pvsizer_cli::{Commands, PvsizerConfig};
use pvsizer_core::{LpBackend, ScenarioParameters};
use pvsizer_scenarios::{load_scenario_from_path, reference_scenario};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

mod inspect;
mod scenario;
mod solve;
mod sweep;
mod validate;

pub fn run(command: &Commands, config: &PvsizerConfig) -> Result<()> {
    match command {
        Commands::Solve {
            scenario,
            solver,
            time_limit,
            chart,
            chart_out,
            csv,
            json,
        } => solve::handle(
            &solve::SolveArgs {
                scenario: scenario.as_deref(),
                solver: solver.as_deref(),
                time_limit: *time_limit,
                chart: *chart,
                chart_out: chart_out.as_deref(),
                csv: csv.as_deref(),
                json: json.as_deref(),
            },
            config,
        ),
        Commands::Validate { scenario } => validate::handle(scenario),
        Commands::Inspect { scenario } => inspect::handle(scenario.as_deref()),
        Commands::Sweep {
            scenario,
            multipliers,
            solver,
        } => sweep::handle(scenario.as_deref(), multipliers, solver.as_deref(), config),
        Commands::Scenario { command } => scenario::handle(command),
    }
}

/// Scenario from a file, or the built-in reference day.
fn load_params(path: Option<&Path>) -> Result<ScenarioParameters> {
    match path {
        Some(path) => load_scenario_from_path(path),
        None => {
            info!("no scenario file given, using the reference day");
            Ok(reference_scenario())
        }
    }
}

/// Backend named on the command line, falling back to the config default.
fn select_backend(flag: Option<&str>, config: &PvsizerConfig) -> Result<Arc<dyn LpBackend>> {
    let name = flag.unwrap_or(config.solver.default_lp.as_str());
    let kind: LpSolverKind = name
        .parse()
        .with_context(|| format!("selecting lp solver '{name}'"))?;
    Ok(kind.build_backend())
}
