use super::{load_params, select_backend};
use anyhow::{Context, Result};
use pvsizer_algo::{pv_cost_sweep, SweepPoint};
use pvsizer_cli::PvsizerConfig;
use std::io::{self, Write};
use std::path::Path;
use tabwriter::TabWriter;

pub fn handle(
    path: Option<&Path>,
    multipliers: &[f64],
    solver: Option<&str>,
    config: &PvsizerConfig,
) -> Result<()> {
    let params = load_params(path)?;
    let backend = select_backend(solver, config)?;
    let solver_config = config.solver_config(None)?;
    let points = pv_cost_sweep(&params, multipliers, backend.as_ref(), &solver_config)
        .with_context(|| format!("sweeping PV cost for scenario '{}'", params.name))?;
    print_sweep_table(&points)
}

fn print_sweep_table(points: &[SweepPoint]) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    writeln!(
        writer,
        "MULTIPLIER\tPV COST (EUR/kWp)\tPV (kWp)\tBATTERY (kWh)\tTOTAL COST (EUR)"
    )?;
    for point in points {
        writeln!(
            writer,
            "{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            point.multiplier,
            point.pv_cost_per_kwp,
            point.pv_capacity.value(),
            point.battery_capacity.value(),
            point.objective.value()
        )?;
    }
    writer.flush()?;
    Ok(())
}
