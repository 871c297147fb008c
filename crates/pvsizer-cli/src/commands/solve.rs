use super::{load_params, select_backend};
use anyhow::{Context, Result};
use pvsizer_algo::solve_sizing;
use pvsizer_cli::PvsizerConfig;
use pvsizer_viz::{energy_flow_chart, render_report, write_json, write_series_csv};
use std::fs;
use std::path::Path;
use tracing::info;

pub struct SolveArgs<'a> {
    pub scenario: Option<&'a Path>,
    pub solver: Option<&'a str>,
    pub time_limit: Option<f64>,
    pub chart: bool,
    pub chart_out: Option<&'a Path>,
    pub csv: Option<&'a Path>,
    pub json: Option<&'a Path>,
}

pub fn handle(args: &SolveArgs<'_>, config: &PvsizerConfig) -> Result<()> {
    let params = load_params(args.scenario)?;
    let backend = select_backend(args.solver, config)?;
    let solver_config = config.solver_config(args.time_limit)?;

    let result = solve_sizing(&params, backend.as_ref(), &solver_config)
        .with_context(|| format!("sizing scenario '{}'", params.name))?;

    print!("{}", render_report(&result));

    if args.chart || args.chart_out.is_some() {
        let chart = energy_flow_chart(
            &result,
            config.output.chart_width,
            config.output.chart_height,
        )
        .render();
        if args.chart {
            println!();
            print!("{chart}");
        }
        if let Some(path) = args.chart_out {
            fs::write(path, &chart)
                .with_context(|| format!("writing chart to {}", path.display()))?;
            info!(path = %path.display(), "chart written");
        }
    }
    if let Some(path) = args.csv {
        write_series_csv(&result, path)?;
        info!(path = %path.display(), "series written");
    }
    if let Some(path) = args.json {
        write_json(&result, path)?;
        info!(path = %path.display(), "result written");
    }
    Ok(())
}
