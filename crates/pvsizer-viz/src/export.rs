use anyhow::{Context, Result};
use pvsizer_algo::SizingResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One CSV row of the per-step series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub step: usize,
    pub load_kwh: f64,
    pub pv_production_kwh: f64,
    pub battery_soc_kwh: f64,
    pub battery_charge_kwh: f64,
    pub battery_discharge_kwh: f64,
    pub pv_available_kwh: f64,
}

impl SeriesRow {
    pub fn rows(result: &SizingResult) -> Vec<SeriesRow> {
        (0..result.steps)
            .map(|t| SeriesRow {
                step: t,
                load_kwh: result.load[t].value(),
                pv_production_kwh: result.pv_production[t].value(),
                battery_soc_kwh: result.battery_soc[t].value(),
                battery_charge_kwh: result.battery_charge[t].value(),
                battery_discharge_kwh: result.battery_discharge[t].value(),
                pv_available_kwh: result.pv_available[t].value(),
            })
            .collect()
    }
}

/// Write the per-step series as CSV, one row per step.
pub fn write_series_csv(result: &SizingResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV writer for {}", path.display()))?;
    for row in SeriesRow::rows(result) {
        wtr.serialize(row).context("writing CSV row")?;
    }
    wtr.flush().context("flushing CSV writer")?;
    Ok(())
}

/// Write the full result as pretty JSON.
pub fn write_json(result: &SizingResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serializing result")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
