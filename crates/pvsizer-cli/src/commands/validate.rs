use anyhow::Result;
use pvsizer_scenarios::load_scenario_from_path;
use std::path::Path;

pub fn handle(path: &Path) -> Result<()> {
    let params = load_scenario_from_path(path)?;
    println!(
        "Scenario '{}' is valid: {} steps, {:.2} kWh total load",
        params.name,
        params.steps,
        params.total_load_kwh()
    );
    Ok(())
}
