use anyhow::{bail, Result};
use pvsizer_cli::ScenarioCommands;
use pvsizer_scenarios::{reference_scenario, write_scenario};

pub fn handle(command: &ScenarioCommands) -> Result<()> {
    match command {
        ScenarioCommands::Init { out, force } => {
            if out.exists() && !force {
                bail!("{} already exists; pass --force to overwrite", out.display());
            }
            write_scenario(out, &reference_scenario())?;
            println!("Wrote reference scenario to {}", out.display());
            Ok(())
        }
    }
}
