use super::load_params;
use anyhow::Result;
use pvsizer_algo::build_problem;
use std::path::Path;

pub fn handle(path: Option<&Path>) -> Result<()> {
    let params = load_params(path)?;
    let problem = build_problem(&params)?;
    print!("{}", problem.describe());
    Ok(())
}
