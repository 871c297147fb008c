//! Scenario files
//!
//! A scenario file is a serialized [`ScenarioParameters`] in YAML, JSON or
//! TOML. Loading always validates, so a file with `steps` disagreeing with
//! its series never reaches the model builder.

use anyhow::{anyhow, Context, Result};
use pvsizer_core::ScenarioParameters;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Yaml,
    Json,
    Toml,
}

impl ScenarioFormat {
    /// Format implied by a file extension, if it is a known one
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str())?;
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(ScenarioFormat::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(ScenarioFormat::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(ScenarioFormat::Toml)
        } else {
            None
        }
    }
}

/// Parse scenario text. Without a format, YAML is tried first, then JSON.
pub fn parse_scenario(data: &str, format: Option<ScenarioFormat>) -> Result<ScenarioParameters> {
    let params: ScenarioParameters = match format {
        Some(ScenarioFormat::Yaml) => {
            serde_yaml::from_str(data).context("parsing scenario yaml")?
        }
        Some(ScenarioFormat::Json) => {
            serde_json::from_str(data).context("parsing scenario json")?
        }
        Some(ScenarioFormat::Toml) => toml::from_str(data).context("parsing scenario toml")?,
        None => serde_yaml::from_str(data)
            .or_else(|_| serde_json::from_str(data))
            .context("parsing scenario")?,
    };
    params
        .validate()
        .with_context(|| format!("validating scenario '{}'", params.name))?;
    Ok(params)
}

pub fn load_scenario_from_path(path: &Path) -> Result<ScenarioParameters> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading scenario '{}'", path.display()))?;
    let params = parse_scenario(&data, ScenarioFormat::from_path(path))
        .with_context(|| format!("loading scenario '{}'", path.display()))?;
    debug!(path = %path.display(), scenario = %params.name, steps = params.steps, "loaded scenario");
    Ok(params)
}

/// Write a scenario in the format implied by the extension.
pub fn write_scenario(path: &Path, params: &ScenarioParameters) -> Result<()> {
    let format = ScenarioFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "cannot infer scenario format from '{}'; use .yaml, .yml, .json or .toml",
            path.display()
        )
    })?;
    let text = match format {
        ScenarioFormat::Yaml => serde_yaml::to_string(params).context("encoding scenario yaml")?,
        ScenarioFormat::Json => {
            serde_json::to_string_pretty(params).context("encoding scenario json")?
        }
        ScenarioFormat::Toml => toml::to_string(params).context("encoding scenario toml")?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory '{}'", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("writing scenario '{}'", path.display()))?;
    Ok(())
}
