//! Configuration file
//! Default location: ~/.config/pvsizer/config.toml

use anyhow::{anyhow, Context, Result};
use pvsizer_core::SolverConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main pvsizer configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PvsizerConfig {
    #[serde(default)]
    pub solver: SolverSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSection {
    /// Default LP backend
    #[serde(default = "default_lp_solver")]
    pub default_lp: String,
    /// Solve time limit in seconds (absent = no limit)
    #[serde(default)]
    pub time_limit_seconds: Option<f64>,
    /// Scaled residual tolerance for certifying solutions
    #[serde(default = "default_feasibility_tolerance")]
    pub feasibility_tolerance: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            default_lp: default_lp_solver(),
            time_limit_seconds: None,
            feasibility_tolerance: default_feasibility_tolerance(),
        }
    }
}

fn default_lp_solver() -> String {
    "clarabel".to_string()
}

fn default_feasibility_tolerance() -> f64 {
    SolverConfig::default().feasibility_tolerance
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

fn default_chart_width() -> usize {
    72
}

fn default_chart_height() -> usize {
    16
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PvsizerConfig {
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.logging
            .level
            .parse()
            .map_err(|_| anyhow!("invalid log level '{}' in config", self.logging.level))
    }

    /// Solver settings, with an optional time limit override in seconds.
    pub fn solver_config(&self, time_limit_override: Option<f64>) -> Result<SolverConfig> {
        let tolerance = self.solver.feasibility_tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(anyhow!(
                "feasibility_tolerance must be positive, got {tolerance}"
            ));
        }
        let mut config = SolverConfig::default().with_tolerance(tolerance);
        if let Some(seconds) = time_limit_override.or(self.solver.time_limit_seconds) {
            let limit = Duration::try_from_secs_f64(seconds)
                .map_err(|_| anyhow!("time limit must be a non-negative number of seconds, got {seconds}"))?;
            config = config.with_time_limit(limit);
        }
        Ok(config)
    }
}

/// Location: ~/.config/pvsizer/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pvsizer").join("config.toml"))
}

/// Load an explicit config file, or the default one when it exists.
///
/// A missing default file yields the default configuration; a missing explicit
/// file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<PvsizerConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(PvsizerConfig::default()),
        },
    };
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    let config: PvsizerConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing config '{}'", path.display()))?;
    Ok(config)
}
