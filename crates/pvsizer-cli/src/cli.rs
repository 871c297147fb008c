use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pvsizer",
    author,
    version,
    about = "Least-cost sizing of stand-alone PV + battery microgrids",
    long_about = None
)]
pub struct Cli {
    /// Set the logging level (overrides the config file)
    #[arg(long)]
    pub log_level: Option<tracing::Level>,

    /// Configuration file (default: ~/.config/pvsizer/config.toml)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve the sizing LP and report optimal PV and battery capacity
    Solve {
        /// Scenario file (YAML, JSON or TOML); the built-in reference day when omitted
        #[arg(value_hint = ValueHint::FilePath)]
        scenario: Option<PathBuf>,
        /// LP solver backend (e.g. clarabel)
        #[arg(long)]
        solver: Option<String>,
        /// Wall-clock limit for the solve, in seconds
        #[arg(long)]
        time_limit: Option<f64>,
        /// Print the energy-flow chart
        #[arg(long)]
        chart: bool,
        /// Write the energy-flow chart to a file
        #[arg(long, value_hint = ValueHint::FilePath)]
        chart_out: Option<PathBuf>,
        /// Write the per-step series as CSV
        #[arg(long, value_hint = ValueHint::FilePath)]
        csv: Option<PathBuf>,
        /// Write the full result as JSON
        #[arg(long, value_hint = ValueHint::FilePath)]
        json: Option<PathBuf>,
    },
    /// Parse and validate a scenario file without solving
    Validate {
        #[arg(value_hint = ValueHint::FilePath)]
        scenario: PathBuf,
    },
    /// Show the size of the sizing LP by constraint kind
    Inspect {
        #[arg(value_hint = ValueHint::FilePath)]
        scenario: Option<PathBuf>,
    },
    /// Re-solve with the PV cost scaled by each multiplier
    Sweep {
        #[arg(value_hint = ValueHint::FilePath)]
        scenario: Option<PathBuf>,
        /// Comma-separated PV cost multipliers
        #[arg(long, value_delimiter = ',', default_value = "0.5,0.75,1,1.25,1.5")]
        multipliers: Vec<f64>,
        /// LP solver backend (e.g. clarabel)
        #[arg(long)]
        solver: Option<String>,
    },
    /// Scenario file helpers
    Scenario {
        #[command(subcommand)]
        command: ScenarioCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// Write the built-in reference scenario to a file
    Init {
        /// Output file; the extension picks the format
        #[arg(value_hint = ValueHint::FilePath)]
        out: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
