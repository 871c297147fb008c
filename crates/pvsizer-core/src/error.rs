//! Unified error types for the sizing workspace
//!
//! [`SizerError`] is the error every crate converts into at its API boundary.
//! Scenario problems are reported through the structured [`ValidationError`]
//! so callers can tell a malformed input apart from a solver outcome.
//!
//! # Example
//!
//! ```ignore
//! use pvsizer_core::{SizerError, SizerResult};
//!
//! fn size(path: &str) -> SizerResult<()> {
//!     let params = load_scenario(path)?;
//!     solve_sizing(&params, &backend, &config)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Malformed scenario parameters, detected before any solver call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("time horizon is empty (steps = 0)")]
    EmptyHorizon,

    #[error("{series} series has {actual} values but the time index has {expected} steps")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("capacity factor at step {step} is {value}, expected a value in [0, 1]")]
    CapacityFactorOutOfRange { step: usize, value: f64 },

    #[error("load at step {step} is {value}, expected a finite non-negative energy")]
    InvalidLoad { step: usize, value: f64 },

    #[error("{name} is {value}, expected a finite non-negative cost")]
    NegativeCost { name: &'static str, value: f64 },

    #[error("{name} is {value}, expected an efficiency in (0, 1]")]
    EfficiencyOutOfRange { name: &'static str, value: f64 },

    #[error("charge time is {0} hours, expected a finite positive duration")]
    NonPositiveChargeTime(f64),

    #[error("{name} is {value}, expected a finite non-negative limit")]
    InvalidCapacityLimit { name: &'static str, value: f64 },

    #[error("sweep multiplier {0} is invalid, expected a finite non-negative factor")]
    InvalidMultiplier(f64),
}

/// Unified error type for all sizing operations.
#[derive(Error, Debug)]
pub enum SizerError {
    /// Scenario parameters failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The LP has no feasible point
    #[error("Problem infeasible: {0}")]
    Infeasible(String),

    /// The objective is unbounded below
    #[error("Problem unbounded: {0}")]
    Unbounded(String),

    /// The solver failed, timed out or returned an uninterpretable status
    #[error("Solver error: {0}")]
    Solver(String),

    /// A solved variable had no usable value
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// I/O errors (file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results using SizerError.
pub type SizerResult<T> = Result<T, SizerError>;

impl From<serde_json::Error> for SizerError {
    fn from(err: serde_json::Error) -> Self {
        SizerError::Parse(err.to_string())
    }
}
