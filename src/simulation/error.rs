//! Error types for the solver and scenario loading

use thiserror::Error;

/// Result type for integration runs
pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Failures raised by the ODE solver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationError {
    #[error("time grid is empty")]
    EmptyGrid,

    #[error("time grid is not strictly increasing at index {index} ({prev} -> {next})")]
    NonIncreasingGrid { index: usize, prev: f64, next: f64 },

    #[error("initial state contains non-finite values")]
    NonFiniteState,

    #[error("solution became non-finite at t = {t}")]
    NonFiniteSolution { t: f64 },

    #[error("step size underflow at t = {t} (h = {h:e})")]
    StepSizeUnderflow { t: f64, h: f64 },

    #[error("step error {error:e} exceeds tolerance at t = {t} (h = {h:e})")]
    ToleranceExceeded { t: f64, h: f64, error: f64 },

    #[error("solver returned {got} of {expected} samples (status {status})")]
    IncompleteSolution { expected: usize, got: usize, status: String },

    #[error("solver failed: {0}")]
    Solver(String),

    #[error("exceeded {max_steps} steps before reaching t = {target} (stopped at t = {t})")]
    MaxStepsExceeded { t: f64, target: f64, max_steps: usize },
}

/// Errors that can occur while loading or validating a scenario
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid scenario: {0}")]
    Invalid(String),
}
