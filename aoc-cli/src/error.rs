//! Error types for the CLI

use aoc_runner::RunError;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable puzzle input
    #[error("No input provided")]
    EmptyInput,

    /// Engine error
    #[error("{0}")]
    Run(#[from] RunError),

    /// Some solvers failed during a batch run
    #[error("{0} solver(s) failed")]
    Failures(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code: 2 for bad requests, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Run(e) if e.is_client_error() => 2,
            CliError::EmptyInput => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{Level, SolveError};

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(RunError::InvalidLevel(3)).exit_code(), 2);
        assert_eq!(CliError::from(RunError::NotFound(9)).exit_code(), 2);
        let failed = RunError::Execution {
            day: 1,
            level: Level::One,
            source: SolveError::failed("boom"),
        };
        assert_eq!(CliError::from(failed).exit_code(), 1);
        assert_eq!(CliError::Failures(2).exit_code(), 1);
    }
}
