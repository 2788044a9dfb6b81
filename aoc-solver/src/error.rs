//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving one level of a puzzle
#[derive(Debug, Error)]
pub enum SolveError {
    /// The raw input could not be parsed
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// An error occurred while solving the level
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The solver panicked; carries the panic message
    #[error("Solver panicked: {0}")]
    Panicked(String),
}

impl SolveError {
    /// Wrap any error as a solve failure
    pub fn failed<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::SolveFailed(err.into())
    }
}

/// Error returned when a level number is neither 1 nor 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Level must be 1 or 2, got {0}")]
pub struct InvalidLevel(pub u8);
