//! Error types for the execution engine

use aoc_solver::{Level, SolveError};
use thiserror::Error;

/// Errors returned by [`PuzzleRunner::run`](crate::PuzzleRunner::run)
#[derive(Debug, Error)]
pub enum RunError {
    /// Level was neither 1 nor 2
    #[error("Level must be 1 or 2, got {0}")]
    InvalidLevel(u8),

    /// No solver registered for the day
    #[error("No solution found for day {0}")]
    NotFound(u8),

    /// The solver itself failed
    #[error("Solver for day {day} level {level} failed: {source}")]
    Execution {
        day: u8,
        level: Level,
        #[source]
        source: SolveError,
    },
}

impl RunError {
    /// True for problems with the request rather than with the solver
    ///
    /// Front ends map these to bad-request / not-found style responses.
    pub fn is_client_error(&self) -> bool {
        matches!(self, RunError::InvalidLevel(_) | RunError::NotFound(_))
    }
}

/// Cache-specific errors
///
/// Never escapes the cache store; it is carried inside
/// [`CacheLookup`](crate::CacheLookup) and [`CacheWrite`](crate::CacheWrite)
/// for logging and inspection.
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded or decoded
    #[error("Malformed cache record: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic rename of the temporary file failed
    #[error("Failed to persist cache record: {0}")]
    Persist(#[from] tempfile::PersistError),
}
