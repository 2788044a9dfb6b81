//! Advent of Code Solver Library
//!
//! The solver side of a memoizing puzzle runner: the capability contract each
//! puzzle solver implements, the registry that discovers solvers at startup,
//! and the fingerprints used to key cached answers.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Solver`] trait (`solve_level1` / `solve_level2` over raw text)
//! - The two-phase [`AocParser`] + [`PartSolver`] style, bridged by `#[derive(AocSolver)]`
//! - Static self-registration through `#[derive(AutoRegisterSolver)]`
//! - A [`SolverRegistry`] with lookup by day and per-solver fingerprints
//! - Stable SHA-256 fingerprints for input text and cache keys
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{FixedFingerprint, Level, RegistryBuilder, SolveError, Solver};
//!
//! struct Day01;
//!
//! impl Solver for Day01 {
//!     fn solve_level1(&self, input: &str) -> Result<String, SolveError> {
//!         Ok(input.lines().count().to_string())
//!     }
//!
//!     fn solve_level2(&self, input: &str) -> Result<String, SolveError> {
//!         Ok(input.len().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register("Day01", Day01)
//!     .fingerprint_source(FixedFingerprint::new("v1"))
//!     .build();
//!
//! let solver = registry.resolve(1).unwrap().solver();
//! assert_eq!(solver.solve(Level::One, "a\nb\nc").unwrap(), "3");
//! ```
//!
//! # Naming Convention
//!
//! Self-registered solvers are keyed by their type name, which must be `Day`
//! followed by a two-digit day (`Day01` through `Day25`). Anything else is
//! ignored during discovery.
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! pub struct Day01;
//! ```

mod error;
mod fingerprint;
mod registry;
mod solver;

// Re-export public API
pub use error::{InvalidLevel, ParseError, SolveError};
pub use fingerprint::{
    ContentFingerprint, ExecutableTimestamp, FingerprintSource, FixedFingerprint, hash_cache_key,
    hash_input,
};
pub use registry::{
    DAYS_PER_YEAR, RegistryBuilder, SolverConstructor, SolverDescriptor, SolverPlugin,
    SolverRegistry, day_from_name,
};
pub use solver::{AocParser, Level, PartSolver, Solver};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
