//! Memoizing execution engine for Advent of Code solvers
//!
//! Given a day, a level and raw puzzle text, [`PuzzleRunner`] resolves the
//! solver, fingerprints the input and the solver, and answers from the
//! [`ResultCache`] when a valid entry exists. Otherwise it runs the solver,
//! times the call and stores the answer.
//!
//! Cache failures never fail a run: unreadable or mismatched entries count as
//! misses and failed writes are logged and skipped.

mod cache;
mod error;
mod runner;

pub use cache::{CacheLookup, CacheRecord, CacheWrite, EntryKey, ResultCache};
pub use error::{CacheError, RunError};
pub use runner::{PuzzleRunner, RunOutcome};
