//! Execution orchestrator tying registry, fingerprints and cache together

use crate::cache::{EntryKey, ResultCache};
use crate::error::RunError;
use aoc_solver::{Level, SolveError, SolverDescriptor, SolverRegistry, hash_input};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The solver's answer
    pub answer: String,
    /// Time spent inside the solver; zero for cached answers
    pub elapsed: Duration,
    /// Whether the answer came from the cache
    pub cached: bool,
}

impl RunOutcome {
    /// Elapsed time in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Runs solvers with result memoization
///
/// Holds only shared references, so one can be created per request and used
/// from any number of threads at once.
///
/// # Example
///
/// ```no_run
/// use aoc_runner::{PuzzleRunner, ResultCache};
/// use aoc_solver::SolverRegistry;
///
/// let registry = SolverRegistry::discover();
/// let cache = ResultCache::new("data/cache");
/// let runner = PuzzleRunner::new(&registry, &cache);
///
/// let outcome = runner.run(1, 1, "L68\nL30").unwrap();
/// println!("{} ({}ms, cached: {})", outcome.answer, outcome.elapsed_ms(), outcome.cached);
/// ```
#[derive(Clone, Copy)]
pub struct PuzzleRunner<'a> {
    registry: &'a SolverRegistry,
    cache: &'a ResultCache,
}

impl<'a> PuzzleRunner<'a> {
    pub fn new(registry: &'a SolverRegistry, cache: &'a ResultCache) -> Self {
        Self { registry, cache }
    }

    /// Run the solver for `day` at `level` on `input`
    ///
    /// The input is hashed verbatim; callers apply any trimming beforehand.
    pub fn run(&self, day: u8, level: u8, input: &str) -> Result<RunOutcome, RunError> {
        let level = self.validate(day, level)?;
        self.run_level(day, level, input)
    }

    /// Check a request without running it: the level first, then the day
    pub fn validate(&self, day: u8, level: u8) -> Result<Level, RunError> {
        let level = Level::try_from(level).map_err(|e| RunError::InvalidLevel(e.0))?;
        if !self.registry.has(day) {
            return Err(RunError::NotFound(day));
        }
        Ok(level)
    }

    /// Same as [`run`](Self::run) with an already validated level
    pub fn run_level(&self, day: u8, level: Level, input: &str) -> Result<RunOutcome, RunError> {
        let descriptor = self.registry.resolve(day).ok_or(RunError::NotFound(day))?;

        let input_fingerprint = hash_input(input);
        let key = EntryKey {
            day,
            level,
            input: &input_fingerprint,
            solver: descriptor.fingerprint(),
        };

        if let Some(answer) = self.cache.get(&key) {
            info!(day, %level, "using cached result");
            return Ok(RunOutcome {
                answer,
                elapsed: Duration::ZERO,
                cached: true,
            });
        }

        info!(day, %level, "executing solution");
        let start = Instant::now();
        let answer = solve_contained(descriptor, level, input)
            .map_err(|source| RunError::Execution { day, level, source })?;
        let elapsed = start.elapsed();

        self.cache.put(&key, &answer);

        Ok(RunOutcome {
            answer,
            elapsed,
            cached: false,
        })
    }

    /// Check if a solver exists for a day
    pub fn has_solution(&self, day: u8) -> bool {
        self.registry.has(day)
    }

    /// Days with a registered solver, ascending
    pub fn available_days(&self) -> Vec<u8> {
        self.registry.available_days()
    }
}

/// Run a solver, turning a panic into [`SolveError::Panicked`]
fn solve_contained(
    descriptor: &SolverDescriptor,
    level: Level,
    input: &str,
) -> Result<String, SolveError> {
    let solver = descriptor.solver();
    panic::catch_unwind(AssertUnwindSafe(|| solver.solve(level, input))).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        warn!(day = descriptor.day(), %level, panic = %message, "solver panicked");
        Err(SolveError::Panicked(message))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
