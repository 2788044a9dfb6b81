//! Parallel executor for running solvers against input files

use crate::config::RunConfig;
use crate::error::CliError;
use crate::inputs::InputDir;
use aoc_runner::{PuzzleRunner, RunError, RunOutcome};
use aoc_solver::Level;
use itertools::Itertools;
use rayon::prelude::*;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Result from a single solver execution
pub struct SolverResult {
    pub day: u8,
    pub level: Level,
    pub outcome: Result<RunOutcome, RunError>,
}

/// Work item representing one (day, level) to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem<'a> {
    pub day: u8,
    pub level: Level,
    pub input: &'a str,
}

/// Inputs loaded for a run, with days whose file is absent
pub struct LoadedInputs {
    inputs: Vec<(u8, String)>,
    missing: Vec<u8>,
}

impl LoadedInputs {
    /// Days that have a solver but no input file
    pub fn missing(&self) -> &[u8] {
        &self.missing
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Parallel executor for running solvers
pub struct Executor<'a> {
    runner: PuzzleRunner<'a>,
    inputs: InputDir,
    day_filter: Option<u8>,
    levels: Vec<Level>,
    thread_pool: rayon::ThreadPool,
}

impl<'a> Executor<'a> {
    /// Create a new executor from config
    pub fn new(runner: PuzzleRunner<'a>, config: &RunConfig) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(Self {
            runner,
            inputs: InputDir::new(config.input_dir.clone()),
            day_filter: config.day_filter,
            levels: config.levels.clone(),
            thread_pool,
        })
    }

    /// Registered days selected by the day filter
    pub fn selected_days(&self) -> Vec<u8> {
        self.runner
            .available_days()
            .into_iter()
            .filter(|&d| self.day_filter.is_none_or(|f| f == d))
            .collect()
    }

    /// Read the input file of every selected day
    pub fn load_inputs(&self) -> Result<LoadedInputs, CliError> {
        let mut loaded = LoadedInputs {
            inputs: Vec::new(),
            missing: Vec::new(),
        };
        for day in self.selected_days() {
            match self.inputs.get(day)? {
                Some(input) => loaded.inputs.push((day, input)),
                None => {
                    debug!(day, path = %self.inputs.input_path(day).display(), "no input file");
                    loaded.missing.push(day);
                }
            }
        }
        Ok(loaded)
    }

    /// Expand loaded inputs into (day, level) work items, ordered by day then level
    pub fn work_items<'i>(&self, loaded: &'i LoadedInputs) -> Vec<WorkItem<'i>> {
        loaded
            .inputs
            .iter()
            .cartesian_product(self.levels.iter().copied())
            .map(|((day, input), level)| WorkItem {
                day: *day,
                level,
                input: input.as_str(),
            })
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, work_items: Vec<WorkItem<'_>>, tx: Sender<SolverResult>) {
        let runner = self.runner;
        self.thread_pool.install(|| {
            work_items.into_par_iter().for_each_with(tx, |tx, work| {
                let outcome = runner.run_level(work.day, work.level, work.input);
                // Receiver only hangs up once the caller stops listening
                let _ = tx.send(SolverResult {
                    day: work.day,
                    level: work.level,
                    outcome,
                });
            });
        });
    }
}
