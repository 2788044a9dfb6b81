//! Configuration resolution from CLI args

use crate::cli::{Args, Command};
use crate::error::CliError;
use aoc_solver::Level;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Directory holding cached answers
    pub cache_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
    /// What to do
    pub action: Action,
}

/// A resolved subcommand
pub enum Action {
    Solve {
        day: u8,
        level: u8,
        input: Option<PathBuf>,
    },
    List,
    Run(RunConfig),
}

/// Settings for a batch run over input files
pub struct RunConfig {
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Levels to run
    pub levels: Vec<Level>,
    /// Directory of `dayNN.txt` inputs
    pub input_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let action = match args.command {
            Command::Solve { day, level, input } => Action::Solve {
                day,
                level,
                input: input.map(|p| expand_tilde(&p)),
            },
            Command::List => Action::List,
            Command::Run {
                day,
                level,
                input_dir,
                threads,
            } => {
                let levels = match level {
                    Some(l) => vec![
                        Level::try_from(l).map_err(|e| CliError::Config(e.to_string()))?,
                    ],
                    None => Level::ALL.to_vec(),
                };
                let thread_count = match threads {
                    Some(0) => {
                        return Err(CliError::Config("--threads must be at least 1".into()));
                    }
                    Some(n) => n,
                    None => num_cpus(),
                };
                Action::Run(RunConfig {
                    day_filter: day,
                    levels,
                    input_dir: expand_tilde(&input_dir),
                    thread_count,
                })
            }
        };

        Ok(Config {
            cache_dir: expand_tilde(&args.cache_dir),
            quiet: args.quiet,
            action,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
