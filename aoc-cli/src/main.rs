//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_runner::{PuzzleRunner, ResultCache};
use aoc_solver::SolverRegistry;
use clap::Parser;
use cli::Args;
use config::{Action, Config, RunConfig};
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    let registry = SolverRegistry::discover();
    let cache = ResultCache::new(config.cache_dir.as_path());
    let runner = PuzzleRunner::new(&registry, &cache);
    let formatter = OutputFormatter::new(config.quiet);

    match config.action {
        Action::Solve { day, level, input } => {
            // Reject bad requests before blocking on stdin
            let level = runner.validate(day, level)?;
            let input = inputs::read_input(input.as_deref())?;
            let outcome = runner.run_level(day, level, &input)?;
            formatter.print_outcome(&outcome);
            Ok(())
        }
        Action::List => {
            formatter.print_days(&runner.available_days());
            Ok(())
        }
        Action::Run(run_config) => run_executor(runner, &run_config, formatter),
    }
}

/// Run the executor and collect results
fn run_executor(
    runner: PuzzleRunner<'_>,
    config: &RunConfig,
    formatter: OutputFormatter,
) -> Result<(), CliError> {
    let executor = Executor::new(runner, config)?;

    if executor.selected_days().is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let loaded = executor.load_inputs()?;
    if !loaded.missing().is_empty() {
        println!("Missing {} input file(s):", loaded.missing().len());
        for day in loaded.missing() {
            println!("  - day{:02}.txt", day);
        }
    }
    if loaded.is_empty() {
        println!("No input files found in {}", config.input_dir.display());
        return Ok(());
    }

    let work_items = executor.work_items(&loaded);
    formatter.print_start(work_items.len());

    // Build expected keys for result aggregation
    let expected_keys = work_items
        .iter()
        .map(|w| aggregator::ResultKey {
            day: w.day,
            level: w.level,
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    std::thread::scope(|s| {
        let handle = s.spawn(|| executor.execute(work_items, tx));

        // Print results in order as they become ready
        for result in rx {
            for ready in aggregator.add(result) {
                formatter.print_result(&ready);
                results.push(ready);
            }
        }

        handle
            .join()
            .map_err(|_| CliError::Config("Executor thread panicked".to_string()))
    })?;

    // Drain any remaining buffered results (shouldn't happen if all results arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    formatter.print_summary(&results);

    match results.iter().filter(|r| r.outcome.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::Failures(failed)),
    }
}
