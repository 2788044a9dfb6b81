//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_runner::RunOutcome;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print the outcome of a single `solve`
    pub fn print_outcome(&self, outcome: &RunOutcome) {
        if self.quiet {
            println!("{}", outcome.answer);
        } else {
            println!("Answer: {}", outcome.answer);
            println!("{}", format_execution_time(outcome));
        }
    }

    /// Print the registered days for `list`
    pub fn print_days(&self, days: &[u8]) {
        if self.quiet {
            for day in days {
                println!("{}", day);
            }
            return;
        }

        if days.is_empty() {
            println!("No solutions registered.");
            println!("Add a `DayNN` type deriving `AutoRegisterSolver` to aoc-solutions.");
            return;
        }

        println!("Available solutions:");
        for day in days {
            println!("  Day {:02}", day);
        }
        println!();
        println!("Total: {} solution(s)", days.len());
    }

    /// Announce a batch run
    pub fn print_start(&self, count: usize) {
        if !self.quiet {
            println!("Running {} solver(s)...", count);
        }
    }

    /// Format and print a single batch result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            match &result.outcome {
                Ok(outcome) => println!("{}", outcome.answer),
                Err(e) => eprintln!("Error: {}", e),
            }
            return;
        }

        let prefix = format!("Day {:02} Level {}", result.day, result.level);
        match &result.outcome {
            Ok(outcome) if outcome.cached => println!("{}: {} (cached)", prefix, outcome.answer),
            Ok(outcome) => println!(
                "{}: {} ({})",
                prefix,
                outcome.answer,
                format_duration(outcome.elapsed)
            ),
            Err(e) => eprintln!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved ({} cached), {} failed",
            summary.solved, summary.cached, summary.failed
        );
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed_time));
        if !elapsed_time.is_zero() {
            let speedup = summary.solve_time.as_secs_f64() / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Counts over a batch of results
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub cached: usize,
    pub failed: usize,
    pub solve_time: Duration,
}

impl Summary {
    pub fn of(results: &[SolverResult]) -> Self {
        results
            .iter()
            .fold(Summary::default(), |mut acc, r| {
                match &r.outcome {
                    Ok(outcome) => {
                        acc.solved += 1;
                        if outcome.cached {
                            acc.cached += 1;
                        }
                        acc.solve_time += outcome.elapsed;
                    }
                    Err(_) => acc.failed += 1,
                }
                acc
            })
    }
}

/// `Execution time: Nms`, suffixed with ` (cached)` for cache hits
fn format_execution_time(outcome: &RunOutcome) -> String {
    let suffix = if outcome.cached { " (cached)" } else { "" };
    format!("Execution time: {}ms{}", outcome.elapsed_ms(), suffix)
}

/// Format a Duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
