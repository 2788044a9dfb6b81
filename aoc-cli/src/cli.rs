//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code solver runner with result caching
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers with result caching", version)]
pub struct Args {
    /// Directory holding cached answers
    #[arg(
        long,
        global = true,
        env = "AOC_CACHE_DIR",
        default_value = "~/.cache/aoc_solver/results"
    )]
    pub cache_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a puzzle with custom input (from stdin or file)
    Solve {
        /// Puzzle day
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Puzzle level (1 or 2)
        level: u8,

        /// Input file (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List all available puzzle solutions
    List,

    /// Run every available solver against its input file
    Run {
        /// Day to run (runs all days if omitted)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: Option<u8>,

        /// Level to run (runs both levels if omitted)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        level: Option<u8>,

        /// Directory containing `dayNN.txt` input files
        #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
        input_dir: PathBuf,

        /// Number of threads for parallel execution
        #[arg(long)]
        threads: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve() {
        let args = Args::try_parse_from(["aoc", "solve", "3", "2", "-i", "day03.txt"]).unwrap();
        match args.command {
            Command::Solve { day, level, input } => {
                assert_eq!(day, 3);
                assert_eq!(level, 2);
                assert_eq!(input, Some(PathBuf::from("day03.txt")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_level_is_left_to_the_engine() {
        // Out-of-range levels reach the runner, which reports them
        let args = Args::try_parse_from(["aoc", "solve", "1", "3"]).unwrap();
        assert!(matches!(args.command, Command::Solve { level: 3, .. }));
    }

    #[test]
    fn test_day_range_checked() {
        assert!(Args::try_parse_from(["aoc", "solve", "26", "1"]).is_err());
        assert!(Args::try_parse_from(["aoc", "solve", "0", "1"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["aoc", "list", "--cache-dir", "/tmp/c", "-q"]).unwrap();
        assert_eq!(args.cache_dir, PathBuf::from("/tmp/c"));
        assert!(args.quiet);
    }
}
