//! 2025 puzzles, one module per day

pub mod day01;
pub mod day02;
pub mod day03;

pub use day01::Day01;
pub use day02::Day02;
pub use day03::Day03;
