//! Core solver traits and the puzzle level type

use crate::error::{InvalidLevel, ParseError, SolveError};
use std::fmt;

/// One of the two levels every puzzle has
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    One,
    Two,
}

impl Level {
    /// Both levels in ascending order
    pub const ALL: [Level; 2] = [Level::One, Level::Two];

    /// The numeric form used in cache keys and on the command line
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            other => Err(InvalidLevel(other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Trait for parsing AOC puzzle input into shared data
///
/// Together with [`PartSolver`] this is the two-phase way of writing a solver.
/// `#[derive(AocSolver)]` turns a type implementing `AocParser`, `PartSolver<1>`
/// and `PartSolver<2>` into a [`Solver`].
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Day01;
///
/// impl AocParser for Day01 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific level of an AOC puzzle.
///
/// The const generic `N` is the level number (1 or 2).
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this level from the parsed shared data.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// The capability every registered solver exposes.
///
/// A solver receives the raw puzzle text verbatim and returns the answer as text.
/// Implementations must be deterministic for the result cache to be meaningful.
///
/// # Example
///
/// ```
/// use aoc_solver::{Level, SolveError, Solver};
///
/// struct Day05;
///
/// impl Solver for Day05 {
///     fn solve_level1(&self, input: &str) -> Result<String, SolveError> {
///         Ok(input.lines().count().to_string())
///     }
///
///     fn solve_level2(&self, input: &str) -> Result<String, SolveError> {
///         Ok(input.len().to_string())
///     }
/// }
///
/// assert_eq!(Day05.solve(Level::One, "a\nb").unwrap(), "2");
/// ```
pub trait Solver: Send + Sync {
    /// Compute the answer for level 1
    fn solve_level1(&self, input: &str) -> Result<String, SolveError>;

    /// Compute the answer for level 2
    fn solve_level2(&self, input: &str) -> Result<String, SolveError>;

    /// Dispatch to the level-specific method
    fn solve(&self, level: Level, input: &str) -> Result<String, SolveError> {
        match level {
            Level::One => self.solve_level1(input),
            Level::Two => self.solve_level2(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_number() {
        assert_eq!(Level::try_from(1), Ok(Level::One));
        assert_eq!(Level::try_from(2), Ok(Level::Two));
        assert_eq!(Level::try_from(0), Err(InvalidLevel(0)));
        assert_eq!(Level::try_from(3), Err(InvalidLevel(3)));
    }

    #[test]
    fn test_level_number_roundtrip() {
        for level in Level::ALL {
            assert_eq!(Level::try_from(level.number()), Ok(level));
        }
        assert_eq!(Level::Two.to_string(), "2");
    }
}
