//! Day 3: Lobby
//!
//! Each line is a bank of single-digit batteries. Turning on exactly `n` of
//! them, in order, yields the joltage read off their digits; sum the largest
//! joltage of every bank.

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
pub struct Day03;

impl AocParser for Day03 {
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.bytes()
                    .map(|b| match b {
                        b'1'..=b'9' => Ok(b - b'0'),
                        _ => Err(ParseError::InvalidFormat(format!(
                            "battery bank `{}` contains a non 1-9 digit",
                            line
                        ))),
                    })
                    .collect::<Result<Vec<u8>, ParseError>>()
            })
            .collect()
    }
}

impl PartSolver<1> for Day03 {
    fn solve(banks: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(banks, 2)
    }
}

impl PartSolver<2> for Day03 {
    fn solve(banks: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(banks, 12)
    }
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> Result<String, SolveError> {
    banks
        .iter()
        .map(|bank| {
            largest_joltage(bank, count).ok_or_else(|| {
                SolveError::failed(format!(
                    "bank of {} batteries cannot turn on {}",
                    bank.len(),
                    count
                ))
            })
        })
        .sum::<Result<u64, _>>()
        .map(|total| total.to_string())
}

/// Greedy pick: each next digit is the leftmost maximum that still leaves room
/// for the remaining picks
fn largest_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }
    let mut start = 0;
    let mut joltage = 0u64;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, digit) = window
            .iter()
            .enumerate()
            .fold((0, 0u8), |best, (i, &d)| if d > best.1 { (i, d) } else { best });
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(joltage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const EXAMPLE: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111\n";

    #[test]
    fn test_level1_example() {
        assert_eq!(Day03.solve_level1(EXAMPLE).unwrap(), "357");
    }

    #[test]
    fn test_level2_example() {
        assert_eq!(Day03.solve_level2(EXAMPLE).unwrap(), "3121910778619");
    }

    #[test]
    fn test_largest_joltage() {
        assert_eq!(largest_joltage(&[8, 1, 1, 9], 2), Some(89));
        assert_eq!(largest_joltage(&[9], 2), None);
    }

    #[test]
    fn test_short_bank_fails() {
        assert!(matches!(Day03.solve_level2("12345"), Err(SolveError::SolveFailed(_))));
    }
}
