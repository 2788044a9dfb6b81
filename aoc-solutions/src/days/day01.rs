//! Day 1: Secret Entrance
//!
//! A dial numbered 0-99 starts at 50 and is rotated by `L<n>` / `R<n>` steps.

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
pub struct Day01;

impl AocParser for Day01 {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| parse_rotation(line).map_err(|e| anyhow!("(line {}) {}", idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_rotation(line: &str) -> anyhow::Result<i64> {
    let sign = match line.as_bytes().first() {
        Some(b'L') => -1,
        Some(b'R') => 1,
        _ => return Err(anyhow!("first character need to be 'L' or 'R'")),
    };
    let amount: i64 = line[1..].parse()?;
    if amount < 0 {
        return Err(anyhow!("rotate value must be non negative"));
    }
    Ok(sign * amount)
}

/// Unwrapped dial position after applying `turn`
fn rotate(dial: i64, turn: i64) -> Result<i64, SolveError> {
    dial.checked_add(turn)
        .ok_or_else(|| SolveError::failed(format!("rotation {} overflows the dial", turn)))
}

/// Times the dial rests on zero after a rotation
impl PartSolver<1> for Day01 {
    fn solve(rotations: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, zero_stops) = rotations
            .iter()
            .try_fold((START, 0u64), |(dial, count), &turn| {
                let dial = rotate(dial, turn)?.rem_euclid(DIAL_SIZE);
                Ok::<_, SolveError>((dial, count + u64::from(dial == 0)))
            })?;
        Ok(zero_stops.to_string())
    }
}

/// Times the dial points at zero at any moment, including mid-rotation
impl PartSolver<2> for Day01 {
    fn solve(rotations: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, passes) = rotations
            .iter()
            .try_fold((START, 0u64), |(dial, count), &turn| {
                let target = rotate(dial, turn)?;
                let mut passes = (target / DIAL_SIZE).unsigned_abs();
                if target <= 0 && dial != 0 {
                    passes += 1;
                }
                let count = count
                    .checked_add(passes)
                    .ok_or_else(|| SolveError::failed("zero pass count overflows"))?;
                Ok::<_, SolveError>((target.rem_euclid(DIAL_SIZE), count))
            })?;
        Ok(passes.to_string())
    }
}
