//! Day 2: Gift Shop
//!
//! Sum the product IDs inside the given ranges that consist of one digit block
//! repeated. Instead of scanning every ID, candidates are generated directly:
//! a `d`-digit number made of a `k`-digit block repeated `d / k` times is the
//! block multiplied by `(10^d - 1) / (10^k - 1)`.

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
pub struct Day02;

impl AocParser for Day02 {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(parse_range)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn parse_range(text: &str) -> anyhow::Result<RangeInclusive<u64>> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `start-end`, got `{}`", text))?;
    let start: u64 = start.parse().with_context(|| format!("bad range start in `{}`", text))?;
    let end: u64 = end.parse().with_context(|| format!("bad range end in `{}`", text))?;
    if start > end {
        return Err(anyhow!("range `{}` is reversed", text));
    }
    Ok(start..=end)
}

/// IDs made of a block repeated exactly twice
impl PartSolver<1> for Day02 {
    fn solve(ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(ranges, |repeats| repeats == 2).to_string())
    }
}

/// IDs made of a block repeated at least twice
impl PartSolver<2> for Day02 {
    fn solve(ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(ranges, |repeats| repeats >= 2).to_string())
    }
}

/// Sum over all ranges; IDs near `u64::MAX` would overflow a `u64` total
fn sum_repeated(ranges: &[RangeInclusive<u64>], accept: impl Fn(u32) -> bool) -> u128 {
    ranges
        .iter()
        .flat_map(|range| repeated_ids(range, &accept))
        .map(u128::from)
        .sum()
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Distinct IDs in `range` built from a repeated block, where the repeat count
/// satisfies `accept`
fn repeated_ids(range: &RangeInclusive<u64>, accept: impl Fn(u32) -> bool) -> BTreeSet<u64> {
    let mut ids = BTreeSet::new();
    let digit_range = digit_count(*range.start())..=digit_count(*range.end());
    // u64 tops out at 20 digits, and 10^20 needs u128
    let (lo, hi) = (u128::from(*range.start()), u128::from(*range.end()));

    for digits in digit_range {
        for block in 1..=digits / 2 {
            if digits % block != 0 || !accept(digits / block) {
                continue;
            }
            let multiplier = (10u128.pow(digits) - 1) / (10u128.pow(block) - 1);
            let first = lo.div_ceil(multiplier).max(10u128.pow(block - 1));
            let last = (hi / multiplier).min(10u128.pow(block) - 1);
            ids.extend((first..=last).filter_map(|b| u64::try_from(b * multiplier).ok()));
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;
    use proptest::prelude::*;

    const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";

    #[test]
    fn test_level1_example() {
        assert_eq!(Day02.solve_level1(EXAMPLE).unwrap(), "1227775554");
    }

    #[test]
    fn test_level2_example() {
        assert_eq!(Day02.solve_level2(EXAMPLE).unwrap(), "4174379265");
    }

    #[test]
    fn test_repeated_ids_small_range() {
        let ids = repeated_ids(&(95..=115), |r| r >= 2);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![99, 111]);
    }

    #[test]
    fn test_multiple_block_sizes_counted_once() {
        // 222222 is 2x"222", 3x"22" and 6x"2"
        let ids = repeated_ids(&(222220..=222224), |r| r >= 2);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![222222]);
    }

    fn is_repeated(id: u64, accept: impl Fn(u32) -> bool) -> bool {
        let text = id.to_string();
        let len = text.len();
        (1..=len / 2).any(|block| {
            len % block == 0
                && accept((len / block) as u32)
                && text.as_bytes().chunks(block).all(|c| c == &text.as_bytes()[..block])
        })
    }

    proptest! {
        #[test]
        fn prop_generation_matches_brute_force(start in 1u64..200_000, width in 0u64..2_000) {
            let range = start..=start + width;
            let twice: Vec<u64> = range.clone().filter(|&id| is_repeated(id, |r| r == 2)).collect();
            let many: Vec<u64> = range.clone().filter(|&id| is_repeated(id, |r| r >= 2)).collect();
            prop_assert_eq!(repeated_ids(&range, |r| r == 2).into_iter().collect::<Vec<_>>(), twice);
            prop_assert_eq!(repeated_ids(&range, |r| r >= 2).into_iter().collect::<Vec<_>>(), many);
        }
    }

    #[test]
    fn test_twenty_digit_ids() {
        // 1000000000 repeated twice
        let input = "10000000001000000000-10000000001000000005";
        assert_eq!(Day02.solve_level1(input).unwrap(), "10000000001000000000");
        assert_eq!(Day02.solve_level2(input).unwrap(), "10000000001000000000");
    }

    #[test]
    fn test_range_ending_at_u64_max() {
        let input = format!("18446744073709551610-{}", u64::MAX);
        assert_eq!(Day02.solve_level1(&input).unwrap(), "0");
        assert_eq!(Day02.solve_level2(&input).unwrap(), "0");
    }

    #[test]
    fn test_total_wider_than_u64() {
        // Two 20-digit IDs sum past u64::MAX
        let input = "11111111111111111111-11111111111111111111,\
                     12121212121212121212-12121212121212121212";
        assert_eq!(Day02.solve_level2(input).unwrap(), "23232323232323232323");
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(matches!(Day02.solve_level1("30-20"), Err(SolveError::Parse(_))));
    }
}
