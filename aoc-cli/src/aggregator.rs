//! Reorders results arriving from the parallel executor
//!
//! Results are held back until every key sorting before them has arrived, so
//! output streams in (day, level) order no matter which solver finishes first.

use crate::executor::SolverResult;
use aoc_solver::Level;
use std::collections::{BTreeMap, VecDeque};

/// Output position of a result: by day, then level
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub day: u8,
    pub level: Level,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            day: r.day,
            level: r.level,
        }
    }
}

pub struct ResultAggregator {
    /// Keys not yet emitted, in output order
    expected: VecDeque<ResultKey>,
    /// Arrived results waiting on an earlier key
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        expected_keys.dedup();
        Self {
            expected: expected_keys.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return every result now ready for output, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front().copied()
            && let Some(result) = self.pending.remove(&next)
        {
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Take whatever is still held back, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::RunOutcome;
    use proptest::prelude::*;
    use std::time::Duration;

    fn make_result(day: u8, level: Level) -> SolverResult {
        SolverResult {
            day,
            level,
            outcome: Ok(RunOutcome {
                answer: format!("{}_{}", day, level),
                elapsed: Duration::from_millis(10),
                cached: false,
            }),
        }
    }

    fn key(day: u8, level: Level) -> ResultKey {
        ResultKey { day, level }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new(vec![key(1, Level::One), key(1, Level::Two)]);

        let ready = agg.add(make_result(1, Level::One));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].level, Level::One);

        let ready = agg.add(make_result(1, Level::Two));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].level, Level::Two);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new(vec![
            key(1, Level::One),
            key(1, Level::Two),
            key(2, Level::One),
        ]);

        // Level 2 before level 1
        assert!(agg.add(make_result(1, Level::Two)).is_empty());
        // Still waiting for day 1 level 1
        assert!(agg.add(make_result(2, Level::One)).is_empty());

        let ready = agg.add(make_result(1, Level::One));
        let order: Vec<_> = ready.iter().map(ResultKey::from).collect();
        assert_eq!(
            order,
            vec![key(1, Level::One), key(1, Level::Two), key(2, Level::One)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn test_expected_keys_need_not_be_sorted() {
        let mut agg = ResultAggregator::new(vec![key(3, Level::One), key(2, Level::Two)]);

        assert!(agg.add(make_result(3, Level::One)).is_empty());
        let ready = agg.add(make_result(2, Level::Two));
        assert_eq!(ready.iter().map(|r| r.day).collect::<Vec<_>>(), vec![2, 3]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new(vec![key(1, Level::One), key(1, Level::Two)]);

        agg.add(make_result(1, Level::Two));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].level, Level::Two);
        assert!(!agg.is_complete());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_emits_sorted(
            arrival in Just(
                (1..=5u8)
                    .flat_map(|d| Level::ALL.into_iter().map(move |l| (d, l)))
                    .collect::<Vec<_>>()
            )
            .prop_shuffle()
        ) {
            let expected: Vec<_> = (1..=5u8)
                .flat_map(|d| Level::ALL.into_iter().map(move |l| key(d, l)))
                .collect();
            let mut agg = ResultAggregator::new(expected.clone());

            let mut emitted = Vec::new();
            for (day, level) in arrival {
                emitted.extend(agg.add(make_result(day, level)).iter().map(ResultKey::from));
            }

            prop_assert!(agg.is_complete());
            prop_assert_eq!(emitted, expected);
        }
    }
}
