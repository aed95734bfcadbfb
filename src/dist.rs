use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub value: u64,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Distribution {
    counts: BTreeMap<u64, u64>,
    trials: u64,
}

impl Distribution {
    pub(crate) fn from_tally(counts: BTreeMap<u64, u64>, trials: u64) -> Self {
        debug_assert!(counts.values().all(|&count| count > 0));
        debug_assert_eq!(counts.values().sum::<u64>(), trials);
        Self { counts, trials }
    }

    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn count(&self, value: u64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn min_value(&self) -> Option<u64> {
        self.counts.keys().next().copied()
    }

    #[must_use]
    pub fn max_value(&self) -> Option<u64> {
        self.counts.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.counts
            .iter()
            .map(|(&value, &count)| Point { value, count })
            .collect()
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.iter().fold(0.0, |acc, (value, count)| {
            acc + value as f64 * count as f64 / self.trials as f64
        })
    }

    #[must_use]
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.iter().fold(0.0, |acc, (value, count)| {
            acc + (value as f64 - mean).powi(2) * count as f64 / self.trials as f64
        })
    }

    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    #[must_use]
    pub fn modes(&self) -> Vec<u64> {
        self.counts
            .iter()
            .max_set_by_key(|(_, &count)| count)
            .into_iter()
            .map(|(&value, _)| value)
            .collect()
    }

    #[must_use]
    pub fn mode(&self) -> Option<u64> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(&value, _)| value)
    }
}
