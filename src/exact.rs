use num::rational::Ratio;
use num::traits::One;
use num::{BigUint, ToPrimitive};
use thiserror::Error;

use crate::{DicePool, Mode, EXACT_MAX_SPAN};

type Count = BigUint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pmf {
    outcomes: Vec<(u64, Count)>,
    denom: Count,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExactError {
    #[error("outcome span {0} exceeds the exact enumeration limit {limit}", limit = EXACT_MAX_SPAN)]
    Span(u64),
    #[error("overflow in probability")]
    Overflow,
}

impl Pmf {
    pub fn of(pool: DicePool, mode: Mode) -> Result<Self, ExactError> {
        let span = pool.span();
        if span > EXACT_MAX_SPAN {
            return Err(ExactError::Span(span));
        }

        let sum = sum_counts(pool);
        let counts = match mode {
            Mode::Normal => sum,
            Mode::Advantage => pick_higher(&sum),
            Mode::Disadvantage => pick_lower(&sum),
        };

        let mut denom = Count::from(pool.sides()).pow(pool.count());
        if mode != Mode::Normal {
            denom = &denom * &denom;
        }

        let outcomes = counts
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count != Count::ZERO)
            .map(|(offset, count)| (pool.min_sum() + offset as u64, count))
            .collect();

        Ok(Self { outcomes, denom })
    }

    #[must_use]
    pub fn denom(&self) -> &Count {
        &self.denom
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Count)> + '_ {
        self.outcomes.iter().map(|(value, count)| (*value, count))
    }

    pub fn probabilities(&self) -> Result<Vec<(u64, f64)>, ExactError> {
        self.outcomes
            .iter()
            .map(|(value, count)| Ok((*value, self.ratio(count)?)))
            .collect()
    }

    pub fn probability(&self, value: u64) -> Result<f64, ExactError> {
        match self.outcomes.binary_search_by_key(&value, |&(v, _)| v) {
            Ok(index) => self.ratio(&self.outcomes[index].1),
            Err(_) => Ok(0.0),
        }
    }

    pub fn mean(&self) -> Result<f64, ExactError> {
        self.outcomes
            .iter()
            .map(|(value, count)| Ok(*value as f64 * self.ratio(count)?))
            .fold(Ok(0.0), |acc, x| Ok(acc? + x?))
    }

    fn ratio(&self, count: &Count) -> Result<f64, ExactError> {
        Ratio::new_raw(count.clone(), self.denom.clone())
            .to_f64()
            .ok_or(ExactError::Overflow)
    }
}

fn sum_counts(pool: DicePool) -> Vec<Count> {
    let single = vec![Count::one(); pool.sides() as usize];
    let mut acc = single.clone();
    for _ in 1..pool.count() {
        acc = convolve(&acc, &single);
    }
    acc
}

fn convolve(lhs: &[Count], rhs: &[Count]) -> Vec<Count> {
    let mut out = vec![Count::ZERO; lhs.len() + rhs.len() - 1];
    for (i, a) in lhs.iter().enumerate() {
        for (j, b) in rhs.iter().enumerate() {
            out[i + j] += a * b;
        }
    }
    out
}

// max of two i.i.d. sums: c'(v) = c(v)^2 + 2 c(v) sum(c(w), w < v)
fn pick_higher(counts: &[Count]) -> Vec<Count> {
    let mut out = Vec::with_capacity(counts.len());
    let mut below = Count::ZERO;
    for count in counts {
        out.push(count * (count + &below + &below));
        below += count;
    }
    out
}

// min mirrors max with the tail sum in place of the prefix sum
fn pick_lower(counts: &[Count]) -> Vec<Count> {
    let mut out = Vec::with_capacity(counts.len());
    let mut above = Count::ZERO;
    for count in counts.iter().rev() {
        out.push(count * (count + &above + &above));
        above += count;
    }
    out.reverse();
    out
}
