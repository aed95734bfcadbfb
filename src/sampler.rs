use std::collections::BTreeMap;
use std::time::Instant;

use rand::rngs::{SmallRng, ThreadRng};
use rand::{thread_rng, RngCore, SeedableRng};
use tracing::debug;

use crate::{Distribution, Mode, Request};

#[derive(Debug)]
pub struct Sampler<G = ThreadRng>
where
    G: RngCore,
{
    rng: G,
}

impl Default for Sampler<ThreadRng> {
    fn default() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl Sampler<SmallRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<G> Sampler<G>
where
    G: RngCore,
{
    pub fn with_rng(rng: G) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn simulate(&mut self, request: &Request) -> Distribution {
        let started = Instant::now();
        let pool = request.pool();
        let faces = pool.faces();
        let min_sum = pool.min_sum();
        let mut tally = vec![0u64; pool.span() as usize];

        match request.mode() {
            Mode::Normal => {
                for _ in 0..request.trials() {
                    let sum = pool.sum_with(&faces, &mut self.rng);
                    tally[(sum - min_sum) as usize] += 1;
                }
            }
            Mode::Advantage => {
                for _ in 0..request.trials() {
                    let first = pool.sum_with(&faces, &mut self.rng);
                    let second = pool.sum_with(&faces, &mut self.rng);
                    tally[(first.max(second) - min_sum) as usize] += 1;
                }
            }
            Mode::Disadvantage => {
                for _ in 0..request.trials() {
                    let first = pool.sum_with(&faces, &mut self.rng);
                    let second = pool.sum_with(&faces, &mut self.rng);
                    tally[(first.min(second) - min_sum) as usize] += 1;
                }
            }
        }

        let counts = collect_tally(&tally, min_sum);
        debug!(
            trials = request.trials(),
            outcomes = counts.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "simulation finished"
        );
        Distribution::from_tally(counts, request.trials())
    }
}

fn collect_tally(tally: &[u64], min_sum: u64) -> BTreeMap<u64, u64> {
    tally
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(offset, &count)| (min_sum + offset as u64, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{defs, DicePool};

    fn request(pool: DicePool, mode: Mode, trials: u64) -> Request {
        Request::builder()
            .pool(pool)
            .mode(mode)
            .trials(trials)
            .build()
            .unwrap()
    }

    #[test]
    fn counts_sum_to_trials() {
        let mut sampler = Sampler::seeded(11);
        for mode in [Mode::Disadvantage, Mode::Normal, Mode::Advantage] {
            let dist = sampler.simulate(&request(DicePool::new(6, 2).unwrap(), mode, 10_000));
            assert_eq!(dist.trials(), 10_000);
            assert_eq!(dist.iter().map(|(_, count)| count).sum::<u64>(), 10_000);
        }
    }

    #[test]
    fn outcomes_stay_in_range() {
        let pool = DicePool::new(4, 3).unwrap();
        let mut sampler = Sampler::seeded(3);
        for mode in [Mode::Disadvantage, Mode::Normal, Mode::Advantage] {
            let dist = sampler.simulate(&request(pool, mode, 5_000));
            assert!(dist.min_value().unwrap() >= pool.min_sum());
            assert!(dist.max_value().unwrap() <= pool.max_sum());
        }
    }

    #[test]
    fn zero_counts_are_absent() {
        let mut sampler = Sampler::seeded(5);
        let dist = sampler.simulate(&request(DicePool::new(20, 2).unwrap(), Mode::Normal, 50));
        assert!(dist.iter().all(|(_, count)| count > 0));
        assert!(dist.len() <= 50);
    }

    #[test]
    fn single_trial_yields_a_single_point() {
        let mut sampler = Sampler::seeded(1);
        let dist = sampler.simulate(&request(defs::d6(), Mode::Normal, 1));
        let points = dist.points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].count, 1);
        assert!((1..=6).contains(&points[0].value));
    }

    #[test]
    fn seeded_runs_repeat() {
        let req = request(DicePool::new(10, 3).unwrap(), Mode::Advantage, 2_000);
        let a = Sampler::seeded(42).simulate(&req);
        let b = Sampler::seeded(42).simulate(&req);
        assert_eq!(a, b);
    }

    #[test]
    fn advantage_shifts_the_mean_up() {
        let pool = defs::d20();
        let mut sampler = Sampler::seeded(9);
        let dis = sampler.simulate(&request(pool, Mode::Disadvantage, 20_000));
        let normal = sampler.simulate(&request(pool, Mode::Normal, 20_000));
        let adv = sampler.simulate(&request(pool, Mode::Advantage, 20_000));
        assert!(dis.mean() < normal.mean());
        assert!(normal.mean() < adv.mean());
    }

    #[test]
    fn two_dice_cluster_on_seven() {
        let req = request(DicePool::new(6, 2).unwrap(), Mode::Normal, 100_000);
        let dist = Sampler::seeded(1_234).simulate(&req);
        assert_eq!(dist.mode(), Some(7));
        assert!((dist.mean() - 7.0).abs() < 0.1);
    }
}
