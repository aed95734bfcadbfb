use rand::distributions::{Distribution as _, Uniform};
use rand::RngCore;

use crate::{Error, DICE_MAX, DICE_MIN, SIDES_MAX, SIDES_MIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DicePool {
    sides: u32,
    count: u32,
}

impl DicePool {
    pub fn new(sides: u32, count: u32) -> Result<Self, Error> {
        if !(SIDES_MIN..=SIDES_MAX).contains(&sides) {
            return Err(Error::Sides(sides));
        }
        if !(DICE_MIN..=DICE_MAX).contains(&count) {
            return Err(Error::Dice(count));
        }
        Ok(Self { sides, count })
    }

    pub(crate) const fn preset(sides: u32) -> Self {
        Self { sides, count: 1 }
    }

    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn min_sum(&self) -> u64 {
        u64::from(self.count)
    }

    #[must_use]
    pub fn max_sum(&self) -> u64 {
        u64::from(self.count) * u64::from(self.sides)
    }

    #[must_use]
    pub fn span(&self) -> u64 {
        self.max_sum() - self.min_sum() + 1
    }

    pub fn roll<G>(&self, rng: &mut G) -> u64
    where
        G: RngCore,
    {
        self.sum_with(&self.faces(), rng)
    }

    pub(crate) fn faces(&self) -> Uniform<u64> {
        Uniform::new_inclusive(1, u64::from(self.sides))
    }

    pub(crate) fn sum_with<G>(&self, faces: &Uniform<u64>, rng: &mut G) -> u64
    where
        G: RngCore,
    {
        let mut sum = 0;
        for _ in 0..self.count {
            sum += faces.sample(rng);
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rejects_sides_out_of_range() {
        assert_eq!(DicePool::new(0, 1), Err(Error::Sides(0)));
        assert_eq!(DicePool::new(1, 1), Err(Error::Sides(1)));
        assert_eq!(DicePool::new(1_001, 1), Err(Error::Sides(1_001)));
    }

    #[test]
    fn rejects_count_out_of_range() {
        assert_eq!(DicePool::new(6, 0), Err(Error::Dice(0)));
        assert_eq!(DicePool::new(6, 1_001), Err(Error::Dice(1_001)));
    }

    #[test]
    fn error_messages_name_the_bounds() {
        assert_eq!(
            DicePool::new(1, 1).unwrap_err().to_string(),
            "sides must be in 2..=1000, got 1"
        );
        assert_eq!(
            DicePool::new(6, 0).unwrap_err().to_string(),
            "dice count must be in 1..=1000, got 0"
        );
    }

    #[test]
    fn sum_bounds_follow_the_pool() {
        let pool = DicePool::new(6, 3).unwrap();
        assert_eq!(pool.min_sum(), 3);
        assert_eq!(pool.max_sum(), 18);
        assert_eq!(pool.span(), 16);
    }

    #[test]
    fn rolls_stay_in_range() {
        let pool = DicePool::new(8, 2).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let sum = pool.roll(&mut rng);
            assert!((2..=16).contains(&sum));
        }
    }
}
