use bon::bon;

use crate::{DicePool, Error, Mode, DEFAULT_TRIALS, TRIALS_MAX, TRIALS_MIN};

#[derive(Clone, Copy, Debug)]
pub struct Request {
    pool: DicePool,
    mode: Mode,
    trials: u64,
}

#[bon]
impl Request {
    #[builder]
    pub fn new(
        pool: DicePool,
        #[builder(default)] mode: Mode,
        #[builder(default = DEFAULT_TRIALS)] trials: u64,
    ) -> Result<Self, Error> {
        if !(TRIALS_MIN..=TRIALS_MAX).contains(&trials) {
            return Err(Error::Trials(trials));
        }
        Ok(Self { pool, mode, trials })
    }
}

impl Request {
    #[must_use]
    pub fn pool(&self) -> DicePool {
        self.pool
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> DicePool {
        DicePool::new(6, 2).unwrap()
    }

    #[test]
    fn builder_fills_in_defaults() {
        let request = Request::builder().pool(pool()).build().unwrap();
        assert_eq!(request.mode(), Mode::Normal);
        assert_eq!(request.trials(), DEFAULT_TRIALS);
        assert_eq!(request.pool(), pool());
    }

    #[test]
    fn builder_keeps_explicit_settings() {
        let request = Request::builder()
            .pool(pool())
            .mode(Mode::Advantage)
            .trials(250)
            .build()
            .unwrap();
        assert_eq!(request.mode(), Mode::Advantage);
        assert_eq!(request.trials(), 250);
    }

    #[test]
    fn rejects_zero_trials() {
        let result = Request::builder().pool(pool()).trials(0).build();
        assert_eq!(result.unwrap_err(), Error::Trials(0));
    }

    #[test]
    fn rejects_excessive_trials() {
        let result = Request::builder().pool(pool()).trials(TRIALS_MAX + 1).build();
        assert_eq!(result.unwrap_err(), Error::Trials(TRIALS_MAX + 1));
    }
}
