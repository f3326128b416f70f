use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{limits, number};
use crate::difficulty::Difficulty;
use crate::error::{Error, Result};

/// Immutable parameters of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub difficulty: Difficulty,
    pub hidden_number: i32,
    /// Present iff the difficulty bounds attempts.
    pub max_attempts: Option<u32>,
    /// Present iff the difficulty runs a timer.
    pub time_limit_secs: Option<u32>,
}

impl RoundConfig {
    /// Config with the default budgets for `difficulty`.
    pub fn standard(difficulty: Difficulty, hidden_number: i32) -> Self {
        Self {
            difficulty,
            hidden_number,
            max_attempts: difficulty
                .attempts_bounded()
                .then_some(limits::DEFAULT_MAX_ATTEMPTS),
            time_limit_secs: difficulty
                .timer_enabled()
                .then_some(limits::DEFAULT_TIME_LIMIT_SECS),
        }
    }

    /// Standard config with a hidden number drawn from the thread RNG.
    pub fn random(difficulty: Difficulty) -> Self {
        Self::random_with(difficulty, &mut rand::rng())
    }

    /// Standard config with a hidden number drawn from an RNG seeded with `seed`.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::random_with(difficulty, &mut StdRng::seed_from_u64(seed))
    }

    /// Standard config with a hidden number drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::standard(difficulty, rng.random_range(number::HIDDEN_RANGE))
    }

    /// Override the attempt budget. Ignored when the difficulty has none.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        if self.difficulty.attempts_bounded() {
            self.max_attempts = Some(max_attempts);
        }
        self
    }

    /// Override the time budget. Ignored when the difficulty has no timer.
    pub fn with_time_limit_secs(mut self, secs: u32) -> Self {
        if self.difficulty.timer_enabled() {
            self.time_limit_secs = Some(secs);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !number::HIDDEN_RANGE.contains(&self.hidden_number) {
            return Err(Error::invalid_config(format!(
                "hidden number {} outside {}..{}",
                self.hidden_number,
                number::HIDDEN_RANGE.start,
                number::HIDDEN_RANGE.end
            )));
        }

        match (self.difficulty.attempts_bounded(), self.max_attempts) {
            (true, None) => {
                return Err(Error::invalid_config(format!(
                    "{} requires an attempt limit",
                    self.difficulty
                )));
            }
            (false, Some(_)) => {
                return Err(Error::invalid_config(format!(
                    "{} has no attempt limit",
                    self.difficulty
                )));
            }
            (_, Some(0)) => {
                return Err(Error::invalid_config("attempt limit must be positive"));
            }
            _ => {}
        }

        match (self.difficulty.timer_enabled(), self.time_limit_secs) {
            (true, None) => Err(Error::invalid_config(format!(
                "{} requires a time limit",
                self.difficulty
            ))),
            (false, Some(_)) => Err(Error::invalid_config(format!(
                "{} has no time limit",
                self.difficulty
            ))),
            (_, Some(0)) => Err(Error::invalid_config("time limit must be positive")),
            _ => Ok(()),
        }
    }
}
