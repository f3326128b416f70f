use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::difficulty::Difficulty;
use crate::error::Result;
use crate::leaderboard::LeaderboardEntry;
use crate::round::RoundConfig;

/// Feedback for the last non-winning guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    #[default]
    None,
    TooHigh,
    TooLow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Input to a running round, as delivered by a front end's event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundCommand {
    Guess(i32),
    Tick(f64),
    Forfeit,
}

/// Result of a finished (or abandoned) round, handed back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub difficulty: Difficulty,
    pub hidden_number: i32,
    pub attempts_used: u32,
    pub player_name: String,
}

/// Round state machine
///
/// ## State Transition Rules
///
/// - InProgress -> Won (exact guess)
/// - InProgress -> Lost (attempt budget exhausted, time budget exhausted, forfeit)
///
/// Won and Lost are terminal: guesses and ticks return the state unchanged.
///
/// Transitions consume the state and return the next one, so the guess path
/// and the timer path can be applied in any order on the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundState {
    config: RoundConfig,
    attempts_used: u32,
    elapsed_secs: f64,
    last_comparison: Comparison,
    outcome: Outcome,
}

impl RoundState {
    /// Start a round. Fails with `InvalidConfig` on an inconsistent config.
    pub fn start(config: RoundConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "Round started: difficulty={}, max_attempts={:?}, time_limit={:?}",
            config.difficulty, config.max_attempts, config.time_limit_secs
        );
        Ok(Self {
            config,
            attempts_used: 0,
            elapsed_secs: 0.0,
            last_comparison: Comparison::None,
            outcome: Outcome::InProgress,
        })
    }

    #[must_use]
    pub fn submit_guess(mut self, guess: i32) -> Self {
        if self.is_terminal() {
            return self;
        }

        match guess.cmp(&self.config.hidden_number) {
            Ordering::Equal => {
                self.last_comparison = Comparison::None;
                self.outcome = Outcome::Won;
                info!(
                    "Round won on {} after {} missed attempts",
                    self.config.difficulty, self.attempts_used
                );
                return self;
            }
            Ordering::Greater => self.last_comparison = Comparison::TooHigh,
            Ordering::Less => self.last_comparison = Comparison::TooLow,
        }

        self.attempts_used = self.attempts_used.saturating_add(1);
        debug!(
            "Guess {} -> {:?} (attempts used: {})",
            guess, self.last_comparison, self.attempts_used
        );

        // The exhausting attempt is itself counted
        if let Some(max) = self.config.max_attempts
            && self.attempts_used >= max
        {
            self.outcome = Outcome::Lost;
            info!("Round lost: attempt budget of {} exhausted", max);
        }

        self
    }

    /// Advance the countdown. Only Hard rounds run a timer.
    #[must_use]
    pub fn tick(mut self, delta_secs: f64) -> Self {
        if self.is_terminal() || !self.config.difficulty.timer_enabled() {
            return self;
        }
        if !delta_secs.is_finite() || delta_secs < 0.0 {
            debug!("Ignoring invalid tick delta {}", delta_secs);
            return self;
        }

        self.elapsed_secs += delta_secs;

        if let Some(limit) = self.config.time_limit_secs
            && self.elapsed_secs >= f64::from(limit)
        {
            self.outcome = Outcome::Lost;
            info!("Round lost: time limit of {}s reached", limit);
        }

        self
    }

    /// Abandon the round.
    #[must_use]
    pub fn forfeit(mut self) -> Self {
        if !self.is_terminal() {
            self.outcome = Outcome::Lost;
            info!("Round forfeited");
        }
        self
    }

    #[must_use]
    pub fn apply(self, command: RoundCommand) -> Self {
        match command {
            RoundCommand::Guess(guess) => self.submit_guess(guess),
            RoundCommand::Tick(delta_secs) => self.tick(delta_secs),
            RoundCommand::Forfeit => self.forfeit(),
        }
    }

    /// Leaderboard entry for a won round; `None` for any other outcome.
    pub fn leaderboard_entry(&self, player_name: &str) -> Option<LeaderboardEntry> {
        if self.outcome != Outcome::Won {
            return None;
        }

        let difficulty = self.config.difficulty;
        Some(LeaderboardEntry {
            difficulty,
            player_name: player_name.to_string(),
            attempts: difficulty
                .attempts_bounded()
                .then_some(self.attempts_used),
            elapsed_secs: difficulty.timer_enabled().then_some(self.elapsed_secs),
        })
    }

    pub fn summary(&self, player_name: &str) -> RoundSummary {
        RoundSummary {
            outcome: self.outcome,
            difficulty: self.config.difficulty,
            hidden_number: self.config.hidden_number,
            attempts_used: self.attempts_used,
            player_name: player_name.to_string(),
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn last_comparison(&self) -> Comparison {
        self.last_comparison
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Attempts left before losing, for bounded difficulties.
    pub fn remaining_attempts(&self) -> Option<u32> {
        self.config
            .max_attempts
            .map(|max| max.saturating_sub(self.attempts_used))
    }

    /// Seconds left on the countdown, for timed difficulties.
    pub fn remaining_secs(&self) -> Option<f64> {
        self.config
            .time_limit_secs
            .map(|limit| (f64::from(limit) - self.elapsed_secs).max(0.0))
    }
}
