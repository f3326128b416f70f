use serde::Serialize;

use crate::difficulty::Difficulty;

/// One win recorded on a leaderboard.
///
/// Serializes with the same field names as the persisted records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub difficulty: Difficulty,
    #[serde(rename = "name")]
    pub player_name: String,
    /// Missed attempts before the win. Present iff the difficulty bounds attempts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    /// Seconds on the clock at the win. Present iff the difficulty runs a timer.
    #[serde(rename = "time", skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
}

impl LeaderboardEntry {
    pub fn new(difficulty: Difficulty, player_name: impl Into<String>) -> Self {
        Self {
            difficulty,
            player_name: player_name.into(),
            attempts: None,
            elapsed_secs: None,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    pub fn with_elapsed_secs(mut self, secs: f64) -> Self {
        self.elapsed_secs = Some(secs);
        self
    }
}
