//! CLI command implementations.

pub mod leaderboard;
pub mod play;
