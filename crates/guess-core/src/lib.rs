//! # guess-core
//!
//! Core library for the number-guessing game.
//!
//! This crate provides:
//! - The difficulty policy (budgets and leaderboard partition keys)
//! - The round state machine (guesses, timer ticks, forfeits)
//! - Leaderboard persistence over ordered storage tiers, and ranking

pub mod config;
pub mod difficulty;
pub mod error;
pub mod leaderboard;
pub mod round;

pub use difficulty::Difficulty;
pub use error::{Error, Result};
pub use leaderboard::{
    BlobTier, KeyValueTier, LeaderboardEntry, LeaderboardStore, MemoryTier, StorageTier,
    TieBreak, rank, rank_by,
};
pub use round::{Comparison, Outcome, RoundCommand, RoundConfig, RoundState, RoundSummary};
