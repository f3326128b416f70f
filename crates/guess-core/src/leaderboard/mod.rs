//! Leaderboard persistence and ranking.
//!
//! - `LeaderboardEntry` - one recorded win
//! - `LeaderboardStore` - per-difficulty partitions over ordered storage tiers
//! - `StorageTier` and its `KeyValueTier`, `BlobTier`, `MemoryTier` backends
//! - `rank`, `rank_by` - display order

pub mod codec;
mod entry;
mod rank;
mod store;
mod tier;

pub use entry::*;
pub use rank::*;
pub use store::*;
pub use tier::*;
