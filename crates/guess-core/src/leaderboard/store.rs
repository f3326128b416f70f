use std::path::Path;

use tracing::{debug, info, warn};

use crate::difficulty::Difficulty;
use crate::error::Result;
use crate::leaderboard::codec::{decode, encode};
use crate::leaderboard::{
    BlobTier, KeyValueTier, LeaderboardEntry, MemoryTier, StorageTier, TieBreak, rank_by,
};

/// File name of the key/value document inside a data directory.
pub const KEY_VALUE_FILE: &str = "leaderboard.json";

/// Per-difficulty, append-only leaderboard storage.
///
/// Reads walk the tiers in order: every secondary tier first, then the
/// primary one. A secondary tier that has no partition or fails to load is
/// skipped; the first tier returning data answers the read, and data that
/// does not decode is `CorruptData`. `append` reads and writes the primary
/// tier only.
///
/// `append` is a read-modify-write without locking and assumes a single
/// writer per partition.
pub struct LeaderboardStore {
    tiers: Vec<Box<dyn StorageTier>>,
    primary: usize,
}

impl LeaderboardStore {
    /// Store backed by a single (primary) tier.
    pub fn new(primary: impl StorageTier + 'static) -> Self {
        Self {
            tiers: vec![Box::new(primary)],
            primary: 0,
        }
    }

    /// Consult `tier` on reads before the primary tier.
    ///
    /// Secondary tiers are consulted in the order they were added.
    pub fn with_secondary(mut self, tier: impl StorageTier + 'static) -> Self {
        self.tiers.insert(self.primary, Box::new(tier));
        self.primary += 1;
        self
    }

    /// Standard on-disk layout in `data_dir`: partition blobs as the
    /// secondary tier, `leaderboard.json` as the primary tier.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref();
        debug!("Opening leaderboard store in {:?}", data_dir);
        Self::new(KeyValueTier::new(data_dir.join(KEY_VALUE_FILE)))
            .with_secondary(BlobTier::new(data_dir))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTier::new())
    }

    /// Tier names in read order.
    pub fn tier_names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|tier| tier.name())
    }

    /// Append a win to its difficulty's partition and persist the partition.
    ///
    /// The existing partition is loaded from the primary tier alone, so
    /// secondary data never replaces wins already recorded there.
    pub fn append(&mut self, entry: LeaderboardEntry) -> Result<()> {
        let difficulty = entry.difficulty;
        let primary = &mut self.tiers[self.primary];
        let mut entries = match primary.load(difficulty)? {
            Some(data) => decode(difficulty, &data)?,
            None => Vec::new(),
        };
        entries.push(entry);

        let data = encode(&entries)?;
        primary.store(difficulty, &data)?;

        info!(
            "Saved {} leaderboard ({} entries) to {} tier",
            difficulty,
            entries.len(),
            primary.name()
        );
        Ok(())
    }

    /// Entries of `difficulty` in append order.
    pub fn read(&self, difficulty: Difficulty) -> Result<Vec<LeaderboardEntry>> {
        for (index, tier) in self.tiers.iter().enumerate() {
            let data = match tier.load(difficulty) {
                Ok(Some(data)) => data,
                Ok(None) => {
                    debug!("No {} partition in {} tier", difficulty, tier.name());
                    continue;
                }
                Err(e) if index != self.primary => {
                    warn!(
                        "Cannot load {} partition from {} tier: {}, falling back",
                        difficulty,
                        tier.name(),
                        e
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            debug!("Loaded {} partition from {} tier", difficulty, tier.name());
            return decode(difficulty, &data);
        }

        Ok(Vec::new())
    }

    /// Entries of `difficulty` in display order.
    pub fn read_ranked(&self, difficulty: Difficulty) -> Result<Vec<LeaderboardEntry>> {
        self.read_ranked_by(difficulty, TieBreak::AppendOrder)
    }

    pub fn read_ranked_by(
        &self,
        difficulty: Difficulty,
        tie_break: TieBreak,
    ) -> Result<Vec<LeaderboardEntry>> {
        Ok(rank_by(self.read(difficulty)?, tie_break))
    }
}
