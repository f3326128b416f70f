//! Partition serialization.
//!
//! A partition is stored as a JSON array with one record per entry:
//!
//! ```json
//! [{"difficulty":"Hard","name":"alice","attempts":3,"time":12.5}]
//! ```
//!
//! Absent optional fields are omitted on write and defaulted on read, and
//! unknown fields are ignored, so adding an optional field never breaks
//! existing readers. A record without a difficulty belongs to the partition
//! it was read from; a record without a name keeps an empty name.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use crate::leaderboard::LeaderboardEntry;

#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<f64>,
}

impl From<&LeaderboardEntry> for EntryRecord {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            difficulty: Some(entry.difficulty),
            name: entry.player_name.clone(),
            attempts: entry.attempts,
            time: entry.elapsed_secs,
        }
    }
}

pub fn encode(entries: &[LeaderboardEntry]) -> Result<String> {
    let records: Vec<EntryRecord> = entries.iter().map(EntryRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decode the stored partition of `difficulty`.
///
/// Blank data (and a JSON `null`) is an empty partition. Anything else that
/// fails to parse is `CorruptData`.
pub fn decode(difficulty: Difficulty, data: &str) -> Result<Vec<LeaderboardEntry>> {
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Option<Vec<EntryRecord>> =
        serde_json::from_str(data).map_err(|source| Error::CorruptData {
            partition: difficulty.partition_key(),
            source,
        })?;

    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(|record| LeaderboardEntry {
            difficulty: record.difficulty.unwrap_or(difficulty),
            player_name: record.name,
            attempts: record.attempts,
            elapsed_secs: record.time,
        })
        .collect())
}
