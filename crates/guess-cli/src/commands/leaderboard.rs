//! Leaderboard command for showing ranked wins.

use std::path::Path;

use anyhow::{Context, Result};
use guess_core::{Difficulty, LeaderboardStore, TieBreak};

use crate::console;
use crate::settings::Settings;

/// Show one difficulty's leaderboard
///
/// Without `--difficulty` the last played difficulty is shown.
pub fn run(
    data_dir: &Path,
    settings_path: Option<&Path>,
    difficulty: Option<Difficulty>,
    json: bool,
    by_time: bool,
) -> Result<()> {
    let difficulty = match difficulty {
        Some(difficulty) => difficulty,
        None => settings_path
            .and_then(|path| Settings::load(path).ok())
            .unwrap_or_default()
            .difficulty,
    };
    let tie_break = if by_time {
        TieBreak::ElapsedTime
    } else {
        TieBreak::AppendOrder
    };

    let store = LeaderboardStore::open(data_dir);
    let entries = store
        .read_ranked_by(difficulty, tie_break)
        .with_context(|| format!("Failed to read {} leaderboard", difficulty))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{}", console::format_leaderboard(difficulty, &entries));
    }

    Ok(())
}
