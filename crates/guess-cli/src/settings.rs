//! Persisted player settings.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use guess_core::{Difficulty, RoundConfig};
use serde::{Deserialize, Serialize};

/// Name recorded for players who did not enter one.
pub const GUEST_NAME: &str = "Guest";

/// Settings remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Last player name
    pub player_name: String,
    /// Last selected difficulty
    pub difficulty: Difficulty,
    /// Attempt budget override for Normal and Hard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    /// Time budget override for Hard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u32>,
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("guess").join("settings.toml"))
    }

    /// Load settings; a missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        toml::from_str(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Round config for `difficulty` with this file's budget overrides applied.
    pub fn round_config(&self, difficulty: Difficulty, seed: Option<u64>) -> RoundConfig {
        let mut config = match seed {
            Some(seed) => RoundConfig::seeded(difficulty, seed),
            None => RoundConfig::random(difficulty),
        };
        if let Some(max) = self.max_attempts {
            config = config.with_max_attempts(max);
        }
        if let Some(secs) = self.time_limit_secs {
            config = config.with_time_limit_secs(secs);
        }
        config
    }
}

/// Name to record: the trimmed input, or `Guest` when blank.
pub fn display_name(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() { GUEST_NAME } else { name }
}
