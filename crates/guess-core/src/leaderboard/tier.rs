//! Storage tier abstraction.
//!
//! A tier holds the serialized partition of each difficulty. Two on-disk
//! generations exist:
//! - `KeyValueTier` - a single key/value document keyed by partition key
//! - `BlobTier` - one file per partition, named by `Difficulty::blob_name`
//!
//! `MemoryTier` keeps partitions in process for tests and throwaway sessions.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::difficulty::Difficulty;
use crate::error::{Error, Result};

/// Trait for a backend holding serialized leaderboard partitions.
pub trait StorageTier {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Load the serialized partition of `difficulty`.
    ///
    /// Returns `Ok(None)` when the tier has no data for the partition.
    fn load(&self, difficulty: Difficulty) -> Result<Option<String>>;

    /// Replace the serialized partition of `difficulty`.
    fn store(&mut self, difficulty: Difficulty, data: &str) -> Result<()>;
}

/// Key/value document on disk: a JSON object mapping partition keys to
/// serialized partitions.
#[derive(Debug, Clone)]
pub struct KeyValueTier {
    path: PathBuf,
}

impl KeyValueTier {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| Error::storage(self.name(), e))
    }
}

impl StorageTier for KeyValueTier {
    fn name(&self) -> &str {
        "key-value"
    }

    fn load(&self, difficulty: Difficulty) -> Result<Option<String>> {
        let mut document = self.read_document()?;
        Ok(document.remove(difficulty.partition_key()))
    }

    fn store(&mut self, difficulty: Difficulty, data: &str) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(difficulty.partition_key().to_string(), data.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }
}

/// Directory with one blob file per partition.
#[derive(Debug, Clone)]
pub struct BlobTier {
    dir: PathBuf,
}

impl BlobTier {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn blob_path(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(difficulty.blob_name())
    }
}

impl StorageTier for BlobTier {
    fn name(&self) -> &str {
        "blob"
    }

    fn load(&self, difficulty: Difficulty) -> Result<Option<String>> {
        match fs::read_to_string(self.blob_path(difficulty)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&mut self, difficulty: Difficulty, data: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.blob_path(difficulty), data)?;
        Ok(())
    }
}

/// In-process tier.
#[derive(Debug, Clone, Default)]
pub struct MemoryTier {
    partitions: HashMap<Difficulty, String>,
}

impl MemoryTier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a partition with serialized data.
    pub fn with_partition(mut self, difficulty: Difficulty, data: impl Into<String>) -> Self {
        self.partitions.insert(difficulty, data.into());
        self
    }
}

impl StorageTier for MemoryTier {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self, difficulty: Difficulty) -> Result<Option<String>> {
        Ok(self.partitions.get(&difficulty).cloned())
    }

    fn store(&mut self, difficulty: Difficulty, data: &str) -> Result<()> {
        self.partitions.insert(difficulty, data.to_string());
        Ok(())
    }
}
