use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Round difficulty.
///
/// The difficulty decides which budgets a round enforces and which
/// leaderboard partition a win lands in:
///
/// | Difficulty | Attempt limit | Timer |
/// |------------|---------------|-------|
/// | Easy       | no            | no    |
/// | Normal     | yes           | no    |
/// | Hard       | yes           | yes   |
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Difficulty {
    Easy = 0,
    #[default]
    Normal = 1,
    Hard = 2,
}

impl Difficulty {
    /// All difficulties in ordinal order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Attempts are counted on every difficulty (Easy only displays them).
    pub fn attempts_tracked(&self) -> bool {
        true
    }

    /// Whether running out of attempts loses the round.
    pub fn attempts_bounded(&self) -> bool {
        matches!(self, Self::Normal | Self::Hard)
    }

    pub fn timer_enabled(&self) -> bool {
        matches!(self, Self::Hard)
    }

    /// Key of this difficulty's leaderboard partition.
    ///
    /// Persisted data is stored under these literals, so they must never change.
    pub fn partition_key(&self) -> &'static str {
        match self {
            Self::Easy => "leaders__easy",
            Self::Normal => "leaders__normal",
            Self::Hard => "leaders__hard",
        }
    }

    /// File name of this partition in the blob tier (`SAVE__` + partition key).
    pub fn blob_name(&self) -> &'static str {
        match self {
            Self::Easy => "SAVE__leaders__easy",
            Self::Normal => "SAVE__leaders__normal",
            Self::Hard => "SAVE__leaders__hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
