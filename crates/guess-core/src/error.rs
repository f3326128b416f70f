use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid round config: {0}")]
    InvalidConfig(String),

    #[error("Corrupt leaderboard data in partition {partition}: {source}")]
    CorruptData {
        partition: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage tier {tier} failed: {message}")]
    Storage { tier: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }

    pub(crate) fn storage(tier: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Error::Storage {
            tier: tier.into(),
            message: message.to_string(),
        }
    }
}
