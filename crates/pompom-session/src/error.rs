//! Error types for pompom-session

use thiserror::Error;

/// Session error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON encode error: {0}")]
    RonEncode(#[from] ron::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
