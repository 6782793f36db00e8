//! Error types for pompom-core
//!
//! The engine itself never fails. These errors only describe why a save
//! record was rejected and replaced by a fresh pet.

use thiserror::Error;

/// Reasons a save record could not be restored
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Save record is not an object")]
    NotAnObject,

    #[error("Missing section: {0}")]
    MissingSection(&'static str),

    #[error("Unsupported save version: {found} (expected {expected})")]
    UnsupportedVersion { found: String, expected: u32 },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
