//! Session configuration
//!
//! Loaded from RON. Every field has a default, so a partial file (or an
//! empty `()`) is valid.
//!
//! ```ron
//! (
//!     tick_ms: 1000,
//!     save_interval_ms: 5000,
//!     storage_key: "pompom-save",
//! )
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Wall-clock milliseconds per tick at 1x speed
pub const DEFAULT_TICK_MS: u64 = 1000;
/// Minimum wall-clock milliseconds between autosaves
pub const DEFAULT_SAVE_INTERVAL_MS: u64 = 5000;
/// Storage key of the save blob
pub const DEFAULT_STORAGE_KEY: &str = "pompom-save";

/// Configuration for a [`crate::Session`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub tick_ms: u64,
    pub save_interval_ms: u64,
    pub storage_key: String,
}

impl SessionConfig {
    /// Parse and validate a RON string
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Encode as pretty RON
    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Builder: set the tick length
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Builder: set the autosave interval
    pub fn with_save_interval_ms(mut self, save_interval_ms: u64) -> Self {
        self.save_interval_ms = save_interval_ms;
        self
    }

    /// Builder: set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Check intervals and the storage key
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(Error::InvalidConfig("tick_ms must be greater than 0".into()));
        }
        if self.save_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "save_interval_ms must be greater than 0".into(),
            ));
        }
        validate_key(&self.storage_key)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            save_interval_ms: DEFAULT_SAVE_INTERVAL_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Storage keys double as file names, so only `[A-Za-z0-9_-]` is allowed
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidKey(key.to_string()))
    }
}
