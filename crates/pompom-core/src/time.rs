//! Simulated time
//!
//! The engine only ever sees whole ticks. Converting wall-clock time into
//! ticks is the caller's job; `Speed` is the only knob the engine exposes
//! for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete tick count (logical time unit, roughly one second at 1x)
pub type Tick = u64;

/// Simulation speed selected by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Speed {
    /// Real time
    #[default]
    #[serde(rename = "1x")]
    Normal,
    /// Twice as fast
    #[serde(rename = "2x")]
    Double,
}

impl Speed {
    /// Multiplier applied to elapsed wall-clock time
    pub fn factor(&self) -> u64 {
        match self {
            Speed::Normal => 1,
            Speed::Double => 2,
        }
    }

    /// Wire name used in save records
    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Normal => "1x",
            Speed::Double => "2x",
        }
    }

    /// Parse a wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1x" => Some(Speed::Normal),
            "2x" => Some(Speed::Double),
            _ => None,
        }
    }

    /// The other speed
    pub fn toggled(&self) -> Self {
        match self {
            Speed::Normal => Speed::Double,
            Speed::Double => Speed::Normal,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
