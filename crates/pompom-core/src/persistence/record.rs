//! Wire format of a save record

use crate::{EventKind, LifetimeCounters, MinigameId, MinigameStats, Settings, Species, Stats, Tick};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current save schema version
pub const SAVE_VERSION: u32 = 1;

/// Wall-clock bookkeeping supplied by the caller, in Unix milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveMeta {
    pub created_at: i64,
    pub last_saved: i64,
}

impl SaveMeta {
    pub fn new(created_at: i64, last_saved: i64) -> Self {
        Self {
            created_at,
            last_saved,
        }
    }
}

/// A complete save record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub version: u32,
    pub created_at: i64,
    pub last_saved: i64,
    pub total_ticks: Tick,
    pub state: SavedPet,
    pub history: Vec<SavedEvent>,
    pub counts: LifetimeCounters,
    pub unlocked_forms: Vec<String>,
    pub unlocked_gifts: Vec<String>,
    pub unlocked_achievements: Vec<String>,
    pub album: serde_json::Map<String, serde_json::Value>,
    pub settings: Settings,
}

/// The `state` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPet {
    pub species: Species,
    pub stats: Stats,
    pub alive: bool,
    pub minigames: SavedMinigames,
}

/// The `state.minigames` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMinigames {
    /// Cooldown ticks; games never played are omitted
    pub last_played: IndexMap<MinigameId, Tick>,
    pub games: IndexMap<MinigameId, MinigameStats>,
}

/// One `history` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub tick: Tick,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
