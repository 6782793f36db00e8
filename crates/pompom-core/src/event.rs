//! Events recorded in the pet's display log

use crate::{CareAction, MinigameId, Species, StatKind, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// A care action changed a stat
    StatChanged,
    /// Health reached zero
    Died,
    /// Species changed
    Evolved,
    /// A gift became available
    GiftUnlocked,
    /// Minigame round won
    MinigameWin,
    /// Minigame round won without mistakes
    MinigamePerfect,
    /// Minigame round lost
    MinigameLoss,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::StatChanged,
        EventKind::Died,
        EventKind::Evolved,
        EventKind::GiftUnlocked,
        EventKind::MinigameWin,
        EventKind::MinigamePerfect,
        EventKind::MinigameLoss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::StatChanged => "STAT_CHANGED",
            EventKind::Died => "DIED",
            EventKind::Evolved => "EVOLVED",
            EventKind::GiftUnlocked => "GIFT_UNLOCKED",
            EventKind::MinigameWin => "MINIGAME_WIN",
            EventKind::MinigamePerfect => "MINIGAME_PERFECT",
            EventKind::MinigameLoss => "MINIGAME_LOSS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Before/after values of the stat a care action mainly affected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatChange {
    pub stat: StatKind,
    pub before: f64,
    pub after: f64,
}

/// Typed event payload
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventData {
    #[default]
    None,
    /// A care action. Legacy records may lack the stat change.
    Care {
        action: CareAction,
        change: Option<StatChange>,
    },
    /// A species transition
    Evolved { from: Species, to: Species },
    /// A minigame round
    Minigame { game: MinigameId, score: u64 },
    /// A gift id
    Gift(String),
}

/// A single entry in the event log
#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    pub kind: EventKind,
    pub tick: Tick,
    pub data: EventData,
}

impl GameEvent {
    /// Create an event without payload
    pub fn new(kind: EventKind, tick: Tick) -> Self {
        Self {
            kind,
            tick,
            data: EventData::None,
        }
    }

    /// Attach a payload
    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = data;
        self
    }

    /// Create a care event
    pub fn care(action: CareAction, tick: Tick, change: StatChange) -> Self {
        Self::new(EventKind::StatChanged, tick).with_data(EventData::Care {
            action,
            change: Some(change),
        })
    }

    /// Create an evolution event
    pub fn evolved(from: Species, to: Species, tick: Tick) -> Self {
        Self::new(EventKind::Evolved, tick).with_data(EventData::Evolved { from, to })
    }

    /// The care action this event records, if any
    pub fn care_action(&self) -> Option<CareAction> {
        match self.data {
            EventData::Care { action, .. } => Some(action),
            _ => None,
        }
    }
}
