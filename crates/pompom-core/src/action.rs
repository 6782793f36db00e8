//! Player actions submitted to the reducer

use crate::Tick;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five care actions, each with its own lifetime counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CareAction {
    Feed,
    Play,
    Rest,
    Medicate,
    Pet,
}

impl CareAction {
    /// All care actions in counter order
    pub const ALL: [CareAction; 5] = [
        CareAction::Feed,
        CareAction::Play,
        CareAction::Rest,
        CareAction::Medicate,
        CareAction::Pet,
    ];

    /// Wire name used in actions and event payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            CareAction::Feed => "FEED",
            CareAction::Play => "PLAY",
            CareAction::Rest => "REST",
            CareAction::Medicate => "MEDICATE",
            CareAction::Pet => "PET",
        }
    }

    /// Parse a wire name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The embedded minigames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinigameId {
    Pudding,
    Memory,
}

impl MinigameId {
    pub const ALL: [MinigameId; 2] = [MinigameId::Pudding, MinigameId::Memory];

    pub fn as_str(&self) -> &'static str {
        match self {
            MinigameId::Pudding => "pudding",
            MinigameId::Memory => "memory",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }
}

impl fmt::Display for MinigameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a minigame round, decided by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MinigameResult {
    Perfect,
    Win,
    /// Also used for missing or unrecognized results
    #[default]
    Loss,
}

impl MinigameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinigameResult::Perfect => "perfect",
            MinigameResult::Win => "win",
            MinigameResult::Loss => "loss",
        }
    }

    /// Parse a result, falling back to `Loss` for anything unrecognized
    pub fn parse_or_loss(s: Option<&str>) -> Self {
        match s {
            Some("perfect") => MinigameResult::Perfect,
            Some("win") => MinigameResult::Win,
            _ => MinigameResult::Loss,
        }
    }

    /// Check if this result counts as a win
    pub fn is_win(&self) -> bool {
        matches!(self, MinigameResult::Perfect | MinigameResult::Win)
    }
}

/// What the player asked for
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// One of the care actions
    Care(CareAction),
    /// A finished minigame round
    PlayMinigame {
        game: MinigameId,
        result: MinigameResult,
        score: u64,
    },
    /// Anything the engine does not recognize; only time passes
    Unknown(String),
}

impl ActionKind {
    /// Build an action kind from loosely typed input (type name plus optional
    /// JSON payload). Never fails: unrecognized input becomes `Unknown`.
    pub fn from_parts(type_name: &str, data: Option<&serde_json::Value>) -> Self {
        if let Some(care) = CareAction::parse(type_name) {
            return ActionKind::Care(care);
        }
        if type_name != "PLAY_MINIGAME" {
            return ActionKind::Unknown(type_name.to_string());
        }

        let field = |key: &str| data.and_then(|d| d.get(key));
        let game = match field("gameId").and_then(|v| v.as_str()).and_then(MinigameId::parse) {
            Some(game) => game,
            None => return ActionKind::Unknown(type_name.to_string()),
        };
        let result = MinigameResult::parse_or_loss(field("result").and_then(|v| v.as_str()));
        let score = field("score")
            .and_then(|v| v.as_f64())
            .filter(|s| s.is_finite() && *s >= 0.0)
            .map(|s| s.floor() as u64)
            .unwrap_or(0);

        ActionKind::PlayMinigame {
            game,
            result,
            score,
        }
    }

    /// Wire name of the action type
    pub fn type_name(&self) -> &str {
        match self {
            ActionKind::Care(care) => care.as_str(),
            ActionKind::PlayMinigame { .. } => "PLAY_MINIGAME",
            ActionKind::Unknown(name) => name,
        }
    }
}

/// An action stamped with the tick at which it was submitted
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub kind: ActionKind,
    pub timestamp: Tick,
}

impl Action {
    /// Create a new action
    pub fn new(kind: ActionKind, timestamp: Tick) -> Self {
        Self { kind, timestamp }
    }

    /// Create a care action
    pub fn care(action: CareAction, timestamp: Tick) -> Self {
        Self::new(ActionKind::Care(action), timestamp)
    }

    /// Create a minigame action
    pub fn minigame(game: MinigameId, result: MinigameResult, score: u64, timestamp: Tick) -> Self {
        Self::new(
            ActionKind::PlayMinigame {
                game,
                result,
                score,
            },
            timestamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_parts_care() {
        assert_eq!(
            ActionKind::from_parts("FEED", None),
            ActionKind::Care(CareAction::Feed)
        );
        assert_eq!(
            ActionKind::from_parts("DANCE", None),
            ActionKind::Unknown("DANCE".to_string())
        );
    }

    #[test]
    fn test_from_parts_minigame() {
        let data = json!({ "gameId": "pudding", "result": "perfect", "score": 120.7 });
        assert_eq!(
            ActionKind::from_parts("PLAY_MINIGAME", Some(&data)),
            ActionKind::PlayMinigame {
                game: MinigameId::Pudding,
                result: MinigameResult::Perfect,
                score: 120,
            }
        );
    }

    #[test]
    fn test_from_parts_minigame_defaults_are_safe() {
        let data = json!({ "gameId": "memory", "result": 7, "score": -3 });
        assert_eq!(
            ActionKind::from_parts("PLAY_MINIGAME", Some(&data)),
            ActionKind::PlayMinigame {
                game: MinigameId::Memory,
                result: MinigameResult::Loss,
                score: 0,
            }
        );

        let unknown_game = json!({ "gameId": "chess", "result": "win" });
        assert!(matches!(
            ActionKind::from_parts("PLAY_MINIGAME", Some(&unknown_game)),
            ActionKind::Unknown(_)
        ));
        assert!(matches!(
            ActionKind::from_parts("PLAY_MINIGAME", None),
            ActionKind::Unknown(_)
        ));
    }

    #[test]
    fn test_result_parse() {
        assert_eq!(MinigameResult::parse_or_loss(Some("win")), MinigameResult::Win);
        assert_eq!(MinigameResult::parse_or_loss(Some("WIN")), MinigameResult::Loss);
        assert_eq!(MinigameResult::parse_or_loss(None), MinigameResult::Loss);
        assert!(MinigameResult::Perfect.is_win());
        assert!(!MinigameResult::Loss.is_win());
    }
}
