//! Encoding and lenient decoding of save records

use super::migrate::{rebuild_counts, rebuild_forms, Migration};
use super::record::{SaveMeta, SaveRecord, SavedEvent, SavedMinigames, SavedPet, SAVE_VERSION};
use super::sanitize::{count, finite, flag, parsed, stat, string_set, whole};
use crate::{
    CareAction, Difficulty, Error, EventData, EventKind, EventLog, GameEvent, LifetimeCounters,
    MinigameId, MinigameStats, MinigamesState, PetState, Settings, Species, Speed, StatChange,
    StatKind, Stats,
};
use serde_json::{json, Map, Value};

/// How a record was restored
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Read as-is (after field sanitization)
    Loaded,
    /// Read after rebuilding missing aggregates
    Migrated(Vec<Migration>),
    /// Unreadable; a fresh pet was returned instead
    Reset(Error),
}

/// A restored pet plus how it was restored
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub state: PetState,
    pub status: LoadStatus,
    /// `createdAt` of the record, when present and numeric
    pub created_at: Option<i64>,
}

impl LoadOutcome {
    fn reset(reason: Error) -> Self {
        tracing::warn!(%reason, "Save record rejected, starting a fresh pet");
        Self {
            state: PetState::new(),
            status: LoadStatus::Reset(reason),
            created_at: None,
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self.status, LoadStatus::Reset(_))
    }
}

/// Build the save record for a state
pub fn serialize(state: &PetState, meta: SaveMeta) -> SaveRecord {
    SaveRecord {
        version: SAVE_VERSION,
        created_at: meta.created_at,
        last_saved: meta.last_saved,
        total_ticks: state.total_ticks,
        state: SavedPet {
            species: state.species,
            stats: state.stats,
            alive: state.alive,
            minigames: SavedMinigames {
                last_played: state.minigames.cooldowns.clone(),
                games: state.minigames.games.clone(),
            },
        },
        history: state
            .events
            .iter()
            .map(|event| SavedEvent {
                kind: event.kind,
                tick: event.tick,
                data: event_data_to_json(&event.data),
            })
            .collect(),
        counts: state.counters,
        unlocked_forms: state.unlocked_forms.iter().cloned().collect(),
        unlocked_gifts: state.unlocked_gifts.iter().cloned().collect(),
        unlocked_achievements: state.unlocked_achievements.iter().cloned().collect(),
        album: state.album.clone(),
        settings: state.settings,
    }
}

/// Serialize a state to a JSON string
pub fn to_json(state: &PetState, meta: SaveMeta) -> String {
    // A record of plain data with string keys always encodes
    serde_json::to_string(&serialize(state, meta)).unwrap_or_default()
}

/// Restore a state from a JSON string
pub fn from_json(json: &str) -> LoadOutcome {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => deserialize(&value),
        Err(e) => LoadOutcome::reset(Error::InvalidJson(e.to_string())),
    }
}

/// Restore a state from a parsed record
pub fn deserialize(value: &Value) -> LoadOutcome {
    match decode(value) {
        Ok(outcome) => outcome,
        Err(reason) => LoadOutcome::reset(reason),
    }
}

fn decode(value: &Value) -> crate::Result<LoadOutcome> {
    let root = value.as_object().ok_or(Error::NotAnObject)?;
    check_version(root.get("version"))?;

    let pet = root
        .get("state")
        .and_then(Value::as_object)
        .ok_or(Error::MissingSection("state"))?;
    let raw_stats = pet
        .get("stats")
        .and_then(Value::as_object)
        .ok_or(Error::MissingSection("state.stats"))?;

    let species = parsed(pet.get("species"), Species::parse).unwrap_or_default();
    let history: &[Value] = root
        .get("history")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut migrations = Vec::new();
    let counters = match root.get("counts").and_then(Value::as_object) {
        Some(counts) => decode_counters(counts),
        None => {
            migrations.push(Migration::RebuiltCounts);
            rebuild_counts(history)
        }
    };
    let unlocked_forms = match string_set(root.get("unlockedForms")) {
        Some(forms) => forms,
        None => {
            migrations.push(Migration::RebuiltForms);
            rebuild_forms(history, species)
        }
    };

    // Aggregates are settled; only now is the log cut down to its bound
    let events = EventLog::from_events(history.iter().filter_map(event_from_json));
    let total_ticks = count(root.get("totalTicks"));

    let state = PetState {
        species,
        stats: decode_stats(raw_stats),
        alive: flag(pet.get("alive"), true),
        total_ticks,
        events,
        counters,
        unlocked_forms,
        unlocked_gifts: string_set(root.get("unlockedGifts")).unwrap_or_default(),
        unlocked_achievements: string_set(root.get("unlockedAchievements")).unwrap_or_default(),
        album: root
            .get("album")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        minigames: decode_minigames(pet.get("minigames"), total_ticks),
        settings: decode_settings(root.get("settings")),
    };

    let status = if migrations.is_empty() {
        LoadStatus::Loaded
    } else {
        tracing::info!(?migrations, "Migrated legacy save record");
        LoadStatus::Migrated(migrations)
    };

    Ok(LoadOutcome {
        state,
        status,
        created_at: finite(root.get("createdAt")).map(|ms| ms as i64),
    })
}

fn check_version(version: Option<&Value>) -> crate::Result<()> {
    let Some(version) = version else {
        return Ok(());
    };
    if finite(Some(version)) == Some(f64::from(SAVE_VERSION)) {
        return Ok(());
    }
    Err(Error::UnsupportedVersion {
        found: version.to_string(),
        expected: SAVE_VERSION,
    })
}

fn decode_stats(raw: &Map<String, Value>) -> Stats {
    Stats {
        hunger: stat(raw.get("hunger")),
        happiness: stat(raw.get("happiness")),
        energy: stat(raw.get("energy")),
        health: stat(raw.get("health")),
        affection: stat(raw.get("affection")),
    }
}

fn decode_counters(raw: &Map<String, Value>) -> LifetimeCounters {
    let mut counters = LifetimeCounters::new();
    counters.total_actions = count(raw.get("totalActions"));
    for action in CareAction::ALL {
        let key = action.as_str().to_ascii_lowercase();
        counters.set(action, count(raw.get(&key)));
    }
    counters
}

fn decode_minigames(raw: Option<&Value>, total_ticks: u64) -> MinigamesState {
    let mut minigames = MinigamesState::new();
    let Some(raw) = raw.and_then(Value::as_object) else {
        return minigames;
    };

    if let Some(last_played) = raw.get("lastPlayed").and_then(Value::as_object) {
        for (key, tick) in last_played {
            let Some(game) = MinigameId::parse(key) else {
                continue;
            };
            // Ticks from the future would lock the game; negative ones are the
            // legacy "never played" marker
            if let Some(tick) = whole(Some(tick)) {
                minigames.cooldowns.insert(game, tick.min(total_ticks));
            }
        }
    }

    if let Some(games) = raw.get("games").and_then(Value::as_object) {
        for (key, stats) in games {
            let (Some(game), Some(stats)) = (MinigameId::parse(key), stats.as_object()) else {
                continue;
            };
            minigames.games.insert(
                game,
                MinigameStats {
                    last_played: count(stats.get("lastPlayed")),
                    best_score: count(stats.get("bestScore")),
                    total_played: count(stats.get("totalPlayed")),
                    total_wins: count(stats.get("totalWins")),
                    total_perfect: count(stats.get("totalPerfect")),
                },
            );
        }
    }

    minigames
}

fn decode_settings(raw: Option<&Value>) -> Settings {
    let defaults = Settings::default();
    let Some(raw) = raw.and_then(Value::as_object) else {
        return defaults;
    };

    Settings {
        difficulty: parsed(raw.get("difficulty"), Difficulty::parse).unwrap_or(defaults.difficulty),
        sound_enabled: flag(raw.get("soundEnabled"), defaults.sound_enabled),
        animations_enabled: flag(raw.get("animationsEnabled"), defaults.animations_enabled),
        reduced_motion: flag(raw.get("reducedMotion"), defaults.reduced_motion),
        speed: parsed(raw.get("speed"), Speed::parse).unwrap_or(defaults.speed),
        paused: flag(raw.get("paused"), defaults.paused),
    }
}

/// Encode one event as a `history` entry
pub fn event_to_json(event: &GameEvent) -> Value {
    let mut entry = json!({
        "type": event.kind.as_str(),
        "tick": event.tick,
    });
    if let Some(data) = event_data_to_json(&event.data) {
        entry["data"] = data;
    }
    entry
}

fn event_data_to_json(data: &EventData) -> Option<Value> {
    let value = match data {
        EventData::None => return None,
        EventData::Care { action, change } => {
            let mut value = json!({ "action": action.as_str() });
            if let Some(change) = change {
                value["stat"] = json!(change.stat.as_str());
                value["before"] = json!(change.before);
                value["after"] = json!(change.after);
            }
            value
        }
        EventData::Evolved { from, to } => json!({
            "from": from.as_str(),
            "to": to.as_str(),
        }),
        EventData::Minigame { game, score } => json!({
            "gameId": game.as_str(),
            "score": score,
        }),
        EventData::Gift(id) => json!({ "giftId": id }),
    };
    Some(value)
}

/// Decode one `history` entry. Entries that are not objects, lack a valid
/// tick or name an unknown type are rejected; a missing type reads as
/// `STAT_CHANGED`.
pub fn event_from_json(entry: &Value) -> Option<GameEvent> {
    let entry = entry.as_object()?;
    let tick = whole(entry.get("tick"))?;
    let kind = match entry.get("type") {
        None | Some(Value::Null) => EventKind::StatChanged,
        Some(kind) => parsed(Some(kind), EventKind::parse)?,
    };
    let data = entry
        .get("data")
        .and_then(Value::as_object)
        .map(|data| event_data_from_json(kind, data))
        .unwrap_or_default();

    Some(GameEvent::new(kind, tick).with_data(data))
}

fn event_data_from_json(kind: EventKind, data: &Map<String, Value>) -> EventData {
    match kind {
        EventKind::StatChanged => {
            let Some(action) = parsed(data.get("action"), CareAction::parse) else {
                return EventData::None;
            };
            let change = match (
                parsed(data.get("stat"), StatKind::parse),
                finite(data.get("before")),
                finite(data.get("after")),
            ) {
                (Some(stat), Some(before), Some(after)) => Some(StatChange {
                    stat,
                    before,
                    after,
                }),
                _ => None,
            };
            EventData::Care { action, change }
        }
        EventKind::Evolved => {
            match (
                parsed(data.get("from"), Species::parse),
                parsed(data.get("to"), Species::parse),
            ) {
                (Some(from), Some(to)) => EventData::Evolved { from, to },
                _ => EventData::None,
            }
        }
        EventKind::MinigameWin | EventKind::MinigamePerfect | EventKind::MinigameLoss => {
            match parsed(data.get("gameId"), MinigameId::parse) {
                Some(game) => EventData::Minigame {
                    game,
                    score: count(data.get("score")),
                },
                None => EventData::None,
            }
        }
        EventKind::GiftUnlocked => data
            .get("giftId")
            .and_then(Value::as_str)
            .map(|id| EventData::Gift(id.to_string()))
            .unwrap_or_default(),
        EventKind::Died => EventData::None,
    }
}
