//! PomPom Core - Deterministic virtual-pet engine
//!
//! This crate provides the pure simulation behind the pet:
//! - Clamped stats and time-based decay (`tick`)
//! - Action resolution for care actions and minigame results (`reduce`)
//! - Species evolution from a static, priority-ordered rule catalog
//! - Gift and achievement unlocks over lifetime aggregates
//! - A post-processing pipeline chaining evolution, gifts and achievements
//! - Versioned save records with sanitization and legacy migration
//!
//! Every operation takes a `&PetState` (or an owned one) and returns a new
//! state. Nothing here reads the wall clock or does I/O; identical inputs
//! always give identical outputs.
//!
//! ## Bounded history
//!
//! The event log keeps the 50 most recent events for display. Game logic
//! reads [`LifetimeCounters`] and `unlocked_forms`, which are never truncated.

mod action;
mod counters;
mod error;
mod event;
mod event_log;
pub mod evolution;
mod minigame;
mod model;
pub mod persistence;
pub mod pipeline;
pub mod reducer;
mod settings;
mod species;
mod stats;
pub mod tick;
mod time;
pub mod unlocks;

pub use action::{Action, ActionKind, CareAction, MinigameId, MinigameResult};
pub use counters::LifetimeCounters;
pub use error::{Error, Result};
pub use event::{EventData, EventKind, GameEvent, StatChange};
pub use event_log::{EventLog, EVENT_LOG_CAPACITY};
pub use evolution::{apply_evolution, evaluate_evolution};
pub use minigame::{MinigameStats, MinigamesState, MINIGAME_COOLDOWN};
pub use model::PetState;
pub use persistence::{LoadOutcome, LoadStatus, SaveMeta};
pub use pipeline::{post_process, PipelineOutput};
pub use reducer::reduce;
pub use settings::{change_settings, Difficulty, Settings, SettingsChange};
pub use species::{Species, Stage};
pub use stats::{clamp_stat, StatKind, Stats, STAT_MAX, STAT_MIN};
pub use tick::{tick, tick_many};
pub use time::{Speed, Tick};
