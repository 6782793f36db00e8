//! The pet state (the sole persisted aggregate)

use crate::{EventLog, GameEvent, LifetimeCounters, MinigamesState, Settings, Species, Stats, Tick};
use indexmap::IndexSet;

/// The complete pet state
///
/// Every engine operation takes a `&PetState` and returns a new value; the
/// event log is shared between snapshots until one of them appends to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PetState {
    /// Current form
    pub species: Species,
    /// Clamped stat block
    pub stats: Stats,
    /// Once false, only an external reset brings the pet back
    pub alive: bool,
    /// Simulated clock; the only time source for gated logic
    pub total_ticks: Tick,
    /// Recent events for display
    pub events: EventLog,
    /// Lifetime care totals
    pub counters: LifetimeCounters,
    /// Every form this pet has taken (may include ids from older releases)
    pub unlocked_forms: IndexSet<String>,
    pub unlocked_gifts: IndexSet<String>,
    pub unlocked_achievements: IndexSet<String>,
    /// Opaque album data owned by the app
    pub album: serde_json::Map<String, serde_json::Value>,
    pub minigames: MinigamesState,
    pub settings: Settings,
}

impl PetState {
    /// Create a freshly hatched pet
    pub fn new() -> Self {
        let mut unlocked_forms = IndexSet::new();
        unlocked_forms.insert(Species::FlanBebe.as_str().to_string());

        Self {
            species: Species::FlanBebe,
            stats: Stats::default(),
            alive: true,
            total_ticks: 0,
            events: EventLog::new(),
            counters: LifetimeCounters::new(),
            unlocked_forms,
            unlocked_gifts: IndexSet::new(),
            unlocked_achievements: IndexSet::new(),
            album: serde_json::Map::new(),
            minigames: MinigamesState::new(),
            settings: Settings::default(),
        }
    }

    /// Create a fresh pet with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::new()
        }
    }

    /// Check if the pet is, or has ever been, the given species
    pub fn has_reached(&self, species: Species) -> bool {
        self.species == species || self.unlocked_forms.contains(species.as_str())
    }

    /// Append an event to the bounded log
    pub fn record_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self::new()
    }
}
