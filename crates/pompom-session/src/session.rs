//! Session driver
//!
//! Owns one pet and the collaborators around the pure engine: the tick
//! clock, the blob store and autosave. Every state change goes through
//! `pompom_core` and then through the post-processing pipeline.

use crate::clock::TickClock;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::storage::BlobStore;
use chrono::{DateTime, Utc};
use pompom_core::persistence::{self, SaveMeta};
use pompom_core::pipeline::{self, PipelineOutput};
use pompom_core::unlocks::{UnlockDef, ACHIEVEMENTS, GIFTS};
use pompom_core::{
    reduce, tick, Action, ActionKind, LoadStatus, PetState, SettingsChange, Species, Tick,
};

/// What happened during one `advance` or `dispatch` call, for notifications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Ticks actually simulated; none once the pet has died
    pub ticks: Tick,
    /// Species transitions in order
    pub evolutions: Vec<(Species, Species)>,
    pub gifts: Vec<&'static str>,
    pub achievements: Vec<&'static str>,
    /// The pet died during this step
    pub died: bool,
    /// An autosave ran at the end of this step
    pub saved: bool,
}

impl StepReport {
    fn absorb(&mut self, output: PipelineOutput) -> PetState {
        self.evolutions.extend(output.evolved);
        self.gifts.extend(output.gifts);
        self.achievements.extend(output.achievements);
        output.state
    }

    /// Check if anything worth notifying happened
    pub fn has_news(&self) -> bool {
        self.died
            || !self.evolutions.is_empty()
            || !self.gifts.is_empty()
            || !self.achievements.is_empty()
    }
}

/// A running pet session backed by a blob store
#[derive(Debug)]
pub struct Session<S: BlobStore> {
    config: SessionConfig,
    store: S,
    state: PetState,
    clock: TickClock,
    /// `None` for a pet that was never saved before
    load_status: Option<LoadStatus>,
    created_at: i64,
    last_save_at: i64,
    dirty: bool,
}

impl<S: BlobStore> Session<S> {
    /// Open the session's save, or hatch a new pet when there is none.
    ///
    /// Corrupt saves are not an error: the codec replaces them with a fresh
    /// pet, which is written back on the next save.
    pub fn open(config: SessionConfig, store: S, now_ms: i64) -> Result<Self> {
        config.validate()?;

        let (state, load_status, created_at) = match store.load(&config.storage_key)? {
            Some(blob) => {
                let outcome = persistence::from_json(&blob);
                let created_at = outcome.created_at.unwrap_or(now_ms);
                (outcome.state, Some(outcome.status), created_at)
            }
            None => (PetState::new(), None, now_ms),
        };

        let dirty = !matches!(load_status, Some(LoadStatus::Loaded));
        tracing::debug!(
            key = %config.storage_key,
            status = ?load_status,
            species = %state.species,
            "Session opened"
        );

        Ok(Self {
            clock: TickClock::new(config.tick_ms),
            config,
            store,
            state,
            load_status,
            created_at,
            last_save_at: now_ms,
            dirty,
        })
    }

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// How the save was restored; `None` for a brand-new pet
    pub fn load_status(&self) -> Option<&LoadStatus> {
        self.load_status.as_ref()
    }

    /// Creation time of the pet
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }

    /// Check if there are changes not yet written to the store
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Feed elapsed wall-clock time. Each whole tick is simulated on its own
    /// and post-processed, so evolution and unlocks fire at the exact tick.
    pub fn advance(&mut self, delta_ms: u64, now_ms: i64) -> Result<StepReport> {
        let settings = self.state.settings;
        let ticks = self.clock.advance(delta_ms, settings.speed, settings.paused);

        let mut report = StepReport::default();
        let was_alive = self.state.alive;
        let mut state = std::mem::take(&mut self.state);
        for _ in 0..ticks {
            if !state.alive {
                break;
            }
            state = report.absorb(pipeline::run(tick(&state, 1)));
            report.ticks += 1;
        }
        self.state = state;

        if report.ticks > 0 {
            self.dirty = true;
        }
        report.died = was_alive && !self.state.alive;
        report.saved = self.autosave(now_ms)?;
        Ok(report)
    }

    /// Submit a player action, stamped with the current tick
    pub fn dispatch(&mut self, kind: ActionKind, now_ms: i64) -> Result<StepReport> {
        let action = Action::new(kind, self.state.total_ticks);
        let was_alive = self.state.alive;

        let mut report = StepReport::default();
        let state = std::mem::take(&mut self.state);
        self.state = report.absorb(pipeline::run(reduce(&state, &action)));
        report.ticks = self.state.total_ticks - state.total_ticks;
        report.died = was_alive && !self.state.alive;

        tracing::trace!(action = action.kind.type_name(), tick = action.timestamp, "Dispatched");
        self.dirty = true;
        report.saved = self.autosave(now_ms)?;
        Ok(report)
    }

    /// Change one setting. Pausing drops any partial tick.
    pub fn change_settings(&mut self, change: SettingsChange) {
        self.state = pompom_core::change_settings(&self.state, change);
        if self.state.settings.paused {
            self.clock.reset();
        }
        self.dirty = true;
    }

    /// Replace the pet with a freshly hatched one (settings are kept) and
    /// save immediately
    pub fn reset(&mut self, now_ms: i64) -> Result<()> {
        tracing::info!(
            species = %self.state.species,
            ticks = self.state.total_ticks,
            "Resetting pet"
        );
        self.state = PetState::with_settings(self.state.settings);
        self.created_at = now_ms;
        self.load_status = None;
        self.clock.reset();
        self.save(now_ms)
    }

    /// Write the save record now
    pub fn save(&mut self, now_ms: i64) -> Result<()> {
        let record = persistence::serialize(&self.state, SaveMeta::new(self.created_at, now_ms));
        let blob = serde_json::to_string(&record)?;
        self.store.store(&self.config.storage_key, &blob)?;

        self.last_save_at = now_ms;
        self.dirty = false;
        tracing::debug!(
            key = %self.config.storage_key,
            tick = self.state.total_ticks,
            bytes = blob.len(),
            "Saved"
        );
        Ok(())
    }

    /// Save if there are pending changes and the save interval has passed
    pub fn autosave(&mut self, now_ms: i64) -> Result<bool> {
        let interval = i64::try_from(self.config.save_interval_ms).unwrap_or(i64::MAX);
        if !self.dirty || now_ms.saturating_sub(self.last_save_at) < interval {
            return Ok(false);
        }
        self.save(now_ms)?;
        Ok(true)
    }

    /// Unlocked gifts as catalog definitions
    pub fn gifts(&self) -> Vec<&'static UnlockDef> {
        GIFTS.unlocked(&self.state)
    }

    /// Unlocked achievements as catalog definitions
    pub fn achievements(&self) -> Vec<&'static UnlockDef> {
        ACHIEVEMENTS.unlocked(&self.state)
    }

    /// Close the session, returning the store
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pompom_core::{CareAction, Difficulty, Error, MinigameId, MinigameResult};

    const T0: i64 = 1_700_000_000_000;

    fn open(store: MemoryStore) -> Session<MemoryStore> {
        Session::open(SessionConfig::default(), store, T0).unwrap()
    }

    #[test]
    fn test_new_pet_when_store_is_empty() {
        let session = open(MemoryStore::new());
        assert_eq!(session.state(), &PetState::new());
        assert!(session.load_status().is_none());
        assert!(session.dirty);
        assert_eq!(session.created_at().map(|t| t.timestamp_millis()), Some(T0));
    }

    #[test]
    fn test_advance_emits_whole_ticks() {
        let mut session = open(MemoryStore::new());

        let report = session.advance(2500, T0 + 2500).unwrap();
        assert_eq!(report.ticks, 2);
        assert_eq!(session.state().total_ticks, 2);
        assert!(!report.saved);

        let report = session.advance(500, T0 + 3000).unwrap();
        assert_eq!(report.ticks, 1);
        assert_eq!(session.state().total_ticks, 3);
    }

    #[test]
    fn test_evolution_reported_at_exact_tick() {
        let mut session = open(MemoryStore::new());
        let report = session.advance(60_000, T0 + 60_000).unwrap();

        assert_eq!(report.ticks, 60);
        assert_eq!(report.evolutions, vec![(Species::FlanBebe, Species::FlanTeen)]);
        let event = session.state().events.last().unwrap();
        assert_eq!(event.tick, 60);
    }

    #[test]
    fn test_dispatch_feed() {
        let mut session = open(MemoryStore::new());
        let report = session
            .dispatch(ActionKind::Care(CareAction::Feed), T0 + 10)
            .unwrap();

        assert_eq!(report.ticks, 1);
        assert_eq!(report.gifts, vec!["gift_first_meal"]);
        assert!(report.has_news());
        assert_eq!(session.state().counters.feed, 1);
        assert_eq!(session.gifts()[0].id, "gift_first_meal");
        assert!(session.achievements().is_empty());
    }

    #[test]
    fn test_dispatch_minigame_from_loose_input() {
        let mut session = open(MemoryStore::new());
        let data = serde_json::json!({"gameId": "memory", "result": "perfect", "score": 12});
        session
            .dispatch(ActionKind::from_parts("PLAY_MINIGAME", Some(&data)), T0)
            .unwrap();

        let stats = session.state().minigames.stats(MinigameId::Memory);
        assert_eq!(stats.total_perfect, 1);
        assert_eq!(stats.best_score, 12);

        let again = Action::minigame(MinigameId::Memory, MinigameResult::Win, 99, 0);
        session.dispatch(again.kind, T0).unwrap();
        assert_eq!(session.state().minigames.stats(MinigameId::Memory).total_played, 1);
    }

    #[test]
    fn test_autosave_interval() {
        let mut session = open(MemoryStore::new());

        let report = session.advance(1000, T0 + 1000).unwrap();
        assert!(!report.saved);
        assert!(session.store().is_empty());

        let report = session.advance(4000, T0 + 5000).unwrap();
        assert!(report.saved);
        assert!(!session.is_dirty());
        assert_eq!(session.store().len(), 1);

        // Nothing pending: no save even after the interval
        session.advance(999, T0 + 20_000).unwrap();
        assert!(!session.autosave(T0 + 20_000).unwrap());
    }

    #[test]
    fn test_save_and_reopen() {
        let mut session = open(MemoryStore::new());
        session.change_settings(SettingsChange::SetDifficulty(Difficulty::Hard));
        session.dispatch(ActionKind::Care(CareAction::Pet), T0).unwrap();
        session.advance(3000, T0 + 3000).unwrap();
        session.save(T0 + 3000).unwrap();
        let state = session.state().clone();

        let reopened = open(session.into_store());
        assert_eq!(reopened.load_status(), Some(&LoadStatus::Loaded));
        assert_eq!(reopened.state(), &state);
        assert_eq!(reopened.created_at().map(|t| t.timestamp_millis()), Some(T0));
        assert!(!reopened.is_dirty());
    }

    #[test]
    fn test_corrupt_save_is_replaced() {
        let mut store = MemoryStore::new();
        store.store("pompom-save", "{ invalid json }").unwrap();

        let mut session = open(store);
        assert!(matches!(
            session.load_status(),
            Some(LoadStatus::Reset(Error::InvalidJson(_)))
        ));
        assert!(session.is_dirty());

        assert!(session.autosave(T0 + 5000).unwrap());
        let blob = session.store().load("pompom-save").unwrap().unwrap();
        assert!(persistence::from_json(&blob).status == LoadStatus::Loaded);
    }

    #[test]
    fn test_pause_stops_time() {
        let mut session = open(MemoryStore::new());
        session.advance(900, T0 + 900).unwrap();
        session.change_settings(SettingsChange::TogglePause);

        let report = session.advance(10_000, T0 + 10_900).unwrap();
        assert_eq!(report.ticks, 0);
        assert_eq!(session.state().total_ticks, 0);

        session.change_settings(SettingsChange::TogglePause);
        assert_eq!(session.advance(100, T0 + 11_000).unwrap().ticks, 0);
    }

    #[test]
    fn test_double_speed() {
        let mut session = open(MemoryStore::new());
        session.change_settings(SettingsChange::ToggleSpeed);
        assert_eq!(session.advance(1000, T0 + 1000).unwrap().ticks, 2);
    }

    #[test]
    fn test_death_is_reported_once() {
        let mut session = open(MemoryStore::new());
        session.state.stats.hunger = 100.0;
        session.state.stats.health = 0.15;

        let report = session.advance(5000, T0 + 5000).unwrap();
        assert!(report.died);
        assert!(!session.state().alive);
        assert_eq!(report.ticks, 2);

        let report = session.advance(5000, T0 + 10_000).unwrap();
        assert!(!report.died);
        assert_eq!(report.ticks, 0);
    }

    #[test]
    fn test_dead_pet_stays_clean() {
        let mut session = open(MemoryStore::new());
        session.state.alive = false;
        session.save(T0).unwrap();
        let saved = session.store().len();

        let report = session.advance(60_000, T0 + 60_000).unwrap();
        assert_eq!(report.ticks, 0);
        assert!(!report.saved);
        assert!(!session.is_dirty());
        assert_eq!(session.store().len(), saved);
        assert_eq!(session.state().total_ticks, 0);
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut session = open(MemoryStore::new());
        session.change_settings(SettingsChange::ToggleSound);
        session.advance(120_000, T0 + 120_000).unwrap();

        session.reset(T0 + 200_000).unwrap();
        assert_eq!(session.state().total_ticks, 0);
        assert_eq!(session.state().species, Species::FlanBebe);
        assert!(!session.state().settings.sound_enabled);
        assert!(!session.is_dirty());
        assert_eq!(
            session.created_at().map(|t| t.timestamp_millis()),
            Some(T0 + 200_000)
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SessionConfig::default().with_storage_key("bad key");
        assert!(Session::open(config, MemoryStore::new(), T0).is_err());
    }
}
