//! Lifetime action counters
//!
//! These totals survive log truncation and are the only history that game
//! logic (evolution, unlocks) is allowed to read.

use crate::CareAction;
use serde::{Deserialize, Serialize};

/// Per-action lifetime totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeCounters {
    pub total_actions: u64,
    pub feed: u64,
    pub play: u64,
    pub rest: u64,
    pub medicate: u64,
    pub pet: u64,
}

impl LifetimeCounters {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild counters from a sequence of care actions
    pub fn tally(actions: impl IntoIterator<Item = CareAction>) -> Self {
        let mut counters = Self::new();
        for action in actions {
            counters.record(action);
        }
        counters
    }

    /// Count one resolved care action
    pub fn record(&mut self, action: CareAction) {
        *self.slot_mut(action) = self.get(action).saturating_add(1);
        self.total_actions = self.total_actions.saturating_add(1);
    }

    /// Lifetime count of one action
    pub fn get(&self, action: CareAction) -> u64 {
        match action {
            CareAction::Feed => self.feed,
            CareAction::Play => self.play,
            CareAction::Rest => self.rest,
            CareAction::Medicate => self.medicate,
            CareAction::Pet => self.pet,
        }
    }

    /// Overwrite one action count (used by tests and save migration)
    pub fn set(&mut self, action: CareAction, count: u64) {
        *self.slot_mut(action) = count;
    }

    /// Share of affectionate (PET) actions among all care actions, in percent.
    /// Zero when no actions were taken.
    pub fn cleanliness(&self) -> f64 {
        if self.total_actions == 0 {
            return 0.0;
        }
        self.pet as f64 / self.total_actions as f64 * 100.0
    }

    fn slot_mut(&mut self, action: CareAction) -> &mut u64 {
        match action {
            CareAction::Feed => &mut self.feed,
            CareAction::Play => &mut self.play,
            CareAction::Rest => &mut self.rest,
            CareAction::Medicate => &mut self.medicate,
            CareAction::Pet => &mut self.pet,
        }
    }
}
