//! Unlock definitions and catalog evaluation

use crate::{CareAction, LifetimeCounters, PetState, Species, Stats, Tick};
use indexmap::IndexSet;

/// Read-only view of the state that unlock predicates may depend on
#[derive(Debug, Clone, Copy)]
pub struct Aggregates<'a> {
    pub counters: &'a LifetimeCounters,
    pub total_ticks: Tick,
    pub stats: &'a Stats,
    pub species: Species,
    forms: &'a IndexSet<String>,
    gifts: &'a IndexSet<String>,
}

impl<'a> Aggregates<'a> {
    pub fn from_state(state: &'a PetState) -> Self {
        Self {
            counters: &state.counters,
            total_ticks: state.total_ticks,
            stats: &state.stats,
            species: state.species,
            forms: &state.unlocked_forms,
            gifts: &state.unlocked_gifts,
        }
    }

    /// Check if a form is in the evolved set (past forms plus the current one)
    pub fn has_reached(&self, species: Species) -> bool {
        self.species == species || self.forms.contains(species.as_str())
    }

    pub fn has_gift(&self, id: &str) -> bool {
        self.gifts.contains(id)
    }
}

/// Unlock condition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// Lifetime count of one care action at least `n`
    ActionCount(CareAction, u64),
    /// Lifetime care actions at least `n`
    TotalActions(u64),
    MinTicks(Tick),
    /// The form has been reached at some point
    Reached(Species),
    /// Every listed form has been reached
    ReachedAll(&'static [Species]),
    /// Adult or evolved, with health strictly above the value
    GrownWithHealthAbove(f64),
    /// Every gift in the gift catalog is unlocked
    AllGifts,
}

impl Predicate {
    pub fn is_met(&self, agg: &Aggregates<'_>) -> bool {
        match *self {
            Predicate::ActionCount(action, n) => agg.counters.get(action) >= n,
            Predicate::TotalActions(n) => agg.counters.total_actions >= n,
            Predicate::MinTicks(ticks) => agg.total_ticks >= ticks,
            Predicate::Reached(species) => agg.has_reached(species),
            Predicate::ReachedAll(forms) => forms.iter().all(|s| agg.has_reached(*s)),
            Predicate::GrownWithHealthAbove(health) => {
                agg.species.is_grown() && agg.stats.health > health
            }
            Predicate::AllGifts => super::GIFT_DEFS.iter().all(|def| agg.has_gift(def.id)),
        }
    }
}

/// A gift or achievement definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnlockDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Gifts,
    Achievements,
}

/// An ordered, immutable table of unlock definitions bound to one of the
/// state's unlock sets
#[derive(Debug)]
pub struct Catalog {
    name: &'static str,
    defs: &'static [UnlockDef],
    slot: Slot,
}

impl Catalog {
    pub(crate) const fn gifts(defs: &'static [UnlockDef]) -> Self {
        Self {
            name: "gift",
            defs,
            slot: Slot::Gifts,
        }
    }

    pub(crate) const fn achievements(defs: &'static [UnlockDef]) -> Self {
        Self {
            name: "achievement",
            defs,
            slot: Slot::Achievements,
        }
    }

    /// Definitions in catalog order
    pub fn defs(&self) -> &'static [UnlockDef] {
        self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Look up a definition by id
    pub fn by_id(&self, id: &str) -> Option<&'static UnlockDef> {
        self.defs.iter().find(|def| def.id == id)
    }

    /// The ids this catalog has already unlocked on the state
    pub fn unlocked_ids<'s>(&self, state: &'s PetState) -> &'s IndexSet<String> {
        match self.slot {
            Slot::Gifts => &state.unlocked_gifts,
            Slot::Achievements => &state.unlocked_achievements,
        }
    }

    fn unlocked_ids_mut<'s>(&self, state: &'s mut PetState) -> &'s mut IndexSet<String> {
        match self.slot {
            Slot::Gifts => &mut state.unlocked_gifts,
            Slot::Achievements => &mut state.unlocked_achievements,
        }
    }

    /// Unlocked entries as definitions, in unlock order. Ids unknown to the
    /// catalog (from older saves) are skipped.
    pub fn unlocked(&self, state: &PetState) -> Vec<&'static UnlockDef> {
        self.unlocked_ids(state)
            .iter()
            .filter_map(|id| self.by_id(id))
            .collect()
    }

    /// Ids whose predicate now holds but which are not yet unlocked, in
    /// catalog order
    pub fn evaluate(&self, state: &PetState) -> Vec<&'static str> {
        let agg = Aggregates::from_state(state);
        let unlocked = self.unlocked_ids(state);
        self.defs
            .iter()
            .filter(|def| !unlocked.contains(def.id) && def.predicate.is_met(&agg))
            .map(|def| def.id)
            .collect()
    }

    /// Append every newly satisfied id. Returns the state and the new ids;
    /// the state is untouched when nothing unlocks.
    pub fn apply(&self, mut state: PetState) -> (PetState, Vec<&'static str>) {
        let new_ids = self.evaluate(&state);
        if new_ids.is_empty() {
            return (state, new_ids);
        }

        let tick = state.total_ticks;
        let unlocked = self.unlocked_ids_mut(&mut state);
        for id in &new_ids {
            unlocked.insert((*id).to_string());
            tracing::debug!(kind = self.name, id, tick, "Unlocked");
        }
        (state, new_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unlocks::{ACHIEVEMENTS, GIFTS};

    #[test]
    fn test_aggregates_include_current_species() {
        let mut state = PetState::new();
        state.species = Species::Muffin;
        let agg = Aggregates::from_state(&state);
        assert!(agg.has_reached(Species::Muffin));
        assert!(agg.has_reached(Species::FlanBebe));
        assert!(!agg.has_reached(Species::Scone));
    }

    #[test]
    fn test_predicates() {
        let mut state = PetState::new();
        state.counters.record(CareAction::Feed);
        state.total_ticks = 10;
        let agg = Aggregates::from_state(&state);

        assert!(Predicate::ActionCount(CareAction::Feed, 1).is_met(&agg));
        assert!(!Predicate::ActionCount(CareAction::Feed, 2).is_met(&agg));
        assert!(Predicate::TotalActions(1).is_met(&agg));
        assert!(Predicate::MinTicks(10).is_met(&agg));
        assert!(!Predicate::MinTicks(11).is_met(&agg));
        assert!(!Predicate::GrownWithHealthAbove(70.0).is_met(&agg));
        assert!(!Predicate::AllGifts.is_met(&agg));
    }

    #[test]
    fn test_grown_with_health_above_is_strict() {
        let mut state = PetState::new();
        state.species = Species::FlanAdult;
        state.stats.health = 70.0;
        assert!(!Predicate::GrownWithHealthAbove(70.0).is_met(&Aggregates::from_state(&state)));

        state.stats.health = 70.5;
        assert!(Predicate::GrownWithHealthAbove(70.0).is_met(&Aggregates::from_state(&state)));
    }

    #[test]
    fn test_evaluate_skips_unlocked() {
        let mut state = PetState::new();
        state.counters.record(CareAction::Feed);

        assert_eq!(GIFTS.evaluate(&state), vec!["gift_first_meal"]);

        let (state, new_ids) = GIFTS.apply(state);
        assert_eq!(new_ids, vec!["gift_first_meal"]);
        assert!(GIFTS.evaluate(&state).is_empty());

        let (again, none) = GIFTS.apply(state.clone());
        assert!(none.is_empty());
        assert_eq!(again, state);
    }

    #[test]
    fn test_apply_preserves_catalog_order() {
        let mut state = PetState::new();
        for _ in 0..10 {
            state.counters.record(CareAction::Pet);
        }
        for _ in 0..5 {
            state.counters.record(CareAction::Rest);
        }
        for _ in 0..3 {
            state.counters.record(CareAction::Play);
        }

        let (state, new_ids) = GIFTS.apply(state);
        assert_eq!(new_ids, vec!["gift_playtime_joy", "gift_dreams", "gift_affection"]);
        assert_eq!(
            state.unlocked_gifts.iter().map(String::as_str).collect::<Vec<_>>(),
            new_ids
        );
    }

    #[test]
    fn test_unlocked_skips_unknown_ids() {
        let mut state = PetState::new();
        state.unlocked_achievements.insert("ach_retired".to_string());
        state.unlocked_achievements.insert("ach_foodie".to_string());

        let defs = ACHIEVEMENTS.unlocked(&state);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "Foodie");
    }

    #[test]
    fn test_by_id() {
        assert_eq!(GIFTS.by_id("gift_dreams").map(|d| d.icon), Some("🌙"));
        assert!(GIFTS.by_id("ach_foodie").is_none());
        assert!(ACHIEVEMENTS.by_id("ach_foodie").is_some());
    }
}
