//! Evolution rule catalog

use crate::{CareAction, PetState, Species, Tick};
use std::sync::LazyLock;

/// A single threshold a rule requires
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    MinTicks(Tick),
    MinHappiness(f64),
    MaxHunger(f64),
    MinHealth(f64),
    MinEnergy(f64),
    /// Lifetime FEED count at most this
    MaxFeeds(u64),
    /// Lifetime PLAY count at least this
    MinPlayCount(u64),
    /// Lifetime REST count at most this
    MaxRestCount(u64),
    /// Share of PET among all care actions, in percent
    MinCleanliness(f64),
}

impl Condition {
    /// Check this condition against a state
    pub fn is_met(&self, state: &PetState) -> bool {
        let stats = &state.stats;
        let counters = &state.counters;
        match *self {
            Condition::MinTicks(ticks) => state.total_ticks >= ticks,
            Condition::MinHappiness(v) => stats.happiness >= v,
            Condition::MaxHunger(v) => stats.hunger <= v,
            Condition::MinHealth(v) => stats.health >= v,
            Condition::MinEnergy(v) => stats.energy >= v,
            Condition::MaxFeeds(n) => counters.get(CareAction::Feed) <= n,
            Condition::MinPlayCount(n) => counters.get(CareAction::Play) >= n,
            Condition::MaxRestCount(n) => counters.get(CareAction::Rest) <= n,
            Condition::MinCleanliness(v) => counters.cleanliness() >= v,
        }
    }
}

/// A branch-point rule: all conditions must hold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionRule {
    pub target: Species,
    pub name: &'static str,
    pub description: &'static str,
    pub conditions: &'static [Condition],
    /// Lower value wins when several rules match
    pub priority: u32,
}

impl EvolutionRule {
    /// Check if every condition holds
    pub fn matches(&self, state: &PetState) -> bool {
        self.conditions.iter().all(|c| c.is_met(state))
    }
}

/// The terminal-form catalog
pub static EVOLUTION_RULES: [EvolutionRule; 4] = [
    EvolutionRule {
        target: Species::Pompompurin,
        name: "Perfect Care",
        description: "High spirits, excellent health and a balanced diet",
        conditions: &[
            Condition::MinTicks(3600),
            Condition::MinHappiness(85.0),
            Condition::MinHealth(85.0),
            Condition::MaxHunger(30.0),
            Condition::MinEnergy(50.0),
        ],
        priority: 1,
    },
    EvolutionRule {
        target: Species::Bagel,
        name: "Irregular Sleep",
        description: "Erratic rest patterns from inconsistent care",
        conditions: &[
            Condition::MinTicks(1800),
            Condition::MaxRestCount(100),
            Condition::MinHealth(40.0),
            Condition::MinHappiness(30.0),
        ],
        priority: 2,
    },
    EvolutionRule {
        target: Species::Muffin,
        name: "Snack Addict",
        description: "Plenty of snacks, little discipline",
        conditions: &[
            Condition::MinTicks(2400),
            Condition::MaxFeeds(200),
            Condition::MinPlayCount(5),
            Condition::MinHealth(50.0),
        ],
        priority: 3,
    },
    EvolutionRule {
        target: Species::Scone,
        name: "Clean but Distant",
        description: "Mechanical care with little warmth",
        conditions: &[
            Condition::MinTicks(2400),
            Condition::MinCleanliness(70.0),
            Condition::MinHappiness(0.0),
            Condition::MaxHunger(50.0),
        ],
        priority: 4,
    },
];

static SORTED_RULES: LazyLock<Vec<&'static EvolutionRule>> = LazyLock::new(|| {
    let mut rules: Vec<_> = EVOLUTION_RULES.iter().collect();
    rules.sort_by_key(|rule| rule.priority);
    rules
});

/// Rules in evaluation order (ascending priority)
pub fn sorted_rules() -> &'static [&'static EvolutionRule] {
    &SORTED_RULES
}

/// The rule leading to a given terminal form
pub fn rule_for(species: Species) -> Option<&'static EvolutionRule> {
    EVOLUTION_RULES.iter().find(|rule| rule.target == species)
}
