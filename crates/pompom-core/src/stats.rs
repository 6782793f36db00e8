//! Clamped pet statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest value any stat can hold
pub const STAT_MIN: f64 = 0.0;
/// Highest value any stat can hold
pub const STAT_MAX: f64 = 100.0;

/// Clamp a value into `[STAT_MIN, STAT_MAX]`. NaN maps to `STAT_MIN`.
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

/// One of the five pet statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    /// 0 = full, 100 = starving
    Hunger,
    /// 0 = miserable, 100 = delighted
    Happiness,
    /// 0 = exhausted, 100 = hyperactive
    Energy,
    /// 0 = dead, 100 = perfectly healthy
    Health,
    /// 0 = aloof, 100 = devoted
    Affection,
}

impl StatKind {
    /// All stats in record order
    pub const ALL: [StatKind; 5] = [
        StatKind::Hunger,
        StatKind::Happiness,
        StatKind::Energy,
        StatKind::Health,
        StatKind::Affection,
    ];

    /// Field name used in save records and event payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Hunger => "hunger",
            StatKind::Happiness => "happiness",
            StatKind::Energy => "energy",
            StatKind::Health => "health",
            StatKind::Affection => "affection",
        }
    }

    /// Parse a field name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pet's stat block. Every field stays within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hunger: f64,
    pub happiness: f64,
    pub energy: f64,
    pub health: f64,
    pub affection: f64,
}

impl Stats {
    /// Build a stat block, clamping every value
    pub fn new(hunger: f64, happiness: f64, energy: f64, health: f64, affection: f64) -> Self {
        Self {
            hunger: clamp_stat(hunger),
            happiness: clamp_stat(happiness),
            energy: clamp_stat(energy),
            health: clamp_stat(health),
            affection: clamp_stat(affection),
        }
    }

    /// Read one stat
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Hunger => self.hunger,
            StatKind::Happiness => self.happiness,
            StatKind::Energy => self.energy,
            StatKind::Health => self.health,
            StatKind::Affection => self.affection,
        }
    }

    /// Set one stat (clamped)
    pub fn set(&mut self, kind: StatKind, value: f64) {
        let value = clamp_stat(value);
        match kind {
            StatKind::Hunger => self.hunger = value,
            StatKind::Happiness => self.happiness = value,
            StatKind::Energy => self.energy = value,
            StatKind::Health => self.health = value,
            StatKind::Affection => self.affection = value,
        }
    }

    /// Add `delta` to one stat (clamped) and return the new value
    pub fn adjust(&mut self, kind: StatKind, delta: f64) -> f64 {
        self.set(kind, self.get(kind) + delta);
        self.get(kind)
    }

    /// Check that every stat lies in range
    pub fn is_clamped(&self) -> bool {
        StatKind::ALL
            .iter()
            .all(|k| (STAT_MIN..=STAT_MAX).contains(&self.get(*k)))
    }
}

impl Default for Stats {
    /// Stats of a freshly hatched pet
    fn default() -> Self {
        Self {
            hunger: 5.0,
            happiness: 80.0,
            energy: 80.0,
            health: 100.0,
            affection: 30.0,
        }
    }
}
