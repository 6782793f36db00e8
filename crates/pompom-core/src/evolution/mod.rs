//! Species evolution
//!
//! Juvenile stages advance on age alone. At the adult branch point a static,
//! priority-ordered rule catalog picks the terminal form. Rules read stats,
//! `total_ticks` and lifetime counters, never the bounded event log.

mod evaluate;
mod rules;

pub use evaluate::{apply_evolution, evaluate_evolution, ADULT_AT_TICKS, TEEN_AT_TICKS};
pub use rules::{rule_for, sorted_rules, Condition, EvolutionRule, EVOLUTION_RULES};
