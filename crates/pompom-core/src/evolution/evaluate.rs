//! Evolution state machine

use super::rules::sorted_rules;
use crate::{GameEvent, PetState, Species, Stage, Tick};

/// Age at which a baby becomes a teen
pub const TEEN_AT_TICKS: Tick = 60;
/// Age at which a teen becomes an adult
pub const ADULT_AT_TICKS: Tick = 300;

/// Decide the next species, if any. At most one transition per call.
pub fn evaluate_evolution(state: &PetState) -> Option<Species> {
    if !state.alive {
        return None;
    }

    match state.species.stage() {
        Stage::Baby => (state.total_ticks >= TEEN_AT_TICKS).then_some(Species::FlanTeen),
        Stage::Teen => (state.total_ticks >= ADULT_AT_TICKS).then_some(Species::FlanAdult),
        Stage::Adult => sorted_rules()
            .iter()
            .find(|rule| rule.matches(state))
            .map(|rule| rule.target),
        Stage::Terminal => None,
    }
}

/// Evolve the pet if a transition applies; `None` when nothing changes.
pub fn apply_evolution(state: &PetState) -> Option<PetState> {
    let to = evaluate_evolution(state)?;
    let from = state.species;

    let mut next = state.clone();
    next.species = to;
    next.record_event(GameEvent::evolved(from, to, state.total_ticks));
    next.unlocked_forms.insert(to.as_str().to_string());

    tracing::debug!(%from, %to, tick = state.total_ticks, "Pet evolved");
    Some(next)
}
