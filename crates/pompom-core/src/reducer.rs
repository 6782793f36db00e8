//! Action resolution
//!
//! Every action first advances time by one tick. If the pet survives, the
//! action's effect is applied from a fixed delta table, exactly one event is
//! logged and the matching lifetime counter is incremented.

use crate::{
    tick, Action, ActionKind, CareAction, EventData, EventKind, GameEvent, MinigameId,
    MinigameResult, PetState, StatChange, StatKind, Tick,
};

/// Stat deltas applied by one care action
#[derive(Debug, Clone, Copy)]
pub struct CareEffect {
    pub action: CareAction,
    /// Stat reported in the event payload
    pub primary: StatKind,
    pub deltas: &'static [(StatKind, f64)],
}

/// Fixed per-action delta table, in `CareAction::ALL` order
pub static CARE_EFFECTS: [CareEffect; 5] = [
    CareEffect {
        action: CareAction::Feed,
        primary: StatKind::Hunger,
        deltas: &[(StatKind::Hunger, -30.0), (StatKind::Happiness, 10.0)],
    },
    CareEffect {
        action: CareAction::Play,
        primary: StatKind::Happiness,
        deltas: &[
            (StatKind::Happiness, 25.0),
            (StatKind::Energy, -10.0),
            (StatKind::Hunger, 5.0),
        ],
    },
    CareEffect {
        action: CareAction::Rest,
        primary: StatKind::Energy,
        deltas: &[(StatKind::Energy, 40.0), (StatKind::Hunger, 3.0)],
    },
    CareEffect {
        action: CareAction::Medicate,
        primary: StatKind::Health,
        deltas: &[(StatKind::Health, 40.0)],
    },
    CareEffect {
        action: CareAction::Pet,
        primary: StatKind::Happiness,
        deltas: &[(StatKind::Happiness, 10.0), (StatKind::Affection, 5.0)],
    },
];

/// Medicating a pet with more affection than this also cheers it up
pub const MEDICATE_AFFECTION_THRESHOLD: f64 = 70.0;
/// Happiness bonus for medicating an affectionate pet
pub const MEDICATE_HAPPINESS_BONUS: f64 = 20.0;

/// Look up the delta table entry for a care action
pub fn care_effect(action: CareAction) -> &'static CareEffect {
    let index = match action {
        CareAction::Feed => 0,
        CareAction::Play => 1,
        CareAction::Rest => 2,
        CareAction::Medicate => 3,
        CareAction::Pet => 4,
    };
    &CARE_EFFECTS[index]
}

/// Stat rewards for a minigame result. Losses grant nothing.
pub fn minigame_reward(result: MinigameResult) -> &'static [(StatKind, f64)] {
    match result {
        MinigameResult::Perfect => &[(StatKind::Happiness, 25.0), (StatKind::Affection, 10.0)],
        MinigameResult::Win => &[(StatKind::Happiness, 15.0), (StatKind::Affection, 5.0)],
        MinigameResult::Loss => &[],
    }
}

/// Apply one player action and return the resulting state
pub fn reduce(state: &PetState, action: &Action) -> PetState {
    if !state.alive {
        return state.clone();
    }

    let mut next = state.clone();
    tick::advance(&mut next, 1);
    if !next.alive {
        return next;
    }

    match &action.kind {
        ActionKind::Care(care) => apply_care(&mut next, *care, action.timestamp),
        ActionKind::PlayMinigame {
            game,
            result,
            score,
        } => apply_minigame(&mut next, *game, *result, *score, action.timestamp),
        ActionKind::Unknown(name) => {
            tracing::trace!(action = %name, "Ignoring unknown action");
        }
    }

    next
}

fn apply_care(state: &mut PetState, action: CareAction, timestamp: Tick) {
    let effect = care_effect(action);
    let before = state.stats.get(effect.primary);

    for (stat, delta) in effect.deltas {
        state.stats.adjust(*stat, *delta);
    }
    if action == CareAction::Medicate && state.stats.affection > MEDICATE_AFFECTION_THRESHOLD {
        state
            .stats
            .adjust(StatKind::Happiness, MEDICATE_HAPPINESS_BONUS);
    }

    let change = StatChange {
        stat: effect.primary,
        before,
        after: state.stats.get(effect.primary),
    };
    state.record_event(GameEvent::care(action, timestamp, change));
    state.counters.record(action);
}

fn apply_minigame(
    state: &mut PetState,
    game: MinigameId,
    result: MinigameResult,
    score: u64,
    timestamp: Tick,
) {
    let now = state.total_ticks;
    if state.minigames.is_on_cooldown(game, now) {
        tracing::trace!(%game, tick = now, "Minigame on cooldown; no reward");
        return;
    }

    for (stat, delta) in minigame_reward(result) {
        state.stats.adjust(*stat, *delta);
    }

    let kind = match result {
        MinigameResult::Perfect => EventKind::MinigamePerfect,
        MinigameResult::Win => EventKind::MinigameWin,
        MinigameResult::Loss => EventKind::MinigameLoss,
    };
    state.record_event(
        GameEvent::new(kind, timestamp).with_data(EventData::Minigame { game, score }),
    );
    state.minigames.record_play(game, result, score, now);
}
