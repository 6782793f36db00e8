//! Time-based stat decay
//!
//! `tick` is a pure function of `(state, n)`. Decay is linear in `n`, so
//! advancing by a large `n` costs the same as advancing by one.

use crate::{EventKind, GameEvent, PetState, StatKind, Tick};

/// Hunger gained per tick at normal difficulty
pub const HUNGER_RATE: f64 = 0.05;
/// Happiness lost per tick at normal difficulty
pub const HAPPINESS_RATE: f64 = 0.03;
/// Energy lost per tick at normal difficulty
pub const ENERGY_RATE: f64 = 0.01;

/// Above this hunger, health takes damage
pub const STARVING_THRESHOLD: f64 = 80.0;
/// Health lost per tick for each point of hunger above the threshold
pub const STARVATION_DAMAGE: f64 = 0.005;
/// Below this hunger, health regenerates
pub const WELL_FED_THRESHOLD: f64 = 50.0;
/// Health regained per tick while well fed
pub const HEALTH_REGEN: f64 = 0.02;

/// Advance the pet by `n` ticks.
///
/// Returns an equal copy when the pet is dead or `n == 0`.
pub fn tick(state: &PetState, n: Tick) -> PetState {
    let mut next = state.clone();
    advance(&mut next, n);
    next
}

/// Apply `iterations` ticks of `ticks_per_iteration` each, stopping early if
/// the pet dies.
pub fn tick_many(state: &PetState, iterations: u32, ticks_per_iteration: Tick) -> PetState {
    let mut next = state.clone();
    for _ in 0..iterations {
        advance(&mut next, ticks_per_iteration);
        if !next.alive {
            break;
        }
    }
    next
}

/// In-place tick shared with the reducer
pub(crate) fn advance(state: &mut PetState, n: Tick) {
    if !state.alive || n == 0 {
        return;
    }

    state.total_ticks = state.total_ticks.saturating_add(n);

    let ticks = n as f64;
    let multiplier = state.settings.difficulty.decay_multiplier();
    let stats = &mut state.stats;

    stats.adjust(StatKind::Hunger, HUNGER_RATE * multiplier * ticks);
    stats.adjust(StatKind::Happiness, -HAPPINESS_RATE * multiplier * ticks);
    stats.adjust(StatKind::Energy, -ENERGY_RATE * multiplier * ticks);

    if stats.hunger > STARVING_THRESHOLD {
        let damage = (stats.hunger - STARVING_THRESHOLD) * STARVATION_DAMAGE * ticks;
        stats.adjust(StatKind::Health, -damage);
    }

    if stats.hunger < WELL_FED_THRESHOLD && stats.health < 100.0 {
        stats.adjust(StatKind::Health, HEALTH_REGEN * ticks);
    }

    if stats.health <= 0.0 {
        state.alive = false;
        state.record_event(GameEvent::new(EventKind::Died, state.total_ticks));
        tracing::debug!(tick = state.total_ticks, species = %state.species, "Pet died");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, Settings};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_tick_decay() {
        let state = PetState::new();
        let next = tick(&state, 1);

        assert_eq!(next.total_ticks, 1);
        assert!(approx(next.stats.hunger, 5.05));
        assert!(approx(next.stats.happiness, 79.97));
        assert!(approx(next.stats.energy, 79.99));
        assert_eq!(next.stats.health, 100.0);
        assert_eq!(next.stats.affection, 30.0);
    }

    #[test]
    fn test_zero_ticks_is_noop() {
        let state = PetState::new();
        assert_eq!(tick(&state, 0), state);
    }

    #[test]
    fn test_total_ticks_advance() {
        let state = PetState::new();
        assert_eq!(tick(&state, 37).total_ticks, 37);
        assert_eq!(tick(&tick(&state, 37), 5).total_ticks, 42);
    }

    #[test]
    fn test_difficulty_scales_decay() {
        let hard = PetState::with_settings(Settings {
            difficulty: Difficulty::Hard,
            ..Settings::default()
        });
        let easy = PetState::with_settings(Settings {
            difficulty: Difficulty::Easy,
            ..Settings::default()
        });

        assert!(approx(tick(&hard, 10).stats.hunger, 5.0 + 0.05 * 1.5 * 10.0));
        assert!(approx(tick(&easy, 10).stats.hunger, 5.0 + 0.05 * 0.5 * 10.0));
    }

    #[test]
    fn test_starvation_damages_health() {
        let mut state = PetState::new();
        state.stats.hunger = 100.0;
        let next = tick(&state, 10);
        // hunger stays clamped at 100: 20 points over threshold
        assert!(approx(next.stats.health, 100.0 - 20.0 * 0.005 * 10.0));
    }

    #[test]
    fn test_well_fed_regenerates() {
        let mut state = PetState::new();
        state.stats.health = 50.0;
        let next = tick(&state, 10);
        assert!(approx(next.stats.health, 50.2));
    }

    #[test]
    fn test_dies_when_health_reaches_zero() {
        let mut state = PetState::new();
        state.stats.hunger = 100.0;

        let mut ticks = 0;
        while state.alive && ticks < 10_000 {
            state = tick(&state, 1);
            ticks += 1;
        }

        assert!(!state.alive);
        assert_eq!(state.stats.health, 0.0);
        let last = state.events.last().unwrap();
        assert_eq!(last.kind, EventKind::Died);
        assert_eq!(last.tick, state.total_ticks);
    }

    #[test]
    fn test_dead_pet_is_frozen() {
        let mut state = PetState::new();
        state.alive = false;

        let next = tick(&state, 10);
        assert_eq!(next, state);
        assert_eq!(next.total_ticks, 0);
    }

    #[test]
    fn test_stats_stay_clamped() {
        let mut state = PetState::new();
        for _ in 0..200 {
            state = tick(&state, 50);
            assert!(state.stats.is_clamped());
            if !state.alive {
                break;
            }
        }
    }

    #[test]
    fn test_tick_many() {
        let state = PetState::new();
        let next = tick_many(&state, 10, 5);
        assert_eq!(next.total_ticks, 50);

        let mut dying = PetState::new();
        dying.stats.hunger = 100.0;
        dying.stats.health = 0.5;
        let dead = tick_many(&dying, 1000, 1);
        assert!(!dead.alive);
        assert!(dead.total_ticks < 1000);
    }
}
