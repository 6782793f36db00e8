//! Post-processing after every tick or action
//!
//! Runs evolution, then gifts, then achievements, each stage reading the
//! previous stage's output. A species change can therefore unlock a gift and
//! a gift can complete an achievement within the same call.

use crate::evolution::apply_evolution;
use crate::unlocks::{ACHIEVEMENTS, GIFTS};
use crate::{PetState, Species};

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub state: PetState,
    /// `(from, to)` when the species changed
    pub evolved: Option<(Species, Species)>,
    pub gifts: Vec<&'static str>,
    pub achievements: Vec<&'static str>,
}

impl PipelineOutput {
    /// Check if any stage changed the state
    pub fn changed(&self) -> bool {
        self.evolved.is_some() || !self.gifts.is_empty() || !self.achievements.is_empty()
    }
}

/// Run every stage and report what changed
pub fn run(state: PetState) -> PipelineOutput {
    let from = state.species;
    let (state, evolved) = match apply_evolution(&state) {
        Some(next) => {
            let to = next.species;
            (next, Some((from, to)))
        }
        None => (state, None),
    };

    let (state, gifts) = GIFTS.apply(state);
    let (state, achievements) = ACHIEVEMENTS.apply(state);

    PipelineOutput {
        state,
        evolved,
        gifts,
        achievements,
    }
}

/// Run every stage and keep only the resulting state
pub fn post_process(state: PetState) -> PetState {
    run(state).state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reduce, tick, Action, ActionKind, CareAction, Difficulty, EventKind, MinigameId,
        MinigameResult, Settings,
    };
    use proptest::prelude::*;

    fn perfect_adult() -> PetState {
        let mut state = PetState::new();
        state.species = Species::FlanAdult;
        state.unlocked_forms.insert("FLAN_TEEN".to_string());
        state.unlocked_forms.insert("FLAN_ADULT".to_string());
        state.total_ticks = 3600;
        state.stats.happiness = 90.0;
        state.stats.health = 90.0;
        state.stats.hunger = 20.0;
        state.stats.energy = 70.0;
        state
    }

    #[test]
    fn test_growth_through_ticks() {
        let state = post_process(tick(&PetState::new(), 60));
        assert_eq!(state.species, Species::FlanTeen);

        let state = post_process(tick(&state, 240));
        assert_eq!(state.species, Species::FlanAdult);
        assert_eq!(
            state.unlocked_forms.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["FLAN_BEBE", "FLAN_TEEN", "FLAN_ADULT"]
        );
    }

    #[test]
    fn test_unchanged_state_passes_through() {
        let state = PetState::new();
        let output = run(state.clone());
        assert!(!output.changed());
        assert_eq!(output.state, state);
        assert!(output.state.events.shares_buffer(&state.events));
    }

    #[test]
    fn test_evolution_feeds_unlocks() {
        let output = run(perfect_adult());

        assert_eq!(
            output.evolved,
            Some((Species::FlanAdult, Species::Pompompurin))
        );
        assert!(output.gifts.contains(&"gift_perfect_care"));
        assert!(output.gifts.contains(&"gift_judge_evolution"));
        assert!(output.gifts.contains(&"gift_mystery"));
        assert!(output.achievements.contains(&"ach_perfect_pet"));
        assert_eq!(output.state.events.last().map(|e| e.kind), Some(EventKind::Evolved));
    }

    #[test]
    fn test_gifts_feed_achievements() {
        let mut state = perfect_adult();
        state.total_ticks = 6000;
        for action in CareAction::ALL {
            for _ in 0..10 {
                state.counters.record(action);
            }
        }

        let output = run(state);
        assert_eq!(output.gifts.len(), 10);
        assert!(output.achievements.contains(&"ach_treasure_hunter"));
    }

    #[test]
    fn test_idempotent() {
        let once = post_process(perfect_adult());
        let output = run(once.clone());
        assert!(!output.changed());
        assert_eq!(output.state, once);
    }

    #[test]
    fn test_reduce_then_post_process() {
        let state = reduce(&PetState::new(), &Action::care(CareAction::Feed, 1));
        let output = run(state);
        assert_eq!(output.gifts, vec!["gift_first_meal"]);
        assert!(output.achievements.is_empty());
    }

    fn any_step() -> impl Strategy<Value = Option<ActionKind>> {
        let care = proptest::sample::select(CareAction::ALL.to_vec()).prop_map(ActionKind::Care);
        let minigame = (
            proptest::sample::select(MinigameId::ALL.to_vec()),
            proptest::sample::select(vec![
                MinigameResult::Perfect,
                MinigameResult::Win,
                MinigameResult::Loss,
            ]),
            any::<u64>(),
        )
            .prop_map(|(game, result, score)| ActionKind::PlayMinigame {
                game,
                result,
                score,
            });
        prop_oneof![Just(None), care.prop_map(Some), minigame.prop_map(Some)]
    }

    proptest! {
        #[test]
        fn stats_stay_in_range(
            difficulty in proptest::sample::select(Difficulty::ALL.to_vec()),
            steps in proptest::collection::vec((any_step(), 0u64..500), 1..80),
        ) {
            let mut state = PetState::with_settings(Settings {
                difficulty,
                ..Settings::default()
            });
            for (step, ticks) in steps {
                state = match step {
                    Some(kind) => reduce(&state, &Action::new(kind, state.total_ticks)),
                    None => tick(&state, ticks),
                };
                state = post_process(state);
                prop_assert!(state.stats.is_clamped());
                prop_assert!(state.events.len() <= state.events.capacity());
            }
        }

        #[test]
        fn settles_without_duplicates(ticks in 0u64..10_000, feeds in 0usize..40) {
            let mut state = tick(&PetState::new(), ticks);
            for _ in 0..feeds {
                state = reduce(&state, &Action::care(CareAction::Feed, state.total_ticks));
            }

            // Evolution moves one stage per run; stop once a run changes nothing.
            loop {
                let output = run(state);
                let changed = output.changed();
                state = output.state;
                if !changed {
                    break;
                }
            }

            let again = run(state.clone());
            prop_assert!(!again.changed());
            prop_assert_eq!(again.state.unlocked_gifts, state.unlocked_gifts);
            prop_assert_eq!(again.state.unlocked_achievements, state.unlocked_achievements);
        }
    }
}
