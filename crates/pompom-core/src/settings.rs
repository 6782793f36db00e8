//! Player settings
//!
//! Settings are configuration, not simulation: the engine reads the
//! difficulty but only [`change_settings`] ever writes them.

use crate::{PetState, Speed};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decay difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Scale applied to every base decay rate
    pub fn decay_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game settings persisted with the pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    pub animations_enabled: bool,
    pub reduced_motion: bool,
    pub speed: Speed,
    pub paused: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            sound_enabled: true,
            animations_enabled: true,
            reduced_motion: false,
            speed: Speed::Normal,
            paused: false,
        }
    }
}

/// A single settings edit requested from the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    ToggleSound,
    ToggleSpeed,
    TogglePause,
    ToggleReducedMotion,
    ToggleAnimations,
    SetDifficulty(Difficulty),
}

impl Settings {
    /// Apply one change in place
    pub fn apply(&mut self, change: SettingsChange) {
        match change {
            SettingsChange::ToggleSound => self.sound_enabled = !self.sound_enabled,
            SettingsChange::ToggleSpeed => self.speed = self.speed.toggled(),
            SettingsChange::TogglePause => self.paused = !self.paused,
            SettingsChange::ToggleReducedMotion => self.reduced_motion = !self.reduced_motion,
            SettingsChange::ToggleAnimations => {
                self.animations_enabled = !self.animations_enabled
            }
            SettingsChange::SetDifficulty(difficulty) => self.difficulty = difficulty,
        }
    }
}

/// Return a copy of `state` with one setting changed. Works on dead pets too;
/// nothing else in the state is touched.
pub fn change_settings(state: &PetState, change: SettingsChange) -> PetState {
    let mut next = state.clone();
    next.settings.apply(change);
    next
}
