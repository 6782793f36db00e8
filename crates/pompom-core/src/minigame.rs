//! Minigame bookkeeping and cooldowns

use crate::{MinigameId, MinigameResult, Tick};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Minimum number of ticks between two resolved plays of the same game
pub const MINIGAME_COOLDOWN: Tick = 100;

/// Lifetime statistics for one minigame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinigameStats {
    pub last_played: Tick,
    pub best_score: u64,
    pub total_played: u64,
    pub total_wins: u64,
    pub total_perfect: u64,
}

/// Per-game statistics plus the cooldown map
#[derive(Debug, Clone, PartialEq)]
pub struct MinigamesState {
    /// Tick of the last resolved play; absent means never played
    pub cooldowns: IndexMap<MinigameId, Tick>,
    pub games: IndexMap<MinigameId, MinigameStats>,
}

impl MinigamesState {
    /// Empty statistics for every known game
    pub fn new() -> Self {
        Self {
            cooldowns: IndexMap::new(),
            games: MinigameId::ALL
                .into_iter()
                .map(|game| (game, MinigameStats::default()))
                .collect(),
        }
    }

    /// Check if a play at `now` would fall inside the cooldown window
    pub fn is_on_cooldown(&self, game: MinigameId, now: Tick) -> bool {
        match self.cooldowns.get(&game) {
            Some(last) => now.saturating_sub(*last) < MINIGAME_COOLDOWN,
            None => false,
        }
    }

    /// Statistics for one game
    pub fn stats(&self, game: MinigameId) -> MinigameStats {
        self.games.get(&game).copied().unwrap_or_default()
    }

    /// Record a resolved play
    pub fn record_play(&mut self, game: MinigameId, result: MinigameResult, score: u64, now: Tick) {
        self.cooldowns.insert(game, now);

        let stats = self.games.entry(game).or_default();
        stats.total_played = stats.total_played.saturating_add(1);
        stats.last_played = now;
        stats.best_score = stats.best_score.max(score);
        if result.is_win() {
            stats.total_wins = stats.total_wins.saturating_add(1);
        }
        if result == MinigameResult::Perfect {
            stats.total_perfect = stats.total_perfect.saturating_add(1);
        }
    }
}

impl Default for MinigamesState {
    fn default() -> Self {
        Self::new()
    }
}
