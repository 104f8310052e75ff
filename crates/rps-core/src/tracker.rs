//! Score and winning-streak tracking.
//!
//! Scores and the current streak live for the session only. The best streak
//! is a high-water mark mirrored into persistence whenever it rises, and it
//! survives [`ScoreTracker::reset`]; only [`ScoreTracker::wipe`] clears it.

use serde::{Deserialize, Serialize};

use crate::moves::Outcome;
use crate::storage::{KeyValueStore, Persistence};

/// Persistence key for the best winning streak.
pub const BEST_STREAK_KEY: &str = "highestWinningStreak";

/// Counters for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Rounds won by the player.
    pub user_score: u32,
    /// Rounds won by the opponent.
    pub computer_score: u32,
    /// Consecutive wins since the last loss. Draws do not break it.
    pub current_streak: u32,
    /// Highest streak ever reached. Never decreases except on wipe.
    pub best_streak: u32,
}

/// Applies round outcomes to a [`GameState`].
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    state: GameState,
}

impl ScoreTracker {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker whose best streak is read back from persistence.
    pub fn load<S: KeyValueStore>(persistence: &mut Persistence<S>) -> Self {
        let best_streak = match persistence.get(BEST_STREAK_KEY) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring unreadable best streak {raw:?}");
                0
            }),
            None => 0,
        };
        Self {
            state: GameState {
                best_streak,
                ..GameState::default()
            },
        }
    }

    /// Current counters.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one round outcome and return the updated counters.
    pub fn apply<S: KeyValueStore>(
        &mut self,
        outcome: Outcome,
        persistence: &mut Persistence<S>,
    ) -> &GameState {
        match outcome {
            Outcome::Win => {
                self.state.user_score += 1;
                self.state.current_streak += 1;
                if self.state.current_streak > self.state.best_streak {
                    self.state.best_streak = self.state.current_streak;
                    persistence.set(BEST_STREAK_KEY, &self.state.best_streak.to_string());
                }
            }
            Outcome::Lose => {
                self.state.computer_score += 1;
                self.state.current_streak = 0;
            }
            Outcome::Draw => {}
        }
        &self.state
    }

    /// Zero scores and the current streak. The best streak is kept.
    pub fn reset(&mut self) {
        self.state = GameState {
            best_streak: self.state.best_streak,
            ..GameState::default()
        };
    }

    /// Zero every counter, including the persisted best streak.
    pub fn wipe<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>) {
        self.state = GameState::default();
        persistence.remove(BEST_STREAK_KEY);
    }
}
