//! Achievement catalog and unlock engine.
//!
//! The catalog is a fixed static table of predicates over [`GameState`].
//! Unlock flags live in persistence only, one key per achievement, so an
//! achievement unlocked in an earlier session stays unlocked until an
//! explicit reset.

use crate::storage::{KeyValueStore, Persistence};
use crate::tracker::GameState;

/// A static achievement definition.
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    /// Stable identifier, also used to derive the persistence key.
    pub id: u32,
    /// Display title.
    pub title: &'static str,
    /// Unlock condition. Must be a pure function of the state.
    pub predicate: fn(&GameState) -> bool,
}

impl Achievement {
    /// Persistence key holding this achievement's unlock flag.
    pub fn storage_key(&self) -> String {
        format!("achievement_{}", self.id)
    }

    /// Whether the unlock condition holds for `state`.
    pub fn is_satisfied(&self, state: &GameState) -> bool {
        (self.predicate)(state)
    }
}

/// The fixed achievement catalog, in display order.
pub static CATALOG: [Achievement; 5] = [
    Achievement {
        id: 1,
        title: "Win 5 Games",
        predicate: won_5,
    },
    Achievement {
        id: 2,
        title: "Win 20 Games",
        predicate: won_20,
    },
    Achievement {
        id: 3,
        title: "3 Winning Streak",
        predicate: streak_3,
    },
    Achievement {
        id: 4,
        title: "5 Winning Streak",
        predicate: streak_5,
    },
    Achievement {
        id: 5,
        title: "Lose 50 Games",
        predicate: lost_50,
    },
];

fn won_5(s: &GameState) -> bool {
    s.user_score >= 5
}

fn won_20(s: &GameState) -> bool {
    s.user_score >= 20
}

fn streak_3(s: &GameState) -> bool {
    s.current_streak >= 3
}

fn streak_5(s: &GameState) -> bool {
    s.current_streak >= 5
}

fn lost_50(s: &GameState) -> bool {
    s.computer_score >= 50
}

/// Display state of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementStatus {
    /// Not yet earned.
    Locked,
    /// Earned in this or an earlier session.
    Unlocked,
}

impl std::fmt::Display for AchievementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locked => write!(f, "locked"),
            Self::Unlocked => write!(f, "unlocked"),
        }
    }
}

/// Result of one evaluation pass. Both lists are in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Ids whose flag was already set before this pass.
    pub already_unlocked: Vec<u32>,
    /// Ids unlocked by this pass.
    pub newly_unlocked: Vec<u32>,
}

/// Evaluates the catalog against game state and records unlocks.
#[derive(Debug, Clone, Copy)]
pub struct AchievementEngine {
    catalog: &'static [Achievement],
}

impl Default for AchievementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementEngine {
    /// Engine over the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(&CATALOG)
    }

    /// Engine over a custom catalog.
    pub fn with_catalog(catalog: &'static [Achievement]) -> Self {
        Self { catalog }
    }

    /// The catalog, in display order.
    pub fn catalog(&self) -> &'static [Achievement] {
        self.catalog
    }

    /// Look up an achievement by id.
    pub fn get(&self, id: u32) -> Option<&'static Achievement> {
        self.catalog.iter().find(|a| a.id == id)
    }

    /// Check every achievement, unlocking and persisting those whose
    /// predicate now holds.
    pub fn evaluate<S: KeyValueStore>(
        &self,
        state: &GameState,
        persistence: &mut Persistence<S>,
    ) -> Evaluation {
        let mut evaluation = Evaluation::default();
        for achievement in self.catalog {
            let key = achievement.storage_key();
            if is_flag_set(persistence, &key) {
                evaluation.already_unlocked.push(achievement.id);
            } else if achievement.is_satisfied(state) {
                persistence.set(&key, "true");
                log::info!("achievement unlocked: {}", achievement.title);
                evaluation.newly_unlocked.push(achievement.id);
            }
        }
        evaluation
    }

    /// Locked/unlocked state of every achievement, in catalog order.
    pub fn statuses<S: KeyValueStore>(
        &self,
        persistence: &mut Persistence<S>,
    ) -> Vec<(&'static Achievement, AchievementStatus)> {
        self.catalog
            .iter()
            .map(|a| {
                let status = if is_flag_set(persistence, &a.storage_key()) {
                    AchievementStatus::Unlocked
                } else {
                    AchievementStatus::Locked
                };
                (a, status)
            })
            .collect()
    }

    /// Clear every unlock flag.
    pub fn reset_all<S: KeyValueStore>(&self, persistence: &mut Persistence<S>) {
        for achievement in self.catalog {
            persistence.remove(&achievement.storage_key());
        }
    }
}

fn is_flag_set<S: KeyValueStore>(persistence: &mut Persistence<S>, key: &str) -> bool {
    persistence.get(key).as_deref() == Some("true")
}
