//! Rock-paper-scissors game core.
//!
//! Resolves rounds against a randomly drawing opponent, keeps score and
//! winning-streak counters, and unlocks a fixed catalog of achievements
//! exactly once, persisting unlock flags and the best streak through a
//! pluggable key-value store. Presentation is kept outside the core and is
//! reached only through the [`Presenter`] notification trait.

pub mod achievement;
pub mod config;
pub mod error;
pub mod moves;
pub mod opponent;
pub mod presenter;
pub mod session;
pub mod storage;
pub mod tracker;

pub use achievement::{Achievement, AchievementEngine, AchievementStatus, Evaluation};
pub use config::GameConfig;
pub use error::{GameError, StorageError, StorageResult};
pub use moves::{Move, Outcome, resolve};
pub use opponent::{Opponent, RandomOpponent};
pub use presenter::{NullPresenter, Presenter};
pub use session::{GameSession, RoundReport};
pub use storage::{KeyValueStore, Persistence};
pub use tracker::{GameState, ScoreTracker};
