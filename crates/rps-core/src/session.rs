//! Game session: the round pipeline.
//!
//! `GameSession` owns the tracker, the achievement engine, persistence and
//! the opponent. Each [`GameSession::submit_move`] runs draw, resolve,
//! track, evaluate and notify to completion before returning.

use serde::{Deserialize, Serialize};

use crate::achievement::{Achievement, AchievementEngine, AchievementStatus, Evaluation};
use crate::config::GameConfig;
use crate::moves::{Move, Outcome, resolve};
use crate::opponent::{Opponent, RandomOpponent};
use crate::presenter::Presenter;
use crate::storage::{KeyValueStore, Persistence};
use crate::tracker::{GameState, ScoreTracker};

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number within the session.
    pub round: u32,
    /// The player's move.
    pub player: Move,
    /// The opponent's move.
    pub opponent: Move,
    /// Outcome from the player's perspective.
    pub outcome: Outcome,
    /// Counters after the round.
    pub state: GameState,
    /// Achievements unlocked by this round, in catalog order.
    pub newly_unlocked: Vec<u32>,
}

/// A single-player game session.
pub struct GameSession<S, O = RandomOpponent> {
    tracker: ScoreTracker,
    engine: AchievementEngine,
    persistence: Persistence<S>,
    opponent: O,
    rounds: u32,
}

impl<S: KeyValueStore> GameSession<S, RandomOpponent> {
    /// Create a session against a random opponent configured by `config`.
    pub fn new(store: S, config: &GameConfig) -> Self {
        Self::with_opponent(store, RandomOpponent::from_seed(config.seed))
    }
}

impl<S: KeyValueStore, O: Opponent> GameSession<S, O> {
    /// Create a session against a given opponent.
    ///
    /// Storage is probed once here; if it is unusable the session runs in
    /// memory and the next pipeline call reports it to the presenter.
    pub fn with_opponent(store: S, opponent: O) -> Self {
        let mut persistence = Persistence::new(store);
        persistence.probe();
        let tracker = ScoreTracker::load(&mut persistence);
        Self {
            tracker,
            engine: AchievementEngine::new(),
            persistence,
            opponent,
            rounds: 0,
        }
    }

    /// Current counters.
    pub fn state(&self) -> &GameState {
        self.tracker.state()
    }

    /// Number of rounds played since the session started.
    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Whether storage has failed and progress is memory-only.
    pub fn is_storage_degraded(&self) -> bool {
        self.persistence.is_degraded()
    }

    /// Locked/unlocked state of every achievement, in catalog order.
    pub fn achievements(&mut self) -> Vec<(&'static Achievement, AchievementStatus)> {
        self.engine.statuses(&mut self.persistence)
    }

    /// Evaluate achievements without playing a round, e.g. on startup.
    pub fn checkpoint(&mut self, presenter: &mut dyn Presenter) -> Evaluation {
        let evaluation = self
            .engine
            .evaluate(self.tracker.state(), &mut self.persistence);
        self.announce_unlocks(&evaluation.newly_unlocked, presenter);
        self.report_storage(presenter);
        evaluation
    }

    /// Play one round with the player's move.
    pub fn submit_move(&mut self, player: Move, presenter: &mut dyn Presenter) -> RoundReport {
        let opponent = self.opponent.draw();
        let outcome = resolve(player, opponent);
        let state = *self.tracker.apply(outcome, &mut self.persistence);
        self.rounds += 1;
        log::debug!(
            "round {}: {player} vs {opponent} -> {outcome}",
            self.rounds
        );

        let evaluation = self.engine.evaluate(&state, &mut self.persistence);
        let report = RoundReport {
            round: self.rounds,
            player,
            opponent,
            outcome,
            state,
            newly_unlocked: evaluation.newly_unlocked,
        };

        presenter.on_round_resolved(&report);
        self.announce_unlocks(&report.newly_unlocked, presenter);
        self.report_storage(presenter);
        report
    }

    /// Zero scores and the current streak and relock every achievement.
    /// The best streak is kept.
    pub fn reset(&mut self, presenter: &mut dyn Presenter) {
        self.tracker.reset();
        self.engine.reset_all(&mut self.persistence);
        log::info!("game reset");
        presenter.on_reset();
        self.report_storage(presenter);
    }

    /// Reset and also forget the best streak.
    pub fn wipe(&mut self, presenter: &mut dyn Presenter) {
        self.tracker.wipe(&mut self.persistence);
        self.engine.reset_all(&mut self.persistence);
        log::info!("all saved progress wiped");
        presenter.on_reset();
        self.report_storage(presenter);
    }

    /// Consume the session and return its store.
    pub fn into_store(self) -> S {
        self.persistence.into_inner()
    }

    fn announce_unlocks(&self, ids: &[u32], presenter: &mut dyn Presenter) {
        for achievement in ids.iter().filter_map(|&id| self.engine.get(id)) {
            presenter.on_achievement_unlocked(achievement);
        }
    }

    fn report_storage(&mut self, presenter: &mut dyn Presenter) {
        if let Some(error) = self.persistence.take_warning() {
            presenter.on_storage_unavailable(&error);
        }
    }
}
