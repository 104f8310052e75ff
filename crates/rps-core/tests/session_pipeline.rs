//! End-to-end tests of the round pipeline against in-memory stores.

use rps_core::storage::{DisabledStore, MemoryStore};
use rps_core::{
    Achievement, AchievementStatus, GameSession, KeyValueStore, Move, Opponent, Outcome,
    Presenter, RoundReport, StorageError, StorageResult,
};

/// Opponent that plays a fixed script, cycling when it runs out.
struct Scripted {
    moves: Vec<Move>,
    next: usize,
}

impl Scripted {
    fn new(moves: &[Move]) -> Self {
        Self {
            moves: moves.to_vec(),
            next: 0,
        }
    }

    fn always(mv: Move) -> Self {
        Self::new(&[mv])
    }
}

impl Opponent for Scripted {
    fn draw(&mut self) -> Move {
        let mv = self.moves[self.next % self.moves.len()];
        self.next += 1;
        mv
    }
}

/// Session whose opponent always plays scissors, so rock always wins.
fn winning_session() -> GameSession<MemoryStore, Scripted> {
    GameSession::with_opponent(MemoryStore::new(), Scripted::always(Move::Scissors))
}

/// Save data that can be read but not written, like a read-only save file.
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.0.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("save file is read-only".into()))
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("save file is read-only".into()))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Round(Outcome),
    Unlocked(u32),
    Reset,
    StorageWarning,
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn unlocked(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Unlocked(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn warnings(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == Event::StorageWarning)
            .count()
    }
}

impl Presenter for Recorder {
    fn on_round_resolved(&mut self, round: &RoundReport) {
        self.events.push(Event::Round(round.outcome));
    }

    fn on_achievement_unlocked(&mut self, achievement: &Achievement) {
        self.events.push(Event::Unlocked(achievement.id));
    }

    fn on_reset(&mut self) {
        self.events.push(Event::Reset);
    }

    fn on_storage_unavailable(&mut self, _error: &StorageError) {
        self.events.push(Event::StorageWarning);
    }
}

#[test]
fn fifth_win_unlocks_win_five_games() {
    let mut session = winning_session();
    let mut presenter = Recorder::default();

    for round in 1..=4 {
        let report = session.submit_move(Move::Rock, &mut presenter);
        assert_eq!(report.state.user_score, round);
        assert!(!report.newly_unlocked.contains(&1), "unlocked early at {round}");
    }

    let report = session.submit_move(Move::Rock, &mut presenter);
    assert_eq!(report.state.user_score, 5);
    assert!(report.newly_unlocked.contains(&1));

    let report = session.submit_move(Move::Rock, &mut presenter);
    assert!(!report.newly_unlocked.contains(&1));
}

#[test]
fn consecutive_wins_unlock_streaks_as_they_are_reached() {
    let mut session = winning_session();
    let mut presenter = Recorder::default();

    let reports: Vec<RoundReport> = (0..5)
        .map(|_| session.submit_move(Move::Rock, &mut presenter))
        .collect();

    assert_eq!(reports[2].newly_unlocked, vec![3]);
    assert_eq!(reports[4].newly_unlocked, vec![1, 4]);

    session.reset(&mut presenter);
    let reports: Vec<RoundReport> = (0..5)
        .map(|_| session.submit_move(Move::Rock, &mut presenter))
        .collect();
    assert_eq!(reports[2].newly_unlocked, vec![3]);
    assert_eq!(reports[4].newly_unlocked, vec![1, 4]);
}

#[test]
fn notifications_follow_round_in_catalog_order() {
    let mut session = winning_session();
    let mut presenter = Recorder::default();
    for _ in 0..5 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    let tail: Vec<&Event> = presenter.events.iter().rev().take(3).collect();
    assert_eq!(
        tail,
        vec![&Event::Unlocked(4), &Event::Unlocked(1), &Event::Round(Outcome::Win)]
    );
}

#[test]
fn mixed_script_counts() {
    let script = [
        Move::Scissors, // win
        Move::Scissors, // win
        Move::Paper,    // lose
        Move::Scissors, // win
        Move::Rock,     // draw
    ];
    let mut session = GameSession::with_opponent(MemoryStore::new(), Scripted::new(&script));
    let mut presenter = Recorder::default();
    for _ in 0..script.len() {
        session.submit_move(Move::Rock, &mut presenter);
    }
    let state = session.state();
    assert_eq!(state.user_score, 3);
    assert_eq!(state.computer_score, 1);
    assert_eq!(state.current_streak, 1);
    assert_eq!(state.best_streak, 2);
}

#[test]
fn reset_relocks_everything_but_keeps_best_streak() {
    let mut session = winning_session();
    let mut presenter = Recorder::default();
    for _ in 0..5 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    assert_eq!(presenter.unlocked(), vec![3, 1, 4]);

    session.reset(&mut presenter);
    assert_eq!(presenter.events.last(), Some(&Event::Reset));
    assert_eq!(session.state().user_score, 0);
    assert_eq!(session.state().current_streak, 0);
    assert_eq!(session.state().best_streak, 5);

    let statuses = session.achievements();
    let ids: Vec<u32> = statuses.iter().map(|(a, _)| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(statuses.iter().all(|(_, s)| *s == AchievementStatus::Locked));

    let evaluation = session.checkpoint(&mut presenter);
    assert!(evaluation.already_unlocked.is_empty());
    assert!(evaluation.newly_unlocked.is_empty());
}

#[test]
fn wipe_forgets_best_streak() {
    let mut session = winning_session();
    let mut presenter = Recorder::default();
    for _ in 0..3 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    session.wipe(&mut presenter);
    assert_eq!(session.state().best_streak, 0);
    assert!(session.into_store().is_empty());
}

#[test]
fn progress_survives_a_new_session_on_the_same_store() {
    let mut session = winning_session();
    let mut presenter = Recorder::default();
    for _ in 0..3 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    let store = session.into_store();

    let mut session = GameSession::with_opponent(store, Scripted::always(Move::Scissors));
    assert_eq!(session.state().best_streak, 3);
    assert_eq!(session.state().user_score, 0);

    let mut presenter = Recorder::default();
    let evaluation = session.checkpoint(&mut presenter);
    assert_eq!(evaluation.already_unlocked, vec![3]);
    assert!(presenter.unlocked().is_empty());

    for _ in 0..3 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    assert!(!presenter.unlocked().contains(&3));
}

#[test]
fn disabled_storage_plays_in_memory_and_warns_once() {
    let mut session = GameSession::with_opponent(
        DisabledStore::default(),
        Scripted::always(Move::Scissors),
    );
    assert!(session.is_storage_degraded());

    let mut presenter = Recorder::default();
    session.checkpoint(&mut presenter);
    for _ in 0..5 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    session.reset(&mut presenter);

    assert_eq!(presenter.warnings(), 1);
    assert_eq!(presenter.unlocked(), vec![3, 1, 4]);
    assert_eq!(session.state().best_streak, 5);
    assert!(
        session
            .achievements()
            .iter()
            .all(|(_, s)| *s == AchievementStatus::Locked)
    );
}

#[test]
fn fifty_losses_unlock_the_consolation_prize() {
    let mut session = GameSession::with_opponent(MemoryStore::new(), Scripted::always(Move::Paper));
    let mut presenter = Recorder::default();
    for _ in 0..49 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    assert!(presenter.unlocked().is_empty());
    let report = session.submit_move(Move::Rock, &mut presenter);
    assert_eq!(report.state.computer_score, 50);
    assert_eq!(report.newly_unlocked, vec![5]);
    assert_eq!(report.state.user_score, 0);
}

#[test]
fn read_only_storage_keeps_saved_progress() {
    let mut saved = MemoryStore::new();
    saved.set("achievement_1", "true").unwrap();
    saved.set("highestWinningStreak", "4").unwrap();

    let mut session =
        GameSession::with_opponent(ReadOnlyStore(saved), Scripted::always(Move::Scissors));
    assert!(session.is_storage_degraded());
    assert_eq!(session.state().best_streak, 4);

    let mut presenter = Recorder::default();
    assert_eq!(session.checkpoint(&mut presenter).already_unlocked, vec![1]);
    for _ in 0..5 {
        session.submit_move(Move::Rock, &mut presenter);
    }
    assert_eq!(presenter.unlocked(), vec![3, 4]);
    assert_eq!(presenter.warnings(), 1);
    assert_eq!(session.state().best_streak, 5);

    session.reset(&mut presenter);
    assert!(
        session
            .achievements()
            .iter()
            .all(|(_, s)| *s == AchievementStatus::Locked)
    );
}
