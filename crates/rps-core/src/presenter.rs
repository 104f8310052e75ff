//! One-way notifications from the game core to a front end.

use crate::achievement::Achievement;
use crate::error::StorageError;
use crate::session::RoundReport;

/// Receiver of game notifications.
///
/// The core calls these synchronously and never looks at what they do, so
/// anything time-based (popups that fade, highlights that clear) is the
/// implementor's business. Every method defaults to a no-op.
pub trait Presenter {
    /// A round finished; scores in the report are already updated.
    fn on_round_resolved(&mut self, _round: &RoundReport) {}

    /// An achievement was unlocked for the first time. Called after
    /// [`Presenter::on_round_resolved`], once per achievement, in catalog
    /// order.
    fn on_achievement_unlocked(&mut self, _achievement: &Achievement) {}

    /// Scores, streak and achievements were reset.
    fn on_reset(&mut self) {}

    /// Persistent storage stopped working. Sent at most once per session;
    /// play continues in memory.
    fn on_storage_unavailable(&mut self, _error: &StorageError) {}
}

/// A presenter that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
