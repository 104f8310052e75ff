use colored::Colorize;

use rps_core::{
    Achievement, AchievementStatus, GameState, Outcome, Presenter, RoundReport, StorageError,
};

/// Prints game notifications to stdout.
pub struct TerminalPresenter {
    quiet: bool,
}

impl TerminalPresenter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Presenter for TerminalPresenter {
    fn on_round_resolved(&mut self, round: &RoundReport) {
        let line = match round.outcome {
            Outcome::Win => format!(
                "{}(you) beats {}(comp). {}",
                round.player,
                round.opponent,
                "You win!".green().bold()
            ),
            Outcome::Lose => format!(
                "{}(you) loses to {}(comp). {}",
                round.player,
                round.opponent,
                "You lost...".red().bold()
            ),
            Outcome::Draw => format!(
                "{}(you) equals {}(comp). {}",
                round.player,
                round.opponent,
                "It's a draw!".dimmed()
            ),
        };
        println!("{line}");
        println!("{}", scoreboard(&round.state));
    }

    fn on_achievement_unlocked(&mut self, achievement: &Achievement) {
        if self.quiet {
            return;
        }
        println!(
            "  {} {}",
            "Achievement Unlocked:".yellow().bold(),
            achievement.title
        );
    }

    fn on_reset(&mut self) {
        println!("{}", "Scores and achievements reset.".bold());
    }

    fn on_storage_unavailable(&mut self, error: &StorageError) {
        println!(
            "{} {error}; achievements and best streak will not be saved",
            "warning:".yellow().bold()
        );
    }
}

/// One-line score summary.
pub fn scoreboard(state: &GameState) -> String {
    format!(
        "Score: you {} - {} comp | streak {} (best {})",
        state.user_score, state.computer_score, state.current_streak, state.best_streak
    )
}

/// Unlocked and locked achievement lists, with a placeholder when nothing is
/// unlocked yet.
pub fn render_achievements(statuses: &[(&Achievement, AchievementStatus)]) -> String {
    let mut unlocked = String::new();
    let mut locked = String::new();
    for (achievement, status) in statuses {
        let target = match status {
            AchievementStatus::Unlocked => &mut unlocked,
            AchievementStatus::Locked => &mut locked,
        };
        target.push_str(&format!("  {}\n", achievement.title));
    }
    if unlocked.is_empty() {
        unlocked.push_str("  None\n");
    }
    if locked.is_empty() {
        locked.push_str("  None\n");
    }
    format!(
        "{}\n{unlocked}{}\n{locked}",
        "Unlocked:".bold(),
        "Locked:".bold()
    )
}
