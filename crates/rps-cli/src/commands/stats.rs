use std::path::Path;

use colored::Colorize;
use rps_core::AchievementStatus;

pub fn run(data: &Path, json: bool) -> Result<(), String> {
    let mut session = super::open_session(data, None);
    let best_streak = session.state().best_streak;
    let statuses = session.achievements();

    if json {
        let achievements: Vec<serde_json::Value> = statuses
            .iter()
            .map(|(a, status)| {
                serde_json::json!({
                    "id": a.id,
                    "title": a.title,
                    "unlocked": *status == AchievementStatus::Unlocked,
                })
            })
            .collect();
        let doc = serde_json::json!({
            "best_streak": best_streak,
            "achievements": achievements,
        });
        let text = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let unlocked = statuses
        .iter()
        .filter(|(_, s)| *s == AchievementStatus::Unlocked)
        .count();
    println!("  {} {best_streak}", "Highest Winning Streak:".bold());
    println!(
        "  {} {unlocked}/{}",
        "Achievements:".bold(),
        statuses.len()
    );
    if session.is_storage_degraded() {
        println!("  {}", "(save file unavailable)".yellow());
    }

    Ok(())
}
