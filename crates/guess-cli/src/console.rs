//! Console output formatting with colored display

use std::fmt::Write as _;

use guess_core::{Comparison, Difficulty, LeaderboardEntry, Outcome, RoundState, RoundSummary};
use owo_colors::OwoColorize;

/// Banner shown when a round starts.
pub fn format_round_start(player: &str, state: &RoundState) -> String {
    let config = state.config();
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{}, guess the number between 0 and 99 [{}]",
        player.bold(),
        format_colored_difficulty(&config.difficulty)
    );
    if let Some(max) = config.max_attempts {
        let _ = writeln!(output, "  ATTEMPTS : {}", max);
    }
    if let Some(secs) = config.time_limit_secs {
        let _ = writeln!(output, "  TIME     : {}s", secs);
    }
    let _ = write!(output, "{}", "Type a number, or q to give up.".dimmed());

    output
}

/// Higher/lower hint with the remaining budgets.
pub fn format_feedback(state: &RoundState) -> String {
    let hint = match state.last_comparison() {
        Comparison::TooHigh => "Too high!".red().to_string(),
        Comparison::TooLow => "Too low!".blue().to_string(),
        Comparison::None => return String::new(),
    };

    let mut budgets = Vec::new();
    if let Some(attempts) = state.remaining_attempts() {
        budgets.push(format!("{} attempts left", attempts.yellow()));
    }
    if let Some(secs) = state.remaining_secs() {
        budgets.push(format!("{}s left", secs.ceil().yellow()));
    }

    if budgets.is_empty() {
        hint
    } else {
        format!("{} ({})", hint, budgets.join(", "))
    }
}

/// Countdown line, printed only on a few milestones to keep the terminal quiet.
pub fn format_countdown(remaining_secs: f64) -> Option<String> {
    let secs = remaining_secs.ceil() as u32;
    matches!(secs, 1..=5 | 10 | 20).then(|| format!("{}s left", secs).yellow().to_string())
}

pub fn format_invalid_input(text: &str) -> String {
    format!("{:?} is not a whole number", text)
        .dimmed()
        .to_string()
}

/// Result line of a finished round.
pub fn format_summary(summary: &RoundSummary) -> String {
    match summary.outcome {
        Outcome::Won => format!(
            "{}, {} The number was {}.",
            summary.player_name.bold(),
            "you won!".green(),
            summary.hidden_number.bold()
        ),
        Outcome::Lost => format!(
            "{}, {} The number was {}.",
            summary.player_name.bold(),
            "you lost.".red(),
            summary.hidden_number.bold()
        ),
        Outcome::InProgress => format!("{}, the round is still running.", summary.player_name),
    }
}

/// Leaderboard table. Columns follow the difficulty: name; name and
/// attempts; name, attempts and time.
pub fn format_leaderboard(difficulty: Difficulty, entries: &[LeaderboardEntry]) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Leaderboard [{}]",
        format_colored_difficulty(&difficulty)
    );

    if entries.is_empty() {
        let _ = write!(output, "{}", "  No wins yet".dimmed());
        return output;
    }

    let name_width = entries
        .iter()
        .map(|e| e.player_name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut header = format!("  {:>3}  {:<name_width$}", "#", "NAME");
    if difficulty.attempts_bounded() {
        header.push_str("  ATTEMPTS");
    }
    if difficulty.timer_enabled() {
        header.push_str("      TIME");
    }
    let _ = writeln!(output, "{}", header.dimmed());

    for (index, entry) in entries.iter().enumerate() {
        let mut line = format!("  {:>3}  {:<name_width$}", index + 1, entry.player_name);
        if difficulty.attempts_bounded() {
            let attempts = entry
                .attempts
                .map(|a| a.to_string())
                .unwrap_or_default();
            let _ = write!(line, "  {:>8}", attempts);
        }
        if difficulty.timer_enabled() {
            let time = entry
                .elapsed_secs
                .map(|t| format!("{:.1}s", t))
                .unwrap_or_default();
            let _ = write!(line, "  {:>8}", time);
        }
        let _ = writeln!(output, "{}", line.trim_end());
    }

    output.truncate(output.trim_end().len());
    output
}

/// Format difficulty with color
fn format_colored_difficulty(difficulty: &Difficulty) -> String {
    let name = difficulty.name();
    match difficulty {
        Difficulty::Easy => name.green().to_string(),
        Difficulty::Normal => name.blue().to_string(),
        Difficulty::Hard => name.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_core::RoundConfig;

    fn start(difficulty: Difficulty, hidden: i32) -> RoundState {
        RoundState::start(RoundConfig::standard(difficulty, hidden)).unwrap()
    }

    #[test]
    fn test_feedback_shows_budgets() {
        let state = start(Difficulty::Hard, 10).tick(3.0).submit_guess(50);
        let text = format_feedback(&state);
        assert!(text.contains("Too high!"));
        assert!(text.contains("9"));
        assert!(text.contains("27"));

        let easy = start(Difficulty::Easy, 10).submit_guess(1);
        let text = format_feedback(&easy);
        assert!(text.contains("Too low!"));
        assert!(!text.contains("left"));
    }

    #[test]
    fn test_feedback_empty_without_comparison() {
        assert!(format_feedback(&start(Difficulty::Normal, 10)).is_empty());
    }

    #[test]
    fn test_countdown_milestones() {
        assert!(format_countdown(20.0).is_some());
        assert!(format_countdown(5.0).is_some());
        assert!(format_countdown(0.5).is_some());
        assert!(format_countdown(19.0).is_none());
        assert!(format_countdown(0.0).is_none());
    }

    #[test]
    fn test_summary() {
        let won = start(Difficulty::Normal, 7).submit_guess(7).summary("ann");
        let text = format_summary(&won);
        assert!(text.contains("ann"));
        assert!(text.contains("you won!"));
        assert!(text.contains("7"));

        let lost = start(Difficulty::Normal, 7).forfeit().summary("ann");
        assert!(format_summary(&lost).contains("you lost."));
    }

    #[test]
    fn test_leaderboard_columns_follow_difficulty() {
        let easy = format_leaderboard(
            Difficulty::Easy,
            &[LeaderboardEntry::new(Difficulty::Easy, "eve")],
        );
        assert!(easy.contains("eve"));
        assert!(!easy.contains("ATTEMPTS"));
        assert!(!easy.contains("TIME"));

        let normal = format_leaderboard(
            Difficulty::Normal,
            &[LeaderboardEntry::new(Difficulty::Normal, "nat").with_attempts(3)],
        );
        assert!(normal.contains("ATTEMPTS"));
        assert!(!normal.contains("TIME"));

        let hard = format_leaderboard(
            Difficulty::Hard,
            &[LeaderboardEntry::new(Difficulty::Hard, "hal")
                .with_attempts(2)
                .with_elapsed_secs(12.25)],
        );
        assert!(hard.contains("ATTEMPTS"));
        assert!(hard.contains("TIME"));
        assert!(hard.contains("12.2s") || hard.contains("12.3s"));
    }

    #[test]
    fn test_empty_leaderboard() {
        assert!(format_leaderboard(Difficulty::Hard, &[]).contains("No wins yet"));
    }
}
