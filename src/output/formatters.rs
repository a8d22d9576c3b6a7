//! Formatting utilities for terminal output

use crate::core::{Direction, Outcome};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "█".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Whole seconds with a unit, as on the scoreboard
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    format!("{}s", seconds.max(0.0) as u64)
}

/// Short marker for an outcome
#[must_use]
pub const fn outcome_marker(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct => "🎉",
        Outcome::Mismatch {
            direction: Direction::Earlier,
            ..
        } => "⬇",
        Outcome::Mismatch {
            direction: Direction::Later,
            ..
        } => "⬆",
        Outcome::NotFound => "❓",
    }
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_word(count: u32) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(15.0, 30.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_overflow_is_capped() {
        let bar = create_progress_bar(90.0, 30.0, 4);
        assert_eq!(bar, "████");
    }

    #[test]
    fn seconds_are_truncated() {
        assert_eq!(format_seconds(12.9), "12s");
        assert_eq!(format_seconds(-1.0), "0s");
    }

    #[test]
    fn markers_follow_direction() {
        assert_eq!(outcome_marker(Outcome::classify(0, 2)), "⬇");
        assert_eq!(outcome_marker(Outcome::classify(3, 2)), "⬆");
        assert_eq!(outcome_marker(Outcome::Correct), "🎉");
    }

    #[test]
    fn guesses_pluralizes() {
        assert_eq!(guesses_word(1), "guess");
        assert_eq!(guesses_word(3), "guesses");
    }
}
