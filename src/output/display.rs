//! Display functions for command results

use super::formatters::{format_seconds, guesses_word};
use crate::commands::ScoreboardReport;
use crate::core::CountryEntry;
use colored::Colorize;

/// Print the scoreboard
pub fn print_scoreboard(report: &ScoreboardReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCOREBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if report.scores.is_empty() {
        println!("\n   No rounds won yet. Go play!");
        return;
    }

    println!();
    for score in &report.scores {
        println!(
            "   {}   {:>3} {:<7}   {:>5}",
            score.date.format("%Y-%m-%d").to_string().bright_white(),
            score.guesses.to_string().bright_yellow().bold(),
            guesses_word(score.guesses),
            format_seconds(score.duration)
        );
    }

    if let Some(summary) = &report.summary {
        println!("\n📊 {}", "Summary:".bright_cyan().bold());
        println!("   Rounds won:       {}", summary.rounds);
        println!(
            "   Fewest guesses:   {}",
            summary.best_guesses.to_string().green()
        );
        println!(
            "   Fastest round:    {}",
            format_seconds(summary.fastest).green()
        );
        println!("   Average guesses:  {:.2}", summary.average_guesses);
    }
}

/// Print catalog entries with their alphabetical positions
pub fn print_countries(entries: &[(usize, &CountryEntry)]) {
    if entries.is_empty() {
        println!("No countries match.");
        return;
    }
    for (index, entry) in entries {
        println!(
            "{:>4}  {}  {}",
            index.to_string().bright_black(),
            entry.code().cyan(),
            entry.name()
        );
    }
}

/// Print the about screen
pub fn print_about() {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "About Country Guess".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n   Version {}", env!("CARGO_PKG_VERSION"));
    println!("   {}", env!("CARGO_PKG_DESCRIPTION").italic());
}
