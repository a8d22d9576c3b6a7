//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a country per line, or a `:command`.

use crate::audio::CuePlayer;
use crate::core::{HintType, Outcome};
use crate::game::Game;
use crate::output::formatters::{format_seconds, guesses_word, outcome_marker};
use crate::scores::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: KeyValueStore, P: CuePlayer>(game: &mut Game<S, P>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, stdin.lock(), stdout.lock())
}

/// Drive a game from any line source
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<S, P, R, W>(game: &mut Game<S, P>, mut input: R, mut out: W) -> Result<()>
where
    S: KeyValueStore,
    P: CuePlayer,
    R: BufRead,
    W: Write,
{
    print_banner(&mut out, game)?;

    loop {
        let prompt = if game.is_won() {
            "Play again? (yes/no)"
        } else {
            "Guess"
        };
        let Some(line) = read_line(&mut input, &mut out, prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        if game.is_won() {
            if matches!(line.to_lowercase().as_str(), "yes" | "y") {
                game.reset();
                writeln!(out, "\n🔄 New round started!\n")?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        if let Some(command) = line.strip_prefix(':') {
            let mut parts = command.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("quit" | "q" | "exit"), _) => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                (Some("new" | "n"), _) => {
                    game.reset();
                    writeln!(out, "\n🔄 New round started!\n")?;
                }
                (Some("hint" | "h"), Some(kind)) => match HintType::from_name(kind) {
                    Some(kind) => match game.use_hint(kind) {
                        Ok(text) => writeln!(out, "💡 {}: {}", kind, text.bright_yellow().bold())?,
                        Err(e) => writeln!(out, "❌ {e}")?,
                    },
                    None => writeln!(out, "❌ Unknown hint! Use first, second, last or count")?,
                },
                (Some("scores" | "s"), _) => print_scores(&mut out, game)?,
                _ => writeln!(
                    out,
                    "❌ Unknown command! Use :hint <first|second|last|count>, :new, :scores, :quit"
                )?,
            }
            continue;
        }

        let Some(outcome) = game.submit(&line) else {
            continue;
        };

        match outcome {
            Outcome::Correct => print_win(&mut out, game)?,
            Outcome::Mismatch { .. } => writeln!(
                out,
                "  {} {}",
                outcome_marker(outcome),
                outcome.message().bright_white()
            )?,
            Outcome::NotFound => writeln!(
                out,
                "  {} {}",
                outcome_marker(outcome),
                outcome.message().red()
            )?,
        }
        writeln!(
            out,
            "  {}",
            format!(
                "Guesses: {} | Time: {}",
                game.session().guess_count(),
                format_seconds(game.session().duration())
            )
            .bright_black()
        )?;
    }
}

fn print_banner<S: KeyValueStore, P: CuePlayer, W: Write>(
    out: &mut W,
    game: &Game<S, P>,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Guess the Country - Simple Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "I'm thinking of one of {} countries. Type a name exactly as listed.",
        game.catalog().len()
    )?;
    writeln!(out, "Misses tell you how many places away the answer is, alphabetically.\n")?;
    writeln!(out, "Commands: ':hint <first|second|last|count>', ':new', ':scores', ':quit'\n")
}

fn print_win<S: KeyValueStore, P: CuePlayer, W: Write>(
    out: &mut W,
    game: &Game<S, P>,
) -> io::Result<()> {
    let guesses = game.session().guess_count();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "        🎉 🎊 ✨  Y O U   G O T   I T !  ✨ 🎊 🎉        "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  It was {} - found in {} {} over {}",
        game.target().name().bright_yellow().bold(),
        guesses.to_string().bright_cyan().bold(),
        guesses_word(guesses),
        format_seconds(game.session().duration())
    )?;
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())
}

fn print_scores<S: KeyValueStore, P: CuePlayer, W: Write>(
    out: &mut W,
    game: &Game<S, P>,
) -> io::Result<()> {
    match game.ledger().summary() {
        Some(summary) => writeln!(
            out,
            "🏆 {} rounds won | best {} {} | fastest {} | average {:.1}",
            summary.rounds,
            summary.best_guesses,
            guesses_word(summary.best_guesses),
            format_seconds(summary.fastest),
            summary.average_guesses
        ),
        None => writeln!(out, "🏆 No rounds won yet"),
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
