//! Guess evaluation
//!
//! Resolves free text against the catalog and the round's target. Distance is
//! measured in alphabetical catalog positions, not geography, so each miss
//! narrows the answer like a step of a binary search.

use super::{Catalog, GameSession};
use std::fmt;
use tracing::debug;

/// Which side of the answer a guess falls on, alphabetically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Earlier,
    Later,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Earlier => f.write_str("earlier"),
            Self::Later => f.write_str("later"),
        }
    }
}

/// Classification of one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Mismatch { distance: usize, direction: Direction },
    NotFound,
}

impl Outcome {
    /// Compare a matched catalog position with the target
    ///
    /// # Examples
    /// ```
    /// use country_guess::core::{Direction, Outcome};
    ///
    /// assert_eq!(Outcome::classify(1, 1), Outcome::Correct);
    /// assert_eq!(
    ///     Outcome::classify(0, 3),
    ///     Outcome::Mismatch { distance: 3, direction: Direction::Earlier }
    /// );
    /// ```
    #[must_use]
    pub const fn classify(guess_index: usize, target_index: usize) -> Self {
        if guess_index == target_index {
            Self::Correct
        } else {
            Self::Mismatch {
                distance: guess_index.abs_diff(target_index),
                direction: if guess_index < target_index {
                    Direction::Earlier
                } else {
                    Direction::Later
                },
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Text shown next to the guess in the history
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Correct => "Correct!".to_string(),
            Self::Mismatch { distance, direction } => {
                let unit = if distance == 1 { "country" } else { "countries" };
                format!("Your guess is {distance} {unit} {direction} than the answer.")
            }
            Self::NotFound => "Country not found.".to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// One line of the round's guess history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub result: String,
    pub outcome: Outcome,
}

/// Append-only record of the round's guesses, in submission order
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    records: Vec<GuessRecord>,
}

impl GuessHistory {
    fn push(&mut self, guess: &str, outcome: Outcome) {
        self.records.push(GuessRecord {
            guess: guess.to_string(),
            result: outcome.message(),
            outcome,
        });
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }
}

/// Evaluate a raw guess
///
/// Blank input returns `None` and touches nothing. Otherwise the outcome is
/// appended to `history`; a name found in the catalog also counts as a guess
/// on `session`. Finishing the session on a correct guess is left to the
/// caller.
pub fn evaluate(
    raw: &str,
    catalog: &Catalog,
    session: &mut GameSession,
    history: &mut GuessHistory,
) -> Option<Outcome> {
    let guess = raw.trim();
    if guess.is_empty() {
        return None;
    }

    let outcome = match catalog.find(guess) {
        Some(index) => {
            session.record_guess();
            Outcome::classify(index, session.target_index())
        }
        None => Outcome::NotFound,
    };

    debug!(guess, ?outcome, guesses = session.guess_count(), "evaluated guess");
    history.push(guess, outcome);
    Some(outcome)
}
