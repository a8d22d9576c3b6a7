//! Letter hints about the target name

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;

/// Kinds of hint a player can ask for, each once per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HintType {
    FirstLetter,
    SecondLetter,
    LastLetter,
    LetterCount,
}

impl HintType {
    /// All hint types in display order
    pub const ALL: [Self; 4] = [
        Self::FirstLetter,
        Self::SecondLetter,
        Self::LastLetter,
        Self::LetterCount,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstLetter => "First Letter",
            Self::SecondLetter => "Second Letter",
            Self::LastLetter => "Last Letter",
            Self::LetterCount => "Letters Count",
        }
    }

    /// Parse the short names used on the command line
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "first" | "1" => Some(Self::FirstLetter),
            "second" | "2" => Some(Self::SecondLetter),
            "last" | "3" => Some(Self::LastLetter),
            "count" | "length" | "4" => Some(Self::LetterCount),
            _ => None,
        }
    }
}

impl fmt::Display for HintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive a hint from the target's display name
///
/// Works on characters rather than bytes, so accented names count the way a
/// player reads them.
///
/// # Examples
/// ```
/// use country_guess::core::{HintType, hint};
///
/// assert_eq!(hint(HintType::FirstLetter, "France"), "F");
/// assert_eq!(hint(HintType::LetterCount, "France"), "6");
/// assert_eq!(hint(HintType::SecondLetter, "X"), "");
/// ```
#[must_use]
pub fn hint(kind: HintType, target_name: &str) -> String {
    match kind {
        HintType::FirstLetter => target_name.chars().take(1).collect(),
        HintType::SecondLetter => target_name.chars().nth(1).map(String::from).unwrap_or_default(),
        HintType::LastLetter => target_name.chars().last().map(String::from).unwrap_or_default(),
        HintType::LetterCount => target_name.chars().count().to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("{0} hint has already been used this round")]
    AlreadyUsed(HintType),
}

/// Hints revealed so far in a round
#[derive(Debug, Clone, Default)]
pub struct HintBook {
    used: FxHashSet<HintType>,
    revealed: FxHashMap<HintType, String>,
}

impl HintBook {
    /// Reveal a hint for `target_name`, refusing a type used before
    ///
    /// # Errors
    ///
    /// Returns [`HintError::AlreadyUsed`] on the second request for a type.
    pub fn reveal(&mut self, kind: HintType, target_name: &str) -> Result<&str, HintError> {
        if !self.used.insert(kind) {
            return Err(HintError::AlreadyUsed(kind));
        }
        let text = self.revealed.entry(kind).or_insert_with(|| hint(kind, target_name));
        Ok(text.as_str())
    }

    #[must_use]
    pub fn is_used(&self, kind: HintType) -> bool {
        self.used.contains(&kind)
    }

    #[must_use]
    pub fn message(&self, kind: HintType) -> Option<&str> {
        self.revealed.get(&kind).map(String::as_str)
    }

    /// Revealed hints in display order
    pub fn messages(&self) -> impl Iterator<Item = (HintType, &str)> {
        HintType::ALL
            .into_iter()
            .filter_map(|kind| self.message(kind).map(|text| (kind, text)))
    }

    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}
