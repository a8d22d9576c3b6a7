//! Core domain types for the guessing game
//!
//! Catalog, session, evaluation, hints and scores. Nothing here touches the
//! terminal or the filesystem.

mod catalog;
mod evaluate;
mod hint;
mod score;
mod session;

pub use catalog::{Catalog, CountryEntry, collate};
pub use evaluate::{Direction, GuessHistory, GuessRecord, Outcome, evaluate};
pub use hint::{HintBook, HintError, HintType, hint};
pub use score::Score;
pub use session::GameSession;
