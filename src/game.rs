//! Round controller
//!
//! Ties the catalog, the current session, its guess history and hints to the
//! scoreboard and the cue player. Front ends talk only to [`Game`].

use crate::audio::{Cue, CuePlayer};
use crate::core::{
    Catalog, CountryEntry, GameSession, GuessHistory, HintBook, HintError, HintType, Outcome,
    Score, evaluate,
};
use crate::scores::{KeyValueStore, Ledger};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the country catalog is empty")]
    EmptyCatalog,

    #[error("target index {index} is outside a catalog of {len} countries")]
    InvalidTarget { index: usize, len: usize },
}

/// One player's game: the current round plus the scoreboard
pub struct Game<'a, S: KeyValueStore, P: CuePlayer> {
    catalog: &'a Catalog,
    ledger: Ledger<S>,
    player: P,
    rng: StdRng,
    session: GameSession,
    history: GuessHistory,
    hints: HintBook,
}

impl<'a, S: KeyValueStore, P: CuePlayer> Game<'a, S, P> {
    /// Start a game with a random target
    ///
    /// `seed` makes the sequence of targets reproducible; without it the
    /// generator is seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyCatalog`] if there is nothing to guess.
    pub fn new(
        catalog: &'a Catalog,
        ledger: Ledger<S>,
        player: P,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let target = catalog
            .random_index(&mut rng)
            .ok_or(GameError::EmptyCatalog)?;

        info!(countries = catalog.len(), seeded = seed.is_some(), "new game");
        Ok(Self::assemble(catalog, ledger, player, rng, target))
    }

    /// Start a game whose first round has a known target
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTarget`] if `target` is not a catalog position.
    pub fn with_target(
        catalog: &'a Catalog,
        ledger: Ledger<S>,
        player: P,
        target: usize,
    ) -> Result<Self, GameError> {
        if target >= catalog.len() {
            return Err(GameError::InvalidTarget {
                index: target,
                len: catalog.len(),
            });
        }
        Ok(Self::assemble(
            catalog,
            ledger,
            player,
            StdRng::from_os_rng(),
            target,
        ))
    }

    fn assemble(
        catalog: &'a Catalog,
        ledger: Ledger<S>,
        player: P,
        rng: StdRng,
        target: usize,
    ) -> Self {
        Self {
            catalog,
            ledger,
            player,
            rng,
            session: GameSession::start(target),
            history: GuessHistory::default(),
            hints: HintBook::default(),
        }
    }

    /// Submit a guess
    ///
    /// Returns `None` for blank input and for guesses made after the round
    /// was won. A correct guess stops the clock and records the score.
    pub fn submit(&mut self, raw: &str) -> Option<Outcome> {
        if self.session.is_finished() {
            debug!("guess ignored, round already won");
            return None;
        }

        let outcome = evaluate(raw, self.catalog, &mut self.session, &mut self.history)?;

        if outcome.is_correct() {
            self.session.finish();
            let score = Score::new(
                Utc::now(),
                self.session.guess_count(),
                self.session.duration(),
            );
            info!(
                guesses = score.guesses,
                seconds = score.duration,
                "round won"
            );
            self.ledger.append(score);
            self.player.play(Cue::Correct);
        } else {
            self.player.play(Cue::Wrong);
        }

        Some(outcome)
    }

    /// Reveal a hint about the target
    ///
    /// # Errors
    ///
    /// Returns [`HintError::AlreadyUsed`] if this type was used this round.
    pub fn use_hint(&mut self, kind: HintType) -> Result<String, HintError> {
        let name = self.target().name();
        let text = self.hints.reveal(kind, name)?.to_string();
        debug!(hint = %kind, "hint revealed");
        self.player.play(Cue::Hint);
        Ok(text)
    }

    /// Throw away the round and start a new one with a fresh random target
    pub fn reset(&mut self) {
        // The catalog is non-empty: construction checked it
        let target = self
            .catalog
            .random_index(&mut self.rng)
            .unwrap_or_default();
        self.session = GameSession::start(target);
        self.history = GuessHistory::default();
        self.hints = HintBook::default();
        debug!("round reset");
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub const fn hints(&self) -> &HintBook {
        &self.hints
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.session.is_finished()
    }

    /// The country being guessed
    #[must_use]
    pub fn target(&self) -> &'a CountryEntry {
        let catalog: &'a Catalog = self.catalog;
        &catalog.entries()[self.session.target_index()]
    }

    /// Share of the time window used so far, in `[0, 1]`
    #[must_use]
    pub fn progress(&self, window_secs: u64) -> f64 {
        if window_secs == 0 {
            return 1.0;
        }
        (self.session.duration() / window_secs as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::scores::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Player that remembers what it was asked to play
    #[derive(Clone, Default)]
    struct RecordingPlayer(Rc<RefCell<Vec<Cue>>>);

    impl CuePlayer for RecordingPlayer {
        fn play(&mut self, cue: Cue) {
            self.0.borrow_mut().push(cue);
        }
    }

    fn small_catalog() -> Catalog {
        Catalog::build([
            ("TD", Some("Chad")),
            ("FR", Some("France")),
            ("ES", Some("Spain")),
        ])
    }

    fn game_with_target(
        catalog: &Catalog,
        target: usize,
    ) -> (Game<'_, MemoryStore, RecordingPlayer>, RecordingPlayer) {
        let player = RecordingPlayer::default();
        let ledger = Ledger::load(MemoryStore::default());
        let game = Game::with_target(catalog, ledger, player.clone(), target).unwrap();
        (game, player)
    }

    #[test]
    fn scenario_three_guesses_records_score() {
        let catalog = small_catalog();
        let (mut game, player) = game_with_target(&catalog, 1);

        assert_eq!(
            game.submit("Chad"),
            Some(Outcome::Mismatch {
                distance: 1,
                direction: Direction::Earlier
            })
        );
        assert_eq!(
            game.submit("Spain"),
            Some(Outcome::Mismatch {
                distance: 1,
                direction: Direction::Later
            })
        );
        assert_eq!(game.submit("France"), Some(Outcome::Correct));

        assert!(game.is_won());
        assert_eq!(game.ledger().len(), 1);
        assert_eq!(game.ledger().scores()[0].guesses, 3);
        assert_eq!(
            *player.0.borrow(),
            [Cue::Wrong, Cue::Wrong, Cue::Correct]
        );
    }

    #[test]
    fn not_found_cues_wrong_without_counting() {
        let catalog = small_catalog();
        let (mut game, player) = game_with_target(&catalog, 0);

        assert_eq!(game.submit("Atlantis"), Some(Outcome::NotFound));
        assert_eq!(game.session().guess_count(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(*player.0.borrow(), [Cue::Wrong]);
    }

    #[test]
    fn blank_guess_does_nothing() {
        let catalog = small_catalog();
        let (mut game, player) = game_with_target(&catalog, 0);

        assert_eq!(game.submit("  "), None);
        assert!(game.history().is_empty());
        assert!(player.0.borrow().is_empty());
    }

    #[test]
    fn guesses_after_win_are_ignored() {
        let catalog = small_catalog();
        let (mut game, _player) = game_with_target(&catalog, 2);

        assert_eq!(game.submit("Spain"), Some(Outcome::Correct));
        assert_eq!(game.submit("Chad"), None);
        assert_eq!(game.submit("Spain"), None);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.ledger().len(), 1);
    }

    #[test]
    fn duration_is_frozen_after_win() {
        let catalog = small_catalog();
        let (mut game, _player) = game_with_target(&catalog, 0);

        game.submit("Chad");
        let end = game.session().end_time();
        assert!(end.is_some());
        let recorded = game.ledger().scores()[0].duration;
        assert!((game.session().duration() - recorded).abs() < 1e-3);
    }

    #[test]
    fn hints_are_single_use_and_cue() {
        let catalog = small_catalog();
        let (mut game, player) = game_with_target(&catalog, 1);

        assert_eq!(game.use_hint(HintType::FirstLetter).unwrap(), "F");
        assert_eq!(game.use_hint(HintType::SecondLetter).unwrap(), "r");
        assert_eq!(game.use_hint(HintType::LastLetter).unwrap(), "e");
        assert_eq!(game.use_hint(HintType::LetterCount).unwrap(), "6");
        assert_eq!(
            game.use_hint(HintType::FirstLetter),
            Err(HintError::AlreadyUsed(HintType::FirstLetter))
        );
        assert_eq!(player.0.borrow().len(), 4);
        assert!(player.0.borrow().iter().all(|&cue| cue == Cue::Hint));
    }

    #[test]
    fn reset_clears_round_state_but_keeps_scores() {
        let catalog = small_catalog();
        let (mut game, _player) = game_with_target(&catalog, 0);

        game.use_hint(HintType::FirstLetter).unwrap();
        game.submit("Chad");
        game.reset();

        assert!(!game.is_won());
        assert_eq!(game.session().guess_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.hints().used_count(), 0);
        assert!(game.session().target_index() < catalog.len());
        assert_eq!(game.ledger().len(), 1);
        assert!(game.use_hint(HintType::FirstLetter).is_ok());
    }

    #[test]
    fn seeded_games_pick_the_same_targets() {
        let catalog = crate::regions::embedded_catalog();
        let targets = |seed| {
            let ledger = Ledger::load(MemoryStore::default());
            let mut game =
                Game::new(&catalog, ledger, RecordingPlayer::default(), Some(seed)).unwrap();
            let mut picked = vec![game.session().target_index()];
            for _ in 0..5 {
                game.reset();
                picked.push(game.session().target_index());
            }
            picked
        };

        assert_eq!(targets(42), targets(42));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let catalog = Catalog::default();
        let ledger = Ledger::load(MemoryStore::default());
        assert!(matches!(
            Game::new(&catalog, ledger, RecordingPlayer::default(), Some(1)),
            Err(GameError::EmptyCatalog)
        ));
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        let catalog = small_catalog();
        let ledger = Ledger::load(MemoryStore::default());
        assert!(matches!(
            Game::with_target(&catalog, ledger, RecordingPlayer::default(), 3),
            Err(GameError::InvalidTarget { index: 3, len: 3 })
        ));
    }

    #[test]
    fn progress_is_clamped() {
        let catalog = small_catalog();
        let (game, _player) = game_with_target(&catalog, 0);

        let progress = game.progress(30);
        assert!((0.0..=1.0).contains(&progress));
        assert!((game.progress(0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn target_matches_session_index() {
        let catalog = small_catalog();
        let (game, _player) = game_with_target(&catalog, 2);
        assert_eq!(game.target().name(), "Spain");
    }
}
