//! Append-only scoreboard
//!
//! Loaded once at startup and saved whole after every append. Persistence
//! problems are logged and otherwise ignored: a scoreboard that cannot be
//! read starts empty, and a failed save leaves the in-memory ledger intact.

use super::store::KeyValueStore;
use crate::core::Score;
use tracing::{debug, warn};

/// Store key the ledger is saved under
pub const SCORES_KEY: &str = "scores";

/// Ordered list of won rounds backed by a key-value store
#[derive(Debug)]
pub struct Ledger<S: KeyValueStore> {
    scores: Vec<Score>,
    store: S,
}

/// Aggregate figures for the scoreboard
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub rounds: usize,
    pub best_guesses: u32,
    pub fastest: f64,
    pub average_guesses: f64,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Read the saved scoreboard from `store`
    ///
    /// Missing or undecodable data yields an empty ledger.
    pub fn load(store: S) -> Self {
        let scores = match store.get(SCORES_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Score>>(&bytes) {
                Ok(scores) => scores,
                Err(e) => {
                    warn!("Discarding unreadable scoreboard: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not load scoreboard: {e}");
                Vec::new()
            }
        };

        debug!(count = scores.len(), "loaded scoreboard");
        Self { scores, store }
    }

    /// Add a score to the end and save the whole ledger
    pub fn append(&mut self, score: Score) {
        self.scores.push(score);
        self.save();
    }

    fn save(&mut self) {
        let encoded = match serde_json::to_vec(&self.scores) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Could not encode scoreboard, save skipped: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(SCORES_KEY, &encoded) {
            warn!("Could not save scoreboard: {e}");
        }
    }

    /// Scores in the order they were added
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Best and average figures, or `None` before the first win
    #[must_use]
    pub fn summary(&self) -> Option<LedgerSummary> {
        let best_guesses = self.scores.iter().map(|s| s.guesses).min()?;
        let fastest = self
            .scores
            .iter()
            .map(|s| s.duration)
            .fold(f64::INFINITY, f64::min);
        let total: u64 = self.scores.iter().map(|s| u64::from(s.guesses)).sum();

        Some(LedgerSummary {
            rounds: self.scores.len(),
            best_guesses,
            fastest,
            average_guesses: total as f64 / self.scores.len() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::store::{FileStore, MemoryStore, StoreError};
    use chrono::{DateTime, Utc};

    /// Store whose writes always fail
    #[derive(Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &[u8]) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    fn sample_scores() -> Vec<Score> {
        vec![
            Score::new(at(0), 5, 42.0),
            Score::new(at(100), 2, 17.5),
            Score::new(at(200), 9, 80.25),
        ]
    }

    #[test]
    fn load_from_empty_store_is_empty() {
        let ledger = Ledger::load(MemoryStore::default());
        assert!(ledger.is_empty());
        assert!(ledger.summary().is_none());
    }

    #[test]
    fn append_saves_whole_ledger() {
        let mut ledger = Ledger::load(MemoryStore::default());
        for score in sample_scores() {
            ledger.append(score);
        }

        let bytes = ledger.store().get(SCORES_KEY).unwrap().unwrap();
        let saved: Vec<Score> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(saved, ledger.scores());
    }

    #[test]
    fn save_then_load_preserves_entries_and_order() {
        let mut ledger = Ledger::load(MemoryStore::default());
        let scores = sample_scores();
        for score in scores.clone() {
            ledger.append(score);
        }

        let reloaded = Ledger::load(ledger.store().clone());
        assert_eq!(reloaded.scores(), scores.as_slice());
    }

    #[test]
    fn file_backed_ledger_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let scores = sample_scores();
        {
            let mut ledger = Ledger::load(FileStore::new(dir.path()));
            for score in scores.clone() {
                ledger.append(score);
            }
        }

        let reloaded = Ledger::load(FileStore::new(dir.path()));
        assert_eq!(reloaded.scores(), scores.as_slice());
    }

    #[test]
    fn corrupt_blob_loads_as_empty() {
        let mut store = MemoryStore::default();
        store.set(SCORES_KEY, b"{not json").unwrap();

        let ledger = Ledger::load(store);
        assert!(ledger.is_empty());
    }

    #[test]
    fn wrong_shape_loads_as_empty() {
        let mut store = MemoryStore::default();
        store.set(SCORES_KEY, br#"[{"guesses": 3}]"#).unwrap();

        assert!(Ledger::load(store).is_empty());
    }

    #[test]
    fn failed_save_keeps_in_memory_scores() {
        let mut ledger = Ledger::load(ReadOnlyStore);
        ledger.append(Score::new(at(0), 3, 10.0));
        ledger.append(Score::new(at(5), 4, 11.0));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut ledger = Ledger::load(MemoryStore::default());
        let score = Score::new(at(0), 3, 10.0);
        ledger.append(score.clone());
        ledger.append(score);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn summary_figures() {
        let mut ledger = Ledger::load(MemoryStore::default());
        for score in sample_scores() {
            ledger.append(score);
        }

        let summary = ledger.summary().unwrap();
        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.best_guesses, 2);
        assert!((summary.fastest - 17.5).abs() < f64::EPSILON);
        assert!((summary.average_guesses - 16.0 / 3.0).abs() < 1e-9);
    }
}
