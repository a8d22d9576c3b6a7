//! Scoreboard command
//!
//! Collects the saved scores into a report for printing.

use crate::core::Score;
use crate::scores::{KeyValueStore, Ledger, LedgerSummary};

/// Scores to show, newest first, plus overall figures
pub struct ScoreboardReport {
    pub scores: Vec<Score>,
    pub summary: Option<LedgerSummary>,
}

/// Build the report, keeping at most `limit` of the most recent scores
pub fn scoreboard<S: KeyValueStore>(ledger: &Ledger<S>, limit: Option<usize>) -> ScoreboardReport {
    let scores = ledger
        .scores()
        .iter()
        .rev()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    ScoreboardReport {
        scores,
        summary: ledger.summary(),
    }
}
