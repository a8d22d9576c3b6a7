//! State of one round: the target, how many guesses were made, and timing

use chrono::{DateTime, Utc};

/// One round in progress
///
/// The target is fixed at creation. The only mutations are [`record_guess`]
/// and [`finish`]; a new round gets a new session.
///
/// [`record_guess`]: GameSession::record_guess
/// [`finish`]: GameSession::finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target_index: usize,
    guess_count: u32,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Start a round now. `target_index` must be a valid catalog position.
    #[must_use]
    pub fn start(target_index: usize) -> Self {
        Self::start_at(target_index, Utc::now())
    }

    #[must_use]
    pub const fn start_at(target_index: usize, now: DateTime<Utc>) -> Self {
        Self {
            target_index,
            guess_count: 0,
            start_time: now,
            end_time: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target_index(&self) -> usize {
        self.target_index
    }

    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    #[inline]
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    #[inline]
    #[must_use]
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    pub const fn record_guess(&mut self) {
        self.guess_count = self.guess_count.saturating_add(1);
    }

    /// Stop the clock. Only the first call has an effect.
    pub fn finish(&mut self) {
        self.finish_at(Utc::now());
    }

    pub fn finish_at(&mut self, now: DateTime<Utc>) {
        if self.end_time.is_none() {
            self.end_time = Some(now);
        }
    }

    /// Elapsed seconds, frozen once the round is finished
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration_at(Utc::now())
    }

    /// Elapsed seconds as observed at `now`, never negative
    #[must_use]
    pub fn duration_at(&self, now: DateTime<Utc>) -> f64 {
        let end = self.end_time.unwrap_or(now);
        let elapsed = (end - self.start_time).num_milliseconds().max(0);
        elapsed as f64 / 1000.0
    }
}
