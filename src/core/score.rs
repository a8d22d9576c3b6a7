//! A completed round's result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of one won round, as stored on the scoreboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub guesses: u32,
    /// Seconds from the start of the round to the correct guess
    pub duration: f64,
}

impl Score {
    /// Create a score with a fresh identifier
    #[must_use]
    pub fn new(date: DateTime<Utc>, guesses: u32, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            guesses,
            duration: duration.max(0.0),
        }
    }

    /// Whole seconds, as shown on the scoreboard
    #[must_use]
    pub fn whole_seconds(&self) -> u64 {
        self.duration as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scores_get_distinct_ids() {
        let now = Utc::now();
        let a = Score::new(now, 3, 12.5);
        let b = Score::new(now, 3, 12.5);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn negative_duration_is_clamped() {
        let score = Score::new(Utc::now(), 1, -4.0);
        assert!(score.duration.abs() < f64::EPSILON);
    }

    #[test]
    fn whole_seconds_truncates() {
        let score = Score::new(Utc::now(), 2, 29.9);
        assert_eq!(score.whole_seconds(), 29);
    }

    #[test]
    fn serializes_expected_fields() {
        let score = Score::new(Utc::now(), 4, 8.0);
        let value = serde_json::to_value(&score).unwrap();
        let object = value.as_object().unwrap();
        for field in ["id", "date", "guesses", "duration"] {
            assert!(object.contains_key(field), "missing {field}");
        }
    }
}
