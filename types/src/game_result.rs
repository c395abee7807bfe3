use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one completed round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    correct: u32,
    total: u32,
    date: DateTime<Utc>,
}

impl GameResult {
    pub fn new(correct: u32, total: u32, date: DateTime<Utc>) -> Self {
        Self {
            correct,
            total,
            date,
        }
    }

    /// Placeholder returned before any round has been recorded.
    pub fn empty() -> Self {
        Self::new(0, 0, Utc::now())
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Only the number of correct answers is compared; `total` is ignored.
    pub fn is_better_than(&self, other: &GameResult) -> bool {
        self.correct > other.correct
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(correct: u32, total: u32) -> GameResult {
        GameResult::new(correct, total, Utc::now())
    }

    #[test]
    fn test_is_better_than_is_strict() {
        assert!(result(6, 10).is_better_than(&result(5, 10)));
        assert!(!result(5, 10).is_better_than(&result(5, 10)));
        assert!(!result(4, 10).is_better_than(&result(5, 10)));
    }

    #[test]
    fn test_is_better_than_ignores_total() {
        assert!(result(6, 20).is_better_than(&result(5, 5)));
        assert!(!result(5, 5).is_better_than(&result(6, 20)));
    }

    #[test]
    fn test_empty_result() {
        let empty = GameResult::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.correct(), 0);
        assert!(result(1, 10).is_better_than(&empty));
        assert_eq!(format!("{}", result(7, 10)), "7/10");
    }
}
