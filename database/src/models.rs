use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde_json::Value;
use types::{GameResult, QUESTIONS_AMOUNT};

use crate::{DatabaseError, KeyValueStore};

/// Keys the statistics are persisted under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatKey {
    GamesCount,
    CorrectAnswers,
    TotalQuestions,
    BestGameCorrect,
    BestGameTotal,
    BestGameDate,
}

impl StatKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::GamesCount => "games_count",
            StatKey::CorrectAnswers => "correct_answers",
            StatKey::TotalQuestions => "total_questions",
            StatKey::BestGameCorrect => "best_game.correct",
            StatKey::BestGameTotal => "best_game.total",
            StatKey::BestGameDate => "best_game.date",
        }
    }
}

impl Display for StatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsAggregate {
    pub games_count: u32,
    pub correct_answers: u64,
    /// Questions asked over all recorded rounds.
    pub total_questions: u64,
    /// `None` until a round beats the empty record.
    pub best_game: Option<GameResult>,
}

impl StatisticsAggregate {
    pub async fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, DatabaseError> {
        let games_count = read_u64(store, StatKey::GamesCount).await?.unwrap_or(0);
        let games_count = u32::try_from(games_count).map_err(|e| invalid(StatKey::GamesCount, e))?;
        let correct_answers = read_u64(store, StatKey::CorrectAnswers)
            .await?
            .unwrap_or(0);
        // Stores written before the key existed only held full-length rounds.
        let total_questions = read_u64(store, StatKey::TotalQuestions)
            .await?
            .unwrap_or(games_count as u64 * QUESTIONS_AMOUNT as u64);

        let best_correct = read_u64(store, StatKey::BestGameCorrect).await?;
        let best_total = read_u64(store, StatKey::BestGameTotal).await?;
        let best_game = match (best_correct, best_total) {
            (None, None) => None,
            (correct, total) => {
                let correct = u32::try_from(correct.unwrap_or(0))
                    .map_err(|e| invalid(StatKey::BestGameCorrect, e))?;
                let total = u32::try_from(total.unwrap_or(0))
                    .map_err(|e| invalid(StatKey::BestGameTotal, e))?;
                let date = read_date(store, StatKey::BestGameDate)
                    .await?
                    .unwrap_or_else(Utc::now);
                Some(GameResult::new(correct, total, date))
            }
        };

        Ok(Self {
            games_count,
            correct_answers,
            total_questions,
            best_game,
        })
    }

    pub fn best_or_empty(&self) -> GameResult {
        self.best_game.unwrap_or_else(GameResult::empty)
    }

    /// Accuracy over every recorded round, in percent.
    pub fn total_accuracy(&self) -> f64 {
        if self.games_count == 0 || self.total_questions == 0 {
            return 0.0;
        }
        (self.correct_answers as f64 / self.total_questions as f64) * 100.0
    }

    /// The aggregate after `result` is recorded, plus whether it is the new best.
    pub fn with_round(&self, result: GameResult) -> (Self, bool) {
        let is_new_best = result.is_better_than(&self.best_or_empty());
        let updated = Self {
            games_count: self.games_count + 1,
            correct_answers: self.correct_answers + result.correct() as u64,
            total_questions: self.total_questions + result.total() as u64,
            best_game: if is_new_best {
                Some(result)
            } else {
                self.best_game
            },
        };
        (updated, is_new_best)
    }

    /// Entries to persist. The best-game keys are only written when it changed.
    pub fn to_entries(&self, include_best: bool) -> Vec<(&'static str, Value)> {
        let mut entries = vec![
            (StatKey::GamesCount.as_str(), Value::from(self.games_count)),
            (StatKey::CorrectAnswers.as_str(), Value::from(self.correct_answers)),
            (StatKey::TotalQuestions.as_str(), Value::from(self.total_questions)),
        ];
        if let (true, Some(best)) = (include_best, self.best_game) {
            entries.push((StatKey::BestGameCorrect.as_str(), Value::from(best.correct())));
            entries.push((StatKey::BestGameTotal.as_str(), Value::from(best.total())));
            entries.push((
                StatKey::BestGameDate.as_str(),
                Value::from(best.date().to_rfc3339()),
            ));
        }
        entries
    }
}

fn invalid(key: StatKey, reason: impl Display) -> DatabaseError {
    DatabaseError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

async fn read_u64<S: KeyValueStore + ?Sized>(
    store: &S,
    key: StatKey,
) -> Result<Option<u64>, DatabaseError> {
    match store.get(key.as_str()).await? {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| invalid(key, format!("expected a non-negative integer, got {value}"))),
    }
}

async fn read_date<S: KeyValueStore + ?Sized>(
    store: &S,
    key: StatKey,
) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match store.get(key.as_str()).await? {
        None => Ok(None),
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(&raw)
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(|e| invalid(key, e)),
        Some(value) => Err(invalid(key, format!("expected an RFC 3339 string, got {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(correct: u32) -> GameResult {
        GameResult::new(correct, 10, Utc::now())
    }

    #[test]
    fn test_accuracy_without_games_is_zero() {
        assert_eq!(StatisticsAggregate::default().total_accuracy(), 0.0);
    }

    #[test]
    fn test_with_round_accumulates() {
        let (first, first_best) = StatisticsAggregate::default().with_round(result(5));
        assert!(first_best);
        let (second, second_best) = first.with_round(result(5));
        assert!(!second_best);
        assert_eq!(second.games_count, 2);
        assert_eq!(second.correct_answers, 10);
        assert_eq!(second.best_game, first.best_game);
        assert_eq!(second.total_accuracy(), 50.0);
    }

    #[test]
    fn test_zero_round_is_not_a_record() {
        let (updated, is_new_best) = StatisticsAggregate::default().with_round(result(0));
        assert!(!is_new_best);
        assert_eq!(updated.best_game, None);
        assert!(updated.best_or_empty().is_empty());
    }

    #[test]
    fn test_entries_skip_unchanged_best() {
        let (updated, _) = StatisticsAggregate::default().with_round(result(3));
        let keys: Vec<_> = updated.to_entries(false).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["games_count", "correct_answers", "total_questions"]);
        assert_eq!(updated.to_entries(true).len(), 6);
    }

    #[test]
    fn test_accuracy_counts_each_round_at_its_own_length() {
        let (after_long, _) = StatisticsAggregate::default()
            .with_round(GameResult::new(10, 10, Utc::now()));
        let (after_short, _) = after_long.with_round(GameResult::new(1, 5, Utc::now()));
        assert_eq!(after_short.total_questions, 15);
        assert!((after_short.total_accuracy() - 11.0 / 15.0 * 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_missing_total_falls_back_to_full_rounds() {
        let mut store = crate::MemoryStore::new();
        store
            .set_many(&[
                ("games_count", Value::from(2)),
                ("correct_answers", Value::from(15)),
            ])
            .await
            .unwrap();
        let aggregate = StatisticsAggregate::load(&store).await.unwrap();
        assert_eq!(aggregate.total_questions, 2 * QUESTIONS_AMOUNT as u64);
        assert_eq!(format!("{:.2}", aggregate.total_accuracy()), "75.00");
    }
}
