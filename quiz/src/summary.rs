use std::fmt::Display;

use chrono::{DateTime, Local, Utc};
use database::{KeyValueStore, StatisticsStore};
use itertools::Itertools;
use types::GameResult;

pub const SUMMARY_TITLE: &str = "This round is over!";
pub const PLAY_AGAIN: &str = "Play again";

/// What the end-of-round alert shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub title: String,
    pub message: String,
    pub button_text: String,
}

impl RoundSummary {
    pub fn new<S: KeyValueStore>(result: &GameResult, stats: &StatisticsStore<S>) -> Self {
        let best = stats.current_best();
        let message = [
            format!("Your result: {}/{}", result.correct(), result.total()),
            format!("Quizzes played: {}", stats.games_count()),
            format!(
                "Record: {}/{} ({})",
                best.correct(),
                best.total(),
                date_time_string(best.date())
            ),
            format!("Average accuracy: {:.2}%", stats.current_accuracy()),
        ]
        .iter()
        .join("\n");

        Self {
            title: SUMMARY_TITLE.to_string(),
            message,
            button_text: PLAY_AGAIN.to_string(),
        }
    }
}

impl Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}\n[{}]", self.title, self.message, self.button_text)
    }
}

/// `dd.mm.yy HH:MM` in local time.
pub fn date_time_string(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%d.%m.%y %H:%M").to_string()
}
