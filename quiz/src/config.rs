use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use types::QUESTIONS_AMOUNT;

use crate::QuizError;

pub const DEFAULT_ANSWER_DELAY_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub questions_amount: usize,
    /// How long the answer feedback stays up before the next question.
    pub answer_delay_ms: u64,
    pub database_url: Option<String>,
    pub catalogue: Option<PathBuf>,
    pub questions: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_amount: QUESTIONS_AMOUNT,
            answer_delay_ms: DEFAULT_ANSWER_DELAY_MS,
            database_url: None,
            catalogue: None,
            questions: None,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, QuizError> {
        let config: QuizConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, QuizError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions_amount == 0 {
            return Err(QuizError::Config(
                "questions_amount must be at least 1".to_string(),
            ));
        }
        if self.catalogue.is_some() && self.questions.is_some() {
            return Err(QuizError::Config(
                "catalogue and questions are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn answer_delay(&self) -> Duration {
        Duration::from_millis(self.answer_delay_ms)
    }
}
