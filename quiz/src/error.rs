use database::DatabaseError;
use thiserror::Error;
use types::RoundError;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Statistics error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Round error: {0}")]
    Round(RoundError),

    #[error("Question #{} could not be loaded", .index + 1)]
    QuestionUnavailable { index: usize },
}

impl From<RoundError> for QuizError {
    fn from(err: RoundError) -> Self {
        match err {
            RoundError::QuestionUnavailable { index } => QuizError::QuestionUnavailable { index },
            other => QuizError::Round(other),
        }
    }
}
