use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("No active question")]
    NoActiveQuestion,

    #[error("Question #{} unavailable", .index + 1)]
    QuestionUnavailable { index: usize },

    #[error("Not waiting for a question")]
    NotAwaitingQuestion,

    #[error("No answered question to advance from")]
    NoAnswerPending,

    #[error("Round is already complete")]
    RoundComplete,
}
