use std::fmt::{Debug, Display};

use uuid::Uuid;

use crate::{GameResult, QuizStep};

#[derive(Clone, Debug, PartialEq)]
pub enum RoundEvent {
    QuestionRequested { index: usize },
    QuestionShown(QuizStep),
    QuestionUnavailable { index: usize },
    AnswerChecked { index: usize, is_correct: bool },
    RoundFinished { round_id: Uuid, result: GameResult },
}

impl Display for RoundEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundEvent::QuestionRequested { index } => {
                write!(f, "Requested question #{}", index + 1)
            }
            RoundEvent::QuestionShown(step) => write!(f, "Showing question {}", step.question_number),
            RoundEvent::QuestionUnavailable { index } => {
                write!(f, "Question #{} unavailable", index + 1)
            }
            RoundEvent::AnswerChecked { index, is_correct } => {
                let verdict = if *is_correct { "correct" } else { "wrong" };
                write!(f, "Answer to question #{} was {verdict}", index + 1)
            }
            RoundEvent::RoundFinished { result, .. } => write!(f, "Round finished: {result}"),
        }
    }
}

/// Receives every event a [`crate::RoundController`] emits, in order.
pub trait RoundListener: Debug {
    fn on_event(&mut self, event: &RoundEvent);
}
