use std::fmt::Debug;

use crate::QuizStep;

/// Decides how to answer a question shown to the player.
pub trait AnswerStrategy: Debug {
    fn select_answer(&mut self, step: &QuizStep) -> bool;
}
