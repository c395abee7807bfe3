pub mod input_strategy;

use rand::{rngs::ThreadRng, Rng};
use types::{AnswerStrategy, QuizStep};

pub use crate::input_strategy::{confirm, InputStrategy};

/// Flips a fair coin for every question.
#[derive(Debug, Default)]
pub struct RandomStrategy {
    rng: ThreadRng,
}

impl AnswerStrategy for RandomStrategy {
    fn select_answer(&mut self, _step: &QuizStep) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct ConstantStrategy {
    answer: bool,
}

impl ConstantStrategy {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }

    pub fn yes() -> Self {
        Self::new(true)
    }

    pub fn no() -> Self {
        Self::new(false)
    }
}

impl AnswerStrategy for ConstantStrategy {
    fn select_answer(&mut self, step: &QuizStep) -> bool {
        log::debug!("Answering {} to {}", self.answer, step.question_number);
        self.answer
    }
}
