use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A yes/no trivia question as handed out by a question source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub image: String,
    pub text: String,
    pub correct_answer: bool,
}

impl Question {
    pub fn new(image: impl Into<String>, text: impl Into<String>, correct_answer: bool) -> Self {
        Self {
            image: image.into(),
            text: text.into(),
            correct_answer,
        }
    }

    pub fn is_correct(&self, given_answer: bool) -> bool {
        given_answer == self.correct_answer
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.image, self.text)
    }
}

/// What the presentation layer needs to show a single question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizStep {
    pub image: String,
    pub question: String,
    /// `"index/total"`, 1-based.
    pub question_number: String,
}

impl QuizStep {
    pub fn from_question(question: &Question, index: usize, questions_amount: usize) -> Self {
        Self {
            image: question.image.clone(),
            question: question.text.clone(),
            question_number: format!("{}/{}", index + 1, questions_amount),
        }
    }
}

impl Display for QuizStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]\n{}",
            self.question_number, self.image, self.question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_step_numbering_is_one_based() {
        let question = Question::new("The Godfather", "Is it any good?", true);
        let step = QuizStep::from_question(&question, 0, 10);
        assert_eq!(step.question_number, "1/10");
        assert_eq!(step.image, "The Godfather");
        assert_eq!(step.question, "Is it any good?");

        let last = QuizStep::from_question(&question, 9, 10);
        assert_eq!(last.question_number, "10/10");
    }

    #[test]
    fn test_is_correct() {
        let question = Question::new("Vivarium", "Rating above 6?", false);
        assert!(question.is_correct(false));
        assert!(!question.is_correct(true));
    }
}
