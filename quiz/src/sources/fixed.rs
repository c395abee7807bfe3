use std::{collections::VecDeque, path::Path};

use async_trait::async_trait;
use serde::Deserialize;
use types::{Question, QuestionSource};

use crate::QuizError;

#[derive(Debug, Deserialize)]
struct QuestionsFile {
    questions: Vec<Question>,
}

/// Serves a prepared list of questions in order, then runs dry.
#[derive(Debug, Default)]
pub struct FixedQuestions {
    remaining: VecDeque<Question>,
}

impl FixedQuestions {
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            remaining: questions.into_iter().collect(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, QuizError> {
        let file: QuestionsFile = serde_yaml::from_str(yaml)?;
        Ok(Self::new(file.questions))
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, QuizError> {
        let yaml = std::fs::read_to_string(path)?;
        let questions = Self::from_yaml_str(&yaml)?;
        log::info!(
            "Loaded {} questions from {}",
            questions.remaining(),
            path.display()
        );
        Ok(questions)
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

#[async_trait]
impl QuestionSource for FixedQuestions {
    async fn request_next_question(&mut self) -> Option<Question> {
        self.remaining.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_in_order_then_runs_dry() {
        let mut source = FixedQuestions::new(vec![
            Question::new("a", "first?", true),
            Question::new("b", "second?", false),
        ]);
        assert_eq!(source.request_next_question().await.unwrap().text, "first?");
        assert_eq!(source.request_next_question().await.unwrap().text, "second?");
        assert_eq!(source.request_next_question().await, None);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
questions:
  - image: deadpool.jpg
    text: Is the rating of this movie greater than 6?
    correct_answer: true
"#;
        let source = FixedQuestions::from_yaml_str(yaml).unwrap();
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_from_yaml_rejects_missing_answer() {
        let yaml = "questions:\n  - image: x\n    text: y\n";
        assert!(matches!(
            FixedQuestions::from_yaml_str(yaml),
            Err(QuizError::Yaml(_))
        ));
    }
}
