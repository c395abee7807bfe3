use std::path::Path;

use async_trait::async_trait;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use types::{Question, QuestionSource};

use crate::QuizError;

const MIN_THRESHOLD: u8 = 5;
const MAX_THRESHOLD: u8 = 9;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Poster reference; the title is used when it is missing.
    #[serde(default)]
    pub image: Option<String>,
    pub rating: f32,
}

impl Movie {
    pub fn new(title: &str, rating: f32) -> Self {
        Self {
            title: title.to_string(),
            image: None,
            rating,
        }
    }

    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or(&self.title)
    }

    /// A "is the rating greater than `threshold`" question about this movie.
    pub fn rating_question(&self, threshold: u8) -> Question {
        Question::new(
            self.image(),
            format!("Is the rating of this movie greater than {threshold}?"),
            self.rating > threshold as f32,
        )
    }
}

#[derive(Debug, Deserialize)]
struct CatalogueFile {
    movies: Vec<Movie>,
}

/// Asks about the rating of randomly picked movies.
#[derive(Debug)]
pub struct MovieCatalogue {
    movies: Vec<Movie>,
    rng: StdRng,
}

impl MovieCatalogue {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(movies: Vec<Movie>, seed: u64) -> Self {
        Self {
            movies,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_movies())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, QuizError> {
        let file: CatalogueFile = serde_yaml::from_str(yaml)?;
        Ok(Self::new(file.movies))
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, QuizError> {
        let yaml = std::fs::read_to_string(path)?;
        let catalogue = Self::from_yaml_str(&yaml)?;
        log::info!(
            "Loaded {} movies from {}",
            catalogue.movies.len(),
            path.display()
        );
        Ok(catalogue)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}

#[async_trait]
impl QuestionSource for MovieCatalogue {
    async fn request_next_question(&mut self) -> Option<Question> {
        let Some(movie) = self.movies.choose(&mut self.rng) else {
            log::warn!("Movie catalogue is empty");
            return None;
        };
        let threshold = self.rng.gen_range(MIN_THRESHOLD..=MAX_THRESHOLD);
        Some(movie.rating_question(threshold))
    }
}

fn builtin_movies() -> Vec<Movie> {
    vec![
        Movie::new("The Godfather", 9.2),
        Movie::new("The Dark Knight", 9.0),
        Movie::new("Kill Bill", 8.1),
        Movie::new("The Avengers", 8.0),
        Movie::new("Deadpool", 8.0),
        Movie::new("The Green Knight", 6.6),
        Movie::new("Old", 5.8),
        Movie::new("The Ice Age Adventures of Buck Wild", 4.3),
        Movie::new("Tesla", 5.1),
        Movie::new("Vivarium", 5.8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_question() {
        let movie = Movie::new("Old", 5.8);
        let question = movie.rating_question(5);
        assert_eq!(question.image, "Old");
        assert_eq!(question.text, "Is the rating of this movie greater than 5?");
        assert!(question.correct_answer);
        assert!(!movie.rating_question(6).correct_answer);
    }

    #[test]
    fn test_equal_rating_is_not_greater() {
        assert!(!Movie::new("Round", 7.0).rating_question(7).correct_answer);
    }

    #[tokio::test]
    async fn test_questions_match_catalogue() {
        let mut catalogue = MovieCatalogue::with_seed(builtin_movies(), 7);
        for _ in 0..50 {
            let question = catalogue
                .request_next_question()
                .await
                .expect("Built-in catalogue is not empty");
            let movie = catalogue
                .movies()
                .iter()
                .find(|m| m.image() == question.image)
                .expect("Question should be about a catalogue movie");
            let threshold: u8 = question
                .text
                .trim_end_matches('?')
                .rsplit(' ')
                .next()
                .and_then(|t| t.parse().ok())
                .expect("Question should end with a threshold");
            assert!((MIN_THRESHOLD..=MAX_THRESHOLD).contains(&threshold));
            assert_eq!(question.correct_answer, movie.rating > threshold as f32);
        }
    }

    #[tokio::test]
    async fn test_empty_catalogue_has_no_questions() {
        let mut catalogue = MovieCatalogue::new(Vec::new());
        assert_eq!(catalogue.request_next_question().await, None);
    }

    #[test]
    fn test_catalogue_from_yaml() {
        let yaml = r#"
movies:
  - title: Inception
    image: inception.jpg
    rating: 8.8
  - title: Cats
    rating: 2.8
"#;
        let catalogue = MovieCatalogue::from_yaml_str(yaml).unwrap();
        assert_eq!(catalogue.movies().len(), 2);
        assert_eq!(catalogue.movies()[0].image(), "inception.jpg");
        assert_eq!(catalogue.movies()[1].image(), "Cats");
    }
}
