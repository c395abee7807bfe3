pub mod config;
pub mod error;
pub mod gameplay;
pub mod sources;
pub mod summary;

pub use config::QuizConfig;
pub use error::QuizError;
pub use gameplay::{play_rounds, run_round};
pub use sources::{FixedQuestions, Movie, MovieCatalogue};
pub use summary::RoundSummary;
