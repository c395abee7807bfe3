pub mod catalogue;
pub mod fixed;

pub use catalogue::{Movie, MovieCatalogue};
pub use fixed::FixedQuestions;
