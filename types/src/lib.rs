pub mod error;
pub mod event;
pub mod game_result;
pub mod player;
pub mod question;
pub mod round;
pub mod source;

pub use error::RoundError;
pub use event::{RoundEvent, RoundListener};
pub use game_result::GameResult;
pub use player::AnswerStrategy;
pub use question::{Question, QuizStep};
pub use round::{RoundController, RoundPhase, RoundProgress, RoundState, QUESTIONS_AMOUNT};
pub use source::QuestionSource;
