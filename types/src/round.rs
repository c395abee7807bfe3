use std::fmt::Display;

use chrono::Utc;
use itertools::Itertools;
use uuid::Uuid;

use crate::{GameResult, Question, QuizStep, RoundError, RoundEvent, RoundListener};

/// Number of questions in a round unless configured otherwise.
pub const QUESTIONS_AMOUNT: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// No round has been started yet.
    Idle,
    AwaitingQuestion,
    QuestionActive,
    ShowingResult,
    RoundComplete,
}

impl Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundPhase::Idle => write!(f, "Idle"),
            RoundPhase::AwaitingQuestion => write!(f, "AwaitingQuestion"),
            RoundPhase::QuestionActive => write!(f, "QuestionActive"),
            RoundPhase::ShowingResult => write!(f, "ShowingResult"),
            RoundPhase::RoundComplete => write!(f, "RoundComplete"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundState {
    pub current_question_index: usize,
    pub correct_answers: u32,
    pub current_question: Option<Question>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RoundProgress {
    NextQuestion { index: usize },
    Finished(GameResult),
}

/// Drives one round of `questions_amount` questions.
///
/// The controller never talks to a question source itself. It emits
/// [`RoundEvent::QuestionRequested`] and expects the caller to answer with
/// [`RoundController::deliver_question`], whenever the question shows up.
#[derive(Debug)]
pub struct RoundController {
    questions_amount: usize,
    round_id: Uuid,
    state: RoundState,
    phase: RoundPhase,
    pub history: Vec<RoundEvent>,
    listeners: Vec<Box<dyn RoundListener>>,
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new(QUESTIONS_AMOUNT)
    }
}

impl RoundController {
    pub fn new(questions_amount: usize) -> Self {
        assert!(
            questions_amount > 0,
            "A round needs at least one question"
        );
        Self {
            questions_amount,
            round_id: Uuid::new_v4(),
            state: RoundState::default(),
            phase: RoundPhase::Idle,
            history: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn RoundListener>) {
        self.listeners.push(listener);
    }

    pub fn questions_amount(&self) -> usize {
        self.questions_amount
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::RoundComplete
    }

    pub fn current_step(&self) -> Option<QuizStep> {
        self.state.current_question.as_ref().map(|question| {
            QuizStep::from_question(
                question,
                self.state.current_question_index,
                self.questions_amount,
            )
        })
    }

    pub fn begin_round(&mut self) {
        self.round_id = Uuid::new_v4();
        self.state = RoundState::default();
        self.history.clear();
        self.phase = RoundPhase::AwaitingQuestion;
        log::info!(
            "New round {} of {} questions",
            self.round_id,
            self.questions_amount
        );
        self.emit(RoundEvent::QuestionRequested { index: 0 });
    }

    /// Hands the controller the question it asked for.
    ///
    /// `None` means the source had nothing to give; the round holds its
    /// position so the same question can be requested again.
    pub fn deliver_question(&mut self, question: Option<Question>) -> Result<QuizStep, RoundError> {
        match self.phase {
            RoundPhase::AwaitingQuestion => {}
            RoundPhase::RoundComplete => return Err(RoundError::RoundComplete),
            phase => {
                log::warn!("Ignoring question delivered while in phase {phase}");
                return Err(RoundError::NotAwaitingQuestion);
            }
        }

        let index = self.state.current_question_index;
        let Some(question) = question else {
            log::warn!("No question available for #{}", index + 1);
            self.emit(RoundEvent::QuestionUnavailable { index });
            return Err(RoundError::QuestionUnavailable { index });
        };

        let step = QuizStep::from_question(&question, index, self.questions_amount);
        self.state.current_question = Some(question);
        self.phase = RoundPhase::QuestionActive;
        self.emit(RoundEvent::QuestionShown(step.clone()));
        Ok(step)
    }

    /// Checks `given_answer` against the active question and returns whether
    /// it was correct. The question is consumed, so answering twice fails.
    pub fn submit_answer(&mut self, given_answer: bool) -> Result<bool, RoundError> {
        if self.phase != RoundPhase::QuestionActive {
            log::debug!("Ignoring answer submitted in phase {}", self.phase);
            return Err(RoundError::NoActiveQuestion);
        }
        let Some(question) = self.state.current_question.take() else {
            return Err(RoundError::NoActiveQuestion);
        };

        let is_correct = question.is_correct(given_answer);
        if is_correct {
            self.state.correct_answers += 1;
        }
        self.phase = RoundPhase::ShowingResult;
        self.emit(RoundEvent::AnswerChecked {
            index: self.state.current_question_index,
            is_correct,
        });
        Ok(is_correct)
    }

    pub fn advance(&mut self) -> Result<RoundProgress, RoundError> {
        match self.phase {
            RoundPhase::ShowingResult => {}
            RoundPhase::RoundComplete => return Err(RoundError::RoundComplete),
            _ => return Err(RoundError::NoAnswerPending),
        }

        if self.state.current_question_index == self.questions_amount - 1 {
            let result = GameResult::new(
                self.state.correct_answers,
                self.questions_amount as u32,
                Utc::now(),
            );
            self.phase = RoundPhase::RoundComplete;
            log::info!("Round {} over: {result}", self.round_id);
            self.emit(RoundEvent::RoundFinished {
                round_id: self.round_id,
                result,
            });
            return Ok(RoundProgress::Finished(result));
        }

        self.state.current_question_index += 1;
        self.phase = RoundPhase::AwaitingQuestion;
        let index = self.state.current_question_index;
        self.emit(RoundEvent::QuestionRequested { index });
        Ok(RoundProgress::NextQuestion { index })
    }

    fn emit(&mut self, event: RoundEvent) {
        log::debug!("{event}");
        for listener in self.listeners.iter_mut() {
            listener.on_event(&event);
        }
        self.history.push(event);
    }
}

impl Display for RoundController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let events_str = self.history.iter().map(|ev| format!("  {ev}")).join("\n");
        write!(
            f,
            "\nRound {} ({}): question {}/{}, correct {}\nEvents:\n{}",
            self.round_id,
            self.phase,
            self.state.current_question_index + 1,
            self.questions_amount,
            self.state.correct_answers,
            events_str
        )
    }
}
