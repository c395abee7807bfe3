use std::time::Duration;

use database::{KeyValueStore, StatisticsStore};
use tokio::time::sleep;
use types::{AnswerStrategy, QuestionSource, RoundController, RoundProgress};

use crate::{QuizError, RoundSummary};

/// Plays one full round and records its result.
///
/// `answer_delay` is how long the answer feedback is left on screen before
/// moving on; zero skips the pause. If the source runs out of questions the
/// round is abandoned and nothing is recorded.
pub async fn run_round<S: KeyValueStore>(
    controller: &mut RoundController,
    source: &mut dyn QuestionSource,
    strategy: &mut dyn AnswerStrategy,
    stats: &mut StatisticsStore<S>,
    answer_delay: Duration,
) -> Result<RoundSummary, QuizError> {
    controller.begin_round();
    loop {
        let question = source.request_next_question().await;
        let step = controller.deliver_question(question)?;

        let answer = strategy.select_answer(&step);
        let is_correct = controller.submit_answer(answer)?;
        log::info!(
            "{}: answered {} ({})",
            step.question_number,
            if answer { "yes" } else { "no" },
            if is_correct { "correct" } else { "wrong" }
        );

        if !answer_delay.is_zero() {
            sleep(answer_delay).await;
        }

        match controller.advance()? {
            RoundProgress::NextQuestion { index } => {
                log::debug!("Moving on to question #{}", index + 1);
            }
            RoundProgress::Finished(result) => {
                stats.record_round(result).await?;
                return Ok(RoundSummary::new(&result, stats));
            }
        }
    }
}

/// Plays rounds until `play_again` declines or the source runs out.
///
/// `play_again` sees each finished round's summary and the number of rounds
/// played so far. A missing question ends the session without an error: the
/// unfinished round is dropped and the summaries of the finished ones are
/// returned.
pub async fn play_rounds<S, F>(
    controller: &mut RoundController,
    source: &mut dyn QuestionSource,
    strategy: &mut dyn AnswerStrategy,
    stats: &mut StatisticsStore<S>,
    answer_delay: Duration,
    mut play_again: F,
) -> Result<Vec<RoundSummary>, QuizError>
where
    S: KeyValueStore,
    F: FnMut(&RoundSummary, usize) -> bool,
{
    let mut summaries = Vec::new();
    loop {
        match run_round(controller, source, strategy, stats, answer_delay).await {
            Ok(summary) => {
                let again = play_again(&summary, summaries.len() + 1);
                summaries.push(summary);
                if !again {
                    return Ok(summaries);
                }
            }
            Err(QuizError::QuestionUnavailable { index }) => {
                log::warn!(
                    "No question #{} available, ending after {} rounds",
                    index + 1,
                    summaries.len()
                );
                return Ok(summaries);
            }
            Err(err) => return Err(err),
        }
    }
}
