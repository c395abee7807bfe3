use std::time::Duration;

use database::{MemoryStore, StatisticsStore};
use quiz::{play_rounds, run_round, FixedQuestions, MovieCatalogue, QuizConfig, QuizError};
use strategies::{ConstantStrategy, RandomStrategy};
use types::{AnswerStrategy, Question, QuizStep, RoundController, RoundEvent};

/// Answers yes on odd question numbers and no on even ones.
#[derive(Debug, Default)]
struct AlternatingStrategy {}

impl AnswerStrategy for AlternatingStrategy {
    fn select_answer(&mut self, step: &QuizStep) -> bool {
        let number: usize = step
            .question_number
            .split('/')
            .next()
            .and_then(|n| n.parse().ok())
            .expect("question number is index/total");
        number % 2 == 1
    }
}

fn all_yes_questions(n: usize) -> FixedQuestions {
    FixedQuestions::new((0..n).map(|i| {
        Question::new(
            format!("movie_{i}.jpg"),
            "Is the rating of this movie greater than 6?",
            true,
        )
    }))
}

async fn memory_stats() -> StatisticsStore<MemoryStore> {
    StatisticsStore::open(MemoryStore::new())
        .await
        .expect("Memory statistics should open")
}

#[tokio::test]
async fn test_alternating_round() {
    let mut controller = RoundController::default();
    let mut source = all_yes_questions(10);
    let mut strategy = AlternatingStrategy::default();
    let mut stats = memory_stats().await;

    let summary = run_round(
        &mut controller,
        &mut source,
        &mut strategy,
        &mut stats,
        Duration::ZERO,
    )
    .await
    .expect("Round should complete");

    assert_eq!(controller.state().correct_answers, 5);
    assert_eq!(stats.games_count(), 1);
    assert_eq!(stats.correct_answers(), 5);
    assert!(summary.message.starts_with("Your result: 5/10\nQuizzes played: 1\n"));
    assert!(summary.message.ends_with("Average accuracy: 50.00%"));

    let finished: Vec<_> = controller
        .history
        .iter()
        .filter_map(|ev| match ev {
            RoundEvent::RoundFinished { result, .. } => Some(*result),
            _ => None,
        })
        .collect();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].correct(), 5);
}

#[tokio::test]
async fn test_rounds_accumulate_statistics() {
    let mut controller = RoundController::default();
    let mut source = all_yes_questions(30);
    let mut stats = memory_stats().await;

    for (strategy, expected_games) in [
        (Box::new(ConstantStrategy::yes()) as Box<dyn AnswerStrategy>, 1),
        (Box::new(ConstantStrategy::no()) as Box<dyn AnswerStrategy>, 2),
        (Box::new(AlternatingStrategy::default()) as Box<dyn AnswerStrategy>, 3),
    ] {
        let mut strategy = strategy;
        run_round(
            &mut controller,
            &mut source,
            strategy.as_mut(),
            &mut stats,
            Duration::ZERO,
        )
        .await
        .expect("Round should complete");
        assert_eq!(stats.games_count(), expected_games);
    }

    assert_eq!(stats.correct_answers(), 15);
    assert_eq!(stats.current_best().correct(), 10);
    assert_eq!(format!("{:.2}", stats.current_accuracy()), "50.00");
}

#[tokio::test]
async fn test_source_running_dry_records_nothing() {
    let mut controller = RoundController::default();
    let mut source = all_yes_questions(4);
    let mut strategy = ConstantStrategy::yes();
    let mut stats = memory_stats().await;

    let err = run_round(
        &mut controller,
        &mut source,
        &mut strategy,
        &mut stats,
        Duration::ZERO,
    )
    .await
    .expect_err("Round cannot finish with four questions");

    assert!(matches!(err, QuizError::QuestionUnavailable { index: 4 }));
    assert_eq!(controller.state().current_question_index, 4);
    assert_eq!(controller.state().correct_answers, 4);
    assert_eq!(stats.games_count(), 0);
}

#[tokio::test]
async fn test_session_ends_quietly_when_questions_run_out() {
    let mut controller = RoundController::default();
    let mut source = all_yes_questions(13);
    let mut strategy = ConstantStrategy::yes();
    let mut stats = memory_stats().await;
    let mut asked = Vec::new();

    let summaries = play_rounds(
        &mut controller,
        &mut source,
        &mut strategy,
        &mut stats,
        Duration::ZERO,
        |_, rounds_played| {
            asked.push(rounds_played);
            true
        },
    )
    .await
    .expect("Running out of questions is not an error");

    assert_eq!(summaries.len(), 1);
    assert_eq!(asked, vec![1]);
    assert_eq!(stats.games_count(), 1);
    assert_eq!(stats.correct_answers(), 10);
    assert!(controller
        .history
        .iter()
        .any(|ev| matches!(ev, RoundEvent::QuestionUnavailable { index: 3 })));
}

#[tokio::test]
async fn test_session_with_short_source_plays_no_round() {
    let mut controller = RoundController::default();
    let mut source = all_yes_questions(3);
    let mut strategy = ConstantStrategy::yes();
    let mut stats = memory_stats().await;

    let summaries = play_rounds(
        &mut controller,
        &mut source,
        &mut strategy,
        &mut stats,
        Duration::ZERO,
        |_, _| true,
    )
    .await
    .expect("Running out of questions is not an error");

    assert!(summaries.is_empty());
    assert_eq!(stats.games_count(), 0);
}

#[tokio::test]
async fn test_session_stops_when_player_declines() {
    let mut controller = RoundController::new(2);
    let mut source = all_yes_questions(100);
    let mut strategy = ConstantStrategy::yes();
    let mut stats = memory_stats().await;

    let summaries = play_rounds(
        &mut controller,
        &mut source,
        &mut strategy,
        &mut stats,
        Duration::ZERO,
        |_, rounds_played| rounds_played < 3,
    )
    .await
    .expect("Session should finish");

    assert_eq!(summaries.len(), 3);
    assert_eq!(stats.games_count(), 3);
    assert_eq!(format!("{:.2}", stats.current_accuracy()), "100.00");
}

#[tokio::test]
async fn test_catalogue_round_with_delay() {
    let mut controller = RoundController::new(3);
    let mut source = MovieCatalogue::with_seed(MovieCatalogue::builtin().movies().to_vec(), 42);
    let mut strategy = RandomStrategy::default();
    let mut stats = StatisticsStore::open(MemoryStore::new()).await.unwrap();

    let start = std::time::Instant::now();
    run_round(
        &mut controller,
        &mut source,
        &mut strategy,
        &mut stats,
        Duration::from_millis(10),
    )
    .await
    .expect("Catalogue never runs dry");

    assert!(start.elapsed() >= Duration::from_millis(30));
    assert!(controller.is_complete());
    assert_eq!(stats.games_count(), 1);
    assert!(stats.correct_answers() <= 3);
}

#[test]
fn test_example_config_parses() {
    let config = QuizConfig::from_yaml_str(include_str!("../data/quiz.yaml"))
        .expect("Example config should be valid");
    assert_eq!(config.questions_amount, 10);
}
