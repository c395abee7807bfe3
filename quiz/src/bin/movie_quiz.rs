use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use database::{DatabaseConfig, SqliteStore, StatisticsStore};
use quiz::{play_rounds, FixedQuestions, MovieCatalogue, QuizConfig, QuizError};
use strategies::{confirm, ConstantStrategy, InputStrategy, RandomStrategy};
use types::{AnswerStrategy, QuestionSource, RoundController, RoundEvent, RoundListener};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    Input,
    Random,
    Yes,
    No,
}

#[derive(Parser, Debug)]
#[command(about = "Movie trivia quiz with persistent statistics")]
struct Params {
    /// YAML file with quiz settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite file for statistics (falls back to DATABASE_URL)
    #[arg(short, long)]
    database_url: Option<String>,

    /// YAML movie catalogue to build questions from
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// YAML list of prepared questions, used instead of a catalogue
    #[arg(long)]
    questions: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = StrategyKind::Input)]
    strategy: StrategyKind,

    /// Number of rounds to play; by default interactive players are asked
    #[arg(short, long)]
    rounds: Option<usize>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    questions_amount: Option<usize>,
}

/// Prints answer feedback, the terminal stand-in for the coloured border.
#[derive(Debug, Default)]
struct TerminalFeedback {}

impl RoundListener for TerminalFeedback {
    fn on_event(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::AnswerChecked { is_correct: true, .. } => println!("Correct!"),
            RoundEvent::AnswerChecked { is_correct: false, .. } => println!("Wrong!"),
            RoundEvent::QuestionUnavailable { index } => {
                println!("Could not load question #{}", index + 1)
            }
            _ => {}
        }
    }
}

fn load_config(args: &Params) -> Result<QuizConfig, QuizError> {
    let mut config = match &args.config {
        Some(path) => QuizConfig::from_yaml_file(path)?,
        None => QuizConfig::default(),
    };
    if let Some(amount) = args.questions_amount {
        config.questions_amount = amount;
    }
    if let Some(ms) = args.delay_ms {
        config.answer_delay_ms = ms;
    }
    if args.catalogue.is_some() || args.questions.is_some() {
        config.catalogue = args.catalogue.clone();
        config.questions = args.questions.clone();
    }
    config.validate()?;
    Ok(config)
}

fn make_source(config: &QuizConfig) -> Result<Box<dyn QuestionSource>, QuizError> {
    Ok(match (&config.questions, &config.catalogue) {
        (Some(path), _) => Box::new(FixedQuestions::from_yaml_file(path)?),
        (None, Some(path)) => Box::new(MovieCatalogue::from_yaml_file(path)?),
        (None, None) => Box::new(MovieCatalogue::builtin()),
    })
}

fn make_strategy(kind: StrategyKind) -> Box<dyn AnswerStrategy> {
    match kind {
        StrategyKind::Input => Box::new(InputStrategy::default()),
        StrategyKind::Random => Box::new(RandomStrategy::default()),
        StrategyKind::Yes => Box::new(ConstantStrategy::yes()),
        StrategyKind::No => Box::new(ConstantStrategy::no()),
    }
}

async fn run(args: Params) -> Result<(), QuizError> {
    let config = load_config(&args)?;
    log::info!("config: {config:?}");

    let db_config =
        DatabaseConfig::from_cli_or_env_or_yaml(args.database_url.clone(), config.database_url.clone());
    let store = SqliteStore::connect(&db_config).await?;
    let pool = store.pool().clone();
    let outcome = play(&args, &config, store).await;
    pool.close().await;
    outcome
}

async fn play(args: &Params, config: &QuizConfig, store: SqliteStore) -> Result<(), QuizError> {
    let mut stats = StatisticsStore::open(store).await?;
    let mut source = make_source(config)?;
    let mut strategy = make_strategy(args.strategy);
    let mut controller = RoundController::new(config.questions_amount);
    controller.subscribe(Box::new(TerminalFeedback::default()));

    let summaries = play_rounds(
        &mut controller,
        source.as_mut(),
        strategy.as_mut(),
        &mut stats,
        config.answer_delay(),
        |summary, rounds_played| {
            println!("\n{summary}\n");
            match args.rounds {
                Some(rounds) => rounds_played < rounds,
                None if args.strategy == StrategyKind::Input => {
                    confirm(&format!("{}? (yes/no)", summary.button_text))
                }
                None => false,
            }
        },
    )
    .await?;
    log::info!("Played {} rounds", summaries.len());
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");
    if let Err(err) = run(args).await {
        log::error!("{err}");
        eprintln!("movie_quiz: {err}");
        std::process::exit(1);
    }
}
