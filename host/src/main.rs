use std::path::PathBuf;

use anyhow::Context;
use bingo::{
    duplicate_keywords, load_chance_cards_from, next_board, ChanceDeck, GameSession, JsonFile,
    QuestionSource,
};
use bingo_host::Console;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the question bank, a JSON array of questions
    question_bank: PathBuf,

    /// Path to a JSON array of chance card texts
    #[arg(short, long)]
    chance_cards: Option<PathBuf>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Play on a smaller board if the bank has fewer than 25 questions
    #[arg(long, default_value_t = false)]
    allow_short_board: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut source = JsonFile::new(&args.question_bank);
    let mut bank = source.fetch()?;
    let duplicates = duplicate_keywords(&bank);
    if !duplicates.is_empty() {
        warn!(?duplicates, "Question bank has duplicate keywords");
    }
    let board = next_board(&mut bank, &mut rng, !args.allow_short_board)
        .context("Could not set up the board")?;
    info!(cells = board.len(), "Board sampled");

    let chance_deck = match &args.chance_cards {
        Some(path) => Some(ChanceDeck::shuffled(load_chance_cards_from(path)?, &mut rng)),
        None => None,
    };

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let summary = Console::new(GameSession::new(board), chance_deck, stdin, stdout).run()?;

    match summary.win {
        Some(win) => eprintln!("{} won with {}", win.team, win.line),
        None => eprintln!("No winner"),
    }
    eprintln!(
        "Cells claimed: {} by Team A, {} by Team B",
        summary.cells[0], summary.cells[1]
    );
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout is the operator console, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
