//! Wordle - CLI
//!
//! Terminal Wordle with TUI and line-based console modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use wordle_game::{
    config::{GameConfig, StatsLocation},
    controller::SessionController,
    output::{ConsoleFrontend, print_statistics},
    stats::{JsonStatsStore, MemoryStatsStore, StatisticsTracker, StatsStore},
    wordlists::WordStore,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list (one word per line); requires --extras
    #[arg(short = 'a', long, global = true, requires = "extras")]
    answers: Option<std::path::PathBuf>,

    /// Extra accepted guesses (one word per line); requires --answers
    #[arg(short = 'e', long, global = true, requires = "answers")]
    extras: Option<std::path::PathBuf>,

    /// Statistics file (default: platform data directory)
    #[arg(short = 's', long, global = true)]
    stats: Option<std::path::PathBuf>,

    /// Keep statistics in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based console mode
    Console,

    /// Print saved statistics
    Stats,

    /// Zero saved statistics
    ResetStats,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG still overrides the flag when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::from_parts(cli.answers, cli.extras, cli.stats, cli.no_save);
    log::debug!("configuration: {config:?}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match config.stats {
        StatsLocation::File(path) => {
            run_command(command, &config.words, JsonStatsStore::with_path(path))
        }
        StatsLocation::Memory => {
            run_command(command, &config.words, MemoryStatsStore::default())
        }
    }
}

fn run_command<S: StatsStore>(
    command: Commands,
    words: &wordle_game::config::WordSource,
    store: S,
) -> Result<()> {
    match command {
        Commands::Play => {
            let words = load_words(words)?;
            wordle_game::interactive::run_tui(&words, store)
        }
        Commands::Console => {
            let words = load_words(words)?;
            SessionController::new(&words, store, ConsoleFrontend::stdio()).run()
        }
        Commands::Stats => {
            let tracker = StatisticsTracker::load_from(&store);
            print_statistics(&tracker.stats()).context("Failed to print statistics")
        }
        Commands::ResetStats => {
            let mut tracker = StatisticsTracker::load_from(&store);
            tracker.reset();
            tracker
                .save_to(&store)
                .context("Failed to save reset statistics")?;
            println!("Statistics reset.");
            Ok(())
        }
    }
}

fn load_words(source: &wordle_game::config::WordSource) -> Result<WordStore> {
    let words = source.load().context("Failed to load word lists")?;
    if words.answer_count() == 0 {
        log::warn!("answer list is empty, rounds cannot start");
    }
    Ok(words)
}
