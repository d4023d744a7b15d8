//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either in a full-screen TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::{DEFAULT_ROWS, Game, GameConfig},
    interactive::{App, run_tui},
    wordlists::{
        AnswerSource, Dictionary, FixedWordSource, RandomWordSource,
        loader::{embedded, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guess rows
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Seed for a reproducible sequence of answers
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Play a fixed answer instead of a random one
    #[arg(long, global = true, conflicts_with = "seed")]
    answer: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-by-line mode without TUI
    Simple,
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => embedded().context("embedded word list is invalid"),
        path => load_from_file(path).with_context(|| format!("cannot use word list '{path}'")),
    }
}

/// Pick the answer source from --answer / --seed
fn build_source(cli: &Cli, dictionary: Dictionary) -> Result<AnswerSource> {
    if let Some(answer) = &cli.answer {
        let word = Word::new(answer).with_context(|| format!("invalid --answer '{answer}'"))?;
        return Ok(AnswerSource::Fixed(FixedWordSource::single(word)));
    }

    Ok(match cli.seed {
        Some(seed) => AnswerSource::Seeded(RandomWordSource::seeded(dictionary, seed)),
        None => AnswerSource::Random(RandomWordSource::new(dictionary)),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.rows).context("invalid --rows")?;
    let dictionary = load_dictionary(&cli.wordlist)?;
    log::info!("Dictionary ready with {} words", dictionary.len());

    let source = build_source(&cli, dictionary)?;
    let mut game = Game::new(config, source);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => run_simple(&mut game),
    }
}
