//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::core::{WORD_LENGTH, Word};
use crate::game::{Event, Game, Outcome, RoundStatus};
use crate::output::{print_board, print_round_result};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: WordSource>(game: &mut Game<S>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, stdin.lock(), stdout.lock())
}

/// Run the simple mode over arbitrary input and output streams
///
/// Each guess line is typed into the game letter by letter and then
/// submitted, exactly as the TUI would deliver key events. Ends on `quit`
/// or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, R, W>(game: &mut Game<S>, mut input: R, mut out: W) -> Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║         Wordle - Simple Mode           ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {} tries.",
        game.config().rows()
    )?;
    writeln!(out, "Commands: 'new' for a new word, 'quit' to exit\n")?;

    loop {
        let snapshot = game.snapshot();
        let prompt = match snapshot.status {
            RoundStatus::Playing => format!("Guess {}", snapshot.cursor.row + 1),
            RoundStatus::Won | RoundStatus::Lost => "Play again? (yes/no)".to_string(),
        };

        let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
            writeln!(out)?;
            return Ok(());
        };
        let command = line.to_lowercase();

        let event = match (snapshot.status, command.as_str()) {
            (_, "quit" | "q" | "exit") => Event::Quit,
            (RoundStatus::Playing, "new" | "n")
            | (RoundStatus::Won | RoundStatus::Lost, "new" | "yes" | "y") => Event::Reset,
            (RoundStatus::Won | RoundStatus::Lost, _) => Event::Quit,
            (RoundStatus::Playing, _) => {
                if let Err(err) = Word::new(&line) {
                    writeln!(out, "{} {err}\n", "❌".red())?;
                    continue;
                }
                submit_guess(game, &line);
                print_board(&mut out, &game.snapshot())?;
                print_round_result(&mut out, &game.snapshot())?;
                continue;
            }
        };

        match game.apply(event) {
            Outcome::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Outcome::Applied => {
                writeln!(out, "\n🔄 New word chosen!\n")?;
            }
            Outcome::Ignored => {}
        }
    }
}

/// Type a validated guess into the current row and submit it
fn submit_guess<S: WordSource>(game: &mut Game<S>, guess: &str) {
    // Start from an empty row in case a previous line left letters behind
    while game.cursor().col > 0 {
        game.apply(Event::Backspace);
    }
    for ch in guess.chars() {
        game.apply(Event::Letter(ch.to_ascii_uppercase()));
    }
    game.apply(Event::Submit);
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
