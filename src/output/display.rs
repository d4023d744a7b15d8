//! Board printing for the line-oriented mode

use super::formatters::colored_row;
use crate::core::row_to_emoji;
use crate::game::{RoundStatus, Snapshot};
use colored::Colorize;
use std::io::{self, Write};

/// Print every row of the board; submitted rows get their emoji feedback
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(32).cyan())?;
    for (index, (row, feedback)) in snapshot.grid.iter().zip(&snapshot.feedback).enumerate() {
        let emoji = if index < snapshot.cursor.row {
            row_to_emoji(feedback)
        } else {
            String::new()
        };
        writeln!(out, "  {}  {emoji}", colored_row(row, feedback))?;
    }
    writeln!(out, "{}", "─".repeat(32).cyan())
}

/// Print the end-of-round banner
///
/// Does nothing while the round is still being played.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_round_result<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    match snapshot.status {
        RoundStatus::Playing => Ok(()),
        RoundStatus::Won => {
            let rows_used = snapshot.cursor.row;
            writeln!(
                out,
                "{}",
                format!(
                    "✅ Solved in {rows_used} {}!",
                    if rows_used == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )
        }
        RoundStatus::Lost => {
            let answer = snapshot
                .revealed_answer()
                .map_or_else(String::new, ToString::to_string);
            writeln!(
                out,
                "{} The answer was {}",
                "❌ Out of guesses.".red().bold(),
                answer.bright_yellow().bold()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Event, Game, GameConfig};
    use crate::wordlists::FixedWordSource;

    fn game() -> Game<FixedWordSource> {
        Game::new(
            GameConfig::default(),
            FixedWordSource::single(Word::new("crane").unwrap()),
        )
    }

    fn play(game: &mut Game<FixedWordSource>, word: &str) {
        for ch in word.chars() {
            game.apply(Event::Letter(ch));
        }
        game.apply(Event::Submit);
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_submitted_feedback() {
        let mut game = game();
        play(&mut game, "CRATE");
        let snapshot = game.snapshot();

        let text = render(|out| print_board(out, &snapshot));
        assert!(text.contains(" C  R  A  T  E   🟩🟩🟩⬛🟩"));
        assert_eq!(text.matches("🟩").count(), 4);
    }

    #[test]
    fn won_banner() {
        let mut game = game();
        play(&mut game, "CRANE");
        let snapshot = game.snapshot();

        let text = render(|out| print_round_result(out, &snapshot));
        assert!(text.contains("Solved in 1 guess!"));
    }

    #[test]
    fn lost_banner_reveals_answer() {
        let mut game = game();
        for _ in 0..6 {
            play(&mut game, "BLIMP");
        }
        let snapshot = game.snapshot();

        let text = render(|out| print_round_result(out, &snapshot));
        assert!(text.contains("The answer was CRANE"));
    }

    #[test]
    fn playing_prints_nothing() {
        let snapshot = game().snapshot();
        assert!(render(|out| print_round_result(out, &snapshot)).is_empty());
    }
}
