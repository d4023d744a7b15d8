//! Core domain types for the game
//!
//! Letters, words, the board grid and row scoring. Everything here is pure
//! and has no dependencies on the terminal or the word source.

mod board;
mod feedback;
mod word;

pub use board::{Board, Cursor, Row};
pub use feedback::{CellFeedback, RowFeedback, UNKNOWN_ROW, row_to_emoji, score};
pub use word::{Letter, WORD_LENGTH, Word, WordError};
