//! Formatting utilities for terminal output

use crate::core::{CellFeedback, Letter, Row, RowFeedback};
use colored::{ColoredString, Colorize};

/// Format one cell as " X " with a background matching its feedback
#[must_use]
pub fn colored_cell(letter: Option<Letter>, feedback: CellFeedback) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', Letter::as_char));
    match feedback {
        CellFeedback::Correct => text.black().on_green().bold(),
        CellFeedback::Present => text.black().on_yellow().bold(),
        CellFeedback::Absent => text.white().on_bright_black(),
        CellFeedback::Unknown => text.normal(),
    }
}

/// Format a full row of cells
#[must_use]
pub fn colored_row(row: &Row, feedback: &RowFeedback) -> String {
    row.iter()
        .zip(feedback)
        .map(|(&letter, &cell)| colored_cell(letter, cell).to_string())
        .collect()
}
