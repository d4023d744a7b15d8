//! Read-only view of a game for rendering

use super::RoundStatus;
use crate::core::{CellFeedback, Cursor, Letter, Row, RowFeedback, WORD_LENGTH, Word};

/// Everything a presentation layer needs to draw one frame
///
/// `feedback` holds `Unknown` for every row at or below the cursor row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Vec<Row>,
    pub feedback: Vec<RowFeedback>,
    pub cursor: Cursor,
    pub status: RoundStatus,
    pub answer: Word,
}

impl Snapshot {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Letter> {
        self.grid.get(row).and_then(|r| r.get(col).copied().flatten())
    }

    #[must_use]
    pub fn cell_feedback(&self, row: usize, col: usize) -> CellFeedback {
        self.feedback
            .get(row)
            .and_then(|r| r.get(col).copied())
            .unwrap_or_default()
    }

    /// Whether the row being typed is complete and waiting for submit
    #[must_use]
    pub fn awaiting_submit(&self) -> bool {
        self.status == RoundStatus::Playing && self.cursor.col == WORD_LENGTH
    }

    /// The answer, but only once the round is lost
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        (self.status == RoundStatus::Lost).then_some(&self.answer)
    }
}
