//! Letter grid and write cursor
//!
//! The board is `rows` × `WORD_LENGTH` optional letters. Cells are only ever
//! written at the cursor, which moves right on every write and drops to the
//! start of the next row when a full row is committed.

use super::{Letter, WORD_LENGTH};

/// One row of the board; `None` is an empty cell
pub type Row = [Option<Letter>; WORD_LENGTH];

const EMPTY_ROW: Row = [None; WORD_LENGTH];

/// Position of the next writable cell
///
/// `row` ranges over `0..=rows` and `col` over `0..=WORD_LENGTH`. A row of
/// `rows` means every row has been committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Row>,
    cursor: Cursor,
}

impl Board {
    /// Create an empty board
    ///
    /// # Panics
    /// Panics if `rows` is zero. `GameConfig` rejects that value before a
    /// board is ever built.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        assert!(rows > 0, "board needs at least one row");
        Self {
            cells: vec![EMPTY_ROW; rows],
            cursor: Cursor::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Row] {
        &self.cells
    }

    /// Letter at a position, `None` if empty or out of bounds
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Letter> {
        self.cells.get(row).and_then(|r| r.get(col).copied().flatten())
    }

    /// Whether the cursor sits past the last column of a row that can still be committed
    #[must_use]
    pub fn is_current_row_full(&self) -> bool {
        self.cursor.row < self.rows() && self.cursor.col == WORD_LENGTH
    }

    /// Write a letter at the cursor and move right
    ///
    /// Returns `false` without touching the board when the row is already
    /// full or every row has been committed.
    pub fn set_cell(&mut self, letter: Letter) -> bool {
        let Cursor { row, col } = self.cursor;
        if row >= self.rows() || col >= WORD_LENGTH {
            return false;
        }

        self.cells[row][col] = Some(letter);
        self.cursor.col += 1;
        true
    }

    /// Backspace: step left and clear that cell
    ///
    /// At column 0 the first cell is cleared in place and the cursor stays put.
    pub fn clear_cell(&mut self) -> bool {
        if self.cursor.row >= self.rows() {
            return false;
        }

        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        }
        self.cells[self.cursor.row][self.cursor.col] = None;
        true
    }

    /// Commit the current row and move the cursor to the start of the next one
    ///
    /// Returns the committed letters, or `None` if the row is not full.
    pub fn advance_row(&mut self) -> Option<[Letter; WORD_LENGTH]> {
        if !self.is_current_row_full() {
            return None;
        }

        let letters: Vec<Letter> = self.cells[self.cursor.row]
            .iter()
            .copied()
            .collect::<Option<_>>()?;
        let letters = letters.try_into().ok()?;

        self.cursor = Cursor {
            row: self.cursor.row + 1,
            col: 0,
        };
        Some(letters)
    }

    /// Row contents as text, skipping empty cells
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| cells.iter().flatten().map(|l| l.as_char()).collect())
            .unwrap_or_default()
    }

    /// Empty every cell and return the cursor to (0, 0)
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_ROW);
        self.cursor = Cursor::default();
    }
}
