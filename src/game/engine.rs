//! Round state machine
//!
//! Owns the answer, the board and the round status, and applies one event at
//! a time. Every (status, event) pair is handled: events that make no sense in
//! the current state are ignored and leave the game untouched.

use super::{Event, GameConfig, Outcome, RoundStatus, Snapshot};
use crate::core::{Board, Cursor, Letter, RowFeedback, UNKNOWN_ROW, Word, row_to_emoji, score};
use crate::wordlists::WordSource;

/// A single-player game, one round at a time
pub struct Game<S: WordSource> {
    config: GameConfig,
    source: S,
    answer: Word,
    board: Board,
    feedback: Vec<RowFeedback>,
    status: RoundStatus,
}

impl<S: WordSource> Game<S> {
    /// Start the first round with an answer drawn from `source`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Event, Game, GameConfig, RoundStatus};
    /// use wordle_game::wordlists::FixedWordSource;
    ///
    /// let source = FixedWordSource::single(Word::new("crane").unwrap());
    /// let mut game = Game::new(GameConfig::default(), source);
    ///
    /// for ch in "CRANE".chars() {
    ///     game.apply(Event::Letter(ch));
    /// }
    /// game.apply(Event::Submit);
    ///
    /// assert_eq!(game.status(), RoundStatus::Won);
    /// ```
    pub fn new(config: GameConfig, mut source: S) -> Self {
        let answer = source.pick_answer();
        let game = Self {
            config,
            source,
            answer,
            board: Board::new(config.rows()),
            feedback: Vec::with_capacity(config.rows()),
            status: RoundStatus::Playing,
        };
        game.log_round_start();
        game
    }

    /// Apply one input event
    ///
    /// Returns `Outcome::Quit` for `Event::Quit` in any state; the caller owns
    /// the loop and decides how to exit.
    pub fn apply(&mut self, event: Event) -> Outcome {
        let outcome = match event {
            Event::Letter(ch) => Letter::new(ch).is_some_and(|letter| self.set_cell(letter)).into(),
            Event::Backspace => self.clear_cell().into(),
            Event::Submit => self.submit_row().into(),
            Event::Reset => {
                self.reset();
                Outcome::Applied
            }
            Event::Quit => Outcome::Quit,
        };

        match outcome {
            Outcome::Ignored => log::debug!("Ignored {event:?} while {}", self.status),
            _ => log::debug!("Applied {event:?}, cursor now {:?}", self.board.cursor()),
        }
        outcome
    }

    /// Write a letter at the cursor
    ///
    /// Ignored unless the round is in progress and the current row has room.
    pub fn set_cell(&mut self, letter: Letter) -> bool {
        self.status == RoundStatus::Playing && self.board.set_cell(letter)
    }

    /// Backspace within the current row
    pub fn clear_cell(&mut self) -> bool {
        self.status == RoundStatus::Playing && self.board.clear_cell()
    }

    /// Submit the current row
    ///
    /// Only valid while playing with a full row. Scores the row, moves the
    /// cursor to the next row and settles the round if it is won or the board
    /// is exhausted.
    pub fn submit_row(&mut self) -> bool {
        if self.status != RoundStatus::Playing {
            return false;
        }

        let row = self.board.cursor().row;
        let Some(letters) = self.board.advance_row() else {
            return false;
        };

        let feedback = score(&letters, &self.answer);
        self.feedback.push(feedback);
        log::debug!(
            "Row {} submitted: {} {}",
            row + 1,
            self.board.row_text(row),
            row_to_emoji(&feedback)
        );

        // Whole-row text comparison, independent of the per-cell feedback
        if self.board.row_text(row) == self.answer.text() {
            self.status = RoundStatus::Won;
            log::info!("Round won in {} of {} rows", row + 1, self.config.rows());
        } else if self.board.cursor().row == self.config.rows() {
            self.status = RoundStatus::Lost;
            log::info!("Round lost after {} rows", self.config.rows());
        }

        true
    }

    /// Start a new round: fresh answer, empty board, cursor at (0, 0)
    pub fn reset(&mut self) {
        self.answer = self.source.pick_answer();
        self.board.clear();
        self.feedback.clear();
        self.status = RoundStatus::Playing;
        self.log_round_start();
    }

    /// Copy of the current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let feedback = (0..self.config.rows())
            .map(|row| self.feedback_for(row))
            .collect();

        Snapshot {
            grid: self.board.cells().to_vec(),
            feedback,
            cursor: self.board.cursor(),
            status: self.status,
            answer: self.answer.clone(),
        }
    }

    /// Feedback for a row; `Unknown` until the row has been submitted
    #[must_use]
    pub fn feedback_for(&self, row: usize) -> RowFeedback {
        self.feedback.get(row).copied().unwrap_or(UNKNOWN_ROW)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.board.cursor()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    fn log_round_start(&self) {
        log::info!(
            "New round: {} rows of {} letters",
            self.config.rows(),
            self.config.columns()
        );
        log::trace!("Answer is {}", self.answer);
    }
}
