//! Wordle Game
//!
//! Guess the hidden five-letter word in six rows, with per-letter feedback
//! after every submitted row.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Event, Game, GameConfig, RoundStatus};
//! use wordle_game::wordlists::FixedWordSource;
//!
//! let source = FixedWordSource::single(Word::new("crane").unwrap());
//! let mut game = Game::new(GameConfig::default(), source);
//!
//! for ch in "CRATE".chars() {
//!     game.apply(Event::Letter(ch));
//! }
//! game.apply(Event::Submit);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.status, RoundStatus::Playing);
//! assert_eq!(snapshot.cursor.row, 1);
//! ```

// Core domain types
pub mod core;

// Startup errors
pub mod error;

// Round state machine
pub mod game;

// Dictionary and answer selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
