//! Dictionary and answer selection
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and the `WordSource` implementations that pick each round's answer.

mod dictionary;
mod embedded;
pub mod loader;
mod source;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{AnswerSource, FixedWordSource, RandomWordSource, WordSource};
