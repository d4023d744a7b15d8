//! Answer sources
//!
//! A `WordSource` hands the game a new hidden answer at the start of every
//! round.

use super::Dictionary;
use crate::core::Word;
use crate::error::ConfigError;
use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Supplies the hidden answer for each round
pub trait WordSource {
    /// Pick the answer for a new round
    fn pick_answer(&mut self) -> Word;
}

/// Uniformly random answers drawn from a dictionary
pub struct RandomWordSource<R: Rng = ThreadRng> {
    dictionary: Dictionary,
    rng: R,
}

impl RandomWordSource<ThreadRng> {
    /// Random answers from the thread-local generator
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rng(dictionary, rand::rng())
    }
}

impl RandomWordSource<StdRng> {
    /// Reproducible answer sequence for a given seed
    #[must_use]
    pub fn seeded(dictionary: Dictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordSource<R> {
    #[must_use]
    pub const fn with_rng(dictionary: Dictionary, rng: R) -> Self {
        Self { dictionary, rng }
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn pick_answer(&mut self) -> Word {
        self.dictionary.choose(&mut self.rng).clone()
    }
}

/// Answers taken in order from a fixed list, wrapping around at the end
#[derive(Debug, Clone)]
pub struct FixedWordSource {
    words: Vec<Word>,
    next: usize,
}

impl FixedWordSource {
    /// # Errors
    /// Returns `ConfigError::EmptyDictionary` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        Ok(Self { words, next: 0 })
    }

    /// Always the same answer
    #[must_use]
    pub fn single(word: Word) -> Self {
        Self {
            words: vec![word],
            next: 0,
        }
    }
}

impl WordSource for FixedWordSource {
    fn pick_answer(&mut self) -> Word {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}

/// Enum wrapper over the answer sources selectable from the command line
///
/// Allows runtime selection while keeping `Game` statically dispatched.
pub enum AnswerSource {
    /// Thread-local randomness (default)
    Random(RandomWordSource<ThreadRng>),
    /// Seeded, reproducible randomness
    Seeded(RandomWordSource<StdRng>),
    /// Fixed answer list
    Fixed(FixedWordSource),
}

impl WordSource for AnswerSource {
    fn pick_answer(&mut self) -> Word {
        match self {
            Self::Random(s) => s.pick_answer(),
            Self::Seeded(s) => s.pick_answer(),
            Self::Fixed(s) => s.pick_answer(),
        }
    }
}
