//! Letters and five-letter words
//!
//! A `Letter` is a single uppercase ASCII character. A `Word` is exactly
//! `WORD_LENGTH` letters, normalized to uppercase on construction.

use std::fmt;

/// Number of letters in every word and columns in every board row
pub const WORD_LENGTH: usize = 5;

/// A single uppercase letter `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Accept a character as a board letter
    ///
    /// Only uppercase ASCII `A`-`Z` is accepted. Lowercase input is rejected;
    /// callers that read raw keys are expected to uppercase first.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').map(Letter::as_char), Some('Q'));
    /// assert!(Letter::new('q').is_none());
    /// assert!(Letter::new('1').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Self(ch as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A five-letter word, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        let letters: Vec<Letter> = text
            .chars()
            .map(Letter::new)
            .collect::<Option<_>>()
            .ok_or(WordError::InvalidCharacters)?;
        let letters = letters
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn letter_accepts_only_uppercase() {
        assert_eq!(letter('A').as_char(), 'A');
        assert_eq!(letter('Z').as_char(), 'Z');
        assert!(Letter::new('a').is_none());
        assert!(Letter::new('@').is_none());
        assert!(Letter::new('[').is_none());
        assert!(Letter::new('É').is_none());
        assert!(Letter::new(' ').is_none());
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letter_at(0), letter('C'));
        assert_eq!(word.letter_at(4), letter('E'));
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_non_ascii() {
        // Three-byte character keeps the byte length at five
        assert_eq!(Word::new("ab€"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_skips_unicode_case_mapping() {
        // Full Unicode uppercasing would turn this into "SSTAR"
        assert_eq!(Word::new("ßtar"), Err(WordError::NonAscii));
        assert_eq!(Word::new("ıtems"), Err(WordError::InvalidLength(6)));
    }

    #[test]
    fn word_contains() {
        let word = Word::new("crane").unwrap();
        assert!(word.contains(letter('C')));
        assert!(word.contains(letter('E')));
        assert!(!word.contains(letter('T')));
        assert!(!word.contains(letter('Z')));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
