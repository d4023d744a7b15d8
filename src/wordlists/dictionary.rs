//! Validated answer dictionary

use crate::core::Word;
use crate::error::ConfigError;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A non-empty list of candidate answers
///
/// Construction fails on an empty list, so picking from a `Dictionary`
/// always yields a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Wrap a list of words
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyDictionary` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    /// Parse newline-separated words, skipping blank lines
    ///
    /// # Errors
    /// Returns `ConfigError::MalformedWord` for the first line that is not a
    /// five-letter word, or `ConfigError::EmptyDictionary` if nothing remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("crane\n\nslate\n").unwrap();
    /// assert_eq!(dictionary.len(), 2);
    ///
    /// assert!(Dictionary::parse("crane\nbad\n").is_err());
    /// assert!(Dictionary::parse("\n\n").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let words = content
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line, text)| {
                Word::new(text).map_err(|reason| ConfigError::MalformedWord {
                    line,
                    word: text.to_string(),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(words)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Pick a word uniformly at random
    ///
    /// # Panics
    /// Will not panic - the dictionary is never empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("dictionary is never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(ConfigError::EmptyDictionary)
        ));
    }

    #[test]
    fn parse_normalizes_case_and_skips_blanks() {
        let dictionary = Dictionary::parse("  Crane \n\nSLATE\n").unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE"]);
    }

    #[test]
    fn parse_reports_malformed_line_number() {
        let err = Dictionary::parse("crane\n\nsl8te\n").unwrap_err();
        match err {
            ConfigError::MalformedWord { line, word, .. } => {
                assert_eq!(line, 3);
                assert_eq!(word, "sl8te");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            Dictionary::parse("crane\ncranes\n"),
            Err(ConfigError::MalformedWord { line: 2, .. })
        ));
    }

    #[test]
    fn choose_returns_member() {
        let dictionary = Dictionary::parse("crane\nslate\naudio\n").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(dictionary.contains(dictionary.choose(&mut rng)));
        }
    }

    #[test]
    fn choose_single_word() {
        let dictionary = Dictionary::parse("crane").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(dictionary.choose(&mut rng).text(), "CRANE");
    }
}
