//! Per-letter feedback for a submitted row
//!
//! Scoring uses two passes:
//! 1. Letters in the same position as the answer are `Correct`
//! 2. Every other letter is `Present` if it occurs anywhere in the answer,
//!    otherwise `Absent`
//!
//! The second pass is a plain containment test. Letter counts are not
//! consumed, so a guess with a repeated letter marks every extra copy as
//! `Present` even when the answer holds only one.

use super::{Letter, WORD_LENGTH, Word};

/// Classification of a single board cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellFeedback {
    /// Row has not been submitted yet
    #[default]
    Unknown,
    /// Letter does not occur in the answer (gray)
    Absent,
    /// Letter occurs in the answer at another position (yellow)
    Present,
    /// Letter is in the correct position (green)
    Correct,
}

/// Feedback for one row of the board
pub type RowFeedback = [CellFeedback; WORD_LENGTH];

/// Feedback for a row that has not been evaluated
pub const UNKNOWN_ROW: RowFeedback = [CellFeedback::Unknown; WORD_LENGTH];

impl CellFeedback {
    /// Emoji square used when printing a row
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unknown => '⬜',
        }
    }
}

/// Score a guessed row against the answer
///
/// # Examples
/// ```
/// use wordle_game::core::{CellFeedback::*, Word, score};
///
/// let guess = Word::new("crate").unwrap();
/// let answer = Word::new("crane").unwrap();
///
/// assert_eq!(
///     score(guess.letters(), &answer),
///     [Correct, Correct, Correct, Absent, Correct]
/// );
/// ```
#[must_use]
pub fn score(guess: &[Letter; WORD_LENGTH], answer: &Word) -> RowFeedback {
    let mut result = UNKNOWN_ROW;

    // First pass: exact position matches
    for ((slot, &letter), &expected) in result.iter_mut().zip(guess).zip(answer.letters()) {
        if letter == expected {
            *slot = CellFeedback::Correct;
        }
    }

    // Second pass: containment anywhere in the answer
    for (slot, &letter) in result.iter_mut().zip(guess) {
        if *slot == CellFeedback::Unknown {
            *slot = if answer.contains(letter) {
                CellFeedback::Present
            } else {
                CellFeedback::Absent
            };
        }
    }

    result
}

/// Convert a row of feedback to emoji, e.g. "🟩🟨⬛🟩🟩"
#[must_use]
pub fn row_to_emoji(feedback: &RowFeedback) -> String {
    feedback.iter().map(|cell| cell.to_emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::CellFeedback::{Absent, Correct, Present, Unknown};
    use super::*;

    fn score_words(guess: &str, answer: &str) -> RowFeedback {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        score(guess.letters(), &answer)
    }

    #[test]
    fn exact_match_is_all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "eerie"] {
            let feedback = score_words(word, word);
            assert_eq!(feedback, [Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        assert_eq!(score_words("blimp", "crane"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn crate_against_crane() {
        assert_eq!(
            score_words("crate", "crane"),
            [Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn misplaced_letters_are_present() {
        // N, E, R, A, C all occur in CRANE but none in place
        assert_eq!(score_words("nerac", "crane"), [Present; WORD_LENGTH]);
    }

    #[test]
    fn repeated_guess_letters_are_not_deduplicated() {
        // CRANE has a single E, yet both non-final E's count as present
        assert_eq!(
            score_words("eerie", "crane"),
            [Present, Present, Present, Absent, Correct]
        );
    }

    #[test]
    fn correct_takes_priority_over_present() {
        // The A in position 2 is correct even though A also appears earlier in the guess
        assert_eq!(
            score_words("aaaaa", "crane"),
            [Present, Present, Correct, Present, Present]
        );
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(
            row_to_emoji(&[Correct, Present, Absent, Unknown, Correct]),
            "🟩🟨⬛⬜🟩"
        );
    }
}
