//! Inputs to the state machine and its round status

use std::fmt;

/// Logical input delivered by a presentation layer
///
/// Raw key codes are mapped to these before reaching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A typed character; only uppercase `A`-`Z` is accepted
    Letter(char),
    Backspace,
    Submit,
    /// Start a new round with a fresh answer
    Reset,
    Quit,
}

/// Result of applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed
    Applied,
    /// Event was invalid in the current state; nothing changed
    Ignored,
    /// The player asked to leave; the caller should stop its loop
    Quit,
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Ignored }
    }
}

/// Status of the current round
///
/// Only `Playing` accepts edits. `Won` and `Lost` are terminal until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Applied);
        assert_eq!(Outcome::from(false), Outcome::Ignored);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!RoundStatus::Playing.is_over());
        assert!(RoundStatus::Won.is_over());
        assert!(RoundStatus::Lost.is_over());
        assert_eq!(RoundStatus::default(), RoundStatus::Playing);
    }
}
