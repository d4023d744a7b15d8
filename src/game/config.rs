//! Game configuration

use crate::core::WORD_LENGTH;
use crate::error::ConfigError;

/// Number of guess rows in a standard game
pub const DEFAULT_ROWS: usize = 6;

/// Immutable settings for a `Game`
///
/// Word length is fixed at `WORD_LENGTH`; only the row count varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidRows` if `rows` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GameConfig;
    ///
    /// assert_eq!(GameConfig::new(8).unwrap().rows(), 8);
    /// assert!(GameConfig::new(0).is_err());
    /// ```
    pub fn new(rows: usize) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::InvalidRows(rows));
        }
        Ok(Self { rows })
    }

    #[inline]
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn columns(self) -> usize {
        WORD_LENGTH
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}
