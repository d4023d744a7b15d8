//! Startup configuration errors
//!
//! These are the only failures the game can report. Once a round is running,
//! invalid input is ignored rather than surfaced as an error.

use crate::core::WordError;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The dictionary has no words, so no answer can be chosen
    EmptyDictionary,
    /// A board needs at least one row
    InvalidRows(usize),
    /// A dictionary entry is not a five-letter word
    MalformedWord {
        line: usize,
        word: String,
        reason: WordError,
    },
    /// The word list file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary contains no words"),
            Self::InvalidRows(rows) => {
                write!(f, "Board must have at least one row, got {rows}")
            }
            Self::MalformedWord { line, word, reason } => {
                write!(f, "Invalid dictionary word '{word}' on line {line}: {reason}")
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedWord { reason, .. } => Some(reason),
            Self::Io { source, .. } => Some(source),
            Self::EmptyDictionary | Self::InvalidRows(_) => None,
        }
    }
}
