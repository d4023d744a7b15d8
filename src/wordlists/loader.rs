//! Word list loading utilities
//!
//! Builds a `Dictionary` from a file or from the embedded list.

use super::{Dictionary, WORDS};
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Load a dictionary from a newline-separated word list file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, and the errors of
/// `Dictionary::parse` if its contents are not a valid word list.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::parse(&content)?;
    log::info!("Loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Convert a string slice list to a dictionary
///
/// # Errors
///
/// Same as `Dictionary::parse`: malformed entries and empty lists are rejected.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(&["crane", "slate"]).unwrap();
/// assert_eq!(dictionary.len(), 2);
/// ```
pub fn dictionary_from_slice(slice: &[&str]) -> Result<Dictionary, ConfigError> {
    Dictionary::parse(&slice.join("\n"))
}

/// The dictionary compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded list itself is malformed, which the test suite guards against.
pub fn embedded() -> Result<Dictionary, ConfigError> {
    dictionary_from_slice(WORDS)
}
