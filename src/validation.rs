//! Word validation applied before a word is recorded.

use crate::error::{Result, WordCountError};

/// Message for an absent or empty word.
pub const EMPTY_WORD: &str = "word is null or empty";

/// Message for a word containing anything but ASCII letters.
pub const NON_ALPHABETIC_WORD: &str = "word contains non-alphabetic characters";

/// Check that `word` is present, non-empty and made of ASCII letters only.
///
/// Returns the borrowed word on success so callers can chain on it.
pub fn validate_word(word: Option<&str>) -> Result<&str> {
    let word = match word {
        Some(w) if !w.is_empty() => w,
        _ => return Err(WordCountError::invalid_input(EMPTY_WORD)),
    };

    if !is_alphabetic(word) {
        return Err(WordCountError::invalid_input(NON_ALPHABETIC_WORD));
    }

    Ok(word)
}

/// `A-Z` / `a-z` only. Vacuously true for the empty string.
pub fn is_alphabetic(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_alphabetic())
}
