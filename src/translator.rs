//! Canonical-form lookup consumed by the word counter.
//!
//! A [`Translator`] maps a surface word to its canonical form, for example
//! by resolving synonyms or translating across languages to a common root.
//! Two stored words are counted together when their canonical forms are
//! equal ignoring case.
//!
//! # Examples
//!
//! ```
//! use synocount::translator::{DictionaryTranslator, Translator};
//!
//! let dict = DictionaryTranslator::from_synonym_groups(vec![vec![
//!     "flower".to_string(),
//!     "flor".to_string(),
//!     "blume".to_string(),
//! ]]);
//!
//! assert_eq!(dict.translate("blume").unwrap(), "flower");
//! assert_eq!(dict.translate("bread").unwrap(), "bread");
//! ```

pub mod dictionary;

pub use dictionary::DictionaryTranslator;

use crate::error::Result;

/// Maps a word to its canonical form.
///
/// Implementations are shared between threads and may be called repeatedly
/// with the same input, so they must be free of side effects that would
/// change the result.
pub trait Translator: Send + Sync {
    /// Return the canonical form of `word`.
    fn translate(&self, word: &str) -> Result<String>;
}

/// Any infallible `Fn(&str) -> String` can act as a translator.
impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, word: &str) -> Result<String> {
        Ok(self(word))
    }
}

/// Returns every word unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, word: &str) -> Result<String> {
        Ok(word.to_string())
    }
}
