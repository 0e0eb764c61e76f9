//! Synonym dictionary translator.

use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::error::{Result, WordCountError};
use crate::translator::Translator;

/// Translates words through groups of synonyms.
///
/// Every term of a group maps to the group's first term. Lookup ignores
/// case; words outside every group translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator {
    /// lowercased term -> canonical form
    canonical: AHashMap<String, String>,
}

impl DictionaryTranslator {
    /// Create an empty dictionary, which behaves like the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from synonym groups.
    ///
    /// Empty groups are skipped. A term already claimed by an earlier group
    /// keeps that group's canonical form.
    pub fn from_synonym_groups(synonym_groups: Vec<Vec<String>>) -> Self {
        let mut dict = Self::new();
        for group in synonym_groups {
            dict.add_synonym_group(group);
        }
        dict
    }

    /// Parse a JSON array of synonym groups.
    ///
    /// Example format:
    /// ```json
    /// [
    ///   ["flower", "flor", "blume"],
    ///   ["bread", "pan", "brot"]
    /// ]
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let synonym_groups: Vec<Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_synonym_groups(synonym_groups))
    }

    /// Load a dictionary from a JSON file in the [`from_json`](Self::from_json) format.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordCountError::dictionary(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dict = Self::from_json(&content).map_err(|e| {
            WordCountError::dictionary(format!(
                "Failed to parse synonym dictionary JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("loaded {} synonym terms from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Add a group of terms that share the first term as canonical form.
    pub fn add_synonym_group(&mut self, terms: Vec<String>) {
        let Some(canonical) = terms.first().cloned() else {
            return;
        };

        for term in terms {
            self.canonical
                .entry(term.to_lowercase())
                .or_insert_with(|| canonical.clone());
        }
    }

    /// The canonical form of `term`, if the dictionary knows it.
    pub fn canonical_of(&self, term: &str) -> Option<&str> {
        self.canonical.get(&term.to_lowercase()).map(String::as_str)
    }

    /// Number of terms with a known canonical form.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Whether the dictionary has no terms.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, word: &str) -> Result<String> {
        Ok(self
            .canonical_of(word)
            .map_or_else(|| word.to_string(), ToString::to_string))
    }
}
