//! Concurrent, synonym-aware word counter.
//!
//! [`WordCounter`] records exact words and answers counts over every stored
//! word sharing the query's canonical form, as decided by a [`Translator`].
//!
//! # Concurrency
//!
//! A counter is `Send + Sync` and meant to be shared through an `Arc`.
//! Each instance owns one `RwLock` over its map:
//!
//! - `add` runs its check-then-increment under the write guard, so
//!   concurrent adds of the same word never lose an increment.
//! - `count` copies the entries under the read guard and translates after
//!   releasing it. It sees a consistent snapshot and may miss adds that are
//!   still in flight.
//!
//! # Overflow
//!
//! Counts saturate at `u64::MAX`. Adding to a saturated word and summing
//! counts that would exceed `u64::MAX` both yield `u64::MAX`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use synocount::counter::WordCounter;
//!
//! let synonyms = |word: &str| match word {
//!     "flor" | "blume" => "flower".to_string(),
//!     other => other.to_string(),
//! };
//! let counter = WordCounter::new(Arc::new(synonyms));
//!
//! counter.add("flower").unwrap();
//! counter.add("flor").unwrap();
//! counter.add("blume").unwrap();
//!
//! assert_eq!(counter.count("flower"), 3);
//! assert_eq!(counter.len(), 3);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, trace, warn};
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::config::WordCounterConfig;
use crate::error::{Result, WordCountError};
use crate::translator::Translator;
use crate::validation::validate_word;

/// Outcome of a bulk [`WordCounter::add_all`].
#[derive(Debug, Default)]
pub struct AddSummary {
    /// Number of words recorded.
    pub added: usize,

    /// Words that failed validation, with the reason.
    pub rejected: Vec<(String, WordCountError)>,
}

impl AddSummary {
    /// Whether every word was recorded.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Per-batch tally built before merging into the shared map.
#[derive(Default)]
struct Tally {
    counts: AHashMap<Arc<str>, u64>,
    summary: AddSummary,
}

impl Tally {
    fn record(mut self, word: &str) -> Self {
        match validate_word(Some(word)) {
            Ok(word) => {
                let count = self.counts.entry(Arc::from(word)).or_insert(0);
                *count = count.saturating_add(1);
                self.summary.added += 1;
            }
            Err(e) => self.summary.rejected.push((word.to_string(), e)),
        }
        self
    }

    fn merge(mut self, other: Tally) -> Self {
        for (word, count) in other.counts {
            let total = self.counts.entry(word).or_insert(0);
            *total = total.saturating_add(count);
        }
        self.summary.added += other.summary.added;
        self.summary.rejected.extend(other.summary.rejected);
        self
    }
}

/// A multiset of words with synonym-aware counting.
pub struct WordCounter {
    counts: RwLock<AHashMap<Arc<str>, u64>>,
    translator: RwLock<Arc<dyn Translator>>,
    config: WordCounterConfig,
}

impl fmt::Debug for WordCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordCounter")
            .field("counts", &*self.counts.read())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WordCounter {
    /// Create an empty counter with the default configuration.
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self::with_config(translator, WordCounterConfig::default())
    }

    /// Create an empty counter with the given configuration.
    pub fn with_config(translator: Arc<dyn Translator>, config: WordCounterConfig) -> Self {
        debug!("creating word counter with {config:?}");
        WordCounter {
            counts: RwLock::new(AHashMap::with_capacity(config.initial_capacity)),
            translator: RwLock::new(translator),
            config,
        }
    }

    /// Create a counter pre-populated with `counts`.
    ///
    /// Every key must be a valid word and every count at least 1.
    pub fn with_counts<I>(counts: I, translator: Arc<dyn Translator>) -> Result<Self>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let counter = Self::new(translator);
        counter.set_counts(counts)?;
        Ok(counter)
    }

    /// Record one occurrence of `word`.
    ///
    /// Fails with [`WordCountError::InvalidInput`] when the word is absent,
    /// empty, or contains anything but ASCII letters. The counter is left
    /// untouched on failure. A word already at `u64::MAX` stays there.
    pub fn add<'a, W>(&self, word: W) -> Result<()>
    where
        W: Into<Option<&'a str>>,
    {
        let word = validate_word(word.into())?;

        let mut counts = self.counts.write();
        let count = match counts.get_mut(word) {
            Some(count) => {
                *count = count.saturating_add(1);
                *count
            }
            None => {
                counts.insert(Arc::from(word), 1);
                1
            }
        };
        trace!("added {word:?}, now {count}");

        Ok(())
    }

    /// Record every word of `words`, rejecting invalid ones individually.
    ///
    /// The batch is tallied first (on the rayon pool once it reaches
    /// [`WordCounterConfig::parallel_threshold`]) and then merged under a
    /// single write lock.
    pub fn add_all<S>(&self, words: &[S]) -> AddSummary
    where
        S: AsRef<str> + Sync,
    {
        let tally = if words.len() >= self.config.parallel_threshold {
            words
                .par_iter()
                .fold(Tally::default, |tally, word| tally.record(word.as_ref()))
                .reduce(Tally::default, Tally::merge)
        } else {
            words
                .iter()
                .fold(Tally::default(), |tally, word| tally.record(word.as_ref()))
        };

        {
            let mut counts = self.counts.write();
            for (word, count) in tally.counts {
                let total = counts.entry(word).or_insert(0);
                *total = total.saturating_add(count);
            }
        }

        let summary = tally.summary;
        for (word, err) in &summary.rejected {
            warn!("rejected {word:?}: {err}");
        }
        debug!("bulk add: {} added, {} rejected", summary.added, summary.rejected.len());
        summary
    }

    /// Sum the counts of every stored word whose canonical form matches the
    /// canonical form of `word`, ignoring case.
    ///
    /// Returns 0 for an absent or empty query and for an empty counter,
    /// without consulting the translator. The translator is called for each
    /// stored word and again for the query once per stored word, so a
    /// counter holding `n` words makes `2n` calls. When a stored word fails
    /// to translate, the query is not translated for that entry, so each
    /// such failure saves one call. A word whose translation fails is
    /// treated as not matching; use [`try_count`](Self::try_count) to
    /// surface the failure instead. The sum saturates at `u64::MAX`.
    pub fn count<'a, W>(&self, word: W) -> u64
    where
        W: Into<Option<&'a str>>,
    {
        let Some(word) = word.into().filter(|w| !w.is_empty()) else {
            return 0;
        };

        let entries = self.entries();
        if entries.is_empty() {
            return 0;
        }

        let translator = self.translator();
        entries
            .iter()
            .filter(|(key, _)| match is_synonym(translator.as_ref(), key, word) {
                Ok(matched) => matched,
                Err(e) => {
                    warn!("skipping {key:?} while counting {word:?}: {e}");
                    false
                }
            })
            .fold(0u64, |total, (_, count)| total.saturating_add(*count))
    }

    /// Like [`count`](Self::count), but stops at the first translator
    /// failure and returns it as [`WordCountError::Translation`].
    pub fn try_count<'a, W>(&self, word: W) -> Result<u64>
    where
        W: Into<Option<&'a str>>,
    {
        let Some(word) = word.into().filter(|w| !w.is_empty()) else {
            return Ok(0);
        };

        let translator = self.translator();
        self.entries()
            .iter()
            .try_fold(0u64, |total, (key, count)| {
                match is_synonym(translator.as_ref(), key, word) {
                    Ok(true) => Ok(total.saturating_add(*count)),
                    Ok(false) => Ok(total),
                    Err(e) => Err(WordCountError::translation(format!(
                        "failed to compare {key:?} with {word:?}: {e}"
                    ))),
                }
            })
    }

    /// Exact stored count of `word`, without translation.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.read().get(word).copied().unwrap_or(0)
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.counts.read().len()
    }

    /// Whether no word has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.read().is_empty()
    }

    /// Sum of all stored counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts
            .read()
            .values()
            .fold(0, |total, count| total.saturating_add(*count))
    }

    /// A copy of the stored counts.
    pub fn counts(&self) -> HashMap<String, u64> {
        self.counts
            .read()
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    /// Replace every stored count.
    ///
    /// Nothing is replaced if any key is not a valid word or any count is 0.
    pub fn set_counts<I>(&self, counts: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut replacement = AHashMap::with_capacity(self.config.initial_capacity);
        for (word, count) in counts {
            validate_word(Some(word.as_str()))?;
            if count == 0 {
                return Err(WordCountError::invalid_input(format!(
                    "count for {word:?} must be at least 1"
                )));
            }
            replacement.insert(Arc::from(word), count);
        }

        debug!("replacing counts with {} words", replacement.len());
        *self.counts.write() = replacement;
        Ok(())
    }

    /// The translator currently used by [`count`](Self::count).
    pub fn translator(&self) -> Arc<dyn Translator> {
        Arc::clone(&self.translator.read())
    }

    /// Swap the translator used by later counts.
    pub fn set_translator(&self, translator: Arc<dyn Translator>) {
        *self.translator.write() = translator;
    }

    /// The configuration this counter was built with.
    pub fn config(&self) -> &WordCounterConfig {
        &self.config
    }

    /// [`add`](Self::add) as a callable bound to this counter.
    pub fn add_handle(&self) -> impl Fn(Option<&str>) -> Result<()> + '_ {
        move |word: Option<&str>| self.add(word)
    }

    /// [`count`](Self::count) as a callable bound to this counter.
    pub fn count_handle(&self) -> impl Fn(Option<&str>) -> u64 + '_ {
        move |word: Option<&str>| self.count(word)
    }

    /// Snapshot of the entries. Keys are shared, not copied.
    fn entries(&self) -> Vec<(Arc<str>, u64)> {
        self.counts
            .read()
            .iter()
            .map(|(word, count)| (Arc::clone(word), *count))
            .collect()
    }
}

/// Translate `key`, then `word`, and compare the results ignoring case.
fn is_synonym(translator: &dyn Translator, key: &str, word: &str) -> Result<bool> {
    let key_form = translator.translate(key)?;
    let word_form = translator.translate(word)?;
    Ok(eq_ignore_case(&key_form, &word_form))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
