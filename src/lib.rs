//! # Synocount
//!
//! A concurrent, in-memory word frequency counter that aggregates synonyms.
//!
//! ## Features
//!
//! - Thread-safe `add` with no lost increments under contention
//! - Synonym-aware `count` through a pluggable [`Translator`](translator::Translator)
//! - JSON synonym dictionaries
//! - Parallel bulk ingestion

pub mod config;
pub mod counter;
pub mod error;
pub mod translator;
pub mod validation;

pub mod prelude {
    pub use crate::config::WordCounterConfig;
    pub use crate::counter::{AddSummary, WordCounter};
    pub use crate::error::{Result, WordCountError};
    pub use crate::translator::{DictionaryTranslator, IdentityTranslator, Translator};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
