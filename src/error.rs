//! Error types for the synocount library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordCountError`] enum.
//!
//! # Examples
//!
//! ```
//! use synocount::error::{Result, WordCountError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordCountError::invalid_input("word is null or empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for synocount operations.
#[derive(Error, Debug)]
pub enum WordCountError {
    /// A word (or a pre-populated count) was rejected by validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The translator failed to produce a canonical form.
    #[error("Translation error: {0}")]
    Translation(String),

    /// A synonym dictionary could not be built or loaded.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordCountError.
pub type Result<T> = std::result::Result<T, WordCountError>;

impl WordCountError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        WordCountError::InvalidInput(msg.into())
    }

    /// Create a new translation error.
    pub fn translation<S: Into<String>>(msg: S) -> Self {
        WordCountError::Translation(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        WordCountError::Dictionary(msg.into())
    }

    /// Whether this error was raised by input validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, WordCountError::InvalidInput(_))
    }
}
