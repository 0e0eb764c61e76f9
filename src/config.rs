//! Configuration for word counters.

use serde::{Deserialize, Serialize};

/// Configuration for a [`WordCounter`](crate::counter::WordCounter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCounterConfig {
    /// Number of distinct words the map is pre-sized for.
    pub initial_capacity: usize,

    /// Minimum batch size for `add_all` to fan out over the rayon pool.
    /// Smaller batches are added on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for WordCounterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            parallel_threshold: 1024,
        }
    }
}

impl WordCounterConfig {
    /// Set the initial map capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the batch size above which `add_all` runs in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
