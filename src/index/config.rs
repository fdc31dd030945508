//! Configuration for the combination index.
//!
//! # Examples
//!
//! ```
//! use combindex::index::config::IndexConfig;
//!
//! let config = IndexConfig::default();
//! assert!(!config.parallel_ingest);
//!
//! let mut parallel = IndexConfig::default();
//! parallel.parallel_ingest = true;
//! parallel.ingest_batch_size = 256;
//! ```

use serde::{Deserialize, Serialize};

/// Default number of entries handed to the thread pool at once.
pub const DEFAULT_INGEST_BATCH_SIZE: usize = 1024;

/// Configuration for building a [`CombinationIndex`](super::CombinationIndex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Compute each entry's word-set keys on the rayon thread pool during
    /// batch ingestion. The key map itself is always written by one thread.
    pub parallel_ingest: bool,

    /// Entries per parallel batch. Bounds how many computed key lists are
    /// held in memory before being merged. Zero is treated as one.
    pub ingest_batch_size: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            parallel_ingest: false,
            ingest_batch_size: DEFAULT_INGEST_BATCH_SIZE,
        }
    }
}

impl IndexConfig {
    /// Effective batch size, never zero.
    pub fn batch_size(&self) -> usize {
        self.ingest_batch_size.max(1)
    }
}
