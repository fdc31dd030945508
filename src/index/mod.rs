//! Index module for combindex.
//!
//! This module provides the combination index: every non-empty subset of an
//! entry's distinct words is stored as a [`WordSetKey`], so any conjunctive
//! word query is answered by a single exact lookup.

pub mod combination_index;
pub mod config;
pub mod word_set;

/// Zero-based position of an entry in insertion order.
pub type EntryId = usize;

/// Set of entry ids returned by lookups.
pub type EntryIdSet = ahash::AHashSet<EntryId>;

// Re-export commonly used types
pub use combination_index::{CombinationIndex, IndexStats};
pub use config::IndexConfig;
pub use word_set::WordSetKey;
