//! The combination index.
//!
//! Adding an entry materializes every non-empty subset of its distinct words
//! as a [`WordSetKey`] and records the entry id under each of them. An entry
//! with `n` distinct words therefore writes `2^n - 1` keys; in exchange,
//! [`CombinationIndex::find`] answers any conjunctive query with one hash
//! lookup and no scanning.
//!
//! # Examples
//!
//! ```
//! use combindex::index::CombinationIndex;
//!
//! let mut index = CombinationIndex::new();
//! index.add("python linux server");
//! index.add("windows server only");
//!
//! let mut ids: Vec<_> = index.find(["server"]).into_iter().collect();
//! ids.sort();
//! assert_eq!(ids, vec![0, 1]);
//! assert_eq!(index.entry(1).unwrap(), "windows server only");
//! ```

use std::ops::Range;
use std::time::Instant;

use ahash::AHashMap;
use itertools::Itertools;
use log::{debug, info, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::WordNormalizer;
use crate::error::{CombindexError, Result};
use crate::index::config::IndexConfig;
use crate::index::word_set::WordSetKey;
use crate::index::{EntryId, EntryIdSet};
use crate::query::Query;

/// Statistics about a combination index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of stored entries.
    pub entries: usize,
    /// Number of distinct word-set keys.
    pub keys: usize,
    /// Sum of the id-set sizes over all keys.
    pub postings: usize,
    /// Number of words in the largest key.
    pub max_key_len: usize,
}

/// In-memory index from word sets to the entries containing them.
#[derive(Debug, Default)]
pub struct CombinationIndex {
    config: IndexConfig,
    normalizer: WordNormalizer,
    entries: Vec<String>,
    index: AHashMap<WordSetKey, EntryIdSet>,
}

impl CombinationIndex {
    /// Create an empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create an empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        CombinationIndex {
            config,
            normalizer: WordNormalizer::new(),
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Configuration this index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Add an entry and index every combination of its words.
    ///
    /// Returns the id of the new entry. Never fails: an empty entry is
    /// indexed under the single key holding the empty word.
    pub fn add<S: Into<String>>(&mut self, text: S) -> EntryId {
        let text = text.into();
        let keys = word_set_keys(&self.normalizer, &text);
        self.insert(text, keys)
    }

    /// Add many entries, in order.
    ///
    /// The resulting index is the same as calling [`add`](Self::add) for each
    /// text. With [`IndexConfig::parallel_ingest`] the per-entry key
    /// enumeration runs on the rayon thread pool, one batch at a time; the
    /// keys are merged on the calling thread, so every entry of the batch is
    /// fully indexed when this returns.
    pub fn add_batch<I, S>(&mut self, texts: I) -> Range<EntryId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.entries.len();
        let started = Instant::now();

        if self.config.parallel_ingest {
            let batch_size = self.config.batch_size();
            let mut texts = texts.into_iter().map(Into::<String>::into).peekable();
            while texts.peek().is_some() {
                let batch: Vec<String> = texts.by_ref().take(batch_size).collect();
                let normalizer = &self.normalizer;
                let keyed: Vec<(String, Vec<WordSetKey>)> = batch
                    .into_par_iter()
                    .map(|text| {
                        let keys = word_set_keys(normalizer, &text);
                        (text, keys)
                    })
                    .collect();

                for (text, keys) in keyed {
                    self.insert(text, keys);
                }
            }
        } else {
            for text in texts {
                self.add(text);
            }
        }

        let end = self.entries.len();
        info!(
            "indexed {} entries into {} word-set keys in {:?} (parallel: {})",
            end - start,
            self.index.len(),
            started.elapsed(),
            self.config.parallel_ingest
        );
        start..end
    }

    fn insert(&mut self, text: String, keys: Vec<WordSetKey>) -> EntryId {
        let id = self.entries.len();
        self.entries.push(text);

        let key_count = keys.len();
        for key in keys {
            self.index.entry(key).or_default().insert(id);
        }
        trace!("entry {id} indexed under {key_count} word-set keys");

        id
    }

    /// Ids of the entries containing every word of `words`.
    ///
    /// `words` is treated as a set: order and duplicates are ignored. A word
    /// set that was never indexed, including the empty set, yields an empty
    /// result.
    pub fn find<I, S>(&self, words: I) -> EntryIdSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = WordSetKey::new(words);
        let found = self.index.get(&key).cloned().unwrap_or_default();
        debug!("find {key}: {} entries", found.len());
        found
    }

    /// Resolve a parsed query, see [`Query::execute`].
    pub fn search(&self, query: &Query) -> Vec<EntryId> {
        query.execute(self)
    }

    /// Original text of the entry with the given id.
    ///
    /// Ids only come from [`add`](Self::add) or [`find`](Self::find); any
    /// other id is reported as [`CombindexError::EntryOutOfRange`].
    pub fn entry(&self, id: EntryId) -> Result<&str> {
        self.entries
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| CombindexError::entry_out_of_range(id, self.entries.len()))
    }

    /// All entries with their ids, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &str)> {
        self.entries.iter().map(String::as_str).enumerate()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been added yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct word-set keys.
    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    /// Entry, key and posting counts.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.entries.len(),
            keys: self.index.len(),
            postings: self.index.values().map(|ids| ids.len()).sum(),
            max_key_len: self.index.keys().map(WordSetKey::len).max().unwrap_or(0),
        }
    }
}

/// Every word-set key an entry is indexed under.
///
/// Every `k`-combination for `k = 1..=n`, taken over the distinct words only:
/// duplicates would produce the same keys again. The words are sorted first
/// and `combinations` keeps input order, so each combination is already a
/// canonical key.
fn word_set_keys(normalizer: &WordNormalizer, text: &str) -> Vec<WordSetKey> {
    let mut words = normalizer.normalize(text);
    words.sort_unstable();
    words.dedup();

    (1..=words.len())
        .flat_map(|k| words.iter().combinations(k))
        .map(|combination| WordSetKey::from_sorted(combination.into_iter().cloned().collect()))
        .collect()
}
