//! Canonical word-set keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An unordered, duplicate-free set of words used as an index key.
///
/// Words are stored sorted and deduplicated, so two keys compare and hash
/// equal exactly when they hold the same words, regardless of the order or
/// multiplicity they were built from. Comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use combindex::index::word_set::WordSetKey;
///
/// let a = WordSetKey::new(["linux", "python", "linux"]);
/// let b = WordSetKey::new(["python", "linux"]);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.to_string(), "{linux, python}");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordSetKey(Vec<String>);

impl WordSetKey {
    /// Build a key from any collection of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_string())
            .collect();
        words.sort_unstable();
        words.dedup();
        WordSetKey(words)
    }

    /// Build a key from words that are already strictly ascending.
    pub(crate) fn from_sorted(words: Vec<String>) -> Self {
        debug_assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
        WordSetKey(words)
    }

    /// Number of distinct words in the key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSetKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordSetKey::new(iter)
    }
}

impl fmt::Display for WordSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}
