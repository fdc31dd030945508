//! Conjunctive word queries with negation.
//!
//! A query is a set of words that must all be present (positive words) and a
//! set of words that must be absent (negative words). Raw query words are
//! parsed with [`Query::parse`]: a word starting with `-` is negative.
//!
//! # Examples
//!
//! ```
//! use combindex::index::CombinationIndex;
//! use combindex::query::Query;
//!
//! let mut index = CombinationIndex::new();
//! index.add("python linux server");
//! index.add("windows server only");
//!
//! let query = Query::parse(["server", "-windows"]).unwrap();
//! assert_eq!(index.search(&query), vec![0]);
//! ```

use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;

use crate::error::{CombindexError, Result};
use crate::index::{CombinationIndex, EntryId};

/// Prefix marking a negative query word.
pub const NEGATION_PREFIX: char = '-';

/// A parsed query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl Query {
    /// Parse raw query words.
    ///
    /// Words starting with [`NEGATION_PREFIX`] are negative and lose that one
    /// leading character, so `-` alone negates the empty word. Every other
    /// word, including the empty string, is positive. Duplicates collapse.
    ///
    /// Fails with [`CombindexError::InvalidQuery`] when no words are given or
    /// when none of them is positive.
    pub fn parse<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut query = Query::default();
        let mut seen_any = false;

        for word in words {
            seen_any = true;
            let word = word.as_ref();
            match word.strip_prefix(NEGATION_PREFIX) {
                Some(negated) => query.negative.insert(negated.to_string()),
                None => query.positive.insert(word.to_string()),
            };
        }

        if !seen_any {
            return Err(CombindexError::invalid_query("Give some word!"));
        }
        if query.positive.is_empty() {
            return Err(CombindexError::invalid_query(
                "Give some none negative word!",
            ));
        }

        Ok(query)
    }

    /// Words that must all be present.
    pub fn positive(&self) -> &BTreeSet<String> {
        &self.positive
    }

    /// Words that must all be absent.
    pub fn negative(&self) -> &BTreeSet<String> {
        &self.negative
    }

    /// Resolve the query against `index`.
    ///
    /// One lookup for the whole positive set, then one lookup per negative
    /// word whose result is subtracted. Ids are returned in ascending order.
    pub fn execute(&self, index: &CombinationIndex) -> Vec<EntryId> {
        let mut candidates = index.find(&self.positive);

        for word in &self.negative {
            if candidates.is_empty() {
                break;
            }
            let excluded = index.find([word]);
            candidates.retain(|id| !excluded.contains(id));
        }

        let mut ids: Vec<EntryId> = candidates.into_iter().collect();
        ids.sort_unstable();
        debug!(
            "query +{:?} -{:?}: {} entries",
            self.positive,
            self.negative,
            ids.len()
        );
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_parse_positive_and_negative() {
        let query = Query::parse(["python", "linux", "-windows"]).unwrap();
        assert_eq!(words(query.positive()), vec!["linux", "python"]);
        assert_eq!(words(query.negative()), vec!["windows"]);
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let query = Query::parse(["a", "a", "-b", "-b"]).unwrap();
        assert_eq!(query.positive().len(), 1);
        assert_eq!(query.negative().len(), 1);
    }

    #[test]
    fn test_parse_strips_single_prefix() {
        let query = Query::parse(["x", "--dash", "-"]).unwrap();
        assert_eq!(words(query.negative()), vec!["", "-dash"]);
    }

    #[test]
    fn test_parse_without_words() {
        let err = Query::parse(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CombindexError::InvalidQuery(_)));
        assert_eq!(err.to_string(), "Give some word!");
    }

    #[test]
    fn test_parse_only_negative_words() {
        let err = Query::parse(["-windows", "-mac"]).unwrap_err();
        assert!(matches!(err, CombindexError::InvalidQuery(_)));
        assert_eq!(err.to_string(), "Give some none negative word!");
    }

    #[test]
    fn test_execute() {
        let mut index = CombinationIndex::new();
        index.add("python linux server");
        index.add("windows server only");
        index.add("python windows desktop");

        let query = Query::parse(["python"]).unwrap();
        assert_eq!(query.execute(&index), vec![0, 2]);

        let query = Query::parse(["python", "-windows"]).unwrap();
        assert_eq!(query.execute(&index), vec![0]);

        let query = Query::parse(["server", "-linux", "-only"]).unwrap();
        assert!(query.execute(&index).is_empty());

        let query = Query::parse(["server", "-missing"]).unwrap();
        assert_eq!(query.execute(&index), vec![0, 1]);
    }

    #[test]
    fn test_word_both_required_and_excluded() {
        let mut index = CombinationIndex::new();
        index.add("python linux");

        let query = Query::parse(["python", "-python"]).unwrap();
        assert!(query.execute(&index).is_empty());
    }
}
