//! # combindex
//!
//! An in-memory word-combination index for short text entries.
//!
//! Every non-empty subset of an entry's distinct words is stored as an exact
//! lookup key, trading ingestion time and memory for single-lookup
//! conjunctive queries. Negated words are resolved with one more lookup each
//! and subtracted.
//!
//! ```
//! use combindex::prelude::*;
//!
//! let mut index = CombinationIndex::new();
//! index.add("python linux server");
//! index.add("windows server only");
//!
//! let query = Query::parse(["server", "-windows"]).unwrap();
//! for id in index.search(&query) {
//!     println!("Entry found: {}", index.entry(id).unwrap());
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod query;

pub mod prelude {
    pub use crate::analysis::normalizer::WordNormalizer;
    pub use crate::error::{CombindexError, Result};
    pub use crate::index::{CombinationIndex, EntryId, EntryIdSet, IndexConfig, WordSetKey};
    pub use crate::query::Query;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
