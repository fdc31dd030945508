//! Error types for the combindex library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`CombindexError`].
//!
//! # Examples
//!
//! ```
//! use combindex::error::{CombindexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CombindexError::invalid_query("Give some word!"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::index::EntryId;

/// The main error type for combindex operations.
#[derive(Error, Debug)]
pub enum CombindexError {
    /// I/O errors while reading entries or writing results
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The query words do not form a usable query
    #[error("{0}")]
    InvalidQuery(String),

    /// An entry id that was never handed out by the index
    #[error("Entry id {id} is out of range (index holds {len} entries)")]
    EntryOutOfRange { id: EntryId, len: usize },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with CombindexError.
pub type Result<T> = std::result::Result<T, CombindexError>;

impl CombindexError {
    /// Create a new invalid query error.
    pub fn invalid_query<S: Into<String>>(msg: S) -> Self {
        CombindexError::InvalidQuery(msg.into())
    }

    /// Create a new out-of-range error.
    pub fn entry_out_of_range(id: EntryId, len: usize) -> Self {
        CombindexError::EntryOutOfRange { id, len }
    }
}
