//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream.
//!
//! # Available Filters
//!
//! - [`strip::StripFilter`] - Trims a fixed set of boundary characters
//!
//! # Examples
//!
//! ```
//! use combindex::analysis::token::Token;
//! use combindex::analysis::token_filter::Filter;
//! use combindex::analysis::token_filter::strip::StripFilter;
//!
//! let filter = StripFilter::new();
//! let tokens = vec![Token::new("linux,", 0), Token::new("server.", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "linux");
//! assert_eq!(filtered[1].text, "server");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so that a filter can be shared by
/// parallel ingestion workers.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod strip;
