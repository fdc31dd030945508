//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they split an
//! entry into an ordered stream of tokens.
//!
//! # Available Tokenizers
//!
//! - [`space::SpaceTokenizer`] - Splits on the literal space character
//!
//! # Examples
//!
//! ```
//! use combindex::analysis::tokenizer::Tokenizer;
//! use combindex::analysis::tokenizer::space::SpaceTokenizer;
//!
//! let tokenizer = SpaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that a tokenizer can be shared by
/// parallel ingestion workers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod space;
