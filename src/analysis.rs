//! Text analysis module for combindex.
//!
//! Entries are analyzed by a [`SpaceTokenizer`](tokenizer::space::SpaceTokenizer)
//! followed by a [`StripFilter`](token_filter::strip::StripFilter); the
//! [`WordNormalizer`](normalizer::WordNormalizer) wires the two together and
//! produces the plain words the index is keyed on.

pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use normalizer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
