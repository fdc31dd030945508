//! Space tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on the literal space character.
///
/// Unlike a whitespace tokenizer, tabs and other whitespace are kept inside
/// tokens, and consecutive spaces produce empty tokens. Splitting an empty
/// string yields a single empty token.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split(' ')
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
