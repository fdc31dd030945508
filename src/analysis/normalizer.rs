//! Word normalizer: the analysis pipeline used by the combination index.

use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::strip::StripFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::space::SpaceTokenizer;

/// Turns one entry into its ordered list of words.
///
/// The pipeline is a [`SpaceTokenizer`] followed by a [`StripFilter`]. Empty
/// words and duplicates are kept, so the output always has as many words as
/// the entry has space-separated pieces.
///
/// # Examples
///
/// ```
/// use combindex::analysis::normalizer::WordNormalizer;
///
/// let normalizer = WordNormalizer::new();
/// assert_eq!(
///     normalizer.normalize("python, linux: server."),
///     vec!["python", "linux", "server"]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordNormalizer {
    tokenizer: SpaceTokenizer,
    filter: StripFilter,
}

impl WordNormalizer {
    /// Create a new word normalizer.
    pub fn new() -> Self {
        WordNormalizer {
            tokenizer: SpaceTokenizer::new(),
            filter: StripFilter::new(),
        }
    }

    /// Normalize `text` into its ordered words.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.filter
            .filter(self.tokenizer.tokenize(text))
            .map(|token| token.text)
            .collect()
    }
}
