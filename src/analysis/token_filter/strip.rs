//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// Characters trimmed from both ends of every token.
pub const BOUNDARY_CHARS: [char; 6] = [' ', '\n', ',', '.', ':', ';'];

/// A filter that trims [`BOUNDARY_CHARS`] from the start and end of tokens.
///
/// Tokens are never removed: a token made only of boundary characters
/// becomes an empty token at the same position.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }

    /// Trim boundary characters from a single word.
    pub fn strip(word: &str) -> &str {
        word.trim_matches(&BOUNDARY_CHARS[..])
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens = tokens
            .map(|token| {
                let trimmed = Self::strip(&token.text);
                if trimmed.len() == token.text.len() {
                    token
                } else {
                    token.with_text(trimmed)
                }
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_strip_filter() {
        let filter = StripFilter::new();
        let tokens = vec![
            Token::new("hello,", 0),
            Token::new("world", 1),
            Token::new(".;:", 2),
            Token::new("end.\n", 3),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "");
        assert_eq!(result[2].position, 2);
        assert_eq!(result[3].text, "end");
    }

    #[test]
    fn test_inner_punctuation_is_kept() {
        assert_eq!(StripFilter::strip("e.g."), "e.g");
        assert_eq!(StripFilter::strip(",a,b,"), "a,b");
        assert_eq!(StripFilter::strip("12:30"), "12:30");
    }

    #[test]
    fn test_other_punctuation_is_kept() {
        assert_eq!(StripFilter::strip("(linux)"), "(linux)");
        assert_eq!(StripFilter::strip("\"quoted\","), "\"quoted\"");
        assert_eq!(StripFilter::strip("tab\t"), "tab\t");
        assert_eq!(StripFilter::strip("why?"), "why?");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StripFilter::new().name(), "strip");
    }
}
