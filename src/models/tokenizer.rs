use crate::types::Token;

#[derive(Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for color code parsing
    pub fn color_code_parser() -> Self {
        Self
    }

    /// Lowercases the text and splits it into space-separated tokens.
    ///
    /// Only the space character separates tokens; tabs and line breaks stay
    /// inside their token. Runs of spaces collapse, so no empty token is ever
    /// produced. This matters downstream: an empty token would prefix-match
    /// every color.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.to_lowercase()
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }
}
