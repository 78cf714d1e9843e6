use super::cursor::Cursor;
use super::{Token, TokenIndex};

/// The materialized token stream for one MiniLang source string.
///
/// The buffer holds every token the scanner produced before end of input; the end-of-input
/// token itself is excluded, and readers past the end synthesize one instead. The buffer is
/// immutable once built.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token<'s>>,
}

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(source: &'s str) -> TokenizedBuffer<'s> {
        let cursor = Cursor::new(source);
        let tokens = cursor.collect();
        TokenizedBuffer { tokens }
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token<'s>> {
        self.tokens.get(i)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Prints one `Type: <KIND>, Value: <text>` line per token, in scan order.
    pub fn print_tokens(&self) {
        for token in self.tokens.iter() {
            println!("{}", token);
        }
    }

    pub fn tokens(&self) -> &Vec<Token<'s>> {
        &self.tokens
    }
}
