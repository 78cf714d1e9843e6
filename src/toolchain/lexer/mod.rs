//! A MiniLang scanner, which splits the input string into tokens for recognition.
//!
//! This scanner provides light-weight [Token] structures via [Cursor], a pull-based token
//! iterator: each [Cursor::next_token] call produces exactly one token on demand, and the
//! cursor keeps producing end-of-input tokens once the source is exhausted. The scanner is
//! tolerant by construction, as characters it does not recognize become one-character
//! operator tokens rather than errors, and it does no processing of the input beyond
//! tokenization; integer lexemes, for example, are never converted to binary values.
//!
//! [TokenizedBuffer] materializes the full token stream once for the recognizer, which
//! addresses tokens by [TokenIndex].
//!

pub mod token;
pub mod tokenized_buffer;

mod cursor;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};
pub use tokenized_buffer::TokenizedBuffer;

pub type TokenIndex = usize;

#[cfg(test)]
mod cursor_unittests;
