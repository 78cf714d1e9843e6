use super::token::{Token, TokenKind};

/// Token iterator over a MiniLang source string.
///
/// Design roughly inspired by the rustc lexer Cursor. Each call to [Cursor::next_token]
/// returns exactly one token; once the input is exhausted every further call returns an
/// [TokenKind::EndOfFile] token with an empty lexeme. Scanning never fails: characters
/// with no dedicated rule become single-character [TokenKind::Operator] tokens.
pub struct Cursor<'s> {
    // An iterator over the input character string.
    chars: std::str::Chars<'s>,
    string: &'s str,
    bytes_remaining: usize,
}

impl<'s> Iterator for Cursor<'s> {
    type Item = Token<'s>;

    // Yields tokens up to, and excluding, the end-of-input token.
    fn next(&mut self) -> Option<Token<'s>> {
        let token = self.next_token();
        match token.kind {
            TokenKind::EndOfFile => None,
            _ => Some(token),
        }
    }
}

impl<'s> Cursor<'s> {
    pub const EOF: char = '\0';

    pub fn new(input: &'s str) -> Cursor<'s> {
        Cursor { chars: input.chars(), string: input, bytes_remaining: input.len() }
    }

    /// Scans and returns the next token, advancing the cursor past it.
    pub fn next_token(&mut self) -> Token<'s> {
        // Blank space is skipped, not emitted.
        self.eat_while(|c| c.is_whitespace());
        self.extract_substring();

        let first_char = match self.bump() {
            Some(c) => c,
            None => return Token::end(),
        };

        let token_kind = match first_char {
            // Identifiers and reserved words start with a letter or underscore.
            c if c.is_alphabetic() || c == '_' => self.identifier_or_keyword(),

            // Integer literals are a maximal run of decimal digits.
            '0'..='9' => self.number(),

            // Single-character operators and punctuation.
            '+' | '-' | '*' | '/' => TokenKind::Operator,
            '(' | ')' => TokenKind::Operator,
            '=' => TokenKind::Operator,
            ';' => TokenKind::Operator,

            // Comments run from '#' to the end of the line.
            '#' => self.comment(),

            // Any other character, curly braces included, lexes as a one-character
            // Operator token. Unknown input is never a scan error.
            _ => TokenKind::Operator,
        };

        // End of token, extract the substring.
        let token_str = self.extract_substring();

        // Fixup identifiers to match against reserved words.
        match token_kind {
            TokenKind::Identifier if is_keyword(token_str) => {
                Token::new(TokenKind::Keyword, token_str)
            }
            _ => Token::new(token_kind, token_str),
        }
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(Self::EOF)
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    // Splits off and returns the substring scanned since the previous extraction.
    fn extract_substring(&mut self) -> &'s str {
        let new_bytes_remaining = self.chars.as_str().len();
        let (prefix, suffix) = self.string.split_at(self.bytes_remaining - new_bytes_remaining);
        self.string = suffix;
        self.bytes_remaining = new_bytes_remaining;
        prefix
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }

    fn identifier_or_keyword(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_alphanumeric() || c == '_');
        TokenKind::Identifier
    }

    fn number(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_ascii_digit());
        TokenKind::Integer
    }

    fn comment(&mut self) -> TokenKind {
        self.eat_while(|c| c != '\n');
        TokenKind::Comment
    }
}

fn is_keyword(s: &str) -> bool {
    matches!(s, "if" | "else" | "print" | "true" | "false")
}
