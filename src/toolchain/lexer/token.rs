use std::fmt::Display;

/// Represents a single lexical token of MiniLang source.
///
/// Tokens borrow their lexeme directly from the input string. Whitespace is the only input
/// the scanner discards; comments are retained as [TokenKind::Comment] tokens, so the
/// concatenation of lexemes plus skipped blank space reconstructs the original source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    /// The kind of Token.
    pub kind: TokenKind,

    // The substring representing the Token. Empty for end of input.
    pub string: &'s str,
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, string: &'s str) -> Token<'s> {
        Token { kind, string }
    }

    /// The token returned at (and past) the end of input.
    pub fn end() -> Token<'s> {
        Token { kind: TokenKind::EndOfFile, string: "" }
    }
}

/// An enumeration of all token types in MiniLang.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Declared in the MiniLang token set but never produced by the scanner; the `true` and
    /// `false` lexemes scan as [TokenKind::Keyword].
    Boolean,

    /// A `#` comment running to the end of the line. The lexeme starts at the `#` and
    /// excludes the terminating newline.
    Comment,

    /// End of input. Repeated scans at the end of input keep producing this kind.
    EndOfFile,

    /// A name starting with a letter or underscore, followed by zero or more alphanumeric
    /// characters or underscores, that is not a reserved word.
    Identifier,

    /// A maximal run of decimal digits. The scanner keeps the literal text and never
    /// converts it to a numeric value.
    Integer,

    /// One of the reserved words `if`, `else`, `print`, `true`, `false`. Matching is
    /// case-sensitive.
    Keyword,

    /// A single-character operator or punctuation token. Any character the scanner has no
    /// other rule for, curly braces included, also lexes as a one-character Operator.
    Operator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Comment => "COMMENT",
            TokenKind::EndOfFile => "END_OF_FILE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
        };
        f.write_str(s)
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("Type: {}, Value: {}", self.kind, self.string))
    }
}
