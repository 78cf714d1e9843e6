use crate::toolchain::diagnostics::diagnostic_emitter::{
    Diagnostic, DiagnosticConsumer, DiagnosticLevel,
};
use crate::toolchain::diagnostics::diagnostic_kind::{DiagnosticKind, SyntaxDiagnosticKind};
use crate::toolchain::lexer::token::{Token, TokenKind};
use crate::toolchain::lexer::{TokenIndex, TokenizedBuffer};

/// Maximum nesting of self-recursive grammar rules before recovery abandons the subtree.
pub const MAX_RULE_DEPTH: usize = 128;

/// Shared state for the grammar rule handlers: the token stream, the parse cursor, the
/// diagnostic sink, and the rule recursion depth.
///
/// The cursor is monotonically non-decreasing and clamped to one position past the end of
/// the stream; reads at or past the end synthesize an end-of-input token, so rule handlers
/// never see an absent token.
pub struct Context<'tb, 'd> {
    tokens: &'tb TokenizedBuffer<'tb>,
    token_index: TokenIndex,
    diags: &'d mut dyn DiagnosticConsumer,
    depth: usize,
}

impl<'tb, 'd> Context<'tb, 'd> {
    pub fn new(
        tokens: &'tb TokenizedBuffer,
        diags: &'d mut impl DiagnosticConsumer,
    ) -> Context<'tb, 'd> {
        Context { tokens, token_index: 0, diags, depth: 0 }
    }

    /// The token under the cursor, or a synthesized end-of-input token past the end.
    pub fn current(&self) -> Token<'tb> {
        self.tokens.token_at(self.token_index).copied().unwrap_or_else(Token::end)
    }

    pub fn token_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn token_index(&self) -> TokenIndex {
        self.token_index
    }

    /// Returns the current token and advances the cursor, clamped to one past the end.
    pub fn consume(&mut self) -> Token<'tb> {
        let token = self.current();
        if self.token_index <= self.tokens.len() {
            self.token_index += 1;
        }
        token
    }

    /// Consumes the current token and returns true when its lexeme matches exactly.
    /// MiniLang punctuation is matched by lexeme, the way the grammar spells it.
    pub fn match_text(&mut self, text: &str) -> bool {
        if self.current().string == text {
            self.consume();
            true
        } else {
            false
        }
    }

    pub fn current_is_keyword(&self, word: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Keyword && token.string == word
    }

    /// Reports a failed expectation, naming what was expected and the token found, then
    /// consumes that token. The caller decides whether the rule continues or returns.
    pub fn expected(&mut self, expected: &str) {
        let found = self.consume();
        self.emit(
            DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::MissingToken },
            format!("Syntax error: Expected {}, found {}", expected, found.string),
        );
    }

    /// Reports a token no rule could begin with, then consumes it.
    pub fn unexpected_token(&mut self) {
        let found = self.consume();
        self.emit(
            DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::UnexpectedToken },
            format!("Syntax error: Unexpected token {}", found.string),
        );
    }

    /// Guards entry into a self-recursive rule. Past [MAX_RULE_DEPTH] the rule is
    /// abandoned: one diagnostic, one token consumed, and the handler must return.
    pub fn enter_rule(&mut self) -> bool {
        if self.depth >= MAX_RULE_DEPTH {
            let found = self.consume();
            self.emit(
                DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::NestingTooDeep },
                format!("Syntax error: Nesting too deep, found {}", found.string),
            );
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave_rule(&mut self) {
        self.depth -= 1;
    }

    fn emit(&mut self, kind: DiagnosticKind, body: String) {
        self.diags.handle_diagnostic(Diagnostic::new(DiagnosticLevel::Error, kind, body));
    }
}
