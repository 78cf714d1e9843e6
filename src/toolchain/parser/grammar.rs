use super::context::Context;
use crate::toolchain::diagnostics::diagnostic_emitter::DiagnosticConsumer;
use crate::toolchain::lexer::token::TokenKind;
use crate::toolchain::lexer::TokenizedBuffer;


/// Matches the token stream against the MiniLang grammar, reporting violations to `diags`.
///
/// Every violation is non-fatal: the offending rule reports one diagnostic, consumes one
/// token, and returns to its caller, which may then fail its own expectations in turn, so
/// one root mistake can cascade into further spurious diagnostics. Recognition always
/// terminates and produces no artifact beyond the diagnostics.
pub fn recognize(tokens: &TokenizedBuffer, diags: &mut impl DiagnosticConsumer) {
    let mut context = Context::new(tokens, diags);
    handle_program(&mut context);
}

// program : statement ;
//
// The rule is singular: it recognizes one statement when input remains, and never loops,
// so a second top-level statement is left unconsumed.
pub fn handle_program(context: &mut Context) {
    if context.token_kind() != TokenKind::EndOfFile {
        handle_statement::handle_statement(context);
    }
}

mod handle_assignment;
mod handle_conditional;
mod handle_expression;
mod handle_print_statement;
mod handle_statement;
