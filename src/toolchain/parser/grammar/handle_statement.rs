use super::*;

// statement : assignment
//           | conditional
//           | printStatement
//           ;
//
// Dispatch looks at the current token only: an identifier starts an assignment, the 'if'
// and 'print' keywords start their statements, and anything else is a syntax error
// recovered by consuming the one token.
pub fn handle_statement(context: &mut Context) {
    if !context.enter_rule() {
        return;
    }

    match context.token_kind() {
        TokenKind::Identifier => {
            handle_assignment::handle_assignment(context);
        }

        TokenKind::Keyword if context.current_is_keyword("if") => {
            handle_conditional::handle_conditional(context);
        }

        TokenKind::Keyword if context.current_is_keyword("print") => {
            handle_print_statement::handle_print_statement(context);
        }

        _ => context.unexpected_token(),
    }

    context.leave_rule();
}
