use super::*;

// expression : term ( ('+' | '-') term )* ;
pub fn handle_expression(context: &mut Context) {
    if !context.enter_rule() {
        return;
    }

    handle_term(context);
    while context.match_text("+") || context.match_text("-") {
        handle_term(context);
    }

    context.leave_rule();
}

// term : factor ( ('*' | '/') factor )* ;
fn handle_term(context: &mut Context) {
    handle_factor(context);
    while context.match_text("*") || context.match_text("/") {
        handle_factor(context);
    }
}

// factor : INTEGER
//        | IDENTIFIER
//        | '(' expression ')'
//        ;
fn handle_factor(context: &mut Context) {
    match context.token_kind() {
        TokenKind::Integer | TokenKind::Identifier => {
            context.consume();
        }

        _ if context.current().string == "(" => {
            context.consume();
            handle_expression(context);
            if !context.match_text(")") {
                context.expected("')'");
            }
        }

        _ => context.unexpected_token(),
    }
}
