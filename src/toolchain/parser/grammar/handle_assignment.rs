use super::*;

// assignment : IDENTIFIER '=' expression ';' ;
pub fn handle_assignment(context: &mut Context) {
    // IDENTIFIER, checked by the statement dispatch.
    context.consume();

    if !context.match_text("=") {
        context.expected("'='");
        return;
    }

    handle_expression::handle_expression(context);

    if !context.match_text(";") {
        context.expected("';'");
    }
}
