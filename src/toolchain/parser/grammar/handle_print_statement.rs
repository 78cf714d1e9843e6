use super::*;

// printStatement : 'print' expression ';' ;
pub fn handle_print_statement(context: &mut Context) {
    // 'print', checked by the statement dispatch.
    context.consume();

    handle_expression::handle_expression(context);

    if !context.match_text(";") {
        context.expected("';'");
    }
}
