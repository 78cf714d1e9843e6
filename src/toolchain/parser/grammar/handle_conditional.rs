use super::*;

// conditional : 'if' '(' expression ')' '{' program '}' ( 'else' '{' program '}' )? ;
//
// Recovery after a missing ')' is local to the condition: the rule still goes on to check
// for the opening brace of the if-body, so one mistake at the condition close typically
// reports twice. Every other failed expectation abandons the conditional after consuming
// the one offending token.
pub fn handle_conditional(context: &mut Context) {
    // 'if', checked by the statement dispatch.
    context.consume();

    if !context.match_text("(") {
        context.expected("'(' after if");
        return;
    }

    handle_expression::handle_expression(context);

    if !context.match_text(")") {
        context.expected("')'");
    }

    if !context.match_text("{") {
        context.expected("'{' after if condition");
        return;
    }

    handle_program(context);

    if !context.match_text("}") {
        context.expected("'}'");
        return;
    }

    // The else clause is optional; its absence ends the conditional without error.
    if context.current_is_keyword("else") {
        context.consume();

        if !context.match_text("{") {
            context.expected("'{' after else");
            return;
        }

        handle_program(context);

        if !context.match_text("}") {
            context.expected("'}'");
        }
    }
}
