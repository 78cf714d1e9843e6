/// The enumerated type of all diagnostics the front end emits.
///
/// The scanner has no error path, since unrecognized characters lex as one-character
/// operator tokens, so every diagnostic today is a syntax diagnostic from the recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    SyntaxError { kind: SyntaxDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxDiagnosticKind {
    /// We were expecting one particular token and didn't encounter it.
    MissingToken,

    /// We've encountered something we really don't know what to make of.
    UnexpectedToken,

    /// Statement or expression nesting exceeded the recursion limit.
    NestingTooDeep,
}
