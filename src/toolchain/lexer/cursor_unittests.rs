#[cfg(test)]
mod tests {
    use crate::toolchain::lexer::token::Token;
    use crate::toolchain::lexer::token::TokenKind::*;
    use crate::toolchain::lexer::Cursor;
    use crate::toolchain::lexer::TokenizedBuffer;

    // Scanning helper function to compare expected scanning of a source string.
    fn check_scanning(source: &str, expect: Vec<Token>) {
        let buffer = TokenizedBuffer::tokenize(source);
        assert_eq!(buffer.tokens(), &expect);
    }

    #[test]
    fn empty_string() {
        check_scanning("", vec![]);
        check_scanning("  \t\n  ", vec![]);
    }

    #[test]
    fn smoke_test() {
        check_scanning(
            "x = 1 + 2;",
            vec![
                Token { kind: Identifier, string: "x" },
                Token { kind: Operator, string: "=" },
                Token { kind: Integer, string: "1" },
                Token { kind: Operator, string: "+" },
                Token { kind: Integer, string: "2" },
                Token { kind: Operator, string: ";" },
            ],
        );
    }

    #[test]
    fn keywords_are_keywords() {
        for word in ["if", "else", "print", "true", "false"] {
            check_scanning(word, vec![Token { kind: Keyword, string: word }]);
        }
    }

    #[test]
    fn keyword_matching_is_case_sensitive() {
        check_scanning("If", vec![Token { kind: Identifier, string: "If" }]);
        check_scanning("PRINT", vec![Token { kind: Identifier, string: "PRINT" }]);
    }

    #[test]
    fn keyword_prefix_is_an_identifier() {
        check_scanning("iffy", vec![Token { kind: Identifier, string: "iffy" }]);
        check_scanning("print_me", vec![Token { kind: Identifier, string: "print_me" }]);
    }

    // The boolean lexemes scan as keywords; the Boolean kind is never produced.
    #[test]
    fn boolean_lexemes_scan_as_keywords() {
        check_scanning(
            "x=true;",
            vec![
                Token { kind: Identifier, string: "x" },
                Token { kind: Operator, string: "=" },
                Token { kind: Keyword, string: "true" },
                Token { kind: Operator, string: ";" },
            ],
        );
    }

    #[test]
    fn identifier_maximal_munch() {
        check_scanning("abc123", vec![Token { kind: Identifier, string: "abc123" }]);
        check_scanning("_under_score9", vec![Token { kind: Identifier, string: "_under_score9" }]);
    }

    #[test]
    fn number_then_identifier() {
        check_scanning(
            "123abc",
            vec![
                Token { kind: Integer, string: "123" },
                Token { kind: Identifier, string: "abc" },
            ],
        );
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        check_scanning(
            "# hello\nx=1;",
            vec![
                Token { kind: Comment, string: "# hello" },
                Token { kind: Identifier, string: "x" },
                Token { kind: Operator, string: "=" },
                Token { kind: Integer, string: "1" },
                Token { kind: Operator, string: ";" },
            ],
        );
    }

    #[test]
    fn comment_at_end_of_input() {
        check_scanning("# trailing", vec![Token { kind: Comment, string: "# trailing" }]);
    }

    #[test]
    fn braces_scan_as_operators() {
        check_scanning(
            "{ }",
            vec![
                Token { kind: Operator, string: "{" },
                Token { kind: Operator, string: "}" },
            ],
        );
    }

    // Unrecognized characters fall back to one-character operator tokens, never errors.
    #[test]
    fn unknown_characters_scan_as_operators() {
        check_scanning(
            "@ $ €",
            vec![
                Token { kind: Operator, string: "@" },
                Token { kind: Operator, string: "$" },
                Token { kind: Operator, string: "€" },
            ],
        );
    }

    #[test]
    fn conditional_token_sequence() {
        check_scanning(
            "if(x){print 1;}else{y=2;}",
            vec![
                Token { kind: Keyword, string: "if" },
                Token { kind: Operator, string: "(" },
                Token { kind: Identifier, string: "x" },
                Token { kind: Operator, string: ")" },
                Token { kind: Operator, string: "{" },
                Token { kind: Keyword, string: "print" },
                Token { kind: Integer, string: "1" },
                Token { kind: Operator, string: ";" },
                Token { kind: Operator, string: "}" },
                Token { kind: Keyword, string: "else" },
                Token { kind: Operator, string: "{" },
                Token { kind: Identifier, string: "y" },
                Token { kind: Operator, string: "=" },
                Token { kind: Integer, string: "2" },
                Token { kind: Operator, string: ";" },
                Token { kind: Operator, string: "}" },
            ],
        );
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.next_token(), Token { kind: Identifier, string: "x" });
        for _ in 0..3 {
            assert_eq!(cursor.next_token(), Token::end());
            assert_eq!(cursor.next_token().string, "");
        }
    }

    #[test]
    fn end_of_input_after_trailing_whitespace() {
        let mut cursor = Cursor::new("x  \n");
        assert_eq!(cursor.next_token(), Token { kind: Identifier, string: "x" });
        assert_eq!(cursor.next_token(), Token::end());
        assert_eq!(cursor.next_token(), Token::end());
    }
}
