//! Tests for the token stream's boundary shape: empty input, and
//! whitespace/comments being discarded before reaching the output.

use super::*;

#[test]
fn empty_input_yields_only_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn whitespace_and_comments_are_skipped() {
    let result = kinds("  // a comment\n  /* block */  ;");
    assert_eq!(result, vec![TokenKind::Semicolon, TokenKind::Eof]);
}

#[test]
fn true_and_false_are_bool_literals() {
    assert_eq!(
        kinds("true false"),
        vec![
            TokenKind::BoolLiteral(true),
            TokenKind::BoolLiteral(false),
            TokenKind::Eof
        ]
    );
}
