//! Tests for the raw character cursor: advancing, peeking, and line/column
//! bookkeeping, independent of token recognition.

use super::super::Lexer;

#[test]
fn advance_tracks_line_and_column() {
    let mut lexer = Lexer::new("ab\ncd");
    lexer.advance();
    lexer.advance();
    assert_eq!(lexer.line, 1);
    assert_eq!(lexer.column, 3);
    lexer.advance();
    assert_eq!(lexer.line, 2);
    assert_eq!(lexer.column, 1);
}

#[test]
fn is_eof_true_at_end_of_input() {
    let mut lexer = Lexer::new("a");
    assert!(!lexer.is_eof());
    lexer.advance();
    assert!(lexer.is_eof());
}

#[test]
fn peek_char_looks_ahead_without_consuming() {
    let lexer = Lexer::new("ab");
    assert_eq!(lexer.peek_char(0), Some('a'));
    assert_eq!(lexer.peek_char(1), Some('b'));
    assert_eq!(lexer.peek_char(2), None);
}
