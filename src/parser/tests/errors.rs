//! Tests for `ParseError`'s constructors and message shape.

use super::*;
use crate::token::Span;

#[test]
fn expected_mentions_both_sides() {
    let err = ParseError::expected("`;`", &TokenKind::RBrace, Span::dummy());
    assert!(err.message.contains("`;`"));
    assert!(!err.message.contains("end of input"));
}
