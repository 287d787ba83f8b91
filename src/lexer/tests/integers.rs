//! Tests for numeric literal scanning: the int/float boundary and overflow.

use super::*;

#[test]
fn integer_then_dot_digit_is_a_float() {
    assert_eq!(kinds("3.14"), vec![TokenKind::FloatLiteral(3.14), TokenKind::Eof]);
}

#[test]
fn bare_integer_is_not_promoted_by_trailing_dot_without_digits() {
    let tokens = kinds("3.");
    assert_eq!(tokens[0], TokenKind::IntLiteral(3));
    assert_eq!(tokens[1], TokenKind::Dot);
}
