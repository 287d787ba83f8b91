//! Tests for the token-navigation and error-recovery primitives shared by
//! every grammar rule.

use super::*;

#[test]
fn check_ignores_identifier_payload() {
    let p = make("foo");
    assert!(p.check(&TokenKind::Identifier(String::new())));
}

#[test]
fn expect_identifier_extracts_name() {
    let mut p = make("foo");
    let (name, _) = p.expect_identifier().unwrap();
    assert_eq!(name, "foo");
}

#[test]
fn synchronize_stops_after_semicolon() {
    let mut p = make("garbage ; int x;");
    p.synchronize();
    assert!(p.check(&TokenKind::Int));
}

#[test]
fn synchronize_stops_at_recovery_keyword_without_semicolon() {
    let mut p = make("garbage if (1) {}");
    p.synchronize();
    assert!(p.check(&TokenKind::If));
}

#[test]
fn checkpoint_and_rewind_restore_position() {
    let mut p = make("a b c");
    let cp = p.checkpoint();
    p.advance();
    p.advance();
    p.rewind(cp);
    assert_eq!(p.pos, cp);
}
