//! Tests for multi-character operator disambiguation.

use super::*;

#[test]
fn two_char_operators_beat_one_char() {
    assert_eq!(
        kinds("++ -- && || == != >= <= += -= *= /= %= -> ::"),
        vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::AmpAmp,
            TokenKind::PipePipe,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::GreaterEq,
            TokenKind::LessEq,
            TokenKind::PlusEq,
            TokenKind::MinusEq,
            TokenKind::StarEq,
            TokenKind::SlashEq,
            TokenKind::PercentEq,
            TokenKind::Arrow,
            TokenKind::ColonColon,
            TokenKind::Eof,
        ]
    );
}
