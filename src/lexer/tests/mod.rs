//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

pub(super) fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src)
        .tokenize()
        .unwrap_or_else(|e| panic!("tokenization failed for {src:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

pub(super) fn tokenize_error(src: &str) -> LexError {
    Lexer::new(src)
        .tokenize()
        .expect_err(&format!("expected tokenization of {src:?} to fail"))
}

mod basic_tokens;
mod compound;
mod cursor;
mod integers;
