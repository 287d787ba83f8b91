//! Token stream navigation shared by every parsing routine.

use super::error::ParseError;
use super::Parser;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    pub(super) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    pub(super) fn peek_kind(&self, offset: usize) -> &TokenKind {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    pub(super) fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if !self.is_eof() {
            self.pos += 1;
        }
        tok
    }

    /// Checks the current token's kind against `kind` by discriminant only
    /// (payload-carrying kinds like `Identifier` match regardless of the
    /// inner string).
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    pub(super) fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(what, self.current_kind(), self.current_span()))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<(String, Span), ParseError> {
        let span = self.current_span();
        match self.current_kind().clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok((name, span))
            }
            other => Err(ParseError::expected("an identifier", &other, span)),
        }
    }

    pub(super) fn record_error(&mut self, err: ParseError) {
        self.had_error = true;
        self.errors.push(err);
    }

    /// A rewindable position, used when the grammar requires trying one
    /// alternative before falling back to another (cast vs. parenthesized
    /// expression, function vs. variable declaration).
    pub(super) fn checkpoint(&self) -> usize {
        self.pos
    }

    pub(super) fn rewind(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    /// Advances past the bad token, then keeps advancing until the
    /// just-consumed token was `;` or the current token starts a
    /// known-good recovery point.
    pub(super) fn synchronize(&mut self) {
        self.advance();
        while !self.is_eof() {
            if matches!(self.previous_kind(), TokenKind::Semicolon) {
                return;
            }
            if self.starts_recovery_point() {
                return;
            }
            self.advance();
        }
    }

    fn previous_kind(&self) -> &TokenKind {
        let idx = self.pos.saturating_sub(1);
        &self.tokens[idx].kind
    }

    fn starts_recovery_point(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Int
                | TokenKind::Double
                | TokenKind::Float
                | TokenKind::Char
                | TokenKind::Bool
                | TokenKind::Void
                | TokenKind::Short
                | TokenKind::Long
                | TokenKind::Const
                | TokenKind::Unsigned
                | TokenKind::Struct
                | TokenKind::If
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Return
                | TokenKind::Namespace
        )
    }
}
