//! Parse error types.

use crate::token::{Span, TokenKind};

/// An error recorded while parsing. The parser keeps going after recording
/// one (see [`crate::parser::Parser::synchronize`]), so a single parse run
/// may produce several of these.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - the lexer's analogous error type
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    pub fn expected(what: &str, found: &TokenKind, span: Span) -> Self {
        ParseError::new(format!("expected {what}, found {found}"), span)
    }

    pub fn unexpected_expression_start(found: &TokenKind, span: Span) -> Self {
        ParseError::new(format!("expected an expression, found {found}"), span)
    }

    pub fn unknown_declaration_start(found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            format!("expected a declaration or statement, found {found}"),
            span,
        )
    }

    pub fn scoped_identifier_too_deep(span: Span) -> Self {
        ParseError::new("scoped identifier path exceeds the maximum of 100 segments", span)
    }

    pub fn invalid_lvalue(span: Span) -> Self {
        ParseError::new("left-hand side of assignment is not a valid l-value", span)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
