//! Lexical error types.

use crate::token::Span;

/// An error that occurred while tokenizing the source text.
///
/// # See Also
///
/// * [`crate::parser::ParseError`] - the parser's analogous error type
/// * [`crate::semantic::SemanticError`] - the semantic analyzer's
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_character(ch: char, span: Span) -> Self {
        LexError::new(format!("unexpected character '{ch}'"), span)
    }

    pub fn non_ascii_identifier(ch: char, span: Span) -> Self {
        LexError::new(
            format!("identifiers must be ASCII, found '{ch}'"),
            span,
        )
    }

    pub fn unterminated_string(span: Span) -> Self {
        LexError::new("unterminated string literal", span)
    }

    pub fn unterminated_char(span: Span) -> Self {
        LexError::new("unterminated character literal", span)
    }

    pub fn empty_char_literal(span: Span) -> Self {
        LexError::new("character literal may not be empty", span)
    }

    pub fn char_literal_too_long(span: Span) -> Self {
        LexError::new("character literal may contain only one character", span)
    }

    pub fn unknown_escape_sequence(ch: char, span: Span) -> Self {
        LexError::new(format!("unknown escape sequence '\\{ch}'"), span)
    }

    pub fn unterminated_block_comment(span: Span) -> Self {
        LexError::new("unterminated block comment", span)
    }

    pub fn stray_block_comment_close(span: Span) -> Self {
        LexError::new("unexpected `*/` outside of a block comment", span)
    }

    pub fn integer_literal_out_of_range(lexeme: &str, span: Span) -> Self {
        LexError::new(
            format!("integer literal `{lexeme}` is out of range for a 64-bit integer"),
            span,
        )
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
