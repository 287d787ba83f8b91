//! Converts source text into a stream of [`Token`]s.
//!
//! The lexer is a single forward pass: whitespace and comments are skipped
//! between tokens, operators are matched longest-first, and literals decode
//! their escapes as they are read.

mod cursor;
mod error;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token};

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input, returning the token sequence (always
    /// ending with exactly one `Eof` token) or the first lexical error
    /// encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let start_span = self.current_span();
            if self.is_eof() {
                tokens.push(Token::new(crate::token::TokenKind::Eof, start_span));
                break;
            }
            let token = self.next_token()?;
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn current_span(&self) -> Span {
        Span::new(self.pos, self.pos, self.line, self.column)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.current_char() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_char(1) == Some('/') => {
                    while !self.is_eof() && self.current_char() != Some('\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek_char(1) == Some('*') => {
                    let start = self.current_span();
                    self.advance();
                    self.advance();
                    loop {
                        if self.is_eof() {
                            return Err(LexError::unterminated_block_comment(start));
                        }
                        if self.current_char() == Some('*') && self.peek_char(1) == Some('/') {
                            self.advance();
                            self.advance();
                            break;
                        }
                        self.advance();
                    }
                }
                Some('*') if self.peek_char(1) == Some('/') => {
                    let span = self.current_span();
                    return Err(LexError::stray_block_comment_close(span));
                }
                _ => break,
            }
        }
        Ok(())
    }
}
