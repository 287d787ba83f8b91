//! Low-level character cursor over the source text.

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(super) fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    pub(super) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    /// Advances past the current character, returning it. Tracks line/column,
    /// resetting the column to 1 on a newline.
    pub(super) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    pub(super) fn matches(&self, ch: char) -> bool {
        self.current_char() == Some(ch)
    }
}
