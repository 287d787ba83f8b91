//! Token-reading logic: operators, literals, identifiers and keywords.

use super::error::LexError;
use super::Lexer;
use crate::token::{Span, Token, TokenKind};

const MAX_INT_DIGITS_SAFETY: usize = 32;

impl<'a> Lexer<'a> {
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.current_span();
        let ch = self.current_char().expect("next_token called at eof");

        if ch.is_ascii_digit() {
            return self.read_number(start);
        }
        if ch == '"' {
            return self.read_string(start);
        }
        if ch == '\'' {
            return self.read_char_literal(start);
        }
        if ch == '_' || ch.is_alphabetic() {
            return self.read_identifier_or_keyword(start);
        }
        if let Some(kind) = self.try_two_char_operator() {
            return Ok(Token::new(kind, start));
        }
        if let Some(kind) = self.try_one_char_operator() {
            return Ok(Token::new(kind, start));
        }

        let unexpected = self.advance().unwrap();
        Err(LexError::unexpected_character(unexpected, start))
    }

    fn try_two_char_operator(&mut self) -> Option<TokenKind> {
        let first = self.current_char()?;
        let second = self.peek_char(1)?;
        let kind = match (first, second) {
            ('+', '+') => TokenKind::PlusPlus,
            ('-', '-') => TokenKind::MinusMinus,
            ('&', '&') => TokenKind::AmpAmp,
            ('|', '|') => TokenKind::PipePipe,
            ('=', '=') => TokenKind::EqEq,
            ('!', '=') => TokenKind::NotEq,
            ('>', '=') => TokenKind::GreaterEq,
            ('<', '=') => TokenKind::LessEq,
            ('+', '=') => TokenKind::PlusEq,
            ('-', '=') => TokenKind::MinusEq,
            ('*', '=') => TokenKind::StarEq,
            ('/', '=') => TokenKind::SlashEq,
            ('%', '=') => TokenKind::PercentEq,
            ('-', '>') => TokenKind::Arrow,
            (':', ':') => TokenKind::ColonColon,
            _ => return None,
        };
        self.advance();
        self.advance();
        Some(kind)
    }

    fn try_one_char_operator(&mut self) -> Option<TokenKind> {
        let ch = self.current_char()?;
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '=' => TokenKind::Eq,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '!' => TokenKind::Bang,
            '&' => TokenKind::Amp,
            '|' => TokenKind::Pipe,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            _ => return None,
        };
        self.advance();
        Some(kind)
    }

    fn read_identifier_or_keyword(&mut self, start: Span) -> Result<Token, LexError> {
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '_' || ch.is_alphanumeric() {
                if !ch.is_ascii() {
                    return Err(LexError::non_ascii_identifier(ch, self.current_span()));
                }
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier(text));
        Ok(Token::new(kind, start))
    }

    fn read_number(&mut self, start: Span) -> Result<Token, LexError> {
        let mut text = String::new();
        while let Some(c) = self.current_char() {
            if c.is_ascii_digit() {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let is_float = self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|c| c.is_ascii_digit());
        if is_float {
            text.push('.');
            self.advance();
            while let Some(c) = self.current_char() {
                if c.is_ascii_digit() {
                    text.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
            let value: f64 = text
                .parse()
                .expect("digit run with at most one dot always parses as f64");
            return Ok(Token::new(TokenKind::FloatLiteral(value), start));
        }

        if text.len() > MAX_INT_DIGITS_SAFETY {
            return Err(LexError::integer_literal_out_of_range(&text, start));
        }
        match text.parse::<i64>() {
            Ok(value) => Ok(Token::new(TokenKind::IntLiteral(value), start)),
            Err(_) => Err(LexError::integer_literal_out_of_range(&text, start)),
        }
    }

    fn read_string(&mut self, start: Span) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.current_char() {
                None => return Err(LexError::unterminated_string(start)),
                Some('\n') => return Err(LexError::unterminated_string(start)),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let esc_span = self.current_span();
                    self.advance();
                    value.push(self.read_escape(esc_span)?);
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        Ok(Token::new(TokenKind::StringLiteral(value), start))
    }

    fn read_char_literal(&mut self, start: Span) -> Result<Token, LexError> {
        self.advance(); // opening quote
        if self.current_char() == Some('\'') {
            self.advance();
            return Err(LexError::empty_char_literal(start));
        }
        let decoded = match self.current_char() {
            None => return Err(LexError::unterminated_char(start)),
            Some('\\') => {
                let esc_span = self.current_span();
                self.advance();
                self.read_escape(esc_span)?
            }
            Some(c) => {
                self.advance();
                c
            }
        };
        match self.current_char() {
            Some('\'') => {
                self.advance();
                Ok(Token::new(TokenKind::CharLiteral(decoded), start))
            }
            None => Err(LexError::unterminated_char(start)),
            Some(_) => {
                while self.current_char().is_some_and(|c| c != '\'' && c != '\n') {
                    self.advance();
                }
                if self.current_char() == Some('\'') {
                    self.advance();
                }
                Err(LexError::char_literal_too_long(start))
            }
        }
    }

    fn read_escape(&mut self, esc_span: Span) -> Result<char, LexError> {
        match self.current_char() {
            None => Err(LexError::unterminated_string(esc_span)),
            Some(c) => {
                let decoded = match c {
                    'n' => '\n',
                    't' => '\t',
                    '0' => '\0',
                    '"' => '"',
                    '\'' => '\'',
                    '\\' => '\\',
                    other => return Err(LexError::unknown_escape_sequence(other, esc_span)),
                };
                self.advance();
                Ok(decoded)
            }
        }
    }
}

fn keyword_kind(text: &str) -> Option<TokenKind> {
    Some(match text {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "for" => TokenKind::For,
        "return" => TokenKind::Return,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "int" => TokenKind::Int,
        "double" => TokenKind::Double,
        "float" => TokenKind::Float,
        "char" => TokenKind::Char,
        "bool" => TokenKind::Bool,
        "void" => TokenKind::Void,
        "short" => TokenKind::Short,
        "long" => TokenKind::Long,
        "sizeof" => TokenKind::Sizeof,
        "const" => TokenKind::Const,
        "unsigned" => TokenKind::Unsigned,
        "static_assert" => TokenKind::StaticAssert,
        "assert" => TokenKind::Assert,
        "exit" => TokenKind::Exit,
        "struct" => TokenKind::Struct,
        "print" => TokenKind::Print,
        "read" => TokenKind::Read,
        "namespace" => TokenKind::Namespace,
        "true" => TokenKind::BoolLiteral(true),
        "false" => TokenKind::BoolLiteral(false),
        _ => return None,
    })
}
