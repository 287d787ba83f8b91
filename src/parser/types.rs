//! Type parsing and the type-vs-expression disambiguation oracle.

use super::error::ParseError;
use super::Parser;
use crate::ast::{BuiltinName, Type};
use crate::token::TokenKind;

impl Parser {
    /// Registers a struct name so later declarations may name it as a type.
    /// Parser-scoped, monotone within one parse run - never a process-global.
    pub(super) fn register_struct_name(&mut self, name: &str) {
        self.struct_names.insert(name.to_string());
    }

    /// Looks past `const`/`unsigned` modifiers (without consuming anything)
    /// to decide whether the upcoming tokens start a type.
    pub(super) fn is_type_start(&self) -> bool {
        let mut offset = 0;
        loop {
            match self.peek_kind(offset) {
                TokenKind::Const | TokenKind::Unsigned => offset += 1,
                TokenKind::Int
                | TokenKind::Double
                | TokenKind::Float
                | TokenKind::Char
                | TokenKind::Bool
                | TokenKind::Void
                | TokenKind::Short
                | TokenKind::Long => return true,
                TokenKind::Identifier(name) => return self.struct_names.contains(name),
                _ => return false,
            }
        }
    }

    /// Parses `{const|unsigned} (builtin-keyword | known-struct-name)`.
    pub(super) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let mut is_const = false;
        let mut is_unsigned = false;
        loop {
            match self.current_kind() {
                TokenKind::Const => {
                    is_const = true;
                    self.advance();
                }
                TokenKind::Unsigned => {
                    is_unsigned = true;
                    self.advance();
                }
                _ => break,
            }
        }

        if let TokenKind::Identifier(name) = self.current_kind().clone() {
            if self.struct_names.contains(&name) {
                self.advance();
                return Ok(Type::Struct {
                    name,
                    fields: Vec::new(),
                });
            }
        }

        let span = self.current_span();
        let keyword_text = match self.current_kind() {
            TokenKind::Int => "int",
            TokenKind::Double => "double",
            TokenKind::Float => "float",
            TokenKind::Char => "char",
            TokenKind::Bool => "bool",
            TokenKind::Void => "void",
            TokenKind::Short => "short",
            TokenKind::Long => "long",
            other => return Err(ParseError::expected("a type", other, span)),
        };
        self.advance();
        let name = BuiltinName::from_keyword(keyword_text).expect("keyword_text is always a valid builtin name");
        Ok(Type::Builtin {
            name,
            is_const,
            is_unsigned,
        })
    }
}
