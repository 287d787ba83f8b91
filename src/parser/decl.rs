//! Declaration parsing: top-level items, structs, namespaces, variables,
//! functions, and the shared declarator/param machinery.

use super::error::ParseError;
use super::Parser;
use crate::ast::{Decl, Declarator, FuncDecl, InitDeclarator, NamespaceDecl, ParamDecl, StructDecl, VarDecl};
use crate::token::TokenKind;

impl Parser {
    pub(super) fn parse_top_decl(&mut self) -> Result<Decl, ParseError> {
        match self.current_kind() {
            TokenKind::Namespace => self.parse_namespace_decl(),
            TokenKind::Struct => self.parse_struct_decl(),
            _ if self.is_type_start() => self.parse_var_or_func_decl(),
            other => Err(ParseError::unknown_declaration_start(&other.clone(), self.current_span())),
        }
    }

    fn parse_namespace_decl(&mut self) -> Result<Decl, ParseError> {
        let start = self.advance().span;
        let (name, _) = self.expect_identifier()?;
        self.expect(&TokenKind::LBrace, "`{` after namespace name")?;
        let mut decls = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_eof() {
            match self.parse_top_decl() {
                Ok(decl) => decls.push(decl),
                Err(err) => {
                    self.record_error(err);
                    self.synchronize();
                }
            }
        }
        let end = self.expect(&TokenKind::RBrace, "`}` to close namespace")?;
        Ok(Decl::Namespace(NamespaceDecl {
            name,
            decls,
            span: start.to(end.span),
        }))
    }

    fn parse_struct_decl(&mut self) -> Result<Decl, ParseError> {
        let start = self.advance().span;
        let (name, _) = self.expect_identifier()?;
        self.register_struct_name(&name);
        self.expect(&TokenKind::LBrace, "`{` after struct name")?;
        let mut members = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_eof() {
            match self.parse_var_decl() {
                Ok(member) => members.push(member),
                Err(err) => {
                    self.record_error(err);
                    self.synchronize();
                }
            }
        }
        self.expect(&TokenKind::RBrace, "`}` to close struct")?;
        let end = self.expect(&TokenKind::Semicolon, "`;` after struct declaration")?;
        Ok(Decl::Struct(StructDecl {
            name,
            members,
            span: start.to(end.span),
        }))
    }

    fn parse_var_or_func_decl(&mut self) -> Result<Decl, ParseError> {
        let start = self.current_span();
        let ty = self.parse_type()?;
        let checkpoint = self.checkpoint();
        let (_, _) = self.expect_identifier()?;
        if self.check(&TokenKind::LParen) {
            self.rewind(checkpoint);
            return self.parse_func_decl(ty, start);
        }
        self.rewind(checkpoint);
        let declarators = self.parse_init_declarator_list()?;
        let end = self.expect(&TokenKind::Semicolon, "`;` after variable declaration")?;
        Ok(Decl::Var(VarDecl {
            ty,
            declarators,
            span: start.to(end.span),
        }))
    }

    fn parse_func_decl(&mut self, return_type: crate::ast::Type, start: crate::token::Span) -> Result<Decl, ParseError> {
        let (name, _) = self.expect_identifier()?;
        self.expect(&TokenKind::LParen, "`(` after function name")?;
        let params = self.parse_param_list()?;
        self.expect(&TokenKind::RParen, "`)` after parameter list")?;
        let (body, end_span) = if self.check(&TokenKind::LBrace) {
            let block = self.parse_block()?;
            let span = block.span;
            (Some(block), span)
        } else {
            let semi = self.expect(&TokenKind::Semicolon, "`;` after function declaration")?;
            (None, semi.span)
        };
        Ok(Decl::Func(FuncDecl {
            return_type,
            name,
            params,
            body,
            span: start.to(end_span),
        }))
    }

    fn parse_param_list(&mut self) -> Result<Vec<ParamDecl>, ParseError> {
        let mut params = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            let start = self.current_span();
            let ty = self.parse_type()?;
            let declarator = self.parse_declarator()?;
            let span = start.to(declarator.span);
            params.push(ParamDecl { ty, declarator, span });
            if !self.match_kind(&TokenKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    /// Parses `type declarator [= init] {, declarator [= init]} ;`. Shared by
    /// top-level variables, local variables (see `parser::stmt`), and struct
    /// members.
    pub(super) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let start = self.current_span();
        let ty = self.parse_type()?;
        let declarators = self.parse_init_declarator_list()?;
        let end = self.expect(&TokenKind::Semicolon, "`;` after variable declaration")?;
        Ok(VarDecl {
            ty,
            declarators,
            span: start.to(end.span),
        })
    }

    fn parse_init_declarator_list(&mut self) -> Result<Vec<InitDeclarator>, ParseError> {
        let mut list = vec![self.parse_init_declarator()?];
        while self.match_kind(&TokenKind::Comma) {
            list.push(self.parse_init_declarator()?);
        }
        Ok(list)
    }

    fn parse_init_declarator(&mut self) -> Result<InitDeclarator, ParseError> {
        let declarator = self.parse_declarator()?;
        let mut span = declarator.span;
        let initializer = if self.match_kind(&TokenKind::Eq) {
            let init = self.parse_expr()?;
            span = span.to(init.span);
            Some(Box::new(init))
        } else {
            None
        };
        Ok(InitDeclarator {
            declarator,
            initializer,
            span,
        })
    }

    fn parse_declarator(&mut self) -> Result<Declarator, ParseError> {
        let (name, mut span) = self.expect_identifier()?;
        let array_size = if self.match_kind(&TokenKind::LBracket) {
            let size = if self.check(&TokenKind::RBracket) {
                None
            } else {
                Some(Box::new(self.parse_expr()?))
            };
            let end = self.expect(&TokenKind::RBracket, "`]` to close array declarator")?;
            span = span.to(end.span);
            size
        } else {
            None
        };
        Ok(Declarator {
            name,
            array_size,
            span,
        })
    }
}
