//! Statement parsing.

use super::error::ParseError;
use super::Parser;
use crate::ast::{Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => {
                let start = self.advance().span;
                let end = self.expect(&TokenKind::Semicolon, "`;` after `break`")?;
                Ok(Stmt::new(StmtKind::Break, start.to(end.span)))
            }
            TokenKind::Continue => {
                let start = self.advance().span;
                let end = self.expect(&TokenKind::Semicolon, "`;` after `continue`")?;
                Ok(Stmt::new(StmtKind::Continue, start.to(end.span)))
            }
            TokenKind::Read => self.parse_read(),
            TokenKind::Print => self.parse_print(),
            TokenKind::StaticAssert => self.parse_static_assert(),
            _ if self.is_type_start() => {
                let decl = self.parse_var_decl()?;
                let span = decl.span;
                Ok(Stmt::new(StmtKind::VarDecl(decl), span))
            }
            _ => {
                let expr = self.parse_expr()?;
                let end = self.expect(&TokenKind::Semicolon, "`;` after expression statement")?;
                let span = expr.span.to(end.span);
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    pub(super) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::LBrace, "`{`")?.span;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_eof() {
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(err) => {
                    self.record_error(err);
                    self.synchronize();
                }
            }
        }
        let end = self.expect(&TokenKind::RBrace, "`}` to close block")?;
        Ok(Stmt::new(StmtKind::Block(stmts), start.to(end.span)))
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen, "`(` after `if`")?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "`)` after if condition")?;
        let then_branch = self.parse_stmt()?;
        let mut span = start.to(then_branch.span);
        let else_branch = if self.match_kind(&TokenKind::Else) {
            let branch = self.parse_stmt()?;
            span = span.to(branch.span);
            Some(Box::new(branch))
        } else {
            None
        };
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch,
            },
            span,
        ))
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen, "`(` after `while`")?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "`)` after while condition")?;
        let body = self.parse_stmt()?;
        let span = start.to(body.span);
        Ok(Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_do_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let body = self.parse_stmt()?;
        self.expect(&TokenKind::While, "`while` after `do` block")?;
        self.expect(&TokenKind::LParen, "`(` after `while`")?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "`)` after do-while condition")?;
        let end = self.expect(&TokenKind::Semicolon, "`;` after do-while")?;
        Ok(Stmt::new(
            StmtKind::DoWhile {
                body: Box::new(body),
                condition,
            },
            start.to(end.span),
        ))
    }

    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen, "`(` after `for`")?;

        let init = if self.check(&TokenKind::Semicolon) {
            self.advance();
            None
        } else if self.is_type_start() {
            let decl = self.parse_var_decl()?;
            let span = decl.span;
            Some(Box::new(Stmt::new(StmtKind::VarDecl(decl), span)))
        } else {
            let expr = self.parse_expr()?;
            let end = self.expect(&TokenKind::Semicolon, "`;` after for-loop initializer")?;
            let span = expr.span.to(end.span);
            Some(Box::new(Stmt::new(StmtKind::Expr(expr), span)))
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::Semicolon, "`;` after for-loop condition")?;

        let increment = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RParen, "`)` after for-loop clauses")?;

        let body = self.parse_stmt()?;
        let span = start.to(body.span);
        Ok(Stmt::new(
            StmtKind::For {
                init,
                condition,
                increment,
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let end = self.expect(&TokenKind::Semicolon, "`;` after return statement")?;
        Ok(Stmt::new(StmtKind::Return(value), start.to(end.span)))
    }

    fn parse_read(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let arg = self.parse_expr()?;
        let end = self.expect(&TokenKind::Semicolon, "`;` after `read` statement")?;
        Ok(Stmt::new(StmtKind::Read(arg), start.to(end.span)))
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let arg = self.parse_expr()?;
        let end = self.expect(&TokenKind::Semicolon, "`;` after `print` statement")?;
        Ok(Stmt::new(StmtKind::Print(arg), start.to(end.span)))
    }

    fn parse_static_assert(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen, "`(` after `static_assert`")?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::Comma, "`,` separating static_assert's condition and message")?;
        let (message, _) = self.expect_string_literal()?;
        self.expect(&TokenKind::RParen, "`)` after static_assert arguments")?;
        let end = self.expect(&TokenKind::Semicolon, "`;` after static_assert")?;
        Ok(Stmt::new(
            StmtKind::StaticAssert { condition, message },
            start.to(end.span),
        ))
    }

    fn expect_string_literal(&mut self) -> Result<(String, crate::token::Span), ParseError> {
        let span = self.current_span();
        match self.current_kind().clone() {
            TokenKind::StringLiteral(text) => {
                self.advance();
                Ok((text, span))
            }
            other => Err(ParseError::expected("a string literal", &other, span)),
        }
    }
}
