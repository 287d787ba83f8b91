//! Expression parsing: operator-precedence (precedence-climbing) binary
//! operators layered under ternary/assignment, with a unary/postfix/primary
//! core and the cast-vs-group and scoped-identifier disambiguations.

use super::error::ParseError;
use super::Parser;
use crate::ast::{AccessKind, AssignOp, BinaryOp, Expr, ExprKind, LiteralValue, PostfixOp, UnaryOp};
use crate::token::TokenKind;

const MAX_SCOPED_SEGMENTS: usize = 100;

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_ternary()?;
        let op = match self.current_kind() {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::PlusEq => AssignOp::AddAssign,
            TokenKind::MinusEq => AssignOp::SubAssign,
            TokenKind::StarEq => AssignOp::MulAssign,
            TokenKind::SlashEq => AssignOp::DivAssign,
            TokenKind::PercentEq => AssignOp::ModAssign,
            _ => return Ok(left),
        };
        if !is_valid_lvalue(&left) {
            return Err(ParseError::invalid_lvalue(left.span));
        }
        self.advance();
        let right = self.parse_assignment()?;
        let span = left.span.to(right.span);
        Ok(Expr::new(
            ExprKind::Assignment {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_binary(1)?;
        if !self.match_kind(&TokenKind::Question) {
            return Ok(condition);
        }
        let then_branch = self.parse_expr()?;
        self.expect(&TokenKind::Colon, "`:` in ternary expression")?;
        let else_branch = self.parse_expr()?;
        let span = condition.span.to(else_branch.span);
        Ok(Expr::new(
            ExprKind::Ternary {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            span,
        ))
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let Some((op, precedence)) = binary_op_and_precedence(self.current_kind()) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }
            self.advance();
            let right = self.parse_binary(precedence + 1)?;
            let span = left.span.to(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let op = match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::PlusPlus => Some(UnaryOp::PreInc),
            TokenKind::MinusMinus => Some(UnaryOp::PreDec),
            TokenKind::Amp => Some(UnaryOp::AddrOf),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            let span = start.to(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }

        if self.check(&TokenKind::Sizeof) {
            return self.parse_sizeof();
        }

        if self.check(&TokenKind::LParen) {
            let checkpoint = self.checkpoint();
            self.advance();
            if self.is_type_start() {
                if let Ok(ty) = self.parse_type() {
                    if self.match_kind(&TokenKind::RParen) {
                        let operand = self.parse_unary()?;
                        let span = start.to(operand.span);
                        return Ok(Expr::new(
                            ExprKind::Cast {
                                target: ty,
                                expr: Box::new(operand),
                            },
                            span,
                        ));
                    }
                }
            }
            self.rewind(checkpoint);
        }

        self.parse_postfix()
    }

    fn parse_sizeof(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        self.advance();
        self.expect(&TokenKind::LParen, "`(` after `sizeof`")?;
        if self.is_type_start() {
            let ty = self.parse_type()?;
            let end = self.expect(&TokenKind::RParen, "`)` after sizeof's type")?;
            return Ok(Expr::new(
                ExprKind::Sizeof {
                    is_type: true,
                    ty: Some(ty),
                    expr: None,
                },
                start.to(end.span),
            ));
        }
        let inner = self.parse_expr()?;
        let end = self.expect(&TokenKind::RParen, "`)` after sizeof's expression")?;
        Ok(Expr::new(
            ExprKind::Sizeof {
                is_type: false,
                ty: None,
                expr: Some(Box::new(inner)),
            },
            start.to(end.span),
        ))
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current_kind() {
                TokenKind::LParen => {
                    self.advance();
                    let args = self.parse_arg_list()?;
                    let end = self.expect(&TokenKind::RParen, "`)` to close call arguments")?;
                    let span = expr.span.to(end.span);
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expr()?;
                    let end = self.expect(&TokenKind::RBracket, "`]` to close subscript")?;
                    let span = expr.span.to(end.span);
                    expr = Expr::new(
                        ExprKind::Subscript {
                            array: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                TokenKind::PlusPlus => {
                    let end = self.advance();
                    let span = expr.span.to(end.span);
                    expr = Expr::new(
                        ExprKind::Postfix {
                            op: PostfixOp::Inc,
                            operand: Box::new(expr),
                        },
                        span,
                    );
                }
                TokenKind::MinusMinus => {
                    let end = self.advance();
                    let span = expr.span.to(end.span);
                    expr = Expr::new(
                        ExprKind::Postfix {
                            op: PostfixOp::Dec,
                            operand: Box::new(expr),
                        },
                        span,
                    );
                }
                TokenKind::Dot | TokenKind::Arrow => {
                    let access = if matches!(self.current_kind(), TokenKind::Dot) {
                        AccessKind::Dot
                    } else {
                        AccessKind::Arrow
                    };
                    self.advance();
                    let (member, member_span) = self.expect_identifier()?;
                    let span = expr.span.to(member_span);
                    expr = Expr::new(
                        ExprKind::MemberAccess {
                            object: Box::new(expr),
                            member,
                            access,
                        },
                        span,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_arg_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if !self.match_kind(&TokenKind::Comma) {
                break;
            }
        }
        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        match self.current_kind().clone() {
            TokenKind::IntLiteral(v) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal {
                        value: LiteralValue::Int(v),
                        ty: crate::ast::Type::builtin(crate::ast::BuiltinName::Int),
                    },
                    start,
                ))
            }
            TokenKind::FloatLiteral(v) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal {
                        value: LiteralValue::Float(v),
                        ty: crate::ast::Type::builtin(crate::ast::BuiltinName::Double),
                    },
                    start,
                ))
            }
            TokenKind::CharLiteral(v) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal {
                        value: LiteralValue::Char(v),
                        ty: crate::ast::Type::builtin(crate::ast::BuiltinName::Char),
                    },
                    start,
                ))
            }
            TokenKind::StringLiteral(v) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal {
                        value: LiteralValue::Str(v),
                        ty: crate::ast::Type::builtin(crate::ast::BuiltinName::String),
                    },
                    start,
                ))
            }
            TokenKind::BoolLiteral(v) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal {
                        value: LiteralValue::Bool(v),
                        ty: crate::ast::Type::builtin(crate::ast::BuiltinName::Bool),
                    },
                    start,
                ))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                self.parse_identifier_or_scoped(name, start)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let end = self.expect(&TokenKind::RParen, "`)` to close parenthesized expression")?;
                Ok(Expr::new(ExprKind::Group(Box::new(inner)), start.to(end.span)))
            }
            TokenKind::LBrace => {
                self.advance();
                let mut elements = Vec::new();
                if !self.check(&TokenKind::RBrace) {
                    loop {
                        elements.push(self.parse_expr()?);
                        if !self.match_kind(&TokenKind::Comma) {
                            break;
                        }
                    }
                }
                let end = self.expect(&TokenKind::RBrace, "`}` to close initializer list")?;
                Ok(Expr::new(ExprKind::InitList(elements), start.to(end.span)))
            }
            TokenKind::Exit => {
                self.advance();
                self.expect(&TokenKind::LParen, "`(` after `exit`")?;
                let args = self.parse_arg_list()?;
                let end = self.expect(&TokenKind::RParen, "`)` to close `exit` arguments")?;
                Ok(Expr::new(ExprKind::Exit(args), start.to(end.span)))
            }
            TokenKind::Assert => {
                self.advance();
                self.expect(&TokenKind::LParen, "`(` after `assert`")?;
                let args = self.parse_arg_list()?;
                let end = self.expect(&TokenKind::RParen, "`)` to close `assert` arguments")?;
                Ok(Expr::new(ExprKind::Assert(args), start.to(end.span)))
            }
            other => Err(ParseError::unexpected_expression_start(&other, start)),
        }
    }

    fn parse_identifier_or_scoped(&mut self, first: String, start: crate::token::Span) -> Result<Expr, ParseError> {
        if !self.check(&TokenKind::ColonColon) {
            return Ok(Expr::new(ExprKind::Identifier(first), start));
        }
        let mut path = vec![first];
        while self.match_kind(&TokenKind::ColonColon) {
            if path.len() >= MAX_SCOPED_SEGMENTS {
                return Err(ParseError::scoped_identifier_too_deep(self.current_span()));
            }
            let (segment, _) = self.expect_identifier()?;
            path.push(segment);
        }
        let end = self.current_span();
        Ok(Expr::new(ExprKind::ScopedIdentifier(path), start.to(end)))
    }
}

fn binary_op_and_precedence(kind: &TokenKind) -> Option<(BinaryOp, u8)> {
    Some(match kind {
        TokenKind::PipePipe => (BinaryOp::Or, 1),
        TokenKind::AmpAmp => (BinaryOp::And, 2),
        TokenKind::EqEq => (BinaryOp::Eq, 3),
        TokenKind::NotEq => (BinaryOp::NotEq, 3),
        TokenKind::Less => (BinaryOp::Less, 4),
        TokenKind::LessEq => (BinaryOp::LessEq, 4),
        TokenKind::Greater => (BinaryOp::Greater, 4),
        TokenKind::GreaterEq => (BinaryOp::GreaterEq, 4),
        TokenKind::Plus => (BinaryOp::Add, 5),
        TokenKind::Minus => (BinaryOp::Sub, 5),
        TokenKind::Star => (BinaryOp::Mul, 6),
        TokenKind::Slash => (BinaryOp::Div, 6),
        TokenKind::Percent => (BinaryOp::Mod, 6),
        _ => return None,
    })
}

fn is_valid_lvalue(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Identifier(_) | ExprKind::Subscript { .. } | ExprKind::MemberAccess { .. }
    )
}
