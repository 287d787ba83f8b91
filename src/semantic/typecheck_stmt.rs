//! Statement analysis: scope entry/exit and condition/return checking.

use super::error::{SemanticError, SemanticErrorKind};
use super::SemanticAnalyzer;
use crate::ast::{BuiltinName, Expr, Stmt, StmtKind, Type};

impl SemanticAnalyzer {
    pub(super) fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match &stmt.kind {
            StmtKind::Block(stmts) => {
                let mut inner = self.enter_scope();
                for s in stmts {
                    inner.analyze_stmt(s)?;
                }
                Ok(())
            }

            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.check_condition(condition)?;
                self.analyze_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.analyze_stmt(else_branch)?;
                }
                Ok(())
            }

            StmtKind::While { condition, body } => {
                let mut inner = self.enter_scope();
                inner.check_condition(condition)?;
                inner.analyze_stmt(body)?;
                Ok(())
            }

            // DoWhile does not get its own scope: the body (if a block)
            // scopes itself, and the condition is outside that scope,
            // matching C's do-while semantics.
            StmtKind::DoWhile { body, condition } => {
                self.analyze_stmt(body)?;
                self.check_condition(condition)?;
                Ok(())
            }

            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                let mut inner = self.enter_scope();
                if let Some(init) = init {
                    inner.analyze_stmt(init)?;
                }
                if let Some(condition) = condition {
                    inner.check_condition(condition)?;
                }
                if let Some(increment) = increment {
                    inner.expr_type(increment)?;
                }
                inner.analyze_stmt(body)?;
                Ok(())
            }

            StmtKind::Return(value) => self.analyze_return(value.as_ref(), stmt.span),

            StmtKind::Break | StmtKind::Continue => Ok(()),

            StmtKind::Read(expr) => {
                self.expr_type(expr)?;
                Ok(())
            }

            StmtKind::Print(expr) => {
                self.expr_type(expr)?;
                Ok(())
            }

            StmtKind::StaticAssert { condition, .. } => {
                self.check_condition(condition)?;
                Ok(())
            }

            StmtKind::VarDecl(v) => self.analyze_var_decl(v),

            StmtKind::Expr(expr) => {
                self.expr_type(expr)?;
                Ok(())
            }
        }
    }

    fn analyze_return(&mut self, value: Option<&Expr>, span: crate::token::Span) -> Result<(), SemanticError> {
        let expected = self
            .return_type_stack
            .last()
            .cloned()
            .ok_or_else(|| SemanticError::new(SemanticErrorKind::Internal, "`return` outside of a function body", span))?;

        match value {
            Some(expr) => {
                let found = self.expr_type(expr)?;
                if !found.equals(&expected) {
                    return Err(SemanticError::return_type_mismatch(
                        &expected.to_string(),
                        &found.to_string(),
                        expr.span,
                    ));
                }
            }
            None => {
                if !expected.is_void() {
                    return Err(SemanticError::return_type_mismatch(&expected.to_string(), "void", span));
                }
            }
        }
        Ok(())
    }

    fn check_condition(&self, expr: &Expr) -> Result<(), SemanticError> {
        let ty = self.expr_type(expr)?;
        let ok = matches!(
            &ty,
            Type::Builtin {
                name: BuiltinName::Int | BuiltinName::Bool,
                ..
            }
        );
        if ok {
            Ok(())
        } else {
            Err(SemanticError::condition_not_boolean(&ty.to_string(), expr.span))
        }
    }
}
