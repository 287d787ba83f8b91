//! Expression type inference.

use super::error::SemanticError;
use super::SemanticAnalyzer;
use crate::ast::{AccessKind, BuiltinName, Expr, ExprKind, Type};

impl SemanticAnalyzer {
    pub(super) fn expr_type(&self, expr: &Expr) -> Result<Type, SemanticError> {
        match &expr.kind {
            ExprKind::Literal { ty, .. } => Ok(ty.clone()),

            ExprKind::Identifier(name) => self
                .lookup_variable(name)
                .cloned()
                .ok_or_else(|| SemanticError::undeclared_identifier(name, expr.span)),

            // Namespace qualification is flattened: resolved by its final
            // path component against the current scope stack, not a
            // dedicated per-namespace table.
            ExprKind::ScopedIdentifier(path) => {
                let name = path.last().expect("scoped identifier always has at least one segment");
                self.lookup_variable(name)
                    .cloned()
                    .ok_or_else(|| SemanticError::undeclared_identifier(name, expr.span))
            }

            ExprKind::Binary { left, right, .. } => {
                let left_ty = self.expr_type(left)?;
                let right_ty = self.expr_type(right)?;
                if !left_ty.equals(&right_ty) {
                    return Err(SemanticError::type_mismatch(
                        &left_ty.to_string(),
                        &right_ty.to_string(),
                        expr.span,
                    ));
                }
                Ok(left_ty)
            }

            ExprKind::Unary { operand, .. } => self.expr_type(operand),
            ExprKind::Postfix { operand, .. } => self.expr_type(operand),
            ExprKind::Group(inner) => self.expr_type(inner),

            ExprKind::Ternary {
                then_branch,
                else_branch,
                ..
            } => {
                let then_ty = self.expr_type(then_branch)?;
                let else_ty = self.expr_type(else_branch)?;
                if !then_ty.equals(&else_ty) {
                    return Err(SemanticError::type_mismatch(
                        &then_ty.to_string(),
                        &else_ty.to_string(),
                        expr.span,
                    ));
                }
                Ok(then_ty)
            }

            ExprKind::Cast { target, .. } => Ok(target.clone()),

            // No ArrayType exists in this model; the subscript result is
            // documented as the array operand's own type, not its element
            // type.
            ExprKind::Subscript { array, index } => {
                self.expr_type(index)?;
                self.expr_type(array)
            }

            ExprKind::Call { callee, args } => self.check_call(callee, args, expr),

            ExprKind::MemberAccess { object, member, .. } => self.check_member_access(object, member, expr),

            ExprKind::InitList(elements) => {
                for elem in elements {
                    self.expr_type(elem)?;
                }
                Ok(Type::void())
            }

            ExprKind::Sizeof { is_type, ty, expr: operand } => {
                if *is_type {
                    let _ = ty;
                } else if let Some(operand) = operand {
                    self.expr_type(operand)?;
                }
                Ok(Type::builtin(BuiltinName::Int))
            }

            ExprKind::Assignment { left, right, .. } => {
                if !is_valid_lvalue(left) {
                    return Err(SemanticError::invalid_lvalue(left.span));
                }
                let left_ty = self.expr_type(left)?;
                let right_ty = self.expr_type(right)?;
                if !left_ty.equals(&right_ty) {
                    return Err(SemanticError::type_mismatch(
                        &left_ty.to_string(),
                        &right_ty.to_string(),
                        expr.span,
                    ));
                }
                Ok(left_ty)
            }

            ExprKind::Exit(args) => {
                for arg in args {
                    self.expr_type(arg)?;
                }
                Ok(Type::void())
            }

            ExprKind::Assert(args) => {
                for arg in args {
                    self.expr_type(arg)?;
                }
                Ok(Type::void())
            }
        }
    }

    fn check_call(&self, callee: &Expr, args: &[Expr], call_expr: &Expr) -> Result<Type, SemanticError> {
        let name = match &callee.kind {
            ExprKind::Identifier(name) => name,
            _ => return Err(SemanticError::undeclared_identifier("<call target>", callee.span)),
        };
        let sig = self
            .lookup_function(name)
            .ok_or_else(|| SemanticError::undeclared_function(name, callee.span))?
            .clone();

        if args.len() != sig.param_types.len() {
            return Err(SemanticError::argument_count_mismatch(
                name,
                sig.param_types.len(),
                args.len(),
                call_expr.span,
            ));
        }

        for (index, (arg, expected)) in args.iter().zip(sig.param_types.iter()).enumerate() {
            let found = self.expr_type(arg)?;
            if !found.equals(expected) {
                return Err(SemanticError::argument_type_mismatch(
                    name,
                    index + 1,
                    &expected.to_string(),
                    &found.to_string(),
                    arg.span,
                ));
            }
        }

        Ok(sig.return_type)
    }

    fn check_member_access(&self, object: &Expr, member: &str, access_expr: &Expr) -> Result<Type, SemanticError> {
        let object_ty = self.expr_type(object)?;
        let struct_name = match &object_ty {
            Type::Struct { name, .. } => name,
            Type::Builtin { name, .. } => {
                return Err(SemanticError::not_a_struct(&name.to_string(), object.span));
            }
        };
        let full_ty = self
            .lookup_struct_type(struct_name)
            .unwrap_or(&object_ty);
        full_ty
            .find_field(member)
            .cloned()
            .ok_or_else(|| SemanticError::unknown_member(struct_name, member, access_expr.span))
    }
}

fn is_valid_lvalue(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Identifier(_) | ExprKind::Subscript { .. } | ExprKind::MemberAccess { .. }
    )
}

/// Member access accepts `.` and `->` as pure syntactic synonyms: there is
/// no pointer type in this language, so `AccessKind` is not consulted here.
#[allow(dead_code)]
fn unused_access_kind_marker(_: AccessKind) {}
