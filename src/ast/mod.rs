//! The abstract syntax tree.
//!
//! Nodes are modeled as plain Rust enums (one variant per node kind) rather
//! than a visitor/double-dispatch class hierarchy: semantic analysis and any
//! future lowering pass simply `match` on the node. Every node carries a
//! [`Span`](crate::token::Span) for diagnostics.

mod decl;
mod expr;
mod stmt;
mod types;

#[cfg(test)]
mod tests;

pub use decl::{Declarator, FuncDecl, InitDeclarator, NamespaceDecl, ParamDecl, StructDecl, TranslationUnit, Decl, VarDecl};
pub use expr::{AccessKind, AssignOp, BinaryOp, Expr, ExprKind, LiteralValue, PostfixOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
pub use types::{BuiltinName, Type};
