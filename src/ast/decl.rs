//! Declaration AST nodes: the top level of a translation unit, and the
//! shared sub-structures (`Declarator`, `InitDeclarator`, `ParamDecl`) that
//! appear inside both top-level and local variable declarations.

use super::expr::Expr;
use super::stmt::Stmt;
use super::types::Type;
use crate::token::Span;

/// The root of a parsed source file: an ordered sequence of top-level declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUnit {
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var(VarDecl),
    Func(FuncDecl),
    Struct(StructDecl),
    Namespace(NamespaceDecl),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Var(d) => d.span,
            Decl::Func(d) => d.span,
            Decl::Struct(d) => d.span,
            Decl::Namespace(d) => d.span,
        }
    }
}

/// The "name" and optional array size part of a declaration, e.g. the `x[10]`
/// in `int x[10];`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: String,
    pub array_size: Option<Box<Expr>>,
    pub span: Span,
}

/// A single `declarator [= initializer]` entry within a `VarDecl`.
#[derive(Debug, Clone, PartialEq)]
pub struct InitDeclarator {
    pub declarator: Declarator,
    pub initializer: Option<Box<Expr>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub declarators: Vec<InitDeclarator>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub ty: Type,
    pub declarator: Declarator,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub return_type: Type,
    pub name: String,
    pub params: Vec<ParamDecl>,
    /// `None` for a forward declaration (`int f(int x);`), `Some` for a definition.
    pub body: Option<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: String,
    pub members: Vec<VarDecl>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub name: String,
    pub decls: Vec<Decl>,
    pub span: Span,
}

#[cfg(test)]
impl FuncDecl {
    pub fn for_testing(name: &str, return_type: Type, params: Vec<ParamDecl>, body: Option<Stmt>) -> Self {
        FuncDecl {
            return_type,
            name: name.to_string(),
            params,
            body,
            span: Span::dummy(),
        }
    }
}
